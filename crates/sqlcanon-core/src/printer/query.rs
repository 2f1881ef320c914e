//! SELECT, UNION and FROM rendering.

use super::expression::{print_call, print_name};
use super::{Printable, SqlPrinter};
use crate::ast::{DataSource, NamedExpression, OrderExpression, SelectClause, SelectOrUnion};

impl Printable for SelectOrUnion {
    fn print(&self, printer: &mut SqlPrinter) {
        match self {
            Self::Select(select) => select.print(printer),
            Self::Union(union) => {
                union.top.print(printer);
                printer.newline();
                printer.write(if union.all { "UNION ALL" } else { "UNION" });
                printer.newline();
                union.bottom.print(printer);
            }
        }
    }
}

impl Printable for SelectClause {
    fn print(&self, printer: &mut SqlPrinter) {
        if !self.ctes.is_empty() {
            printer.write("WITH ");
            for (i, cte) in self.ctes.iter().enumerate() {
                if i > 0 {
                    printer.write(", ");
                }
                print_name(printer, cte.alias.as_deref().unwrap_or_default());
                printer.write(" AS (");
                printer.indented(|printer| {
                    printer.newline();
                    cte.query.print(printer);
                });
                printer.newline();
                printer.write(")");
            }
            printer.blank_line();
        }

        if self.is_bare() {
            printer.write(if self.distinct { "SELECT DISTINCT " } else { "SELECT " });
            printer.comma_list(&self.items);
            return;
        }

        printer.write(if self.distinct { "SELECT DISTINCT" } else { "SELECT" });
        printer.block(&self.items, |printer, item| item.print(printer));

        if let Some(from) = &self.from {
            printer.newline();
            printer.write("FROM");
            print_join_tree(printer, &from.source);
        }
        if let Some(predicate) = &self.predicate {
            printer.newline();
            printer.write("WHERE");
            printer.block(std::slice::from_ref(predicate), |printer, e| e.print(printer));
        }
        if !self.group_by.is_empty() {
            printer.newline();
            printer.write("GROUP BY");
            printer.block(&self.group_by, |printer, e| e.print(printer));
        }
        if let Some(having) = &self.having {
            printer.newline();
            printer.write("HAVING");
            printer.block(std::slice::from_ref(having), |printer, e| e.print(printer));
        }
        if !self.order_by.is_empty() {
            printer.newline();
            printer.write("ORDER BY");
            printer.block(&self.order_by, |printer, item| item.print(printer));
        }
        if let Some(limit) = self.limit {
            printer.newline();
            printer.write(&format!("LIMIT {limit}"));
        }
    }
}

impl Printable for NamedExpression {
    fn print(&self, printer: &mut SqlPrinter) {
        self.expression.print(printer);
        print_alias(printer, self.name.as_deref());
    }
}

impl Printable for OrderExpression {
    fn print(&self, printer: &mut SqlPrinter) {
        self.expression.print(printer);
        printer.write(if self.ascending { " ASC" } else { " DESC" });
    }
}

/// Join chains print flat: operands indented, keywords and `ON` at the
/// current depth. A nested join on the right is bracketed.
fn print_join_tree(printer: &mut SqlPrinter, source: &DataSource) {
    let DataSource::Join(join) = source else {
        printer.indented(|printer| {
            printer.newline();
            source.print(printer);
        });
        return;
    };
    print_join_tree(printer, &join.left);
    printer.newline();
    printer.write(join.join_type.as_str());
    printer.indented(|printer| {
        printer.newline();
        join.right.print(printer);
    });
    if let Some(on) = &join.on {
        printer.newline();
        printer.write("ON ");
        on.print(printer);
    }
}

impl Printable for DataSource {
    fn print(&self, printer: &mut SqlPrinter) {
        match self {
            Self::Table(table) => {
                table.identifier.print(printer);
                print_alias(printer, table.alias.as_deref());
            }
            Self::SubQuery(subquery) => {
                printer.write("(");
                printer.indented(|printer| {
                    printer.newline();
                    subquery.query.print(printer);
                });
                printer.newline();
                printer.write(")");
                print_alias(printer, subquery.alias.as_deref());
            }
            Self::Join(_) => {
                printer.write("(");
                print_join_tree(printer, self);
                printer.newline();
                printer.write(")");
            }
            Self::TableFunction(function) => {
                print_call(printer, &function.function);
                print_alias(printer, Some(&function.alias));
                if !function.column_aliases.is_empty() {
                    printer.write(" (");
                    for (i, column) in function.column_aliases.iter().enumerate() {
                        if i > 0 {
                            printer.write(", ");
                        }
                        print_name(printer, column);
                    }
                    printer.write(")");
                }
            }
        }
    }
}

fn print_alias(printer: &mut SqlPrinter, alias: Option<&str>) {
    if let Some(alias) = alias {
        printer.write(" AS ");
        print_name(printer, alias);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expression, FromClause, JoinType, SubQuery};

    fn select_from(source: DataSource) -> SelectClause {
        SelectClause {
            from: Some(FromClause::new(source)),
            ..SelectClause::new(vec![NamedExpression::new(Expression::int(1))])
        }
    }

    #[test]
    fn test_bare_select_is_one_line() {
        let select = SelectClause::new(vec![
            NamedExpression::aliased("foo", Expression::int(1)),
            NamedExpression::new(Expression::column("bar")),
            NamedExpression::new(Expression::int(1).binary("*", Expression::int(3))),
        ]);
        assert_eq!(SqlPrinter::from(&select), "SELECT 1 AS foo, bar, 1 * 3");
    }

    #[test]
    fn test_cross_join_layout() {
        let source = DataSource::table("foo").join(DataSource::table("bar"), JoinType::Cross, None);
        assert_eq!(
            SqlPrinter::from(&select_from(source)),
            "SELECT\n  1\nFROM\n  foo\nCROSS JOIN\n  bar"
        );
    }

    #[test]
    fn test_chained_join_layout() {
        let on = |a: &str, b: &str| {
            Some(Expression::reference(crate::ast::Identifier::qualified([a], "id")).eq(
                Expression::reference(crate::ast::Identifier::qualified([b], "id")),
            ))
        };
        let source = DataSource::table("foo")
            .join(DataSource::table("bar"), JoinType::Inner, on("foo", "bar"))
            .join(DataSource::table("baz"), JoinType::Inner, on("bar", "baz"));
        assert_eq!(
            SqlPrinter::from(&select_from(source)),
            "SELECT\n  1\nFROM\n  foo\nINNER JOIN\n  bar\nON foo.id = bar.id\nINNER JOIN\n  baz\nON bar.id = baz.id"
        );
    }

    #[test]
    fn test_right_nested_join_is_bracketed() {
        let inner = DataSource::table("b").join(DataSource::table("c"), JoinType::Cross, None);
        let source = DataSource::table("a").join(inner, JoinType::LeftOuter, None);
        assert_eq!(
            SqlPrinter::from(&select_from(source)),
            "SELECT\n  1\nFROM\n  a\nLEFT OUTER JOIN\n  (\n    b\n  CROSS JOIN\n    c\n  )"
        );
    }

    #[test]
    fn test_subquery_source() {
        let inner = SelectClause::new(vec![NamedExpression::new(Expression::int(2))]);
        let source = DataSource::SubQuery(SubQuery::new(inner.into(), Some(String::from("s"))));
        assert_eq!(
            SqlPrinter::from(&select_from(source)),
            "SELECT\n  1\nFROM\n  (\n    SELECT 2\n  ) AS s"
        );
    }

    #[test]
    fn test_clauses() {
        let select = SelectClause {
            predicate: Some(Expression::column("a")),
            group_by: vec![Expression::column("a"), Expression::column("b")],
            having: Some(Expression::column("c")),
            order_by: vec![
                OrderExpression::desc(Expression::column("a")),
                OrderExpression::asc(Expression::column("b")),
            ],
            limit: Some(100),
            distinct: true,
            ..select_from(DataSource::table("foo"))
        };
        assert_eq!(
            SqlPrinter::from(&select),
            "SELECT DISTINCT\n  1\nFROM\n  foo\nWHERE\n  a\nGROUP BY\n  a,\n  b\nHAVING\n  c\nORDER BY\n  a DESC,\n  b ASC\nLIMIT 100"
        );
    }

    #[test]
    fn test_with_and_union() {
        let cte = SubQuery::new(
            SelectClause::new(vec![NamedExpression::aliased("a", Expression::int(1))]).into(),
            Some(String::from("foo")),
        );
        let first = SelectClause {
            ctes: vec![cte],
            ..select_from(DataSource::table("foo"))
        };
        let second = SelectClause::new(vec![NamedExpression::new(Expression::int(2))]);
        let query = SelectOrUnion::from(first).union(second, true);
        assert_eq!(
            SqlPrinter::from(&query),
            "WITH foo AS (\n  SELECT 1 AS a\n)\n\nSELECT\n  1\nFROM\n  foo\nUNION ALL\nSELECT 2"
        );
    }
}
