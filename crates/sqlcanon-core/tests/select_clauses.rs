//! Tests for SELECT lists and the clauses that follow them.

mod common;
use common::*;

use pretty_assertions::assert_eq;
use sqlcanon_core::ast::{FromClause, Identifier, NamedExpression, OrderExpression};
use sqlcanon_core::{DataSource, Expression};

// --- Select list ---

#[test]
fn select_bare_prints_on_one_line() {
    assert_eq!(format("Select 1 as foo, bar, 1*3"), "SELECT 1 AS foo, bar, 1 * 3;");
}

#[test]
fn select_items() {
    let select = parse_select("select 1 as foo, bar");
    assert_eq!(
        select.items,
        vec![
            NamedExpression::aliased("foo", Expression::int(1)),
            NamedExpression::new(Expression::column("bar")),
        ]
    );
    assert!(!select.distinct);
    assert!(select.from.is_none());
}

#[test]
fn select_alias_without_as() {
    let select = parse_select("select a b from t");
    assert_eq!(select.items[0].name.as_deref(), Some("b"));
    assert_eq!(format("select a b from t"), "SELECT\n  a AS b\nFROM\n  t;");
}

#[test]
fn select_alias_is_lowercased() {
    let select = parse_select("select 1 AS Total");
    assert_eq!(select.items[0].name.as_deref(), Some("total"));
}

#[test]
fn select_star() {
    let select = parse_select("select * from t");
    assert_eq!(
        select.items,
        vec![NamedExpression::new(Expression::reference(
            Identifier::wildcard(Vec::new())
        ))]
    );
    assert_eq!(format("select * from t"), "SELECT\n  *\nFROM\n  t;");
}

#[test]
fn select_qualified_star() {
    let select = parse_select("select T.* from t");
    assert_eq!(
        select.items[0].expression,
        Expression::reference(Identifier::wildcard(vec![String::from("t")]))
    );
    assert_eq!(format("select t.* from t"), "SELECT\n  t.*\nFROM\n  t;");
}

#[test]
fn select_distinct() {
    assert!(parse_select("select distinct a from t").distinct);
    assert_eq!(
        format("select distinct a from t"),
        "SELECT DISTINCT\n  a\nFROM\n  t;"
    );
    assert_eq!(format("select distinct 1"), "SELECT DISTINCT 1;");
}

#[test]
fn select_all_is_the_default() {
    assert!(!parse_select("select all a from t").distinct);
    assert_eq!(format("select all a from t"), "SELECT\n  a\nFROM\n  t;");
}

#[test]
fn select_multiple_items_one_per_line() {
    assert_eq!(
        format("select a,b from t where x<>1"),
        "SELECT\n  a,\n  b\nFROM\n  t\nWHERE\n  x != 1;"
    );
}

// --- FROM ---

#[test]
fn from_single_table() {
    let select = parse_select("select a from t");
    assert_eq!(select.from, Some(FromClause::new(DataSource::table("t"))));
}

#[test]
fn from_table_alias() {
    let select = parse_select("select f.a from films as f");
    assert_eq!(
        select.from.map(|from| from.source),
        Some(DataSource::aliased_table("films", "f"))
    );
    assert_eq!(
        format("select f.a from films f"),
        "SELECT\n  f.a\nFROM\n  films AS f;"
    );
}

#[test]
fn from_qualified_table() {
    assert_eq!(
        format("select a from Sch.Films"),
        "SELECT\n  a\nFROM\n  sch.films;"
    );
}

#[test]
fn from_subquery() {
    assert_eq!(
        format("select x from (select 1 as x) s"),
        "SELECT\n  x\nFROM\n  (\n    SELECT 1 AS x\n  ) AS s;"
    );
}

#[test]
fn from_subquery_without_alias() {
    let select = parse_select("select x from (select 1 as x)");
    let Some(DataSource::SubQuery(subquery)) = select.from.map(|from| from.source) else {
        panic!("expected a subquery");
    };
    assert_eq!(subquery.alias, None);
}

#[test]
fn from_table_function() {
    assert_eq!(
        format("select n from unnest(array[1,2]) as u (n)"),
        "SELECT\n  n\nFROM\n  unnest(ARRAY[1, 2]) AS u (n);"
    );
}

#[test]
fn from_table_function_without_column_aliases() {
    let select = parse_select("select * from generate_series(1, 3) g");
    let Some(DataSource::TableFunction(function)) = select.from.map(|from| from.source) else {
        panic!("expected a table function");
    };
    assert_eq!(function.alias, "g");
    assert!(function.column_aliases.is_empty());
    assert_eq!(function.function.name, "generate_series");
    assert_eq!(function.function.arguments.len(), 2);
}

// --- WHERE, GROUP BY, HAVING ---

#[test]
fn where_clause() {
    let select = parse_select("select a from t where a + b = 2");
    assert_eq!(
        select.predicate,
        Some(
            Expression::column("a")
                .binary("+", Expression::column("b"))
                .eq(Expression::int(2))
        )
    );
    assert_eq!(
        format("select a from t where a + b = 2"),
        "SELECT\n  a\nFROM\n  t\nWHERE\n  a + b = 2;"
    );
}

#[test]
fn group_by_and_having() {
    assert_eq!(
        format("select a, count(*) from t group by a having count(*) > 1"),
        "SELECT\n  a,\n  count(*)\nFROM\n  t\nGROUP BY\n  a\nHAVING\n  count(*) > 1;"
    );
}

#[test]
fn group_by_multiple_keys() {
    let select = parse_select("select a, b from t group by a, b");
    assert_eq!(
        select.group_by,
        vec![Expression::column("a"), Expression::column("b")]
    );
}

// --- ORDER BY, LIMIT ---

#[test]
fn order_by_directions() {
    let select = parse_select("select a from t order by a desc, b");
    assert_eq!(
        select.order_by,
        vec![
            OrderExpression::desc(Expression::column("a")),
            OrderExpression::asc(Expression::column("b")),
        ]
    );
    assert_eq!(
        format("select a from t order by a desc, b"),
        "SELECT\n  a\nFROM\n  t\nORDER BY\n  a DESC,\n  b ASC;"
    );
}

#[test]
fn limit() {
    assert_eq!(parse_select("select a from t limit 100").limit, Some(100));
    assert_eq!(
        format("select a from t limit 100"),
        "SELECT\n  a\nFROM\n  t\nLIMIT 100;"
    );
}

#[test]
fn limit_without_from_is_not_bare() {
    assert_eq!(format("select 1 limit 1"), "SELECT\n  1\nLIMIT 1;");
}

#[test]
fn all_clauses_in_order() {
    assert_eq!(
        format(
            "select distinct a, sum(b) as total from t where c > 0 \
             group by a having sum(b) > 10 order by total desc limit 5"
        ),
        "SELECT DISTINCT\n  a,\n  sum(b) AS total\nFROM\n  t\nWHERE\n  c > 0\nGROUP BY\n  a\n\
         HAVING\n  sum(b) > 10\nORDER BY\n  total DESC\nLIMIT 5;"
    );
}
