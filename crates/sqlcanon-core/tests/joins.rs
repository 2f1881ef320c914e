//! Tests for FROM-list folding and explicit joins.

mod common;
use common::*;

use pretty_assertions::assert_eq;
use sqlcanon_core::ast::Identifier;
use sqlcanon_core::{DataSource, Expression, JoinType};

fn source(sql: &str) -> DataSource {
    parse_select(sql)
        .from
        .map(|from| from.source)
        .unwrap_or_else(|| panic!("Expected a FROM clause in: {sql}"))
}

fn column(table: &str, name: &str) -> Expression {
    Expression::reference(Identifier::qualified([table], name))
}

#[test]
fn comma_list_folds_into_cross_join() {
    assert_eq!(
        source("Select 1 From foo, bar;"),
        DataSource::table("foo").join(DataSource::table("bar"), JoinType::Cross, None)
    );
    assert_eq!(
        format("Select 1 From foo, bar;"),
        "SELECT\n  1\nFROM\n  foo\nCROSS JOIN\n  bar;"
    );
}

#[test]
fn comma_list_folds_left_deep() {
    assert_eq!(
        source("select 1 from a, b, c"),
        DataSource::table("a")
            .join(DataSource::table("b"), JoinType::Cross, None)
            .join(DataSource::table("c"), JoinType::Cross, None)
    );
}

#[test]
fn inner_join_with_condition() {
    let on = column("a", "id").eq(column("b", "id"));
    assert_eq!(
        source("select * from a join b on a.id = b.id"),
        DataSource::table("a").join(DataSource::table("b"), JoinType::Inner, Some(on))
    );
    assert_eq!(
        format("select * from a inner join b on a.id = b.id"),
        "SELECT\n  *\nFROM\n  a\nINNER JOIN\n  b\nON a.id = b.id;"
    );
}

#[test]
fn join_without_condition() {
    assert_eq!(
        source("select * from a join b"),
        DataSource::table("a").join(DataSource::table("b"), JoinType::Inner, None)
    );
}

#[test]
fn join_types() {
    let cases = [
        ("left join", JoinType::LeftOuter),
        ("left outer join", JoinType::LeftOuter),
        ("right join", JoinType::RightOuter),
        ("right outer join", JoinType::RightOuter),
        ("full join", JoinType::FullOuter),
        ("full outer join", JoinType::FullOuter),
        ("cross join", JoinType::Cross),
        ("inner join", JoinType::Inner),
    ];
    for (keywords, join_type) in cases {
        let sql = format!("select * from a {keywords} b");
        let DataSource::Join(join) = source(&sql) else {
            panic!("Expected a join for: {sql}");
        };
        assert_eq!(join.join_type, join_type, "{sql}");
    }
}

#[test]
fn outer_join_layout() {
    assert_eq!(
        format("select * from a left join b on a.x = b.x"),
        "SELECT\n  *\nFROM\n  a\nLEFT OUTER JOIN\n  b\nON a.x = b.x;"
    );
}

#[test]
fn chained_joins_fold_left_deep() {
    let source = source("select * from a join b on a.id = b.id left join c on b.id = c.id");
    let DataSource::Join(outer) = source else {
        panic!("expected a join");
    };
    assert_eq!(outer.join_type, JoinType::LeftOuter);
    assert_eq!(*outer.right, DataSource::table("c"));
    let DataSource::Join(inner) = *outer.left else {
        panic!("expected a nested join on the left");
    };
    assert_eq!(inner.join_type, JoinType::Inner);
    assert_eq!(*inner.left, DataSource::table("a"));
}

#[test]
fn chained_joins_print_flat() {
    assert_eq!(
        format("select 1 from foo join bar on foo.id = bar.id join baz on bar.id = baz.id"),
        "SELECT\n  1\nFROM\n  foo\nINNER JOIN\n  bar\nON foo.id = bar.id\nINNER JOIN\n  baz\nON bar.id = baz.id;"
    );
}

#[test]
fn parenthesized_join_on_the_right() {
    assert_eq!(
        source("select * from a left join (b cross join c)"),
        DataSource::table("a").join(
            DataSource::table("b").join(DataSource::table("c"), JoinType::Cross, None),
            JoinType::LeftOuter,
            None
        )
    );
    assert_eq!(
        format("select * from a left join (b cross join c)"),
        "SELECT\n  *\nFROM\n  a\nLEFT OUTER JOIN\n  (\n    b\n  CROSS JOIN\n    c\n  );"
    );
}

#[test]
fn parenthesized_join_on_the_left_is_flattened() {
    assert_eq!(
        source("select * from (a cross join b) cross join c"),
        source("select * from a cross join b cross join c")
    );
}

#[test]
fn comma_list_of_joins() {
    assert_eq!(
        format("select * from a, b join c on b.x = c.x"),
        "SELECT\n  *\nFROM\n  a\nCROSS JOIN\n  (\n    b\n  INNER JOIN\n    c\n  ON b.x = c.x\n  );"
    );
}

#[test]
fn joined_tables_keep_aliases() {
    assert_eq!(
        format("select * from films f join kinds k on f.kind = k.id"),
        "SELECT\n  *\nFROM\n  films AS f\nINNER JOIN\n  kinds AS k\nON f.kind = k.id;"
    );
}

#[test]
fn join_has_no_alias() {
    let source = source("select * from a x cross join b y");
    assert_eq!(source.alias(), None);
    let DataSource::Join(join) = source else {
        panic!("expected a join");
    };
    assert_eq!(join.left.alias(), Some("x"));
    assert_eq!(join.right.alias(), Some("y"));
}
