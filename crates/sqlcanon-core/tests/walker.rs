//! Tests for AST traversal with listeners.

mod common;
use common::*;

use pretty_assertions::assert_eq;
use sqlcanon_core::ast::{
    ColumnDefinition, FromClause, FunctionCall, Literal, NamedExpression, SubQuery, Table,
};
use sqlcanon_core::{
    AstListener, AstWalker, DataSource, Expression, Identifier, SelectClause, Statement,
};

#[derive(Default)]
struct Events(Vec<String>);

impl Events {
    fn push(&mut self, event: impl Into<String>) {
        self.0.push(event.into());
    }
}

impl AstListener for Events {
    fn enter_statement(&mut self, _: &Statement) {
        self.push("+statement");
    }
    fn exit_statement(&mut self, _: &Statement) {
        self.push("-statement");
    }
    fn enter_select_clause(&mut self, _: &SelectClause) {
        self.push("+select");
    }
    fn exit_select_clause(&mut self, _: &SelectClause) {
        self.push("-select");
    }
    fn enter_named_expression(&mut self, _: &NamedExpression) {
        self.push("+item");
    }
    fn exit_named_expression(&mut self, _: &NamedExpression) {
        self.push("-item");
    }
    fn enter_from_clause(&mut self, _: &FromClause) {
        self.push("+from");
    }
    fn exit_from_clause(&mut self, _: &FromClause) {
        self.push("-from");
    }
    fn enter_data_source(&mut self, _: &DataSource) {
        self.push("+source");
    }
    fn exit_data_source(&mut self, _: &DataSource) {
        self.push("-source");
    }
    fn enter_table(&mut self, _: &Table) {
        self.push("+table");
    }
    fn exit_table(&mut self, _: &Table) {
        self.push("-table");
    }
    fn enter_expression(&mut self, _: &Expression) {
        self.push("+expr");
    }
    fn exit_expression(&mut self, _: &Expression) {
        self.push("-expr");
    }
    fn enter_literal(&mut self, literal: &Literal) {
        self.push(format!("literal {:?}", literal.value));
    }
    fn enter_function_call(&mut self, call: &FunctionCall) {
        self.push(format!("call {}", call.name));
    }
    fn enter_identifier(&mut self, identifier: &Identifier) {
        self.push(format!("identifier {}", identifier.name));
    }
}

fn events(sql: &str) -> Vec<String> {
    let mut events = Events::default();
    AstWalker::new(&mut events).walk_statement(&parse(sql));
    events.0
}

#[test]
fn walk_visits_in_field_order() {
    assert_eq!(
        events("select a from t where b = 1"),
        vec![
            "+statement",
            "+select",
            "+item",
            "+expr",
            "identifier a",
            "-expr",
            "-item",
            "+from",
            "+source",
            "+table",
            "identifier t",
            "-table",
            "-source",
            "-from",
            "+expr",
            "call =",
            "+expr",
            "identifier b",
            "-expr",
            "+expr",
            "literal Int(1)",
            "-expr",
            "-expr",
            "-select",
            "-statement",
        ]
    );
}

#[test]
fn walk_joins_wrap_both_sides() {
    let sources: Vec<_> = events("select 1 from a join b on a.x = b.x")
        .into_iter()
        .filter(|event| event.ends_with("source") || event.starts_with("identifier"))
        .collect();
    assert_eq!(
        sources,
        vec![
            "+source",
            "+source",
            "identifier a",
            "-source",
            "+source",
            "identifier b",
            "-source",
            "identifier x",
            "identifier x",
            "-source",
        ]
    );
}

/// Counts hooks by kind and checks that every enter has a matching exit.
#[derive(Default)]
struct Balance {
    depth: i32,
    max_depth: i32,
    subqueries: usize,
    columns: Vec<String>,
}

impl Balance {
    fn enter(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
    }

    fn exit(&mut self) {
        self.depth -= 1;
        assert!(self.depth >= 0, "exit without enter");
    }
}

impl AstListener for Balance {
    fn enter_expression(&mut self, _: &Expression) {
        self.enter();
    }
    fn exit_expression(&mut self, _: &Expression) {
        self.exit();
    }
    fn enter_data_source(&mut self, _: &DataSource) {
        self.enter();
    }
    fn exit_data_source(&mut self, _: &DataSource) {
        self.exit();
    }
    fn enter_subquery(&mut self, _: &SubQuery) {
        self.subqueries += 1;
    }
    fn enter_column_definition(&mut self, column: &ColumnDefinition) {
        self.columns.push(column.name.name.clone());
    }
}

#[test]
fn walk_enter_and_exit_are_balanced() {
    let file = parse_many(
        "with c as (select 1) \
         select (select max(x) from u), case when a then b else -c end \
         from t, (select * from c) s where y in (select y from v);\
         create table z (a int, b text)",
    );
    let mut balance = Balance::default();
    AstWalker::new(&mut balance).walk_file(&file);
    assert_eq!(balance.depth, 0);
    assert!(balance.max_depth > 3);
    // The CTE plus the FROM subquery.
    assert_eq!(balance.subqueries, 2);
    assert_eq!(balance.columns, vec!["a", "b"]);
}

#[test]
fn walk_single_expression() {
    let mut events = Events::default();
    AstWalker::new(&mut events).walk_expression(&parse_expr("cast(x as int)"));
    assert_eq!(events.0, vec!["+expr", "+expr", "identifier x", "-expr", "-expr"]);
}

#[test]
fn walk_create_schema_reports_name() {
    assert_eq!(
        events("create schema if not exists s"),
        vec!["+statement", "identifier s", "-statement"]
    );
}

#[test]
fn walk_default_listener_does_nothing() {
    struct Nothing;
    impl AstListener for Nothing {}

    let file = parse_many("select a from b; create schema c");
    AstWalker::new(&mut Nothing).walk_file(&file);
}
