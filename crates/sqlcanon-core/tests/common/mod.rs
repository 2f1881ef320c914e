#![allow(dead_code)]

use pretty_assertions::assert_eq;
use sqlcanon_core::ast::{SelectClause, SelectOrUnion};
use sqlcanon_core::{
    parse_expression, parse_file, parse_statement, Dialect, Expression, File, ParseError,
    SqlPrinter, Statement,
};

pub fn parse_expr(sql: &str) -> Expression {
    parse_expression(sql, true, Dialect::DEFAULT)
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse(sql: &str) -> Statement {
    parse_statement(sql, true, Dialect::DEFAULT)
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_many(sql: &str) -> File {
    parse_file(sql, true, Dialect::DEFAULT)
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    parse_statement(sql, true, Dialect::DEFAULT)
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_expr_err(sql: &str) -> ParseError {
    parse_expression(sql, true, Dialect::DEFAULT)
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_lenient_err(sql: &str) -> ParseError {
    parse_statement(sql, false, Dialect::DEFAULT)
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_query(sql: &str) -> SelectOrUnion {
    match parse(sql) {
        Statement::Select(s) => s.query,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

pub fn parse_select(sql: &str) -> SelectClause {
    match parse_query(sql) {
        SelectOrUnion::Select(s) => s,
        other => panic!("Expected a plain SELECT, got {other:?}"),
    }
}

/// Parses a statement and renders it back.
pub fn format(sql: &str) -> String {
    SqlPrinter::from(&parse(sql))
}

/// Parses an expression and renders it back.
pub fn format_expr(sql: &str) -> String {
    SqlPrinter::from(&parse_expr(sql))
}

/// Verifies that printing is a fixed point for a file: the rendered text
/// parses to the same tree and renders to the same text again.
pub fn round_trip(sql: &str) {
    round_trip_in(sql, Dialect::DEFAULT);
}

/// Same as [`round_trip`], parsing and printing under `dialect`.
pub fn round_trip_in(sql: &str, dialect: Dialect) {
    let parse = |sql: &str| {
        parse_file(sql, true, dialect)
            .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
    };
    let ast1 = parse(sql);
    let rendered1 = SqlPrinter::with_dialect(&ast1, dialect);
    let ast2 = parse(&rendered1);
    let rendered2 = SqlPrinter::with_dialect(&ast2, dialect);
    assert_eq!(
        ast1, ast2,
        "Round-trip changed the tree.\n  Input:    {sql}\n  Rendered: {rendered1}"
    );
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
}

/// Same as [`round_trip`] for a single expression.
pub fn round_trip_expr(sql: &str) {
    round_trip_expr_in(sql, Dialect::DEFAULT);
}

/// Same as [`round_trip_expr`], parsing and printing under `dialect`.
pub fn round_trip_expr_in(sql: &str, dialect: Dialect) {
    let parse = |sql: &str| {
        parse_expression(sql, true, dialect)
            .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
    };
    let ast1 = parse(sql);
    let rendered1 = SqlPrinter::with_dialect(&ast1, dialect);
    let ast2 = parse(&rendered1);
    assert_eq!(ast1, ast2, "Round-trip changed the tree.\n  Input: {sql}\n  Rendered: {rendered1}");
    assert_eq!(rendered1, SqlPrinter::with_dialect(&ast2, dialect));
}
