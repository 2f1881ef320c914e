//! SQL Parser
//!
//! Entry points from SQL text to AST. Each call lexes, applies the dialect's
//! quote rules, runs the grammar and builds the AST from the resulting parse
//! tree.
//!
//! With `strict` set, the first syntax error is returned. Otherwise syntax
//! errors are logged and the grammar recovers where it can; input it had to
//! skip surfaces as [`BuildError::Unsupported`].

mod builder;
mod error;

pub use builder::{build_expression, build_file, build_statement};
pub use error::{BuildError, ParseError};

use tracing::debug;

use crate::ast::{Expression, File, Statement};
use crate::dialect::{Dialect, DialectRewriter};
use crate::grammar::{Grammar, SyntaxError};
use crate::lexer::Lexer;

type SqlGrammar<'a> = Grammar<'a, DialectRewriter<Lexer<'a>>>;

fn grammar(sql: &str, strict: bool, dialect: Dialect) -> Result<SqlGrammar<'_>, SyntaxError> {
    Grammar::new(sql, DialectRewriter::new(Lexer::new(sql), dialect), strict)
}

/// Parses a sequence of `;`-separated statements.
///
/// # Errors
///
/// Returns a `ParseError` if the text is not valid SQL for `dialect`.
pub fn parse_file(sql: &str, strict: bool, dialect: Dialect) -> Result<File, ParseError> {
    debug!(mode = "file", strict, ?dialect, len = sql.len(), "parsing SQL");
    let tree = grammar(sql, strict, dialect)?.file()?;
    Ok(build_file(&tree)?)
}

/// Parses exactly one statement, optionally followed by `;`.
///
/// # Errors
///
/// Returns a `ParseError` if the text is not a single valid statement.
pub fn parse_statement(
    sql: &str,
    strict: bool,
    dialect: Dialect,
) -> Result<Statement, ParseError> {
    debug!(mode = "statement", strict, ?dialect, len = sql.len(), "parsing SQL");
    let tree = grammar(sql, strict, dialect)?.single_statement()?;
    Ok(build_statement(&tree)?)
}

/// Parses exactly one expression.
///
/// # Errors
///
/// Returns a `ParseError` if the text is not a single valid expression.
pub fn parse_expression(
    sql: &str,
    strict: bool,
    dialect: Dialect,
) -> Result<Expression, ParseError> {
    debug!(mode = "expression", strict, ?dialect, len = sql.len(), "parsing SQL");
    let tree = grammar(sql, strict, dialect)?.single_expression()?;
    Ok(build_expression(&tree)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Identifier, LiteralValue};

    #[test]
    fn test_parse_expression_folds_case() {
        let expr = parse_expression("TrUe", true, Dialect::DEFAULT).unwrap();
        assert_eq!(expr, Expression::boolean(true));
        assert_eq!(
            parse_expression("sum(monEY)", true, Dialect::DEFAULT).unwrap(),
            Expression::call("sum", vec![Expression::column("money")])
        );
    }

    #[test]
    fn test_dialect_decides_double_quotes() {
        let expr = parse_expression("\"Hello world\"", true, Dialect::DEFAULT).unwrap();
        assert_eq!(expr, Expression::reference(Identifier::new("hello world")));

        let expr = parse_expression("\"Hello world\"", true, Dialect::HIVE).unwrap();
        assert_eq!(
            expr,
            Expression::literal(LiteralValue::String(String::from("Hello world")))
        );
    }

    #[test]
    fn test_strict_returns_syntax_error() {
        let error = parse_statement("select from", true, Dialect::DEFAULT).unwrap_err();
        assert!(matches!(error, ParseError::Syntax(_)));
    }

    #[test]
    fn test_lenient_skipped_input_is_unsupported() {
        let error = parse_statement("select 1 from t u v", false, Dialect::DEFAULT).unwrap_err();
        assert!(matches!(error, ParseError::Build(BuildError::Unsupported { .. })));
    }

    #[test]
    fn test_lenient_recovers_missing_token() {
        let stmt = parse_statement("select (1 + 2 from t", false, Dialect::DEFAULT).unwrap();
        assert!(matches!(stmt, Statement::Select(_)));
    }
}
