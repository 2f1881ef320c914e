//! Syntax error type.

use crate::lexer::{line_col, Span, Token};

/// A syntax error reported by the grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}:{column} {message}")]
pub struct SyntaxError {
    /// 1-based line of the offending token.
    pub line: usize,
    /// 0-based column of the offending token.
    pub column: usize,
    /// The error message.
    pub message: String,
    /// The location of the offending token.
    pub span: Span,
}

impl SyntaxError {
    /// Creates a new syntax error located at `span` in `source`.
    #[must_use]
    pub fn new(source: &str, span: Span, message: impl Into<String>) -> Self {
        let (line, column) = line_col(source, span.start);
        Self {
            line,
            column,
            message: message.into(),
            span,
        }
    }

    /// The current token does not fit the rule being parsed.
    #[must_use]
    pub fn mismatched(source: &str, found: &Token<'_>, expected: &str) -> Self {
        Self::new(
            source,
            found.span,
            format!("mismatched input {} expecting {expected}", found.describe()),
        )
    }

    /// A required token is absent before `found`.
    #[must_use]
    pub fn missing(source: &str, found: &Token<'_>, expected: &str) -> Self {
        Self::new(
            source,
            found.span,
            format!("missing {expected} at {}", found.describe()),
        )
    }

    /// Input continues after a complete statement or expression.
    #[must_use]
    pub fn extraneous(source: &str, found: &Token<'_>) -> Self {
        Self::new(
            source,
            found.span,
            format!("extraneous input {} expecting <EOF>", found.describe()),
        )
    }

    /// The lexer could not make sense of the text.
    #[must_use]
    pub fn unrecognized(source: &str, found: &Token<'_>) -> Self {
        Self::new(
            source,
            found.span,
            format!("token recognition error at: {}", found.describe()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    #[test]
    fn test_display_includes_position() {
        let source = "SELECT\n  1 +";
        let eof = Token::eof(source.len());
        let error = SyntaxError::mismatched(source, &eof, "expression");
        assert_eq!(error.line, 2);
        assert_eq!(error.column, 5);
        assert_eq!(
            error.to_string(),
            "line 2:5 mismatched input <EOF> expecting expression"
        );
    }

    #[test]
    fn test_missing() {
        let token = Token::new(TokenKind::Identifier, Span::new(9, 12), "foo");
        let error = SyntaxError::missing("SELECT 1 foo", &token, "';'");
        assert_eq!(error.to_string(), "line 1:9 missing ';' at 'foo'");
    }
}
