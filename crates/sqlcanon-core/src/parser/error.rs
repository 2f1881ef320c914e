//! AST construction error types.

use crate::ast::SourcePosition;
use crate::grammar::SyntaxError;

/// A parse tree the AST builder cannot turn into an AST.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A construct the AST has no representation for, including input the
    /// grammar skipped while recovering from a syntax error.
    #[error("unsupported syntax: '{text}'{}", describe_position(.position))]
    Unsupported {
        /// The offending source text.
        text: String,
        /// Where it was found.
        position: SourcePosition,
    },
    /// A numeric literal that does not fit its type.
    #[error("invalid literal '{text}': {reason}")]
    InvalidLiteral {
        /// The literal as written.
        text: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl BuildError {
    /// Creates an "unsupported syntax" error.
    #[must_use]
    pub fn unsupported(text: impl Into<String>, position: SourcePosition) -> Self {
        Self::Unsupported {
            text: text.into(),
            position,
        }
    }

    /// Creates an "invalid literal" error.
    #[must_use]
    pub fn invalid_literal(text: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidLiteral {
            text: text.into(),
            reason: reason.to_string(),
        }
    }
}

fn describe_position(position: &SourcePosition) -> String {
    position
        .span()
        .map(|span| format!(" at {}..{}", span.start, span.end))
        .unwrap_or_default()
}

/// Any failure to turn SQL text into an AST.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The text does not match the grammar.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The text matched the grammar but has no AST representation.
    #[error(transparent)]
    Build(#[from] BuildError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Span;

    #[test]
    fn test_unsupported_display() {
        let error = BuildError::unsupported("?", SourcePosition::new(Span::new(9, 10)));
        assert_eq!(error.to_string(), "unsupported syntax: '?' at 9..10");

        let error = BuildError::unsupported("?", SourcePosition::NONE);
        assert_eq!(error.to_string(), "unsupported syntax: '?'");
    }

    #[test]
    fn test_invalid_literal_display() {
        let error = BuildError::invalid_literal("99999999999999999999", "number too large");
        assert_eq!(
            error.to_string(),
            "invalid literal '99999999999999999999': number too large"
        );
    }

    #[test]
    fn test_parse_error_is_transparent() {
        let error = ParseError::from(BuildError::invalid_literal("1e", "bad exponent"));
        assert_eq!(error.to_string(), "invalid literal '1e': bad exponent");
    }
}
