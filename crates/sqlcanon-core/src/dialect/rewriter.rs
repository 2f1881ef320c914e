//! Token-stream adapter that resolves quoted tokens for a dialect.

use tracing::trace;

use super::{Dialect, LiteralKind};
use crate::lexer::{Token, TokenKind};

/// Relabels quote-delimited tokens as strings or identifiers.
///
/// Text and span are left alone; the original delimiter is recorded on
/// [`Token::quote`] so later stages know to strip it. Every other token passes
/// through untouched, one at a time.
pub struct DialectRewriter<I> {
    inner: I,
    dialect: Dialect,
}

impl<I> DialectRewriter<I> {
    /// Wraps a token source.
    #[must_use]
    pub const fn new(inner: I, dialect: Dialect) -> Self {
        Self { inner, dialect }
    }
}

impl<'a, I> Iterator for DialectRewriter<I>
where
    I: Iterator<Item = Token<'a>>,
{
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let mut token = self.inner.next()?;
        if let TokenKind::Quoted(style) = token.kind {
            token.kind = match self.dialect.literal_kind(style) {
                LiteralKind::String => TokenKind::String,
                LiteralKind::Identifier => TokenKind::Identifier,
            };
            token.quote = Some(style);
            trace!(text = token.text, kind = ?token.kind, "rewrote quoted token");
        }
        Some(token)
    }
}
