//! Binding powers for Pratt expression parsing.

use crate::lexer::{Keyword, TokenKind};

/// Returns the binding power of a prefix operator.
///
/// Returns `None` if the token is not a prefix operator.
#[must_use]
pub const fn prefix_binding_power(kind: TokenKind) -> Option<u8> {
    match kind {
        TokenKind::Keyword(Keyword::Not) => Some(5),
        TokenKind::Minus => Some(13),
        _ => None,
    }
}

/// Returns the infix binding power for a token.
///
/// Returns `(left_bp, right_bp)` where:
/// - Higher binding power = binds tighter
/// - Left associative: `left_bp < right_bp`
///
/// `NOT` is listed because it starts `NOT IN`, `NOT LIKE` and `NOT BETWEEN`;
/// the parser checks the following token before treating it as infix.
///
/// Returns `None` if the token is not an infix operator.
#[must_use]
pub const fn infix_binding_power(kind: TokenKind) -> Option<(u8, u8)> {
    match kind {
        TokenKind::Keyword(Keyword::Or) => Some((1, 2)),

        TokenKind::Keyword(Keyword::And) => Some((3, 4)),

        // prefix NOT sits at 5, between AND and the comparisons

        TokenKind::Eq
        | TokenKind::NotEq
        | TokenKind::Lt
        | TokenKind::LtEq
        | TokenKind::Gt
        | TokenKind::GtEq
        | TokenKind::Keyword(
            Keyword::Is | Keyword::In | Keyword::Between | Keyword::Like | Keyword::Not,
        ) => Some((7, 8)),

        TokenKind::Plus | TokenKind::Minus => Some((9, 10)),

        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => Some((11, 12)),

        _ => None,
    }
}
