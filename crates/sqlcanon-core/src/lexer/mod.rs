//! SQL Lexer/Tokenizer
//!
//! This module provides a hand-written lexer for SQL that produces a stream of
//! tokens. Tokens borrow their text from the input; quote-delimited text is
//! classified by its delimiter only, and the [`crate::dialect`] layer decides
//! whether it is a string or an identifier.

mod span;
mod token;
mod tokenizer;

pub use span::{line_col, Span};
pub use token::{Keyword, QuoteStyle, Token, TokenKind};
pub use tokenizer::Lexer;
