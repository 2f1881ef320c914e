//! SQL grammar.
//!
//! Turns a token stream into a concrete [`ParseNode`] tree. The grammar only
//! recognizes structure; case folding, quote stripping, operator naming and
//! every other normalization happen later in [`crate::parser`].

mod error;
mod parser;
mod pratt;
mod tree;

pub use error::SyntaxError;
pub use parser::Grammar;
pub use pratt::{infix_binding_power, prefix_binding_power};
pub use tree::{ParseElement, ParseNode, Rule};
