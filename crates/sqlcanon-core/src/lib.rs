//! # sqlcanon-core
//!
//! A dialect-aware SQL parser and canonical pretty-printer.
//!
//! This crate provides:
//! - A hand-written lexer with per-dialect handling of quoted text
//! - A recursive descent grammar with Pratt expression parsing that produces a
//!   concrete parse tree
//! - A builder that normalizes the parse tree into a position-tracked AST
//! - A printer that renders the AST back to canonical SQL
//! - A listener-based walker for AST traversal
//!
//! ## Parsing and printing
//!
//! ```rust
//! use sqlcanon_core::{parse_file, Dialect};
//!
//! let file = parse_file("create schema if not exists Foo; select 1 as x", true, Dialect::DEFAULT)
//!     .unwrap();
//! assert_eq!(file.to_string(), "CREATE SCHEMA IF NOT EXISTS foo;\n\nSELECT 1 AS x;");
//! ```
//!
//! ## Dialects
//!
//! Quote characters mean different things in different databases:
//!
//! ```rust
//! use sqlcanon_core::{parse_expression, Dialect, Expression};
//!
//! let ansi = parse_expression("\"Hello world\"", true, Dialect::DEFAULT).unwrap();
//! assert_eq!(ansi, Expression::column("hello world"));
//!
//! let hive = parse_expression("\"Hello world\"", true, Dialect::HIVE).unwrap();
//! assert_eq!(hive, Expression::string("Hello world"));
//! ```

pub mod ast;
pub mod dialect;
pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod walker;

pub use ast::{
    ColumnDefinition, DataSource, Expression, File, Identifier, JoinType, SelectClause,
    SelectOrUnion, SourcePosition, Statement,
};
pub use dialect::{Dialect, LiteralKind};
pub use grammar::SyntaxError;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{parse_expression, parse_file, parse_statement, BuildError, ParseError};
pub use printer::{Printable, SqlPrinter};
pub use walker::{AstListener, AstWalker};
