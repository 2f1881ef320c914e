//! Abstract Syntax Tree (AST) types for SQL statements.
//!
//! Nodes are plain values. Every node carries a [`SourcePosition`], which is
//! ignored by equality, so trees built by hand compare equal to parsed ones.

mod expression;
mod position;
mod query;
mod statement;
mod types;

pub use expression::{
    Case, Cast, Expression, FunctionCall, Literal, LiteralValue, Reference, ScalarSelect,
};
pub use position::SourcePosition;
pub use query::{
    DataSource, FromClause, Join, JoinType, NamedExpression, OrderExpression, SelectClause,
    SelectOrUnion, SubQuery, Table, TableFunction, Union,
};
pub use statement::{CreateSchema, CreateTable, File, SelectStmt, Statement};
pub use types::{ColumnDefinition, Identifier};
