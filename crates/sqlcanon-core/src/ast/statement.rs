//! Statement AST types.

use serde::Serialize;

use super::{ColumnDefinition, Identifier, SelectOrUnion, SourcePosition};

/// `CREATE SCHEMA [IF NOT EXISTS] name`; `CREATE DATABASE` is a synonym.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CreateSchema {
    /// Schema name.
    pub name: Identifier,
    /// Whether `IF NOT EXISTS` was given.
    pub if_not_exists: bool,
    /// Source position.
    pub position: SourcePosition,
}

/// `CREATE TABLE name (columns)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CreateTable {
    /// Table name.
    pub name: Identifier,
    /// Columns in declaration order.
    pub columns: Vec<ColumnDefinition>,
    /// Source position.
    pub position: SourcePosition,
}

/// A query used as a statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectStmt {
    /// The query.
    pub query: SelectOrUnion,
    /// Source position.
    pub position: SourcePosition,
}

/// An SQL statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    /// CREATE SCHEMA / CREATE DATABASE
    CreateSchema(CreateSchema),
    /// CREATE TABLE
    CreateTable(CreateTable),
    /// SELECT, possibly with WITH and UNION
    Select(SelectStmt),
}

impl Statement {
    /// Creates a `CREATE SCHEMA` statement.
    #[must_use]
    pub fn create_schema(name: impl Into<String>, if_not_exists: bool) -> Self {
        Self::CreateSchema(CreateSchema {
            name: Identifier::new(name),
            if_not_exists,
            position: SourcePosition::NONE,
        })
    }

    /// Creates a `CREATE TABLE` statement.
    #[must_use]
    pub const fn create_table(name: Identifier, columns: Vec<ColumnDefinition>) -> Self {
        Self::CreateTable(CreateTable {
            name,
            columns,
            position: SourcePosition::NONE,
        })
    }

    /// Wraps a query.
    #[must_use]
    pub fn select(query: impl Into<SelectOrUnion>) -> Self {
        Self::Select(SelectStmt {
            query: query.into(),
            position: SourcePosition::NONE,
        })
    }

    /// Returns the source position.
    #[must_use]
    pub const fn position(&self) -> SourcePosition {
        match self {
            Self::CreateSchema(node) => node.position,
            Self::CreateTable(node) => node.position,
            Self::Select(node) => node.position,
        }
    }
}

/// A sequence of statements.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct File {
    /// Statements in source order.
    pub statements: Vec<Statement>,
    /// Source position.
    pub position: SourcePosition,
}

impl File {
    /// Creates a file.
    #[must_use]
    pub const fn new(statements: Vec<Statement>) -> Self {
        Self {
            statements,
            position: SourcePosition::NONE,
        }
    }
}
