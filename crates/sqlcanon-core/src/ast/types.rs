//! Names and column definitions.

use serde::Serialize;

use super::SourcePosition;

/// A possibly qualified name: `a.b.c` has qualifier `["a", "b"]` and name `c`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identifier {
    /// Leading components, empty when unqualified.
    pub qualifier: Vec<String>,
    /// Final component.
    pub name: String,
    /// Source position.
    pub position: SourcePosition,
}

impl Identifier {
    /// Creates an unqualified identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            qualifier: Vec::new(),
            name: name.into(),
            position: SourcePosition::NONE,
        }
    }

    /// Creates a qualified identifier.
    #[must_use]
    pub fn qualified<Q, S>(qualifier: Q, name: impl Into<String>) -> Self
    where
        Q: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            qualifier: qualifier.into_iter().map(Into::into).collect(),
            name: name.into(),
            position: SourcePosition::NONE,
        }
    }

    /// The `*` of `SELECT *`, optionally qualified (`t.*`).
    #[must_use]
    pub fn wildcard(qualifier: Vec<String>) -> Self {
        Self {
            qualifier,
            name: String::from("*"),
            position: SourcePosition::NONE,
        }
    }

    /// Returns a copy carrying `position`.
    #[must_use]
    pub fn at(self, position: SourcePosition) -> Self {
        Self { position, ..self }
    }

    /// Returns true if this is `*` or `t.*`.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.name == "*"
    }

    /// Returns every component, qualifier first.
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        self.qualifier
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.name.as_str()))
    }
}

/// A column in `CREATE TABLE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ColumnDefinition {
    /// Column name.
    pub name: Identifier,
    /// Uppercased type text, e.g. `VARCHAR(40)` or `INTERVAL HOUR TO MINUTE`.
    pub data_type: String,
    /// Source position.
    pub position: SourcePosition,
}

impl ColumnDefinition {
    /// Creates a column definition.
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: Identifier::new(name),
            data_type: data_type.into(),
            position: SourcePosition::NONE,
        }
    }
}
