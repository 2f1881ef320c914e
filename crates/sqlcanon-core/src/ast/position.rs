//! Source positions attached to AST nodes.

use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::lexer::Span;

/// Where a node came from in the source text, if anywhere.
///
/// Positions never take part in equality or hashing: two nodes that differ
/// only in where they were parsed compare equal, and a hand-built node (with
/// no position) equals its parsed counterpart.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(transparent)]
pub struct SourcePosition(Option<Span>);

impl SourcePosition {
    /// No position information.
    pub const NONE: Self = Self(None);

    /// Creates a position covering `span`.
    #[must_use]
    pub const fn new(span: Span) -> Self {
        Self(Some(span))
    }

    /// Returns the covered span, if known.
    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        self.0
    }

    /// Returns the smallest position covering both; an unknown position is
    /// the identity.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        match (self.0, other.0) {
            (Some(a), Some(b)) => Self(Some(a.merge(b))),
            (Some(a), None) => Self(Some(a)),
            (None, b) => Self(b),
        }
    }
}

impl From<Span> for SourcePosition {
    fn from(span: Span) -> Self {
        Self::new(span)
    }
}

impl PartialEq for SourcePosition {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for SourcePosition {}

impl Hash for SourcePosition {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}
