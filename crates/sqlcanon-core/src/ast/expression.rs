//! Expression AST types.
//!
//! Operators are not a separate node kind: `a + b` is the infix
//! [`FunctionCall`] `+` with two arguments, `NOT a` the infix call `NOT` with
//! one, `a BETWEEN b AND c` the infix call `BETWEEN` with three.

use serde::Serialize;

use super::{Identifier, SelectOrUnion, SourcePosition};

/// A literal value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LiteralValue {
    /// `DATE '2018-01-01'`
    Date(String),
    /// String literal, unescaped.
    String(String),
    /// Integer literal.
    Int(i64),
    /// Float literal.
    Float(f64),
    /// `TRUE` or `FALSE`.
    Boolean(bool),
    /// `NULL`
    Null,
    /// `INTERVAL '7 DAY'`, value and unit as one uppercased string.
    Interval(String),
}

/// A literal with its source position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Literal {
    /// The value.
    pub value: LiteralValue,
    /// Source position.
    pub position: SourcePosition,
}

/// A function call, or an operator applied to its operands.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionCall {
    /// Lowercased function name, or the canonical operator name.
    pub name: String,
    /// Arguments in order.
    pub arguments: Vec<Expression>,
    /// Whether `DISTINCT` was specified.
    pub distinct: bool,
    /// Whether this is an operator rather than a named function.
    pub infix: bool,
    /// Source position.
    pub position: SourcePosition,
}

impl FunctionCall {
    /// Creates a named function call.
    #[must_use]
    pub fn new(name: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Self {
            name: name.into(),
            arguments,
            distinct: false,
            infix: false,
            position: SourcePosition::NONE,
        }
    }

    /// Creates an operator application.
    #[must_use]
    pub fn operator(name: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Self {
            infix: true,
            ..Self::new(name, arguments)
        }
    }
}

/// A reference to a column (or `*`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Reference {
    /// The referenced name.
    pub identifier: Identifier,
    /// Source position.
    pub position: SourcePosition,
}

/// `CASE [input] WHEN .. THEN .. [ELSE ..] END`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Case {
    /// The value compared against each `WHEN`, for the simple form.
    pub input: Option<Box<Expression>>,
    /// `(when, then)` pairs in order.
    pub branches: Vec<(Expression, Expression)>,
    /// The `ELSE` result.
    pub otherwise: Option<Box<Expression>>,
    /// Source position.
    pub position: SourcePosition,
}

/// `CAST(expr AS type)` or `TRY_CAST(expr AS type)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cast {
    /// Expression to cast.
    pub expression: Box<Expression>,
    /// Uppercased target type.
    pub data_type: String,
    /// Whether this is `TRY_CAST`.
    pub try_cast: bool,
    /// Source position.
    pub position: SourcePosition,
}

/// A parenthesized query used as a value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalarSelect {
    /// The nested query.
    pub query: Box<SelectOrUnion>,
    /// Source position.
    pub position: SourcePosition,
}

/// An SQL expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expression {
    /// A literal value.
    Literal(Literal),
    /// A function call or operator.
    FunctionCall(FunctionCall),
    /// A column reference.
    Reference(Reference),
    /// A CASE expression.
    Case(Case),
    /// A CAST or TRY_CAST expression.
    Cast(Cast),
    /// A scalar subquery.
    ScalarSelect(ScalarSelect),
}

impl Expression {
    /// Creates a literal.
    #[must_use]
    pub const fn literal(value: LiteralValue) -> Self {
        Self::Literal(Literal {
            value,
            position: SourcePosition::NONE,
        })
    }

    /// Creates an integer literal.
    #[must_use]
    pub const fn int(value: i64) -> Self {
        Self::literal(LiteralValue::Int(value))
    }

    /// Creates a float literal.
    #[must_use]
    pub const fn float(value: f64) -> Self {
        Self::literal(LiteralValue::Float(value))
    }

    /// Creates a string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::literal(LiteralValue::String(value.into()))
    }

    /// Creates a boolean literal.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::literal(LiteralValue::Boolean(value))
    }

    /// Creates a NULL literal.
    #[must_use]
    pub const fn null() -> Self {
        Self::literal(LiteralValue::Null)
    }

    /// Creates a date literal.
    #[must_use]
    pub fn date(value: impl Into<String>) -> Self {
        Self::literal(LiteralValue::Date(value.into()))
    }

    /// Creates an interval literal.
    #[must_use]
    pub fn interval(value: impl Into<String>) -> Self {
        Self::literal(LiteralValue::Interval(value.into()))
    }

    /// Creates a reference to `identifier`.
    #[must_use]
    pub const fn reference(identifier: Identifier) -> Self {
        Self::Reference(Reference {
            identifier,
            position: SourcePosition::NONE,
        })
    }

    /// Creates a reference to an unqualified column.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self::reference(Identifier::new(name))
    }

    /// Creates a named function call.
    #[must_use]
    pub fn call(name: impl Into<String>, arguments: Vec<Self>) -> Self {
        Self::FunctionCall(FunctionCall::new(name, arguments))
    }

    /// Creates an operator application.
    #[must_use]
    pub fn operator(name: impl Into<String>, arguments: Vec<Self>) -> Self {
        Self::FunctionCall(FunctionCall::operator(name, arguments))
    }

    /// Creates a binary operator application.
    #[must_use]
    pub fn binary(self, op: &str, right: Self) -> Self {
        Self::operator(op, vec![self, right])
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn eq(self, right: Self) -> Self {
        self.binary("=", right)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: Self) -> Self {
        self.binary("AND", right)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, right: Self) -> Self {
        self.binary("OR", right)
    }

    /// Creates a NOT expression.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::operator("NOT", vec![self])
    }

    /// Creates a unary minus expression.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn neg(self) -> Self {
        Self::operator("-", vec![self])
    }

    /// Creates an IN expression.
    #[must_use]
    pub fn in_list(self, list: Vec<Self>) -> Self {
        let mut arguments = vec![self];
        arguments.extend(list);
        Self::operator("IN", arguments)
    }

    /// Creates a BETWEEN expression.
    #[must_use]
    pub fn between(self, low: Self, high: Self) -> Self {
        Self::operator("BETWEEN", vec![self, low, high])
    }

    /// Returns the source position of this expression.
    #[must_use]
    pub const fn position(&self) -> SourcePosition {
        match self {
            Self::Literal(node) => node.position,
            Self::FunctionCall(node) => node.position,
            Self::Reference(node) => node.position,
            Self::Case(node) => node.position,
            Self::Cast(node) => node.position,
            Self::ScalarSelect(node) => node.position,
        }
    }
}
