//! Query AST types: SELECT, UNION, FROM sources and joins.

use serde::Serialize;

use super::{Expression, FunctionCall, Identifier, SourcePosition};

/// A select list item with its optional output name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedExpression {
    /// Output alias.
    pub name: Option<String>,
    /// The selected value.
    pub expression: Expression,
    /// Source position.
    pub position: SourcePosition,
}

impl NamedExpression {
    /// Creates an unaliased item.
    #[must_use]
    pub const fn new(expression: Expression) -> Self {
        Self {
            name: None,
            expression,
            position: SourcePosition::NONE,
        }
    }

    /// Creates an aliased item.
    #[must_use]
    pub fn aliased(name: impl Into<String>, expression: Expression) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(expression)
        }
    }
}

/// An ORDER BY item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderExpression {
    /// The sort key.
    pub expression: Expression,
    /// `ASC` (the default) or `DESC`.
    pub ascending: bool,
    /// Source position.
    pub position: SourcePosition,
}

impl OrderExpression {
    /// Creates an ascending sort key.
    #[must_use]
    pub const fn asc(expression: Expression) -> Self {
        Self {
            expression,
            ascending: true,
            position: SourcePosition::NONE,
        }
    }

    /// Creates a descending sort key.
    #[must_use]
    pub const fn desc(expression: Expression) -> Self {
        Self {
            expression,
            ascending: false,
            position: SourcePosition::NONE,
        }
    }
}

/// Join types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JoinType {
    /// `[INNER] JOIN`
    Inner,
    /// `FULL [OUTER] JOIN`
    FullOuter,
    /// `CROSS JOIN`, and the comma of a FROM list
    Cross,
    /// `LEFT [OUTER] JOIN`
    LeftOuter,
    /// `RIGHT [OUTER] JOIN`
    RightOuter,
}

impl JoinType {
    /// Returns the SQL keywords for this join type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::FullOuter => "FULL OUTER JOIN",
            Self::Cross => "CROSS JOIN",
            Self::LeftOuter => "LEFT OUTER JOIN",
            Self::RightOuter => "RIGHT OUTER JOIN",
        }
    }
}

/// A named table in FROM.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Table {
    /// Table name.
    pub identifier: Identifier,
    /// Table alias.
    pub alias: Option<String>,
    /// Source position.
    pub position: SourcePosition,
}

/// A parenthesized query in FROM, or a CTE binding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubQuery {
    /// The nested query.
    pub query: Box<SelectOrUnion>,
    /// Alias; always present on CTE bindings.
    pub alias: Option<String>,
    /// Source position.
    pub position: SourcePosition,
}

impl SubQuery {
    /// Creates a subquery.
    #[must_use]
    pub fn new(query: SelectOrUnion, alias: Option<String>) -> Self {
        Self {
            query: Box::new(query),
            alias,
            position: SourcePosition::NONE,
        }
    }
}

/// Two sources joined together. Joins never carry an alias.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Join {
    /// Left side.
    pub left: Box<DataSource>,
    /// Right side.
    pub right: Box<DataSource>,
    /// Join type.
    pub join_type: JoinType,
    /// `ON` condition.
    pub on: Option<Expression>,
    /// Source position.
    pub position: SourcePosition,
}

/// A function producing rows, e.g. `unnest(xs) AS t (x)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableFunction {
    /// The call.
    pub function: FunctionCall,
    /// Mandatory alias.
    pub alias: String,
    /// Column aliases, possibly empty.
    pub column_aliases: Vec<String>,
    /// Source position.
    pub position: SourcePosition,
}

/// Anything that can appear in FROM.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DataSource {
    /// A named table.
    Table(Table),
    /// A subquery.
    SubQuery(SubQuery),
    /// A join of two sources.
    Join(Join),
    /// A table-valued function.
    TableFunction(TableFunction),
}

impl DataSource {
    /// Creates an unaliased table source.
    #[must_use]
    pub fn table(name: impl Into<String>) -> Self {
        Self::Table(Table {
            identifier: Identifier::new(name),
            alias: None,
            position: SourcePosition::NONE,
        })
    }

    /// Creates an aliased table source.
    #[must_use]
    pub fn aliased_table(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self::Table(Table {
            identifier: Identifier::new(name),
            alias: Some(alias.into()),
            position: SourcePosition::NONE,
        })
    }

    /// Joins `right` onto this source.
    #[must_use]
    pub fn join(self, right: Self, join_type: JoinType, on: Option<Expression>) -> Self {
        Self::Join(Join {
            left: Box::new(self),
            right: Box::new(right),
            join_type,
            on,
            position: SourcePosition::NONE,
        })
    }

    /// Returns the alias, if this kind of source has one.
    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        match self {
            Self::Table(table) => table.alias.as_deref(),
            Self::SubQuery(query) => query.alias.as_deref(),
            Self::Join(_) => None,
            Self::TableFunction(function) => Some(&function.alias),
        }
    }

    /// Returns the source position.
    #[must_use]
    pub const fn position(&self) -> SourcePosition {
        match self {
            Self::Table(node) => node.position,
            Self::SubQuery(node) => node.position,
            Self::Join(node) => node.position,
            Self::TableFunction(node) => node.position,
        }
    }
}

/// The FROM clause of a select.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FromClause {
    /// Root source; comma lists are folded into cross joins.
    pub source: DataSource,
    /// Source position.
    pub position: SourcePosition,
}

impl FromClause {
    /// Creates a FROM clause.
    #[must_use]
    pub const fn new(source: DataSource) -> Self {
        Self {
            source,
            position: SourcePosition::NONE,
        }
    }
}

/// A single `SELECT ...` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SelectClause {
    /// Select list.
    pub items: Vec<NamedExpression>,
    /// Whether `DISTINCT` was specified.
    pub distinct: bool,
    /// FROM clause.
    pub from: Option<FromClause>,
    /// WHERE condition.
    pub predicate: Option<Expression>,
    /// GROUP BY keys.
    pub group_by: Vec<Expression>,
    /// HAVING condition.
    pub having: Option<Expression>,
    /// ORDER BY keys.
    pub order_by: Vec<OrderExpression>,
    /// LIMIT row count.
    pub limit: Option<i64>,
    /// WITH bindings.
    pub ctes: Vec<SubQuery>,
    /// Source position.
    pub position: SourcePosition,
}

impl SelectClause {
    /// Creates a select with only a select list.
    #[must_use]
    pub fn new(items: Vec<NamedExpression>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Returns true if nothing beyond the select list (and DISTINCT) is set.
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.from.is_none()
            && self.predicate.is_none()
            && self.group_by.is_empty()
            && self.having.is_none()
            && self.order_by.is_empty()
            && self.limit.is_none()
    }
}

/// `top UNION [ALL] bottom`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Union {
    /// Left operand; chains nest here.
    pub top: Box<SelectOrUnion>,
    /// Right operand.
    pub bottom: SelectClause,
    /// Whether duplicates are kept.
    pub all: bool,
    /// Source position.
    pub position: SourcePosition,
}

/// A query: one select, or a left-deep chain of unions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SelectOrUnion {
    /// A single select.
    Select(SelectClause),
    /// A union.
    Union(Union),
}

impl SelectOrUnion {
    /// Appends `UNION [ALL] bottom`.
    #[must_use]
    pub fn union(self, bottom: SelectClause, all: bool) -> Self {
        Self::Union(Union {
            top: Box::new(self),
            bottom,
            all,
            position: SourcePosition::NONE,
        })
    }

    /// Returns the leftmost select of the chain.
    #[must_use]
    pub fn first_select(&self) -> &SelectClause {
        match self {
            Self::Select(select) => select,
            Self::Union(union) => union.top.first_select(),
        }
    }

    /// Mutable access to the leftmost select of the chain.
    pub fn first_select_mut(&mut self) -> &mut SelectClause {
        match self {
            Self::Select(select) => select,
            Self::Union(union) => union.top.first_select_mut(),
        }
    }

    /// Returns the source position.
    #[must_use]
    pub const fn position(&self) -> SourcePosition {
        match self {
            Self::Select(node) => node.position,
            Self::Union(node) => node.position,
        }
    }
}

impl From<SelectClause> for SelectOrUnion {
    fn from(select: SelectClause) -> Self {
        Self::Select(select)
    }
}
