//! Concrete parse tree.
//!
//! One [`ParseNode`] per recognized grammar rule, holding its child nodes and
//! tokens in source order. Nothing is normalized here: keywords keep their
//! original case, quoted text keeps its delimiters, parentheses stay.

use crate::lexer::{Keyword, Span, Token, TokenKind};

/// Grammar rules that produce parse tree nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    // Entry points
    File,
    SingleStatement,
    SingleExpression,

    // DDL
    CreateSchemaStmt,
    CreateTableStmt,
    IfNotExists,
    AuthorizationClause,
    ColumnSpec,
    ColumnConstraint,
    DataType,

    // Queries
    SelectStmt,
    Query,
    WithClause,
    CommonTableExpr,
    SelectCore,
    SelectItem,
    Alias,
    FromClause,
    TableExpr,
    JoinOperator,
    JoinCondition,
    TableRef,
    SubqueryRef,
    TableFunctionRef,
    ColumnAliasList,
    ParenTableExpr,
    WhereClause,
    GroupByClause,
    HavingClause,
    OrderByClause,
    OrderItem,
    LimitClause,

    // Names
    QualifiedIdentifier,
    SimpleIdentifier,

    // Expressions
    Literal,
    ColumnRef,
    Wildcard,
    FunctionCall,
    ArrayConstructor,
    Case,
    CaseWhen,
    CaseElse,
    Cast,
    Paren,
    ScalarSelect,
    UnaryExpr,
    BinaryExpr,
    InExpr,
    BetweenExpr,

    /// Input the grammar skipped over while recovering from a syntax error.
    Error,
}

/// A child of a parse tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseElement<'a> {
    /// A nested rule.
    Node(ParseNode<'a>),
    /// A matched token.
    Token(Token<'a>),
}

/// A node of the concrete parse tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNode<'a> {
    /// The rule that produced this node.
    pub rule: Rule,
    /// Source range covered by all children.
    pub span: Span,
    /// Source text covered by [`ParseNode::span`].
    pub text: &'a str,
    /// Children in source order.
    pub children: Vec<ParseElement<'a>>,
}

impl<'a> ParseNode<'a> {
    /// Returns child nodes in order.
    pub fn nodes(&self) -> impl Iterator<Item = &ParseNode<'a>> {
        self.children.iter().filter_map(|child| match child {
            ParseElement::Node(node) => Some(node),
            ParseElement::Token(_) => None,
        })
    }

    /// Returns child tokens in order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token<'a>> {
        self.children.iter().filter_map(|child| match child {
            ParseElement::Token(token) => Some(token),
            ParseElement::Node(_) => None,
        })
    }

    /// Returns the first child node.
    #[must_use]
    pub fn first_node(&self) -> Option<&ParseNode<'a>> {
        self.nodes().next()
    }

    /// Returns the first child node produced by `rule`.
    #[must_use]
    pub fn find_node(&self, rule: Rule) -> Option<&ParseNode<'a>> {
        self.nodes().find(|node| node.rule == rule)
    }

    /// Returns every child node produced by `rule`.
    pub fn find_nodes(&self, rule: Rule) -> impl Iterator<Item = &ParseNode<'a>> {
        self.nodes().filter(move |node| node.rule == rule)
    }

    /// Returns the first child token of `kind`.
    #[must_use]
    pub fn find_token(&self, kind: TokenKind) -> Option<&Token<'a>> {
        self.tokens().find(|token| token.kind == kind)
    }

    /// Returns true if a direct child token is `keyword`.
    #[must_use]
    pub fn has_keyword(&self, keyword: Keyword) -> bool {
        self.find_token(TokenKind::Keyword(keyword)).is_some()
    }

    /// Returns the first `Error` node in this subtree, depth first.
    #[must_use]
    pub fn find_error(&self) -> Option<&ParseNode<'a>> {
        if self.rule == Rule::Error {
            return Some(self);
        }
        self.nodes().find_map(ParseNode::find_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(kind: TokenKind, start: usize, text: &str) -> ParseElement<'_> {
        ParseElement::Token(Token::new(kind, Span::new(start, start + text.len()), text))
    }

    fn node<'a>(rule: Rule, children: Vec<ParseElement<'a>>) -> ParseNode<'a> {
        ParseNode {
            rule,
            span: Span::default(),
            text: "",
            children,
        }
    }

    #[test]
    fn test_accessors() {
        let name = node(
            Rule::SimpleIdentifier,
            vec![token(TokenKind::Identifier, 0, "a")],
        );
        let alias = node(
            Rule::Alias,
            vec![
                token(TokenKind::Keyword(Keyword::As), 2, "as"),
                ParseElement::Node(name),
            ],
        );
        assert!(alias.has_keyword(Keyword::As));
        assert!(!alias.has_keyword(Keyword::From));
        assert_eq!(alias.nodes().count(), 1);
        assert_eq!(alias.tokens().count(), 1);
        assert_eq!(
            alias.find_node(Rule::SimpleIdentifier).map(|n| n.rule),
            Some(Rule::SimpleIdentifier)
        );
        assert!(alias.find_node(Rule::Literal).is_none());
    }

    #[test]
    fn test_find_error_searches_subtree() {
        let inner = node(Rule::Error, vec![token(TokenKind::Error, 0, "!")]);
        let outer = node(
            Rule::SelectItem,
            vec![ParseElement::Node(node(
                Rule::BinaryExpr,
                vec![ParseElement::Node(inner)],
            ))],
        );
        assert_eq!(outer.find_error().map(|n| n.rule), Some(Rule::Error));
    }
}
