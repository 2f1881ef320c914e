//! Recursive descent grammar with Pratt expression parsing.

use std::iter::Peekable;
use std::mem;

use tracing::warn;

use super::error::SyntaxError;
use super::pratt::{infix_binding_power, prefix_binding_power};
use super::tree::{ParseElement, ParseNode, Rule};
use crate::lexer::{Keyword, Span, Token, TokenKind};

type GrammarResult<T> = Result<T, SyntaxError>;

/// Children collected for a rule that is still being parsed.
struct NodeBuilder<'a> {
    rule: Rule,
    children: Vec<ParseElement<'a>>,
}

impl<'a> NodeBuilder<'a> {
    const fn new(rule: Rule) -> Self {
        Self {
            rule,
            children: Vec::new(),
        }
    }

    fn push_node(&mut self, node: ParseNode<'a>) {
        self.children.push(ParseElement::Node(node));
    }

    fn push_token(&mut self, token: Token<'a>) {
        self.children.push(ParseElement::Token(token));
    }
}

/// SQL grammar over a (dialect-rewritten) token stream.
///
/// In strict mode the first syntax error is returned. Otherwise every error
/// is logged and collected, a missing token is treated as present and an
/// unexpected one is left in an [`Rule::Error`] node, so parsing always
/// reaches the end of input.
pub struct Grammar<'a, I: Iterator<Item = Token<'a>>> {
    source: &'a str,
    tokens: Peekable<I>,
    current: Token<'a>,
    strict: bool,
    errors: Vec<SyntaxError>,
}

impl<'a, I: Iterator<Item = Token<'a>>> Grammar<'a, I> {
    /// Creates a grammar reading `tokens` lexed from `source`.
    ///
    /// # Errors
    ///
    /// In strict mode, returns a `SyntaxError` if the first token is not
    /// recognized.
    pub fn new(source: &'a str, tokens: I, strict: bool) -> GrammarResult<Self> {
        let mut grammar = Self {
            source,
            tokens: tokens.peekable(),
            current: Token::eof(0),
            strict,
            errors: Vec::new(),
        };
        grammar.advance()?;
        Ok(grammar)
    }

    /// Returns the errors recovered from so far.
    #[must_use]
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    /// Parses `(stmt (';' stmt)*)? ';'? EOF`.
    ///
    /// # Errors
    ///
    /// In strict mode, returns the first `SyntaxError`.
    pub fn file(&mut self) -> GrammarResult<ParseNode<'a>> {
        let mut node = NodeBuilder::new(Rule::File);
        loop {
            while self.eat(&mut node, TokenKind::Semicolon)? {}
            if self.current.is_eof() {
                break;
            }
            node.push_node(self.statement()?);
            if !self.current.is_eof() && !self.check(TokenKind::Semicolon) {
                self.report(SyntaxError::mismatched(self.source, &self.current, "';'"))?;
            }
        }
        Ok(self.finish(node))
    }

    /// Parses `stmt ';'? EOF`.
    ///
    /// # Errors
    ///
    /// In strict mode, returns the first `SyntaxError`.
    pub fn single_statement(&mut self) -> GrammarResult<ParseNode<'a>> {
        let mut node = NodeBuilder::new(Rule::SingleStatement);
        node.push_node(self.statement()?);
        self.eat(&mut node, TokenKind::Semicolon)?;
        self.expect_end(&mut node)?;
        Ok(self.finish(node))
    }

    /// Parses `expr EOF`.
    ///
    /// # Errors
    ///
    /// In strict mode, returns the first `SyntaxError`.
    pub fn single_expression(&mut self) -> GrammarResult<ParseNode<'a>> {
        let mut node = NodeBuilder::new(Rule::SingleExpression);
        node.push_node(self.expression(0)?);
        self.expect_end(&mut node)?;
        Ok(self.finish(node))
    }

    // --- Statements ---

    fn statement(&mut self) -> GrammarResult<ParseNode<'a>> {
        match self.current.kind {
            TokenKind::Keyword(Keyword::Create) => self.create_statement(),
            TokenKind::Keyword(Keyword::Select | Keyword::With) => {
                let mut node = NodeBuilder::new(Rule::SelectStmt);
                node.push_node(self.query()?);
                Ok(self.finish(node))
            }
            _ => self.skip_statement("CREATE, SELECT or WITH"),
        }
    }

    fn create_statement(&mut self) -> GrammarResult<ParseNode<'a>> {
        let mut node = NodeBuilder::new(Rule::CreateSchemaStmt);
        self.bump(&mut node)?;
        match self.current.kind {
            TokenKind::Keyword(Keyword::Schema | Keyword::Database) => {
                self.bump(&mut node)?;
                self.create_schema_body(&mut node)?;
            }
            TokenKind::Keyword(Keyword::Table) => {
                node.rule = Rule::CreateTableStmt;
                self.bump(&mut node)?;
                self.create_table_body(&mut node)?;
            }
            _ => {
                node.rule = Rule::Error;
                self.report(SyntaxError::mismatched(
                    self.source,
                    &self.current,
                    "SCHEMA, DATABASE or TABLE",
                ))?;
                self.skip_to_semicolon(&mut node)?;
            }
        }
        Ok(self.finish(node))
    }

    fn create_schema_body(&mut self, node: &mut NodeBuilder<'a>) -> GrammarResult<()> {
        self.if_not_exists(node)?;
        let authorization_only = self.check_keyword(Keyword::Authorization)
            && self.tokens.peek().is_some_and(Token::is_identifier_like);
        if !authorization_only {
            node.push_node(self.simple_identifier()?);
        }
        if self.check_keyword(Keyword::Authorization) {
            let mut clause = NodeBuilder::new(Rule::AuthorizationClause);
            self.bump(&mut clause)?;
            clause.push_node(self.simple_identifier()?);
            node.push_node(self.finish(clause));
        }
        Ok(())
    }

    fn create_table_body(&mut self, node: &mut NodeBuilder<'a>) -> GrammarResult<()> {
        self.if_not_exists(node)?;
        node.push_node(self.qualified_identifier()?);
        self.expect(node, TokenKind::LeftParen, "'('")?;
        loop {
            node.push_node(self.column_spec()?);
            if !self.eat(node, TokenKind::Comma)? {
                break;
            }
        }
        self.expect(node, TokenKind::RightParen, "')'")
    }

    fn if_not_exists(&mut self, node: &mut NodeBuilder<'a>) -> GrammarResult<()> {
        if self.check_keyword(Keyword::If)
            && self.peek_kind() == TokenKind::Keyword(Keyword::Not)
        {
            let mut clause = NodeBuilder::new(Rule::IfNotExists);
            self.bump(&mut clause)?;
            self.bump(&mut clause)?;
            self.expect_keyword(&mut clause, Keyword::Exists)?;
            node.push_node(self.finish(clause));
        }
        Ok(())
    }

    fn column_spec(&mut self) -> GrammarResult<ParseNode<'a>> {
        let mut node = NodeBuilder::new(Rule::ColumnSpec);
        node.push_node(self.simple_identifier()?);
        node.push_node(self.data_type()?);
        while let Some(constraint) = self.column_constraint()? {
            node.push_node(constraint);
        }
        Ok(self.finish(node))
    }

    fn column_constraint(&mut self) -> GrammarResult<Option<ParseNode<'a>>> {
        let Some(keyword) = self.current.as_keyword() else {
            return Ok(None);
        };
        let mut node = NodeBuilder::new(Rule::ColumnConstraint);
        match keyword {
            Keyword::Constraint => {
                self.bump(&mut node)?;
                node.push_node(self.simple_identifier()?);
            }
            Keyword::Not => {
                self.bump(&mut node)?;
                self.expect_keyword(&mut node, Keyword::Null)?;
            }
            Keyword::Null | Keyword::Unique => self.bump(&mut node)?,
            Keyword::Primary => {
                self.bump(&mut node)?;
                self.expect_keyword(&mut node, Keyword::Key)?;
            }
            Keyword::Default => {
                self.bump(&mut node)?;
                node.push_node(self.expression(0)?);
            }
            Keyword::References => {
                self.bump(&mut node)?;
                node.push_node(self.qualified_identifier()?);
                if self.eat(&mut node, TokenKind::LeftParen)? {
                    self.identifier_list(&mut node)?;
                    self.expect(&mut node, TokenKind::RightParen, "')'")?;
                }
            }
            Keyword::Check => {
                self.bump(&mut node)?;
                self.expect(&mut node, TokenKind::LeftParen, "'('")?;
                node.push_node(self.expression(0)?);
                self.expect(&mut node, TokenKind::RightParen, "')'")?;
            }
            _ => return Ok(None),
        }
        Ok(Some(self.finish(node)))
    }

    /// One or more type words with an optional `(n, ...)` suffix.
    fn data_type(&mut self) -> GrammarResult<ParseNode<'a>> {
        if !self.current.is_identifier_like() {
            return self.unexpected("data type");
        }
        let mut node = NodeBuilder::new(Rule::DataType);
        while self.current.is_identifier_like() {
            self.bump(&mut node)?;
        }
        if self.eat(&mut node, TokenKind::LeftParen)? {
            loop {
                self.expect(&mut node, TokenKind::Integer, "integer")?;
                if !self.eat(&mut node, TokenKind::Comma)? {
                    break;
                }
            }
            self.expect(&mut node, TokenKind::RightParen, "')'")?;
        }
        Ok(self.finish(node))
    }

    // --- Queries ---

    fn query(&mut self) -> GrammarResult<ParseNode<'a>> {
        let mut node = NodeBuilder::new(Rule::Query);
        if self.check_keyword(Keyword::With) {
            node.push_node(self.with_clause()?);
        }
        node.push_node(self.select_core()?);
        while self.eat_keyword(&mut node, Keyword::Union)? {
            self.eat_keyword(&mut node, Keyword::All)?;
            node.push_node(self.select_core()?);
        }
        Ok(self.finish(node))
    }

    fn with_clause(&mut self) -> GrammarResult<ParseNode<'a>> {
        let mut node = NodeBuilder::new(Rule::WithClause);
        self.bump(&mut node)?;
        loop {
            let mut cte = NodeBuilder::new(Rule::CommonTableExpr);
            cte.push_node(self.simple_identifier()?);
            self.expect_keyword(&mut cte, Keyword::As)?;
            self.expect(&mut cte, TokenKind::LeftParen, "'('")?;
            cte.push_node(self.query()?);
            self.expect(&mut cte, TokenKind::RightParen, "')'")?;
            node.push_node(self.finish(cte));
            if !self.eat(&mut node, TokenKind::Comma)? {
                break;
            }
        }
        Ok(self.finish(node))
    }

    fn select_core(&mut self) -> GrammarResult<ParseNode<'a>> {
        let mut node = NodeBuilder::new(Rule::SelectCore);
        self.expect_keyword(&mut node, Keyword::Select)?;
        if !self.eat_keyword(&mut node, Keyword::Distinct)? {
            self.eat_keyword(&mut node, Keyword::All)?;
        }

        loop {
            let mut item = NodeBuilder::new(Rule::SelectItem);
            item.push_node(self.expression(0)?);
            if let Some(alias) = self.alias()? {
                item.push_node(alias);
            }
            node.push_node(self.finish(item));
            if !self.eat(&mut node, TokenKind::Comma)? {
                break;
            }
        }

        if self.check_keyword(Keyword::From) {
            let mut clause = NodeBuilder::new(Rule::FromClause);
            self.bump(&mut clause)?;
            loop {
                clause.push_node(self.table_expr()?);
                if !self.eat(&mut clause, TokenKind::Comma)? {
                    break;
                }
            }
            node.push_node(self.finish(clause));
        }

        if self.check_keyword(Keyword::Where) {
            node.push_node(self.keyword_clause(Rule::WhereClause)?);
        }

        if self.check_keyword(Keyword::Group) {
            let mut clause = NodeBuilder::new(Rule::GroupByClause);
            self.bump(&mut clause)?;
            self.expect_keyword(&mut clause, Keyword::By)?;
            self.expression_list(&mut clause)?;
            node.push_node(self.finish(clause));
        }

        if self.check_keyword(Keyword::Having) {
            node.push_node(self.keyword_clause(Rule::HavingClause)?);
        }

        if self.check_keyword(Keyword::Order) {
            let mut clause = NodeBuilder::new(Rule::OrderByClause);
            self.bump(&mut clause)?;
            self.expect_keyword(&mut clause, Keyword::By)?;
            loop {
                let mut item = NodeBuilder::new(Rule::OrderItem);
                item.push_node(self.expression(0)?);
                if !self.eat_keyword(&mut item, Keyword::Asc)? {
                    self.eat_keyword(&mut item, Keyword::Desc)?;
                }
                clause.push_node(self.finish(item));
                if !self.eat(&mut clause, TokenKind::Comma)? {
                    break;
                }
            }
            node.push_node(self.finish(clause));
        }

        if self.check_keyword(Keyword::Limit) {
            let mut clause = NodeBuilder::new(Rule::LimitClause);
            self.bump(&mut clause)?;
            self.expect(&mut clause, TokenKind::Integer, "integer")?;
            node.push_node(self.finish(clause));
        }

        Ok(self.finish(node))
    }

    /// A keyword followed by one expression (`WHERE e`, `HAVING e`).
    fn keyword_clause(&mut self, rule: Rule) -> GrammarResult<ParseNode<'a>> {
        let mut clause = NodeBuilder::new(rule);
        self.bump(&mut clause)?;
        clause.push_node(self.expression(0)?);
        Ok(self.finish(clause))
    }

    /// `[AS] name`, where the name must be a plain identifier when AS is absent.
    fn alias(&mut self) -> GrammarResult<Option<ParseNode<'a>>> {
        if !self.check_keyword(Keyword::As) && !self.check(TokenKind::Identifier) {
            return Ok(None);
        }
        let mut node = NodeBuilder::new(Rule::Alias);
        self.eat_keyword(&mut node, Keyword::As)?;
        node.push_node(self.simple_identifier()?);
        Ok(Some(self.finish(node)))
    }

    fn table_expr(&mut self) -> GrammarResult<ParseNode<'a>> {
        let mut node = NodeBuilder::new(Rule::TableExpr);
        node.push_node(self.table_primary()?);
        while matches!(
            self.current.as_keyword(),
            Some(
                Keyword::Join
                    | Keyword::Inner
                    | Keyword::Left
                    | Keyword::Right
                    | Keyword::Full
                    | Keyword::Cross
            )
        ) {
            let operator = self.join_operator()?;
            let cross = operator.has_keyword(Keyword::Cross);
            node.push_node(operator);
            node.push_node(self.table_primary()?);
            if !cross && self.check_keyword(Keyword::On) {
                node.push_node(self.keyword_clause(Rule::JoinCondition)?);
            }
        }
        Ok(self.finish(node))
    }

    fn join_operator(&mut self) -> GrammarResult<ParseNode<'a>> {
        let mut node = NodeBuilder::new(Rule::JoinOperator);
        match self.current.as_keyword() {
            Some(Keyword::Inner | Keyword::Cross) => self.bump(&mut node)?,
            Some(Keyword::Left | Keyword::Right | Keyword::Full) => {
                self.bump(&mut node)?;
                self.eat_keyword(&mut node, Keyword::Outer)?;
            }
            _ => {}
        }
        self.expect_keyword(&mut node, Keyword::Join)?;
        Ok(self.finish(node))
    }

    fn table_primary(&mut self) -> GrammarResult<ParseNode<'a>> {
        if self.check(TokenKind::LeftParen) {
            let next = self.peek_kind();
            if matches!(next, TokenKind::Keyword(Keyword::Select | Keyword::With)) {
                let mut node = NodeBuilder::new(Rule::SubqueryRef);
                self.bump(&mut node)?;
                node.push_node(self.query()?);
                self.expect(&mut node, TokenKind::RightParen, "')'")?;
                if let Some(alias) = self.alias()? {
                    node.push_node(alias);
                }
                return Ok(self.finish(node));
            }
            let mut node = NodeBuilder::new(Rule::ParenTableExpr);
            self.bump(&mut node)?;
            node.push_node(self.table_expr()?);
            self.expect(&mut node, TokenKind::RightParen, "')'")?;
            return Ok(self.finish(node));
        }

        if !self.current.is_identifier_like() {
            return self.unexpected("table name or subquery");
        }
        let name = self.qualified_identifier()?;

        if self.check(TokenKind::LeftParen) {
            let mut node = NodeBuilder::new(Rule::TableFunctionRef);
            node.push_node(self.function_call(name)?);
            let mut alias = NodeBuilder::new(Rule::Alias);
            self.eat_keyword(&mut alias, Keyword::As)?;
            alias.push_node(self.simple_identifier()?);
            node.push_node(self.finish(alias));
            if self.check(TokenKind::LeftParen) {
                let mut columns = NodeBuilder::new(Rule::ColumnAliasList);
                self.bump(&mut columns)?;
                self.identifier_list(&mut columns)?;
                self.expect(&mut columns, TokenKind::RightParen, "')'")?;
                node.push_node(self.finish(columns));
            }
            return Ok(self.finish(node));
        }

        let mut node = NodeBuilder::new(Rule::TableRef);
        node.push_node(name);
        if let Some(alias) = self.alias()? {
            node.push_node(alias);
        }
        Ok(self.finish(node))
    }

    // --- Names ---

    fn simple_identifier(&mut self) -> GrammarResult<ParseNode<'a>> {
        if !self.current.is_identifier_like() {
            return self.unexpected("identifier");
        }
        let mut node = NodeBuilder::new(Rule::SimpleIdentifier);
        self.bump(&mut node)?;
        Ok(self.finish(node))
    }

    fn qualified_identifier(&mut self) -> GrammarResult<ParseNode<'a>> {
        let mut node = NodeBuilder::new(Rule::QualifiedIdentifier);
        node.push_node(self.simple_identifier()?);
        while self.eat(&mut node, TokenKind::Dot)? {
            node.push_node(self.simple_identifier()?);
        }
        Ok(self.finish(node))
    }

    fn identifier_list(&mut self, node: &mut NodeBuilder<'a>) -> GrammarResult<()> {
        loop {
            node.push_node(self.simple_identifier()?);
            if !self.eat(node, TokenKind::Comma)? {
                return Ok(());
            }
        }
    }

    // --- Expressions ---

    /// Parses an expression using Pratt parsing.
    fn expression(&mut self, min_bp: u8) -> GrammarResult<ParseNode<'a>> {
        let mut lhs = self.prefix()?;

        loop {
            let Some((l_bp, r_bp)) = infix_binding_power(self.current.kind) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }
            if self.check_keyword(Keyword::Not)
                && !matches!(
                    self.peek_kind(),
                    TokenKind::Keyword(Keyword::In | Keyword::Like | Keyword::Between)
                )
            {
                break;
            }

            let mut node = NodeBuilder::new(Rule::BinaryExpr);
            node.push_node(lhs);
            self.eat_keyword(&mut node, Keyword::Not)?;
            match self.current.kind {
                TokenKind::Keyword(Keyword::In) => {
                    node.rule = Rule::InExpr;
                    self.bump(&mut node)?;
                    self.expect(&mut node, TokenKind::LeftParen, "'('")?;
                    if self.starts_query() {
                        node.push_node(self.query()?);
                    } else {
                        self.expression_list(&mut node)?;
                    }
                    self.expect(&mut node, TokenKind::RightParen, "')'")?;
                }
                TokenKind::Keyword(Keyword::Between) => {
                    node.rule = Rule::BetweenExpr;
                    self.bump(&mut node)?;
                    node.push_node(self.expression(r_bp)?);
                    self.expect_keyword(&mut node, Keyword::And)?;
                    node.push_node(self.expression(r_bp)?);
                }
                TokenKind::Keyword(Keyword::Is) => {
                    self.bump(&mut node)?;
                    self.eat_keyword(&mut node, Keyword::Not)?;
                    node.push_node(self.expression(r_bp)?);
                }
                _ => {
                    self.bump(&mut node)?;
                    node.push_node(self.expression(r_bp)?);
                }
            }
            lhs = self.finish(node);
        }

        Ok(lhs)
    }

    fn prefix(&mut self) -> GrammarResult<ParseNode<'a>> {
        let Some(bp) = prefix_binding_power(self.current.kind) else {
            return self.primary();
        };
        let mut node = NodeBuilder::new(Rule::UnaryExpr);
        self.bump(&mut node)?;
        node.push_node(self.expression(bp)?);
        Ok(self.finish(node))
    }

    fn primary(&mut self) -> GrammarResult<ParseNode<'a>> {
        let next = self.peek_kind();
        match self.current.kind {
            TokenKind::Integer
            | TokenKind::Float
            | TokenKind::String
            | TokenKind::Keyword(Keyword::Null | Keyword::True | Keyword::False) => {
                let mut node = NodeBuilder::new(Rule::Literal);
                self.bump(&mut node)?;
                Ok(self.finish(node))
            }
            TokenKind::Keyword(Keyword::Date) if next == TokenKind::String => {
                let mut node = NodeBuilder::new(Rule::Literal);
                self.bump(&mut node)?;
                self.bump(&mut node)?;
                Ok(self.finish(node))
            }
            TokenKind::Keyword(Keyword::Interval) if next == TokenKind::String => {
                let mut node = NodeBuilder::new(Rule::Literal);
                self.bump(&mut node)?;
                self.bump(&mut node)?;
                if self.check(TokenKind::Identifier) && is_interval_unit(self.current.text) {
                    self.bump(&mut node)?;
                }
                Ok(self.finish(node))
            }
            TokenKind::Keyword(Keyword::Array) if next == TokenKind::LeftBracket => {
                let mut node = NodeBuilder::new(Rule::ArrayConstructor);
                self.bump(&mut node)?;
                self.bump(&mut node)?;
                if !self.check(TokenKind::RightBracket) {
                    self.expression_list(&mut node)?;
                }
                self.expect(&mut node, TokenKind::RightBracket, "']'")?;
                Ok(self.finish(node))
            }
            TokenKind::Keyword(Keyword::Case) => self.case_expression(),
            TokenKind::Keyword(Keyword::Cast | Keyword::TryCast) => {
                let mut node = NodeBuilder::new(Rule::Cast);
                self.bump(&mut node)?;
                self.expect(&mut node, TokenKind::LeftParen, "'('")?;
                node.push_node(self.expression(0)?);
                self.expect_keyword(&mut node, Keyword::As)?;
                node.push_node(self.data_type()?);
                self.expect(&mut node, TokenKind::RightParen, "')'")?;
                Ok(self.finish(node))
            }
            TokenKind::LeftParen => {
                let scalar = matches!(next, TokenKind::Keyword(Keyword::Select | Keyword::With));
                let rule = if scalar { Rule::ScalarSelect } else { Rule::Paren };
                let mut node = NodeBuilder::new(rule);
                self.bump(&mut node)?;
                let inner = if scalar {
                    self.query()?
                } else {
                    self.expression(0)?
                };
                node.push_node(inner);
                self.expect(&mut node, TokenKind::RightParen, "')'")?;
                Ok(self.finish(node))
            }
            TokenKind::Star => {
                let mut node = NodeBuilder::new(Rule::Wildcard);
                self.bump(&mut node)?;
                Ok(self.finish(node))
            }
            _ if self.current.is_identifier_like() => self.name_expression(),
            _ => self.unexpected("expression"),
        }
    }

    /// A column reference, `qualifier.*`, or a function call.
    fn name_expression(&mut self) -> GrammarResult<ParseNode<'a>> {
        let mut name = NodeBuilder::new(Rule::QualifiedIdentifier);
        name.push_node(self.simple_identifier()?);
        while self.check(TokenKind::Dot) {
            if self.peek_kind() == TokenKind::Star {
                let mut wildcard = NodeBuilder::new(Rule::Wildcard);
                wildcard.push_node(self.finish(name));
                self.bump(&mut wildcard)?;
                self.bump(&mut wildcard)?;
                return Ok(self.finish(wildcard));
            }
            self.bump(&mut name)?;
            name.push_node(self.simple_identifier()?);
        }
        let name = self.finish(name);

        if self.check(TokenKind::LeftParen) {
            return self.function_call(name);
        }
        let mut node = NodeBuilder::new(Rule::ColumnRef);
        node.push_node(name);
        Ok(self.finish(node))
    }

    fn function_call(&mut self, name: ParseNode<'a>) -> GrammarResult<ParseNode<'a>> {
        let mut node = NodeBuilder::new(Rule::FunctionCall);
        node.push_node(name);
        self.bump(&mut node)?;
        self.eat_keyword(&mut node, Keyword::Distinct)?;
        if !self.check(TokenKind::RightParen) {
            self.expression_list(&mut node)?;
        }
        self.expect(&mut node, TokenKind::RightParen, "')'")?;
        Ok(self.finish(node))
    }

    fn case_expression(&mut self) -> GrammarResult<ParseNode<'a>> {
        let mut node = NodeBuilder::new(Rule::Case);
        self.bump(&mut node)?;
        if !self.check_keyword(Keyword::When) {
            node.push_node(self.expression(0)?);
        }
        if !self.check_keyword(Keyword::When) {
            self.report(SyntaxError::mismatched(self.source, &self.current, "'WHEN'"))?;
        }
        while self.check_keyword(Keyword::When) {
            let mut branch = NodeBuilder::new(Rule::CaseWhen);
            self.bump(&mut branch)?;
            branch.push_node(self.expression(0)?);
            self.expect_keyword(&mut branch, Keyword::Then)?;
            branch.push_node(self.expression(0)?);
            node.push_node(self.finish(branch));
        }
        if self.check_keyword(Keyword::Else) {
            node.push_node(self.keyword_clause(Rule::CaseElse)?);
        }
        self.expect_keyword(&mut node, Keyword::End)?;
        Ok(self.finish(node))
    }

    fn expression_list(&mut self, node: &mut NodeBuilder<'a>) -> GrammarResult<()> {
        loop {
            node.push_node(self.expression(0)?);
            if !self.eat(node, TokenKind::Comma)? {
                return Ok(());
            }
        }
    }

    // --- Helper methods ---

    fn next_token(&mut self) -> Token<'a> {
        let end = self.source.len();
        self.tokens.next().unwrap_or_else(|| Token::eof(end))
    }

    /// Moves to the next recognized token and returns the previous one.
    fn advance(&mut self) -> GrammarResult<Token<'a>> {
        let mut next = self.next_token();
        while next.kind == TokenKind::Error {
            self.report(SyntaxError::unrecognized(self.source, &next))?;
            next = self.next_token();
        }
        Ok(mem::replace(&mut self.current, next))
    }

    fn peek_kind(&mut self) -> TokenKind {
        self.tokens.peek().map_or(TokenKind::Eof, |token| token.kind)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.check(TokenKind::Keyword(keyword))
    }

    fn starts_query(&self) -> bool {
        matches!(
            self.current.kind,
            TokenKind::Keyword(Keyword::Select | Keyword::With)
        )
    }

    /// Moves the current token into `node`.
    fn bump(&mut self, node: &mut NodeBuilder<'a>) -> GrammarResult<()> {
        let token = self.advance()?;
        node.push_token(token);
        Ok(())
    }

    fn eat(&mut self, node: &mut NodeBuilder<'a>, kind: TokenKind) -> GrammarResult<bool> {
        if self.check(kind) {
            self.bump(node)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn eat_keyword(&mut self, node: &mut NodeBuilder<'a>, keyword: Keyword) -> GrammarResult<bool> {
        self.eat(node, TokenKind::Keyword(keyword))
    }

    fn expect(
        &mut self,
        node: &mut NodeBuilder<'a>,
        kind: TokenKind,
        expected: &str,
    ) -> GrammarResult<()> {
        if self.eat(node, kind)? {
            return Ok(());
        }
        self.report(SyntaxError::missing(self.source, &self.current, expected))
    }

    fn expect_keyword(
        &mut self,
        node: &mut NodeBuilder<'a>,
        keyword: Keyword,
    ) -> GrammarResult<()> {
        if self.eat_keyword(node, keyword)? {
            return Ok(());
        }
        let expected = format!("'{}'", keyword.as_str());
        self.report(SyntaxError::missing(self.source, &self.current, &expected))
    }

    /// Reports anything left before end of input and wraps it in an error node.
    fn expect_end(&mut self, node: &mut NodeBuilder<'a>) -> GrammarResult<()> {
        if self.current.is_eof() {
            return Ok(());
        }
        self.report(SyntaxError::extraneous(self.source, &self.current))?;
        let mut rest = NodeBuilder::new(Rule::Error);
        while !self.current.is_eof() {
            self.bump(&mut rest)?;
        }
        node.push_node(self.finish(rest));
        Ok(())
    }

    /// Reports the current token and stands in an empty error node for the
    /// rule that was expected. Nothing is consumed.
    fn unexpected(&mut self, expected: &str) -> GrammarResult<ParseNode<'a>> {
        self.report(SyntaxError::mismatched(self.source, &self.current, expected))?;
        Ok(self.finish(NodeBuilder::new(Rule::Error)))
    }

    /// Reports the current token and skips to the next `;`.
    fn skip_statement(&mut self, expected: &str) -> GrammarResult<ParseNode<'a>> {
        self.report(SyntaxError::mismatched(self.source, &self.current, expected))?;
        let mut node = NodeBuilder::new(Rule::Error);
        self.skip_to_semicolon(&mut node)?;
        Ok(self.finish(node))
    }

    fn skip_to_semicolon(&mut self, node: &mut NodeBuilder<'a>) -> GrammarResult<()> {
        while !self.current.is_eof() && !self.check(TokenKind::Semicolon) {
            self.bump(node)?;
        }
        Ok(())
    }

    fn report(&mut self, error: SyntaxError) -> GrammarResult<()> {
        if self.strict {
            return Err(error);
        }
        warn!(line = error.line, column = error.column, "{}", error.message);
        self.errors.push(error);
        Ok(())
    }

    fn finish(&self, node: NodeBuilder<'a>) -> ParseNode<'a> {
        let span = node
            .children
            .iter()
            .map(|child| match child {
                ParseElement::Node(node) => node.span,
                ParseElement::Token(token) => token.span,
            })
            .filter(|span| !span.is_empty())
            .reduce(Span::merge)
            .unwrap_or_else(|| Span::at(self.current.span.start));
        ParseNode {
            rule: node.rule,
            span,
            text: span.slice(self.source),
            children: node.children,
        }
    }
}

fn is_interval_unit(text: &str) -> bool {
    const UNITS: [&str; 7] = ["YEAR", "MONTH", "WEEK", "DAY", "HOUR", "MINUTE", "SECOND"];
    let upper = text.to_ascii_uppercase();
    let singular = upper.strip_suffix('S').unwrap_or(&upper);
    UNITS.contains(&singular)
}
