//! Parse tree to AST construction.
//!
//! The grammar keeps the source as written; this is where it gets
//! normalized. Names are lowercased and unquoted, operators get their
//! canonical names, parentheses disappear, FROM lists fold into joins and
//! WITH bindings move onto the query they scope.

use super::error::BuildError;
use crate::ast::{
    Case, Cast, ColumnDefinition, CreateSchema, CreateTable, DataSource, Expression, File,
    FromClause, FunctionCall, Identifier, Join, JoinType, Literal, LiteralValue, NamedExpression,
    OrderExpression, Reference, ScalarSelect, SelectClause, SelectOrUnion, SelectStmt,
    SourcePosition, Statement, SubQuery, Table, TableFunction, Union,
};
use crate::grammar::{ParseElement, ParseNode, Rule};
use crate::lexer::{Keyword, QuoteStyle, Token, TokenKind};

type BuildResult<T> = Result<T, BuildError>;

/// Builds a [`File`] from a tree produced by [`crate::grammar::Grammar::file`].
///
/// # Errors
///
/// Returns a `BuildError` if the tree contains recovered syntax errors or
/// constructs the AST cannot represent.
pub fn build_file(tree: &ParseNode<'_>) -> BuildResult<File> {
    reject_errors(tree)?;
    let statements = tree
        .nodes()
        .map(statement)
        .collect::<BuildResult<Vec<_>>>()?;
    Ok(File {
        statements,
        position: position(tree),
    })
}

/// Builds a [`Statement`] from a tree produced by
/// [`crate::grammar::Grammar::single_statement`].
///
/// # Errors
///
/// Returns a `BuildError` if the tree contains recovered syntax errors or
/// constructs the AST cannot represent.
pub fn build_statement(tree: &ParseNode<'_>) -> BuildResult<Statement> {
    reject_errors(tree)?;
    statement(first_node(tree)?)
}

/// Builds an [`Expression`] from a tree produced by
/// [`crate::grammar::Grammar::single_expression`].
///
/// # Errors
///
/// Returns a `BuildError` if the tree contains recovered syntax errors or
/// constructs the AST cannot represent.
pub fn build_expression(tree: &ParseNode<'_>) -> BuildResult<Expression> {
    reject_errors(tree)?;
    expression(first_node(tree)?)
}

fn reject_errors(tree: &ParseNode<'_>) -> BuildResult<()> {
    match tree.find_error() {
        Some(error) => Err(unsupported(error)),
        None => Ok(()),
    }
}

// --- Statements ---

fn statement(node: &ParseNode<'_>) -> BuildResult<Statement> {
    match node.rule {
        Rule::CreateSchemaStmt => {
            let name = match node.find_node(Rule::SimpleIdentifier) {
                Some(name) => name,
                None => child(child(node, Rule::AuthorizationClause)?, Rule::SimpleIdentifier)?,
            };
            Ok(Statement::CreateSchema(CreateSchema {
                name: simple_identifier(name)?,
                if_not_exists: node.find_node(Rule::IfNotExists).is_some(),
                position: position(node),
            }))
        }
        Rule::CreateTableStmt => {
            let columns = node
                .find_nodes(Rule::ColumnSpec)
                .map(column_definition)
                .collect::<BuildResult<Vec<_>>>()?;
            Ok(Statement::CreateTable(CreateTable {
                name: qualified_identifier(child(node, Rule::QualifiedIdentifier)?)?,
                columns,
                position: position(node),
            }))
        }
        Rule::SelectStmt => Ok(Statement::Select(SelectStmt {
            query: query(first_node(node)?)?,
            position: position(node),
        })),
        _ => Err(unsupported(node)),
    }
}

fn column_definition(node: &ParseNode<'_>) -> BuildResult<ColumnDefinition> {
    Ok(ColumnDefinition {
        name: simple_identifier(child(node, Rule::SimpleIdentifier)?)?,
        data_type: data_type(child(node, Rule::DataType)?),
        position: position(node),
    })
}

/// Type words separated by single spaces, arguments glued to the name:
/// `varchar ( 40 )` becomes `VARCHAR(40)`.
fn data_type(node: &ParseNode<'_>) -> String {
    let mut out = String::new();
    let mut previous_word = false;
    for token in node.tokens() {
        let word = token.is_identifier_like();
        if word && previous_word {
            out.push(' ');
        }
        out.push_str(token.text);
        if token.kind == TokenKind::Comma {
            out.push(' ');
        }
        previous_word = word;
    }
    out.to_uppercase()
}

// --- Queries ---

fn query(node: &ParseNode<'_>) -> BuildResult<SelectOrUnion> {
    if node.rule != Rule::Query {
        return Err(unsupported(node));
    }
    let mut ctes = Vec::new();
    let mut result: Option<SelectOrUnion> = None;
    let mut all = false;

    for element in &node.children {
        let part = match element {
            ParseElement::Token(token) => {
                all |= token.kind == TokenKind::Keyword(Keyword::All);
                continue;
            }
            ParseElement::Node(part) => part,
        };
        match part.rule {
            Rule::WithClause => ctes = with_clause(part)?,
            Rule::SelectCore => {
                let bottom = select_core(part)?;
                result = Some(match result {
                    None => SelectOrUnion::Select(bottom),
                    Some(top) => {
                        let position = top.position().union(bottom.position);
                        SelectOrUnion::Union(Union {
                            top: Box::new(top),
                            bottom,
                            all: std::mem::take(&mut all),
                            position,
                        })
                    }
                });
            }
            _ => return Err(unsupported(part)),
        }
    }

    let mut query = result.ok_or_else(|| unsupported(node))?;
    query.first_select_mut().ctes = ctes;
    Ok(query)
}

fn with_clause(node: &ParseNode<'_>) -> BuildResult<Vec<SubQuery>> {
    node.find_nodes(Rule::CommonTableExpr)
        .map(|cte| {
            let alias = simple_identifier(child(cte, Rule::SimpleIdentifier)?)?;
            Ok(SubQuery {
                query: Box::new(query(child(cte, Rule::Query)?)?),
                alias: Some(alias.name),
                position: position(cte),
            })
        })
        .collect()
}

fn select_core(node: &ParseNode<'_>) -> BuildResult<SelectClause> {
    let mut select = SelectClause {
        distinct: node.has_keyword(Keyword::Distinct),
        position: position(node),
        ..SelectClause::default()
    };

    for clause in node.nodes() {
        match clause.rule {
            Rule::SelectItem => select.items.push(named_expression(clause)?),
            Rule::FromClause => select.from = Some(from_clause(clause)?),
            Rule::WhereClause => select.predicate = Some(expression(first_node(clause)?)?),
            Rule::GroupByClause => {
                select.group_by = clause
                    .nodes()
                    .map(expression)
                    .collect::<BuildResult<Vec<_>>>()?;
            }
            Rule::HavingClause => select.having = Some(expression(first_node(clause)?)?),
            Rule::OrderByClause => {
                select.order_by = clause
                    .find_nodes(Rule::OrderItem)
                    .map(order_expression)
                    .collect::<BuildResult<Vec<_>>>()?;
            }
            Rule::LimitClause => {
                let token = clause
                    .find_token(TokenKind::Integer)
                    .ok_or_else(|| unsupported(clause))?;
                select.limit = Some(integer(token)?);
            }
            _ => return Err(unsupported(clause)),
        }
    }
    Ok(select)
}

fn named_expression(node: &ParseNode<'_>) -> BuildResult<NamedExpression> {
    Ok(NamedExpression {
        name: alias(node)?,
        expression: expression(first_node(node)?)?,
        position: position(node),
    })
}

fn order_expression(node: &ParseNode<'_>) -> BuildResult<OrderExpression> {
    Ok(OrderExpression {
        expression: expression(first_node(node)?)?,
        ascending: !node.has_keyword(Keyword::Desc),
        position: position(node),
    })
}

/// Reads the optional `Alias` child of `node`.
fn alias(node: &ParseNode<'_>) -> BuildResult<Option<String>> {
    node.find_node(Rule::Alias)
        .map(|clause| Ok(simple_identifier(child(clause, Rule::SimpleIdentifier)?)?.name))
        .transpose()
}

fn from_clause(node: &ParseNode<'_>) -> BuildResult<FromClause> {
    let source = node
        .find_nodes(Rule::TableExpr)
        .map(table_expr)
        .reduce(|left, right| Ok(join(left?, right?, JoinType::Cross, None)))
        .ok_or_else(|| unsupported(node))??;
    Ok(FromClause {
        source,
        position: position(node),
    })
}

fn table_expr(node: &ParseNode<'_>) -> BuildResult<DataSource> {
    let mut nodes = node.nodes();
    let mut source = table_primary(nodes.next().ok_or_else(|| unsupported(node))?)?;
    let mut nodes = nodes.peekable();
    while let Some(operator) = nodes.next() {
        let join_type = join_type(operator)?;
        let right = table_primary(nodes.next().ok_or_else(|| unsupported(node))?)?;
        let on = nodes
            .next_if(|condition| condition.rule == Rule::JoinCondition)
            .map(|condition| expression(first_node(condition)?))
            .transpose()?;
        source = join(source, right, join_type, on);
    }
    Ok(source)
}

fn join_type(node: &ParseNode<'_>) -> BuildResult<JoinType> {
    if node.rule != Rule::JoinOperator {
        return Err(unsupported(node));
    }
    let keyword = node.tokens().next().and_then(Token::as_keyword);
    Ok(match keyword {
        Some(Keyword::Cross) => JoinType::Cross,
        Some(Keyword::Left) => JoinType::LeftOuter,
        Some(Keyword::Right) => JoinType::RightOuter,
        Some(Keyword::Full) => JoinType::FullOuter,
        _ => JoinType::Inner,
    })
}

fn join(
    left: DataSource,
    right: DataSource,
    join_type: JoinType,
    on: Option<Expression>,
) -> DataSource {
    let mut position = left.position().union(right.position());
    if let Some(on) = &on {
        position = position.union(on.position());
    }
    DataSource::Join(Join {
        left: Box::new(left),
        right: Box::new(right),
        join_type,
        on,
        position,
    })
}

fn table_primary(node: &ParseNode<'_>) -> BuildResult<DataSource> {
    match node.rule {
        Rule::TableRef => Ok(DataSource::Table(Table {
            identifier: qualified_identifier(child(node, Rule::QualifiedIdentifier)?)?,
            alias: alias(node)?,
            position: position(node),
        })),
        Rule::SubqueryRef => Ok(DataSource::SubQuery(SubQuery {
            query: Box::new(query(child(node, Rule::Query)?)?),
            alias: alias(node)?,
            position: position(node),
        })),
        Rule::TableFunctionRef => {
            let column_aliases = match node.find_node(Rule::ColumnAliasList) {
                Some(list) => list
                    .find_nodes(Rule::SimpleIdentifier)
                    .map(|name| simple_identifier(name).map(|ident| ident.name))
                    .collect::<BuildResult<Vec<_>>>()?,
                None => Vec::new(),
            };
            Ok(DataSource::TableFunction(TableFunction {
                function: function_call(child(node, Rule::FunctionCall)?)?,
                alias: alias(node)?.ok_or_else(|| unsupported(node))?,
                column_aliases,
                position: position(node),
            }))
        }
        Rule::ParenTableExpr => table_expr(child(node, Rule::TableExpr)?),
        _ => Err(unsupported(node)),
    }
}

// --- Names ---

fn simple_identifier(node: &ParseNode<'_>) -> BuildResult<Identifier> {
    let token = node.tokens().next().ok_or_else(|| unsupported(node))?;
    Ok(Identifier::new(identifier_text(token)).at(position(node)))
}

/// `a.b.c` is the name `c` qualified by `a` and `b`.
fn qualified_identifier(node: &ParseNode<'_>) -> BuildResult<Identifier> {
    let mut parts = node
        .find_nodes(Rule::SimpleIdentifier)
        .map(simple_identifier)
        .collect::<BuildResult<Vec<_>>>()?;
    let last = parts.pop().ok_or_else(|| unsupported(node))?;
    let first = parts.first().map_or(last.position, |first| first.position);
    Ok(Identifier {
        qualifier: parts.into_iter().map(|part| part.name).collect(),
        position: first.union(last.position),
        name: last.name,
    })
}

fn identifier_text(token: &Token<'_>) -> String {
    let text = match token.quote {
        Some(style) => unquote(token.text, style),
        None => token.text.to_owned(),
    };
    text.to_lowercase()
}

/// Strips the delimiters of quoted text and decodes its escapes.
///
/// A doubled delimiter stands for one delimiter, as do `\` + delimiter;
/// `\\` is one backslash. Any other backslash is kept as written.
fn unquote(text: &str, style: QuoteStyle) -> String {
    let quote = style.delimiter();
    let inner = text
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
        .unwrap_or(text);

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next_if(|&next| next == '\\' || next == quote) {
                Some(escaped) => out.push(escaped),
                None => out.push('\\'),
            },
            c if c == quote => {
                chars.next_if_eq(&quote);
                out.push(quote);
            }
            c => out.push(c),
        }
    }
    out
}

// --- Expressions ---

fn expression(node: &ParseNode<'_>) -> BuildResult<Expression> {
    match node.rule {
        Rule::Literal => literal(node),
        Rule::ColumnRef => Ok(Expression::Reference(Reference {
            identifier: qualified_identifier(first_node(node)?)?,
            position: position(node),
        })),
        Rule::Wildcard => {
            let qualifier = match node.find_node(Rule::QualifiedIdentifier) {
                Some(name) => qualified_identifier(name)?
                    .parts()
                    .map(str::to_owned)
                    .collect(),
                None => Vec::new(),
            };
            Ok(Expression::Reference(Reference {
                identifier: Identifier::wildcard(qualifier).at(position(node)),
                position: position(node),
            }))
        }
        Rule::FunctionCall => Ok(Expression::FunctionCall(function_call(node)?)),
        Rule::ArrayConstructor => Ok(Expression::FunctionCall(FunctionCall {
            name: String::from("ARRAY"),
            arguments: expressions(node)?,
            distinct: false,
            infix: false,
            position: position(node),
        })),
        Rule::Case => case(node),
        Rule::Cast => Ok(Expression::Cast(Cast {
            expression: Box::new(expression(first_node(node)?)?),
            data_type: data_type(child(node, Rule::DataType)?),
            try_cast: node.has_keyword(Keyword::TryCast),
            position: position(node),
        })),
        Rule::Paren => expression(first_node(node)?),
        Rule::ScalarSelect => Ok(Expression::ScalarSelect(ScalarSelect {
            query: Box::new(query(first_node(node)?)?),
            position: position(node),
        })),
        Rule::UnaryExpr => {
            let name = match node.tokens().next().map(|token| token.kind) {
                Some(TokenKind::Minus) => "-",
                Some(TokenKind::Keyword(Keyword::Not)) => "NOT",
                _ => return Err(unsupported(node)),
            };
            operator(node, name, vec![expression(first_node(node)?)?])
        }
        Rule::BinaryExpr | Rule::BetweenExpr => {
            let name = operator_name(node).ok_or_else(|| unsupported(node))?;
            operator(node, name, expressions(node)?)
        }
        Rule::InExpr => {
            let name = operator_name(node).ok_or_else(|| unsupported(node))?;
            let arguments = node
                .nodes()
                .map(|argument| {
                    if argument.rule == Rule::Query {
                        Ok(Expression::ScalarSelect(ScalarSelect {
                            query: Box::new(query(argument)?),
                            position: position(argument),
                        }))
                    } else {
                        expression(argument)
                    }
                })
                .collect::<BuildResult<Vec<_>>>()?;
            operator(node, name, arguments)
        }
        _ => Err(unsupported(node)),
    }
}

fn expressions(node: &ParseNode<'_>) -> BuildResult<Vec<Expression>> {
    node.nodes().map(expression).collect()
}

fn operator(
    node: &ParseNode<'_>,
    name: &str,
    arguments: Vec<Expression>,
) -> BuildResult<Expression> {
    Ok(Expression::FunctionCall(FunctionCall {
        name: name.to_owned(),
        arguments,
        distinct: false,
        infix: true,
        position: position(node),
    }))
}

/// Canonical name of the operator written in `node`, from its leading tokens.
fn operator_name(node: &ParseNode<'_>) -> Option<&'static str> {
    use Keyword::{And, Between, In, Is, Like, Not, Or};
    use TokenKind::Keyword as Kw;

    let mut kinds = node.tokens().map(|token| token.kind);
    let first = kinds.next()?;
    let second = kinds.next();
    Some(match (first, second) {
        (TokenKind::Plus, _) => "+",
        (TokenKind::Minus, _) => "-",
        (TokenKind::Star, _) => "*",
        (TokenKind::Slash, _) => "/",
        (TokenKind::Percent, _) => "%",
        (TokenKind::Eq, _) => "=",
        (TokenKind::NotEq, _) => "!=",
        (TokenKind::Lt, _) => "<",
        (TokenKind::LtEq, _) => "<=",
        (TokenKind::Gt, _) => ">",
        (TokenKind::GtEq, _) => ">=",
        (Kw(And), _) => "AND",
        (Kw(Or), _) => "OR",
        (Kw(Like), _) => "LIKE",
        (Kw(Is), Some(Kw(Not))) => "IS NOT",
        (Kw(Is), _) => "IS",
        (Kw(In), _) => "IN",
        (Kw(Between), _) => "BETWEEN",
        (Kw(Not), Some(Kw(Like))) => "NOT LIKE",
        (Kw(Not), Some(Kw(In))) => "NOT IN",
        (Kw(Not), Some(Kw(Between))) => "NOT BETWEEN",
        _ => return None,
    })
}

fn function_call(node: &ParseNode<'_>) -> BuildResult<FunctionCall> {
    let mut nodes = node.nodes();
    let name = qualified_identifier(nodes.next().ok_or_else(|| unsupported(node))?)?;
    Ok(FunctionCall {
        name: name.parts().collect::<Vec<_>>().join("."),
        arguments: nodes.map(expression).collect::<BuildResult<Vec<_>>>()?,
        distinct: node.has_keyword(Keyword::Distinct),
        infix: false,
        position: position(node),
    })
}

fn case(node: &ParseNode<'_>) -> BuildResult<Expression> {
    let mut input = None;
    let mut branches = Vec::new();
    let mut otherwise = None;
    for part in node.nodes() {
        match part.rule {
            Rule::CaseWhen => {
                let mut pair = part.nodes();
                let (Some(when), Some(then)) = (pair.next(), pair.next()) else {
                    return Err(unsupported(part));
                };
                branches.push((expression(when)?, expression(then)?));
            }
            Rule::CaseElse => otherwise = Some(Box::new(expression(first_node(part)?)?)),
            _ => input = Some(Box::new(expression(part)?)),
        }
    }
    if branches.is_empty() {
        return Err(unsupported(node));
    }
    Ok(Expression::Case(Case {
        input,
        branches,
        otherwise,
        position: position(node),
    }))
}

fn literal(node: &ParseNode<'_>) -> BuildResult<Expression> {
    let mut tokens = node.tokens();
    let first = tokens.next().ok_or_else(|| unsupported(node))?;
    let value = match first.kind {
        TokenKind::Integer => LiteralValue::Int(integer(first)?),
        TokenKind::Float => {
            let value: f64 = first
                .text
                .parse()
                .map_err(|e| BuildError::invalid_literal(first.text, e))?;
            if !value.is_finite() {
                return Err(BuildError::invalid_literal(first.text, "number out of range"));
            }
            LiteralValue::Float(value)
        }
        TokenKind::String => LiteralValue::String(string_content(first)),
        TokenKind::Keyword(Keyword::True) => LiteralValue::Boolean(true),
        TokenKind::Keyword(Keyword::False) => LiteralValue::Boolean(false),
        TokenKind::Keyword(Keyword::Null) => LiteralValue::Null,
        TokenKind::Keyword(Keyword::Date) => {
            let text = tokens.next().ok_or_else(|| unsupported(node))?;
            LiteralValue::Date(string_content(text))
        }
        TokenKind::Keyword(Keyword::Interval) => {
            let text = tokens.next().ok_or_else(|| unsupported(node))?;
            let mut value = string_content(text);
            if let Some(unit) = tokens.next() {
                value.push(' ');
                value.push_str(unit.text);
            }
            LiteralValue::Interval(value.to_uppercase())
        }
        _ => return Err(unsupported(node)),
    };
    Ok(Expression::Literal(Literal {
        value,
        position: position(node),
    }))
}

fn string_content(token: &Token<'_>) -> String {
    match token.quote {
        Some(style) => unquote(token.text, style),
        None => token.text.to_owned(),
    }
}

fn integer(token: &Token<'_>) -> BuildResult<i64> {
    token
        .text
        .parse()
        .map_err(|e| BuildError::invalid_literal(token.text, e))
}

// --- Helpers ---

fn position(node: &ParseNode<'_>) -> SourcePosition {
    SourcePosition::new(node.span)
}

fn unsupported(node: &ParseNode<'_>) -> BuildError {
    BuildError::unsupported(node.text, position(node))
}

fn first_node<'n, 'a>(node: &'n ParseNode<'a>) -> BuildResult<&'n ParseNode<'a>> {
    node.first_node().ok_or_else(|| unsupported(node))
}

fn child<'n, 'a>(node: &'n ParseNode<'a>, rule: Rule) -> BuildResult<&'n ParseNode<'a>> {
    node.find_node(rule).ok_or_else(|| unsupported(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{Dialect, DialectRewriter};
    use crate::grammar::Grammar;
    use crate::lexer::Lexer;

    fn expr(sql: &str) -> Expression {
        let tokens = DialectRewriter::new(Lexer::new(sql), Dialect::DEFAULT);
        let tree = Grammar::new(sql, tokens, true)
            .unwrap()
            .single_expression()
            .unwrap();
        build_expression(&tree).unwrap()
    }

    fn stmt(sql: &str) -> Statement {
        let tokens = DialectRewriter::new(Lexer::new(sql), Dialect::DEFAULT);
        let tree = Grammar::new(sql, tokens, true)
            .unwrap()
            .single_statement()
            .unwrap();
        build_statement(&tree).unwrap()
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("'a''b'", QuoteStyle::Single), "a'b");
        assert_eq!(unquote(r"'a\'b'", QuoteStyle::Single), "a'b");
        assert_eq!(unquote(r"'a\\b'", QuoteStyle::Single), r"a\b");
        assert_eq!(unquote(r"'a\nb'", QuoteStyle::Single), r"a\nb");
        assert_eq!(unquote(r#""say ""hi""""#, QuoteStyle::Double), r#"say "hi""#);
        assert_eq!(unquote("``", QuoteStyle::Back), "");
    }

    #[test]
    fn test_data_type_text() {
        let Statement::CreateTable(table) =
            stmt("create table t (a varchar (40), b numeric(10,2), c interval hour to minute)")
        else {
            panic!("expected CREATE TABLE");
        };
        let types: Vec<_> = table.columns.iter().map(|c| c.data_type.as_str()).collect();
        assert_eq!(
            types,
            vec!["VARCHAR(40)", "NUMERIC(10, 2)", "INTERVAL HOUR TO MINUTE"]
        );
    }

    #[test]
    fn test_operator_names() {
        assert_eq!(expr("1 <> 2"), Expression::int(1).binary("!=", Expression::int(2)));
        assert_eq!(
            expr("a is not null"),
            Expression::column("a").binary("IS NOT", Expression::null())
        );
        assert_eq!(
            expr("a not between 1 and 2"),
            Expression::operator(
                "NOT BETWEEN",
                vec![Expression::column("a"), Expression::int(1), Expression::int(2)]
            )
        );
    }

    #[test]
    fn test_positions_are_tracked() {
        let sql = "select x.y from t";
        let Statement::Select(select) = stmt(sql) else {
            panic!("expected SELECT");
        };
        let SelectOrUnion::Select(clause) = select.query else {
            panic!("expected a plain select");
        };
        let Expression::Reference(reference) = &clause.items[0].expression else {
            panic!("expected a reference");
        };
        let span = reference.identifier.position.span().unwrap();
        assert_eq!(span.slice(sql), "x.y");
    }

    #[test]
    fn test_case_without_branches_is_unsupported() {
        let sql = "case 1 end";
        let tokens = DialectRewriter::new(Lexer::new(sql), Dialect::DEFAULT);
        let tree = Grammar::new(sql, tokens, false)
            .unwrap()
            .single_expression()
            .unwrap();
        assert!(matches!(
            build_expression(&tree),
            Err(BuildError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_integer_overflow_is_invalid_literal() {
        let sql = "99999999999999999999";
        let tokens = DialectRewriter::new(Lexer::new(sql), Dialect::DEFAULT);
        let tree = Grammar::new(sql, tokens, true)
            .unwrap()
            .single_expression()
            .unwrap();
        assert!(matches!(
            build_expression(&tree),
            Err(BuildError::InvalidLiteral { .. })
        ));
    }
}
