//! Depth-first AST traversal with enter/exit callbacks.
//!
//! Implement the [`AstListener`] hooks you care about and hand the listener
//! to an [`AstWalker`]. Every node is entered, its children are walked in
//! field order, then it is exited. The generic hooks (`statement`,
//! `select_or_union`, `data_source`, `expression`) wrap the hooks of the
//! concrete node.
//!
//! ```rust
//! use sqlcanon_core::{parse_statement, AstListener, AstWalker, Dialect, Identifier};
//!
//! #[derive(Default)]
//! struct Names(Vec<String>);
//!
//! impl AstListener for Names {
//!     fn enter_identifier(&mut self, node: &Identifier) {
//!         self.0.push(node.name.clone());
//!     }
//! }
//!
//! let stmt = parse_statement("select a from b", true, Dialect::DEFAULT).unwrap();
//! let mut names = Names::default();
//! AstWalker::new(&mut names).walk_statement(&stmt);
//! assert_eq!(names.0, vec!["a", "b"]);
//! ```

use crate::ast::{
    Case, Cast, ColumnDefinition, CreateSchema, CreateTable, DataSource, Expression, File,
    FromClause, FunctionCall, Identifier, Join, Literal, NamedExpression, OrderExpression,
    Reference, ScalarSelect, SelectClause, SelectOrUnion, SelectStmt, Statement, SubQuery, Table,
    TableFunction, Union,
};

/// Callbacks invoked by [`AstWalker`]. Every hook defaults to doing nothing.
#[allow(unused_variables)]
pub trait AstListener {
    fn enter_file(&mut self, node: &File) {}
    fn exit_file(&mut self, node: &File) {}

    fn enter_statement(&mut self, node: &Statement) {}
    fn exit_statement(&mut self, node: &Statement) {}

    fn enter_create_schema(&mut self, node: &CreateSchema) {}
    fn exit_create_schema(&mut self, node: &CreateSchema) {}

    fn enter_create_table(&mut self, node: &CreateTable) {}
    fn exit_create_table(&mut self, node: &CreateTable) {}

    fn enter_select_statement(&mut self, node: &SelectStmt) {}
    fn exit_select_statement(&mut self, node: &SelectStmt) {}

    fn enter_select_or_union(&mut self, node: &SelectOrUnion) {}
    fn exit_select_or_union(&mut self, node: &SelectOrUnion) {}

    fn enter_select_clause(&mut self, node: &SelectClause) {}
    fn exit_select_clause(&mut self, node: &SelectClause) {}

    fn enter_union(&mut self, node: &Union) {}
    fn exit_union(&mut self, node: &Union) {}

    fn enter_named_expression(&mut self, node: &NamedExpression) {}
    fn exit_named_expression(&mut self, node: &NamedExpression) {}

    fn enter_from_clause(&mut self, node: &FromClause) {}
    fn exit_from_clause(&mut self, node: &FromClause) {}

    fn enter_data_source(&mut self, node: &DataSource) {}
    fn exit_data_source(&mut self, node: &DataSource) {}

    fn enter_table(&mut self, node: &Table) {}
    fn exit_table(&mut self, node: &Table) {}

    /// Also called for WITH bindings.
    fn enter_subquery(&mut self, node: &SubQuery) {}
    fn exit_subquery(&mut self, node: &SubQuery) {}

    fn enter_join(&mut self, node: &Join) {}
    fn exit_join(&mut self, node: &Join) {}

    fn enter_table_function(&mut self, node: &TableFunction) {}
    fn exit_table_function(&mut self, node: &TableFunction) {}

    fn enter_order_expression(&mut self, node: &OrderExpression) {}
    fn exit_order_expression(&mut self, node: &OrderExpression) {}

    fn enter_expression(&mut self, node: &Expression) {}
    fn exit_expression(&mut self, node: &Expression) {}

    fn enter_literal(&mut self, node: &Literal) {}
    fn exit_literal(&mut self, node: &Literal) {}

    fn enter_function_call(&mut self, node: &FunctionCall) {}
    fn exit_function_call(&mut self, node: &FunctionCall) {}

    fn enter_reference(&mut self, node: &Reference) {}
    fn exit_reference(&mut self, node: &Reference) {}

    fn enter_case(&mut self, node: &Case) {}
    fn exit_case(&mut self, node: &Case) {}

    fn enter_cast(&mut self, node: &Cast) {}
    fn exit_cast(&mut self, node: &Cast) {}

    fn enter_scalar_select(&mut self, node: &ScalarSelect) {}
    fn exit_scalar_select(&mut self, node: &ScalarSelect) {}

    fn enter_identifier(&mut self, node: &Identifier) {}
    fn exit_identifier(&mut self, node: &Identifier) {}

    fn enter_column_definition(&mut self, node: &ColumnDefinition) {}
    fn exit_column_definition(&mut self, node: &ColumnDefinition) {}
}

/// Drives an [`AstListener`] over a tree.
pub struct AstWalker<'l, L: AstListener + ?Sized> {
    listener: &'l mut L,
}

impl<'l, L: AstListener + ?Sized> AstWalker<'l, L> {
    /// Creates a walker reporting to `listener`.
    pub fn new(listener: &'l mut L) -> Self {
        Self { listener }
    }

    pub fn walk_file(&mut self, node: &File) {
        self.listener.enter_file(node);
        for statement in &node.statements {
            self.walk_statement(statement);
        }
        self.listener.exit_file(node);
    }

    pub fn walk_statement(&mut self, node: &Statement) {
        self.listener.enter_statement(node);
        match node {
            Statement::CreateSchema(create) => {
                self.listener.enter_create_schema(create);
                self.walk_identifier(&create.name);
                self.listener.exit_create_schema(create);
            }
            Statement::CreateTable(create) => {
                self.listener.enter_create_table(create);
                self.walk_identifier(&create.name);
                for column in &create.columns {
                    self.walk_column_definition(column);
                }
                self.listener.exit_create_table(create);
            }
            Statement::Select(select) => {
                self.listener.enter_select_statement(select);
                self.walk_select_or_union(&select.query);
                self.listener.exit_select_statement(select);
            }
        }
        self.listener.exit_statement(node);
    }

    pub fn walk_select_or_union(&mut self, node: &SelectOrUnion) {
        self.listener.enter_select_or_union(node);
        match node {
            SelectOrUnion::Select(select) => self.walk_select_clause(select),
            SelectOrUnion::Union(union) => {
                self.listener.enter_union(union);
                self.walk_select_or_union(&union.top);
                self.walk_select_clause(&union.bottom);
                self.listener.exit_union(union);
            }
        }
        self.listener.exit_select_or_union(node);
    }

    pub fn walk_select_clause(&mut self, node: &SelectClause) {
        self.listener.enter_select_clause(node);
        for item in &node.items {
            self.listener.enter_named_expression(item);
            self.walk_expression(&item.expression);
            self.listener.exit_named_expression(item);
        }
        if let Some(from) = &node.from {
            self.listener.enter_from_clause(from);
            self.walk_data_source(&from.source);
            self.listener.exit_from_clause(from);
        }
        if let Some(predicate) = &node.predicate {
            self.walk_expression(predicate);
        }
        for key in &node.group_by {
            self.walk_expression(key);
        }
        if let Some(having) = &node.having {
            self.walk_expression(having);
        }
        for key in &node.order_by {
            self.listener.enter_order_expression(key);
            self.walk_expression(&key.expression);
            self.listener.exit_order_expression(key);
        }
        for cte in &node.ctes {
            self.walk_subquery(cte);
        }
        self.listener.exit_select_clause(node);
    }

    pub fn walk_data_source(&mut self, node: &DataSource) {
        self.listener.enter_data_source(node);
        match node {
            DataSource::Table(table) => {
                self.listener.enter_table(table);
                self.walk_identifier(&table.identifier);
                self.listener.exit_table(table);
            }
            DataSource::SubQuery(subquery) => self.walk_subquery(subquery),
            DataSource::Join(join) => {
                self.listener.enter_join(join);
                self.walk_data_source(&join.left);
                self.walk_data_source(&join.right);
                if let Some(on) = &join.on {
                    self.walk_expression(on);
                }
                self.listener.exit_join(join);
            }
            DataSource::TableFunction(function) => {
                self.listener.enter_table_function(function);
                self.walk_function_call(&function.function);
                self.listener.exit_table_function(function);
            }
        }
        self.listener.exit_data_source(node);
    }

    pub fn walk_subquery(&mut self, node: &SubQuery) {
        self.listener.enter_subquery(node);
        self.walk_select_or_union(&node.query);
        self.listener.exit_subquery(node);
    }

    pub fn walk_expression(&mut self, node: &Expression) {
        self.listener.enter_expression(node);
        match node {
            Expression::Literal(literal) => {
                self.listener.enter_literal(literal);
                self.listener.exit_literal(literal);
            }
            Expression::FunctionCall(call) => self.walk_function_call(call),
            Expression::Reference(reference) => {
                self.listener.enter_reference(reference);
                self.walk_identifier(&reference.identifier);
                self.listener.exit_reference(reference);
            }
            Expression::Case(case) => {
                self.listener.enter_case(case);
                if let Some(input) = &case.input {
                    self.walk_expression(input);
                }
                for (when, then) in &case.branches {
                    self.walk_expression(when);
                    self.walk_expression(then);
                }
                if let Some(otherwise) = &case.otherwise {
                    self.walk_expression(otherwise);
                }
                self.listener.exit_case(case);
            }
            Expression::Cast(cast) => {
                self.listener.enter_cast(cast);
                self.walk_expression(&cast.expression);
                self.listener.exit_cast(cast);
            }
            Expression::ScalarSelect(select) => {
                self.listener.enter_scalar_select(select);
                self.walk_select_or_union(&select.query);
                self.listener.exit_scalar_select(select);
            }
        }
        self.listener.exit_expression(node);
    }

    pub fn walk_function_call(&mut self, node: &FunctionCall) {
        self.listener.enter_function_call(node);
        for argument in &node.arguments {
            self.walk_expression(argument);
        }
        self.listener.exit_function_call(node);
    }

    pub fn walk_identifier(&mut self, node: &Identifier) {
        self.listener.enter_identifier(node);
        self.listener.exit_identifier(node);
    }

    pub fn walk_column_definition(&mut self, node: &ColumnDefinition) {
        self.listener.enter_column_definition(node);
        self.walk_identifier(&node.name);
        self.listener.exit_column_definition(node);
    }
}
