//! Defines the Abstract Syntax Tree (AST) for a SELECT query.

use crate::ast::{
    common::TableRef,
    expr::Expr,
    filter::Filter,
};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Select {
    /// The list of columns or expressions to be returned.
    /// e.g., `users.*`, `id`, `name`
    pub columns: Vec<Expr>,

    /// The primary table for the query.
    /// e.g., `FROM users`
    pub from: Option<FromClause>,

    /// A list of JOIN clauses.
    pub joins: Vec<JoinClause>,

    /// The WHERE clause condition.
    pub where_clause: Option<Filter>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
    pub table: TableRef,
    pub alias: Option<String>,
}

/// An `INNER JOIN`; relation paths only ever narrow the root rows.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    pub table: TableRef,
    pub alias: Option<String>,
    /// The join condition, e.g., `ON projects.user_id = users.id`.
    pub on: Expr,
}
