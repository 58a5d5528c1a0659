//! Defines the AST for a WHERE clause made of bracketed groups.
//!
//! A `Filter` is a flat sequence of clauses. Each clause after the first is
//! joined to its predecessor by its own connective, and any clause may be
//! negated. Groups are always rendered inside their own brackets, so the
//! grouping of the tree is preserved regardless of operator precedence.

use crate::ast::expr::Expr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub clauses: Vec<FilterClause>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterClause {
    /// How this clause joins the clause before it. Ignored for the first one.
    pub connective: Connective,
    pub negated: bool,
    pub predicate: Predicate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Expr(Expr),
    Group(Filter),
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}
