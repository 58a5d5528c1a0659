//! Incremental builder for bracketed WHERE filters.
//!
//! Predicates are appended to the innermost open group. Opening a group
//! fixes the connective used between its members; closing it wraps the
//! members in brackets (optionally negated) and appends the group to its
//! parent using the parent's connective.

use crate::ast::{
    expr::Expr,
    filter::{Connective, Filter, FilterClause, Predicate},
};

#[derive(Debug, Clone, PartialEq)]
struct Frame {
    connective: Connective,
    clauses: Vec<FilterClause>,
}

impl Frame {
    fn new(connective: Connective) -> Self {
        Self {
            connective,
            clauses: Vec::new(),
        }
    }

    fn push(&mut self, negated: bool, predicate: Predicate) {
        self.clauses.push(FilterClause {
            connective: self.connective,
            negated,
            predicate,
        });
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterBuilder {
    // Never empty: index 0 is the top-level WHERE list.
    frames: Vec<Frame>,
}

impl Default for FilterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::new(Connective::And)],
        }
    }

    /// Appends a predicate to the innermost open group.
    pub fn push(&mut self, expr: Expr, negated: bool) {
        self.current().push(negated, Predicate::Expr(expr));
    }

    /// Opens a nested group whose members are joined by `connective`.
    pub fn open_group(&mut self, connective: Connective) {
        self.frames.push(Frame::new(connective));
    }

    /// Closes the innermost group. A group that collected nothing is
    /// discarded instead of rendering as `()`.
    pub fn close_group(&mut self, negated: bool) {
        if self.frames.len() == 1 {
            return;
        }
        if let Some(frame) = self.frames.pop()
            && !frame.clauses.is_empty()
        {
            let group = Filter {
                clauses: frame.clauses,
            };
            self.current().push(negated, Predicate::Group(group));
        }
    }

    /// Number of currently open groups, excluding the top level.
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.frames.iter().all(|frame| frame.clauses.is_empty())
    }

    /// Returns the top-level filter, or `None` if nothing was added.
    pub fn build(&self) -> Option<Filter> {
        let root = &self.frames[0];
        (!root.clauses.is_empty()).then(|| Filter {
            clauses: root.clauses.clone(),
        })
    }

    fn current(&mut self) -> &mut Frame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::expr::BinaryOperator, ident, value};

    fn eq(column: &str, v: i64) -> Expr {
        Expr::binary(ident(column), BinaryOperator::Eq, value(v))
    }

    #[test]
    fn test_top_level_clauses_join_with_and() {
        let mut builder = FilterBuilder::new();
        builder.push(eq("a", 1), false);
        builder.push(eq("b", 2), true);

        let filter = builder.build().unwrap();
        assert_eq!(filter.clauses.len(), 2);
        assert_eq!(filter.clauses[1].connective, Connective::And);
        assert!(filter.clauses[1].negated);
    }

    #[test]
    fn test_group_takes_parent_connective() {
        let mut builder = FilterBuilder::new();
        builder.open_group(Connective::Or);
        builder.push(eq("a", 1), false);
        builder.open_group(Connective::And);
        builder.push(eq("b", 2), false);
        builder.push(eq("c", 3), false);
        builder.close_group(true);
        builder.close_group(false);
        assert_eq!(builder.depth(), 0);

        let filter = builder.build().unwrap();
        let Predicate::Group(outer) = &filter.clauses[0].predicate else {
            panic!("expected group");
        };
        assert_eq!(outer.clauses.len(), 2);
        assert_eq!(outer.clauses[1].connective, Connective::Or);
        assert!(outer.clauses[1].negated);

        let Predicate::Group(inner) = &outer.clauses[1].predicate else {
            panic!("expected nested group");
        };
        assert_eq!(inner.clauses[1].connective, Connective::And);
    }

    #[test]
    fn test_empty_group_is_discarded() {
        let mut builder = FilterBuilder::new();
        builder.open_group(Connective::And);
        builder.close_group(true);

        assert!(builder.is_empty());
        assert!(builder.build().is_none());
    }

    #[test]
    fn test_close_without_open_is_ignored() {
        let mut builder = FilterBuilder::new();
        builder.push(eq("a", 1), false);
        builder.close_group(false);

        assert_eq!(builder.build().unwrap().clauses.len(), 1);
    }
}
