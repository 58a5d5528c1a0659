use crate::{
    ast::filter::{Connective, Filter, FilterClause, Predicate},
    render::{Render, Renderer},
};

impl Render for Filter {
    fn render(&self, r: &mut Renderer) {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(match clause.connective {
                    Connective::And => " AND ",
                    Connective::Or => " OR ",
                });
            }
            clause.render(r);
        }
    }
}

impl Render for FilterClause {
    fn render(&self, r: &mut Renderer) {
        if self.negated {
            r.sql.push_str("NOT ");
        }
        match &self.predicate {
            Predicate::Expr(expr) => expr.render(r),
            Predicate::Group(group) => {
                r.sql.push('(');
                group.render(r);
                r.sql.push(')');
            }
        }
    }
}
