use crate::{
    ast::select::{FromClause, JoinClause, Select},
    render::{Render, Renderer},
};

impl Render for Select {
    fn render(&self, r: &mut Renderer) {
        // 1. SELECT clause
        r.sql.push_str("SELECT ");
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            col.render(r);
        }

        // 2. FROM
        if let Some(from) = &self.from {
            r.sql.push(' ');
            from.render(r);
        }

        // 3. JOIN
        for join in &self.joins {
            r.sql.push(' ');
            join.render(r);
        }

        // 4. WHERE
        if let Some(where_clause) = &self.where_clause {
            r.sql.push_str(" WHERE ");
            where_clause.render(r);
        }
    }
}

impl Render for FromClause {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("FROM ");
        r.render_table_ref(&self.table);
        r.render_alias(self.alias.as_deref());
    }
}

impl Render for JoinClause {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("INNER JOIN ");
        r.render_table_ref(&self.table);
        r.render_alias(self.alias.as_deref());
        r.sql.push_str(" ON ");
        self.on.render(r);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{
            expr::{BinaryOperator, Expr},
            filter::{Connective, Filter, FilterClause, Predicate},
        },
        build::select::SelectBuilder,
        dialect::{MySql, Oracle, Postgres},
        qualified,
        render::to_sql,
        table_ref,
    };
    use model::Value;

    fn where_eq(column: Expr, v: Value) -> Option<Filter> {
        Some(Filter {
            clauses: vec![FilterClause {
                connective: Connective::And,
                negated: false,
                predicate: Predicate::Expr(Expr::binary(column, BinaryOperator::Eq, Expr::Value(v))),
            }],
        })
    }

    #[test]
    fn test_simple_select_postgres() {
        let ast = SelectBuilder::new()
            .select(vec![Expr::Wildcard(Some("users".to_string()))])
            .from(table_ref!("users"), None)
            .where_clause(where_eq(crate::ident("id"), Value::Int(123)))
            .build();

        let (sql, params) = to_sql(&ast, &Postgres);

        assert_eq!(sql, r#"SELECT "users".* FROM "users" WHERE "id" = $1"#);
        assert_eq!(params, vec![Value::Int(123)]);
    }

    #[test]
    fn test_simple_select_mysql() {
        let ast = SelectBuilder::new()
            .select(vec![crate::ident("id"), crate::ident("name")])
            .from(table_ref!("users"), None)
            .where_clause(where_eq(crate::ident("id"), Value::from("abc")))
            .build();

        let (sql, params) = to_sql(&ast, &MySql);

        assert_eq!(sql, "SELECT `id`, `name` FROM `users` WHERE `id` = ?");
        assert_eq!(params, vec![Value::from("abc")]);
    }

    #[test]
    fn test_select_with_aliased_join() {
        let ast = SelectBuilder::new()
            .select(vec![Expr::Wildcard(Some("projects".to_string()))])
            .from(table_ref!("projects"), None)
            .join(
                table_ref!("users"),
                Some("user"),
                Expr::binary(
                    qualified("user", "id"),
                    BinaryOperator::Eq,
                    qualified("projects", "user_id"),
                ),
            )
            .where_clause(where_eq(qualified("user", "age"), Value::Int(10)))
            .build();

        let (sql, _) = to_sql(&ast, &Postgres);
        assert_eq!(
            sql,
            r#"SELECT "projects".* FROM "projects" INNER JOIN "users" AS "user" ON "user"."id" = "projects"."user_id" WHERE "user"."age" = $1"#
        );

        let (sql, params) = to_sql(&ast, &Oracle);
        assert_eq!(
            sql,
            r#"SELECT "projects".* FROM "projects" INNER JOIN "users" "user" ON "user"."id" = "projects"."user_id" WHERE "user"."age" = :1"#
        );
        assert_eq!(params, vec![Value::Int(10)]);
    }

    #[test]
    fn test_schema_qualified_table() {
        let ast = SelectBuilder::new()
            .select(vec![Expr::Wildcard(None)])
            .from(table_ref!("app", "users"), Some("u"))
            .join(
                table_ref!("posts"),
                None,
                Expr::binary(
                    qualified("posts", "user_id"),
                    BinaryOperator::Eq,
                    qualified("u", "id"),
                ),
            )
            .build();

        let (sql, params) = to_sql(&ast, &Postgres);
        assert_eq!(
            sql,
            r#"SELECT * FROM "app"."users" AS "u" INNER JOIN "posts" ON "posts"."user_id" = "u"."id""#
        );
        assert!(params.is_empty());
    }
}
