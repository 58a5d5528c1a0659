use crate::{config::Client, error::SqlError, join::JoinState, schema::Schema};
use model::Value;
use query_builder::{
    ast::{
        common::TableRef,
        expr::Expr,
        filter::Connective,
        select::Select,
    },
    build::{filter::FilterBuilder, select::SelectBuilder},
    ident, qualified,
    render::to_sql,
};
use std::sync::Arc;

/// A `SELECT "table".* FROM "table"` query being narrowed by a condition.
///
/// The query is threaded by value through interpretation. Predicates go to
/// the innermost open group; dotted fields register joins as a side effect.
#[derive(Debug, Clone)]
pub struct SqlQuery {
    schema: Arc<Schema>,
    client: Client,
    table: String,
    filter: FilterBuilder,
    joins: JoinState,
    // Relation path that bare field names resolve against (set by `prefixed`).
    scope: Vec<String>,
}

impl SqlQuery {
    pub fn new(schema: Arc<Schema>, client: Client, table: &str) -> Self {
        Self {
            schema,
            client,
            table: table.to_string(),
            filter: FilterBuilder::new(),
            joins: JoinState::new(),
            scope: Vec::new(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn client(&self) -> Client {
        self.client
    }

    pub fn joins(&self) -> &JoinState {
        &self.joins
    }

    pub fn scope(&self) -> &[String] {
        &self.scope
    }

    /// Adds a predicate to the innermost open group.
    pub fn where_expr(mut self, expr: Expr) -> Self {
        self.filter.push(expr, false);
        self
    }

    pub fn where_not_expr(mut self, expr: Expr) -> Self {
        self.filter.push(expr, true);
        self
    }

    /// Runs `build` inside a bracketed group whose members are joined by
    /// `connective`. The group itself joins its siblings with the enclosing
    /// group's connective and is prefixed with `NOT` when `negated`.
    pub fn where_wrapped<F>(mut self, connective: Connective, negated: bool, build: F) -> Result<Self, SqlError>
    where
        F: FnOnce(Self) -> Result<Self, SqlError>,
    {
        self.filter.open_group(connective);
        let mut query = build(self)?;
        query.filter.close_group(negated);
        Ok(query)
    }

    /// Runs `build` with bare field names resolving against `relation`,
    /// joining it first. The scope is restored afterwards.
    pub fn prefixed<F>(mut self, relation: &str, build: F) -> Result<Self, SqlError>
    where
        F: FnOnce(Self) -> Result<Self, SqlError>,
    {
        let depth = self.scope.len();
        let mut scope = self.scope.clone();
        scope.extend(relation.split('.').map(String::from));

        let relations: Vec<&str> = scope.iter().map(String::as_str).collect();
        self.joins.resolve(&self.schema, &self.table, &relations)?;
        self.scope = scope;

        let mut query = build(self)?;
        query.scope.truncate(depth);
        Ok(query)
    }

    /// Resolves a (possibly dotted) field to a column expression, joining
    /// the relations it passes through.
    pub fn column(&mut self, field: &str) -> Result<Expr, SqlError> {
        let mut path: Vec<&str> = self.scope.iter().map(String::as_str).collect();
        path.extend(field.split('.'));

        match path.split_last() {
            Some((column, [])) => Ok(ident(column)),
            Some((column, relations)) => {
                let alias = self.joins.resolve(&self.schema, &self.table, relations)?;
                Ok(qualified(&alias, column))
            }
            None => Ok(ident(field)),
        }
    }

    pub fn build(&self) -> Select {
        SelectBuilder::new()
            .select(vec![Expr::Wildcard(Some(self.table.clone()))])
            .from(
                TableRef {
                    schema: self.schema.schema_of(&self.table).map(String::from),
                    name: self.table.clone(),
                },
                None,
            )
            .joins(self.joins.clauses().iter().cloned())
            .where_clause(self.filter.build())
            .build()
    }

    /// Renders the query for this query's client.
    pub fn to_sql(&self) -> (String, Vec<Value>) {
        to_sql(&self.build(), self.client.dialect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{RelationMetadata, TableMetadata};
    use query_builder::{ast::expr::BinaryOperator, value};

    fn query() -> SqlQuery {
        let schema = Schema::new().with_table(
            "users",
            TableMetadata::new()
                .in_schema("app")
                .with_relation("projects", RelationMetadata::has_many("projects", "user_id")),
        );
        SqlQuery::new(Arc::new(schema), Client::Pg, "users")
    }

    #[test]
    fn test_empty_query() {
        let (sql, params) = query().to_sql();
        assert_eq!(sql, r#"SELECT "users".* FROM "app"."users""#);
        assert!(params.is_empty());
    }

    #[test]
    fn test_column_resolution() {
        let mut query = query();

        assert_eq!(query.column("age").unwrap(), ident("age"));
        assert_eq!(query.column("projects.name").unwrap(), qualified("projects", "name"));
        assert_eq!(query.joins().len(), 1);
    }

    #[test]
    fn test_prefixed_scopes_and_restores() {
        let query = query()
            .prefixed("projects", |mut scoped| {
                assert_eq!(scoped.scope(), ["projects".to_string()]);
                let column = scoped.column("active")?;
                Ok(scoped.where_expr(Expr::binary(column, BinaryOperator::Eq, value(true))))
            })
            .unwrap();

        assert!(query.scope().is_empty());
        assert_eq!(query.joins().len(), 1);
        assert_eq!(
            query.to_sql().0,
            r#"SELECT "users".* FROM "app"."users" INNER JOIN "projects" ON "projects"."user_id" = "users"."id" WHERE "projects"."active" = $1"#
        );
    }

    #[test]
    fn test_where_wrapped_groups() {
        let query = query()
            .where_wrapped(Connective::Or, true, |q| {
                Ok(q.where_expr(Expr::binary(ident("a"), BinaryOperator::Eq, value(1)))
                    .where_expr(Expr::binary(ident("b"), BinaryOperator::Eq, value(2))))
            })
            .unwrap()
            .where_not_expr(Expr::binary(ident("c"), BinaryOperator::Eq, value(3)));

        assert_eq!(
            query.to_sql().0,
            r#"SELECT "users".* FROM "app"."users" WHERE NOT ("a" = $1 OR "b" = $2) AND NOT "c" = $3"#
        );
    }

    #[test]
    fn test_failed_group_propagates_error() {
        let result = query().where_wrapped(Connective::And, false, |mut q| {
            q.column("roles.name")?;
            Ok(q)
        });

        assert!(matches!(result, Err(SqlError::UnknownRelation { .. })));
    }
}
