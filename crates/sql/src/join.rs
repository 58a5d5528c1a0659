//! Join bookkeeping for dotted field paths.
//!
//! Each relation path (`projects`, `projects.tasks`) is joined at most once
//! per query. The alias of a joined relation is its path with `.` replaced
//! by `:`, so a single relation keeps its own name as alias. An alias that
//! would shadow the root table or an earlier join gets a numeric suffix.

use crate::{error::SqlError, schema::Schema};
use query_builder::{
    ast::{
        common::TableRef,
        expr::{BinaryOperator, Expr},
        select::JoinClause,
    },
    qualified,
};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinState {
    aliases: HashMap<String, String>,
    clauses: Vec<JoinClause>,
}

impl JoinState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Joins every relation along `relations` that is not joined yet and
    /// returns the alias of the last one.
    pub fn resolve(
        &mut self,
        schema: &Schema,
        root: &str,
        relations: &[&str],
    ) -> Result<String, SqlError> {
        let mut owner_table = root.to_string();
        let mut owner_alias = root.to_string();
        let mut path = String::new();

        for relation_name in relations {
            if !path.is_empty() {
                path.push('.');
            }
            path.push_str(relation_name);

            let relation = schema.relation(&owner_table, relation_name)?;
            let alias = match self.aliases.get(&path) {
                Some(alias) => alias.clone(),
                None => {
                    let alias = self.unique_alias(root, &path);
                    let on = Expr::binary(
                        qualified(&alias, &relation.foreign_column),
                        BinaryOperator::Eq,
                        qualified(&owner_alias, &relation.local_column),
                    );
                    debug!(path = %path, table = %relation.table, alias = %alias, "Registering join");

                    self.clauses.push(JoinClause {
                        table: TableRef {
                            schema: schema.schema_of(&relation.table).map(String::from),
                            name: relation.table.clone(),
                        },
                        alias: (alias != relation.table).then(|| alias.clone()),
                        on,
                    });
                    self.aliases.insert(path.clone(), alias.clone());
                    alias
                }
            };

            owner_table = relation.table.clone();
            owner_alias = alias;
        }

        Ok(owner_alias)
    }

    fn unique_alias(&self, root: &str, path: &str) -> String {
        let base = path.replace('.', ":");
        let taken = |name: &str| name == root || self.aliases.values().any(|alias| alias == name);

        let mut alias = base.clone();
        let mut suffix = 1;
        while taken(&alias) {
            alias = format!("{base}_{suffix}");
            suffix += 1;
        }
        alias
    }

    /// The alias of an already joined relation path.
    pub fn alias(&self, path: &str) -> Option<&str> {
        self.aliases.get(path).map(String::as_str)
    }

    pub fn clauses(&self) -> &[JoinClause] {
        &self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{RelationMetadata, TableMetadata};

    fn schema() -> Schema {
        Schema::new()
            .with_table(
                "users",
                TableMetadata::new()
                    .with_relation("projects", RelationMetadata::has_many("projects", "user_id")),
            )
            .with_table(
                "projects",
                TableMetadata::new()
                    .with_relation("user", RelationMetadata::belongs_to("users", "user_id"))
                    .with_relation("tasks", RelationMetadata::has_many("tasks", "project_id")),
            )
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut joins = JoinState::new();

        let first = joins.resolve(&schema(), "users", &["projects"]).unwrap();
        let second = joins.resolve(&schema(), "users", &["projects"]).unwrap();

        assert_eq!(first, "projects");
        assert_eq!(second, "projects");
        assert_eq!(joins.len(), 1);
        assert_eq!(joins.clauses()[0].alias, None);
    }

    #[test]
    fn test_alias_differs_from_table() {
        let mut joins = JoinState::new();
        let alias = joins.resolve(&schema(), "projects", &["user"]).unwrap();

        assert_eq!(alias, "user");
        let clause = &joins.clauses()[0];
        assert_eq!(clause.table.name, "users");
        assert_eq!(clause.alias.as_deref(), Some("user"));
        assert_eq!(
            clause.on,
            Expr::binary(
                qualified("user", "id"),
                BinaryOperator::Eq,
                qualified("projects", "user_id")
            )
        );
    }

    #[test]
    fn test_nested_path_joins_transitively_once() {
        let mut joins = JoinState::new();

        let alias = joins.resolve(&schema(), "users", &["projects", "tasks"]).unwrap();
        joins.resolve(&schema(), "users", &["projects"]).unwrap();

        assert_eq!(alias, "projects:tasks");
        assert_eq!(joins.len(), 2);
        assert_eq!(joins.alias("projects.tasks"), Some("projects:tasks"));
        assert_eq!(
            joins.clauses()[1].on,
            Expr::binary(
                qualified("projects:tasks", "project_id"),
                BinaryOperator::Eq,
                qualified("projects", "id")
            )
        );
    }

    #[test]
    fn test_self_relation_gets_distinct_alias() {
        let schema = Schema::new().with_table(
            "users",
            TableMetadata::new()
                .with_relation("users", RelationMetadata::belongs_to("users", "manager_id")),
        );
        let mut joins = JoinState::new();

        let manager = joins.resolve(&schema, "users", &["users"]).unwrap();
        let grand = joins.resolve(&schema, "users", &["users", "users"]).unwrap();

        assert_eq!(manager, "users_1");
        assert_eq!(grand, "users:users");
        let clause = &joins.clauses()[0];
        assert_eq!(clause.alias.as_deref(), Some("users_1"));
        assert_eq!(
            clause.on,
            Expr::binary(
                qualified("users_1", "id"),
                BinaryOperator::Eq,
                qualified("users", "manager_id")
            )
        );
        assert_eq!(
            joins.clauses()[1].on,
            Expr::binary(
                qualified("users:users", "id"),
                BinaryOperator::Eq,
                qualified("users_1", "manager_id")
            )
        );
    }

    #[test]
    fn test_unknown_relation() {
        let mut joins = JoinState::new();
        let err = joins.resolve(&schema(), "users", &["roles"]).unwrap_err();

        assert!(matches!(
            err,
            SqlError::UnknownRelation { ref table, ref relation } if table == "users" && relation == "roles"
        ));
        assert!(joins.is_empty());
    }
}
