//! Relation metadata used to turn dotted field paths into joins.

use crate::error::SqlError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tables keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub tables: HashMap<String, TableMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableMetadata {
    /// Database schema the table lives in, e.g. `public`.
    #[serde(default)]
    pub schema: Option<String>,
    /// Relations keyed by the name used in field paths.
    #[serde(default)]
    pub relations: HashMap<String, RelationMetadata>,
}

/// How a related table is reached: the join matches
/// `related.foreign_column = owner.local_column`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationMetadata {
    pub table: String,
    pub local_column: String,
    pub foreign_column: String,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, name: &str, table: TableMetadata) -> Self {
        self.tables.insert(name.to_string(), table);
        self
    }

    pub fn table(&self, name: &str) -> Result<&TableMetadata, SqlError> {
        self.tables
            .get(name)
            .ok_or_else(|| SqlError::UnknownTable(name.to_string()))
    }

    /// Looks up `relation` on `table`.
    pub fn relation(&self, table: &str, relation: &str) -> Result<&RelationMetadata, SqlError> {
        self.table(table)?
            .relations
            .get(relation)
            .ok_or_else(|| SqlError::UnknownRelation {
                table: table.to_string(),
                relation: relation.to_string(),
            })
    }

    /// The database schema of `table`, if it is known and has one.
    pub fn schema_of(&self, table: &str) -> Option<&str> {
        self.tables.get(table).and_then(|t| t.schema.as_deref())
    }
}

impl TableMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_schema(mut self, schema: &str) -> Self {
        self.schema = Some(schema.to_string());
        self
    }

    pub fn with_relation(mut self, name: &str, relation: RelationMetadata) -> Self {
        self.relations.insert(name.to_string(), relation);
        self
    }
}

impl RelationMetadata {
    pub fn new(table: &str, local_column: &str, foreign_column: &str) -> Self {
        Self {
            table: table.to_string(),
            local_column: local_column.to_string(),
            foreign_column: foreign_column.to_string(),
        }
    }

    /// The owner holds `foreign_key` pointing at `table.id`.
    pub fn belongs_to(table: &str, foreign_key: &str) -> Self {
        Self::new(table, foreign_key, "id")
    }

    /// `table` holds `foreign_key` pointing at the owner's `id`.
    pub fn has_many(table: &str, foreign_key: &str) -> Self {
        Self::new(table, "id", foreign_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_lookup() {
        let schema = Schema::new().with_table(
            "users",
            TableMetadata::new().with_relation("projects", RelationMetadata::has_many("projects", "user_id")),
        );

        let relation = schema.relation("users", "projects").unwrap();
        assert_eq!(relation.local_column, "id");
        assert_eq!(relation.foreign_column, "user_id");

        assert!(matches!(
            schema.relation("users", "roles"),
            Err(SqlError::UnknownRelation { ref relation, .. }) if relation == "roles"
        ));
        assert!(matches!(schema.relation("posts", "user"), Err(SqlError::UnknownTable(_))));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let schema: Schema = serde_json::from_str(
            r#"{"tables": {
                "projects": {"relations": {"user": {"table": "users", "local_column": "user_id", "foreign_column": "id"}}},
                "users": {"schema": "app"}
            }}"#,
        )
        .unwrap();

        assert_eq!(
            schema.relation("projects", "user").unwrap(),
            &RelationMetadata::belongs_to("users", "user_id")
        );
        assert_eq!(schema.schema_of("users"), Some("app"));
        assert_eq!(schema.schema_of("projects"), None);
    }
}
