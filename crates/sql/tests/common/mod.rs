#![allow(dead_code)]

use sql::{Client, QueryConfig, RelationMetadata, Schema, SqlQuery, TableMetadata};
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// users 1-n projects 1-n tasks; each project belongs to a user.
pub fn schema() -> Schema {
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

pub fn query(client: Client, table: &str) -> SqlQuery {
    QueryConfig::new(client, schema()).query(table)
}

pub fn users() -> SqlQuery {
    query(Client::Pg, "users")
}

pub fn projects() -> SqlQuery {
    query(Client::Pg, "projects")
}
