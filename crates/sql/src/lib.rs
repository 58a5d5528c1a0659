//! Translates condition trees into relational `SELECT` queries.
//!
//! Field conditions become WHERE predicates, compound conditions become
//! bracketed groups, and dotted fields (`projects.name`) become inner joins
//! driven by the relation metadata in [`Schema`].

pub mod config;
pub mod error;
pub mod join;
pub mod operators;
pub mod query;
pub mod regex;
pub mod schema;
pub mod target;

pub use config::{Client, QueryConfig};
pub use error::SqlError;
pub use join::JoinState;
pub use operators::default_registry;
pub use query::SqlQuery;
pub use schema::{RelationMetadata, Schema, TableMetadata};
pub use target::Sql;

use interpreter::{Interpreter, Registry, compile};
use lazy_static::lazy_static;
use model::Condition;

lazy_static! {
    static ref DEFAULT_INTERPRETER: Interpreter<Sql> = compile(default_registry());
}

/// Narrows `query` by `condition` using the built-in operators.
pub fn interpret(condition: &Condition, query: SqlQuery) -> Result<SqlQuery, SqlError> {
    DEFAULT_INTERPRETER.interpret(condition, query, &())
}

pub fn create_interpreter(registry: Registry<Sql>) -> Interpreter<Sql> {
    compile(registry)
}
