use crate::config::Client;
use interpreter::InterpretError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SqlError {
    #[error("{operator} operator does not support {client} database")]
    UnsupportedTarget { operator: String, client: Client },

    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Unknown relation `{relation}` on table `{table}`")]
    UnknownRelation { table: String, relation: String },

    #[error(transparent)]
    Interpret(#[from] InterpretError),

    #[error("Invalid query configuration: {0}")]
    Config(String),
}
