use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InterpretError {
    #[error(
        "Unable to interpret `{operator}` condition. Did you forget to register interpreter for it?"
    )]
    UnknownOperator {
        operator: String,
        field: Option<String>,
    },

    #[error("Invalid value for `{operator}` on `{field}`: expected {expected}")]
    MalformedValue {
        operator: String,
        field: String,
        expected: String,
    },

    #[error("Operator `{operator}` expects a {expected}")]
    UnexpectedNode {
        operator: String,
        expected: &'static str,
    },
}

impl InterpretError {
    pub fn malformed(operator: impl ToString, field: &str, expected: &str) -> Self {
        InterpretError::MalformedValue {
            operator: operator.to_string(),
            field: field.to_string(),
            expected: expected.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, InterpretError>;
