use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionError {
    /// A compound node was built without children.
    #[error("Compound condition `{0}` requires at least one child")]
    EmptyCompound(String),
}
