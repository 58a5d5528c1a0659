pub mod core;
pub mod error;

pub use crate::core::{
    condition::{CompoundCondition, Condition, FieldCondition, Operand, Pattern},
    operator::Operator,
    value::Value,
};
pub use error::ConditionError;
