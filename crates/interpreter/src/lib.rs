//! Operator registry and dispatch core shared by every interpretation target.
//!
//! A target (in-memory evaluation, SQL generation, ...) describes the value
//! threaded through interpretation by implementing [`Target`]. Handlers for
//! that target are collected in a [`Registry`], which [`compile`] turns into
//! an [`Interpreter`]. The core only dispatches: compound handlers recurse
//! into their children through [`Context::interpret`].

pub mod context;
pub mod error;
pub mod registry;
pub mod target;

pub use context::Context;
pub use error::{InterpretError, Result};
pub use registry::{Handler, Registry};
pub use target::Target;

use model::{CompoundCondition, Condition, FieldCondition};

/// A compiled registry, ready to interpret condition trees.
pub struct Interpreter<T: Target> {
    registry: Registry<T>,
}

/// Binds a registry into an interpreter.
pub fn compile<T: Target>(registry: Registry<T>) -> Interpreter<T> {
    Interpreter { registry }
}

impl<T: Target> Interpreter<T> {
    /// Interprets `condition` starting from `accumulator`, returning the
    /// accumulator produced by the root handler.
    pub fn interpret<'a>(
        &'a self,
        condition: &Condition,
        accumulator: T::Accumulator<'a>,
        services: &'a T::Services,
    ) -> std::result::Result<T::Accumulator<'a>, T::Error> {
        Context::new(&self.registry, services).interpret(condition, accumulator)
    }

    pub fn registry(&self) -> &Registry<T> {
        &self.registry
    }
}

impl<T: Target> Clone for Interpreter<T> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

/// Returns the leaf a field handler was invoked with.
pub fn expect_field(condition: &Condition) -> Result<&FieldCondition> {
    condition
        .as_field()
        .ok_or_else(|| InterpretError::UnexpectedNode {
            operator: condition.operator().to_string(),
            expected: "field condition",
        })
}

/// Returns the node a compound handler was invoked with.
pub fn expect_compound(condition: &Condition) -> Result<&CompoundCondition> {
    condition
        .as_compound()
        .ok_or_else(|| InterpretError::UnexpectedNode {
            operator: condition.operator().to_string(),
            expected: "compound condition",
        })
}
