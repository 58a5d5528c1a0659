use crate::{
    operators::default_registry,
    target::{Evaluation, Memory, Options},
};
use interpreter::{InterpretError, Interpreter, Registry, compile};
use model::{Condition, Value};

/// A compiled registry paired with the services it runs with.
#[derive(Clone)]
pub struct Matcher {
    interpreter: Interpreter<Memory>,
    options: Options,
}

impl Matcher {
    pub fn new(registry: Registry<Memory>, options: Options) -> Self {
        Self {
            interpreter: compile(registry),
            options,
        }
    }

    /// Returns whether `object` satisfies `condition`.
    pub fn matches(&self, condition: &Condition, object: &Value) -> Result<bool, InterpretError> {
        let evaluation =
            self.interpreter
                .interpret(condition, Evaluation::new(object), &self.options)?;
        Ok(evaluation.matched)
    }

    /// Keeps only the objects that satisfy `condition`.
    pub fn filter<'o>(
        &self,
        condition: &Condition,
        objects: &'o [Value],
    ) -> Result<Vec<&'o Value>, InterpretError> {
        let mut matched = Vec::new();
        for object in objects {
            if self.matches(condition, object)? {
                matched.push(object);
            }
        }
        Ok(matched)
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(default_registry(), Options::default())
    }
}
