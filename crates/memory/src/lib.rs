//! Evaluates condition trees against in-memory documents.
//!
//! ```ignore
//! let condition = Condition::field("gt", "age", 18);
//! assert!(memory::interpret(&condition, &Value::from(json!({"age": 21})))?);
//! ```

pub mod defaults;
pub mod matcher;
pub mod operators;
pub mod target;

pub use matcher::Matcher;
pub use operators::default_registry;
pub use target::{Comparator, Evaluation, Getter, Memory, Options};

use interpreter::{InterpretError, Interpreter, Registry, compile};
use lazy_static::lazy_static;
use model::{Condition, Value};

lazy_static! {
    static ref DEFAULT_MATCHER: Matcher = Matcher::default();
}

/// Tests `object` against `condition` with the built-in operators and the
/// default `get`/`compare` services.
pub fn interpret(condition: &Condition, object: &Value) -> Result<bool, InterpretError> {
    DEFAULT_MATCHER.matches(condition, object)
}

/// Compiles a registry into an interpreter over raw [`Evaluation`]s.
pub fn create_interpreter(registry: Registry<Memory>) -> Interpreter<Memory> {
    compile(registry)
}
