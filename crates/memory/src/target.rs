use crate::defaults;
use interpreter::{InterpretError, Target};
use model::Value;
use std::cmp::Ordering;

/// Resolves a (possibly dotted) field of a document.
pub type Getter = fn(&Value, &str) -> Option<Value>;

/// Orders a document value against an operand. `None` means incomparable.
pub type Comparator = fn(&Value, &Value) -> Option<Ordering>;

/// The in-memory evaluation target.
pub struct Memory;

impl Target for Memory {
    type Accumulator<'a> = Evaluation<'a>;
    type Services = Options;
    type Error = InterpretError;
}

/// The document under test together with the verdict reached so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation<'a> {
    pub subject: &'a Value,
    pub matched: bool,
}

impl<'a> Evaluation<'a> {
    pub fn new(subject: &'a Value) -> Self {
        Self {
            subject,
            matched: false,
        }
    }

    pub fn with(self, matched: bool) -> Self {
        Self { matched, ..self }
    }
}

/// Services available to every in-memory handler.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub get: Getter,
    pub compare: Comparator,
}

impl Options {
    pub fn with_get(mut self, get: Getter) -> Self {
        self.get = get;
        self
    }

    pub fn with_compare(mut self, compare: Comparator) -> Self {
        self.compare = compare;
        self
    }

    pub(crate) fn equal(&self, actual: &Value, expected: &Value) -> bool {
        (self.compare)(actual, expected) == Some(Ordering::Equal)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            get: defaults::get,
            compare: defaults::compare,
        }
    }
}
