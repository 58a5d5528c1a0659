use crate::error::InterpretError;

/// Describes what an interpretation produces.
///
/// The accumulator is the "result so far" that handlers receive and return.
/// It may borrow from the input (the in-memory target borrows the document
/// being tested), hence the lifetime parameter. Services are read-only
/// helpers shared by every handler of a single interpretation.
pub trait Target: Sized + 'static {
    type Accumulator<'a>;
    type Services;
    type Error: From<InterpretError> + std::error::Error;
}
