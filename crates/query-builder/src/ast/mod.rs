pub mod common;
pub mod expr;
pub mod filter;
pub mod select;
