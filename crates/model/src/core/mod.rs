pub mod condition;
pub mod operator;
pub mod value;
