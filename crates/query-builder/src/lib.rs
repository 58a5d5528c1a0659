use crate::ast::expr::{Expr, Ident};
use model::Value;

pub mod ast;
pub mod build;
pub mod dialect;
pub mod macros;
pub mod render;

pub fn ident(name: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: None,
        name: name.to_string(),
    })
}

pub fn qualified(qualifier: &str, name: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: Some(qualifier.to_string()),
        name: name.to_string(),
    })
}

pub fn value(val: impl Into<Value>) -> Expr {
    Expr::Value(val.into())
}
