//! Defines the AST for SQL expressions.

use model::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column or table identifier, e.g., `users` or `users.id`.
    Identifier(Ident),

    /// A literal value, rendered as a bound parameter.
    Value(Value),

    /// A wildcard projection, e.g., `*` or `users.*`.
    Wildcard(Option<String>),

    /// A binary comparison, e.g., `column = 'value'`.
    BinaryOp(Box<BinaryOp>),

    /// A function call, e.g., `MOD(qty, 4)`.
    FunctionCall(FunctionCall),

    /// A membership test, e.g., `age IN (1, 2)` or `age NOT IN (1, 2)`.
    InList {
        expr: Box<Expr>,
        list: Vec<Expr>,
        negated: bool,
    },

    /// A null test, e.g., `address IS NULL` or `address IS NOT NULL`.
    IsNull { expr: Box<Expr>, negated: bool },

    /// A dialect-provided template such as `{field} ~* {pattern}`.
    ///
    /// Each `{name}` placeholder is replaced by the rendering of the
    /// matching argument.
    Template {
        template: String,
        args: Vec<(String, Expr)>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub qualifier: Option<String>, // e.g., the 'users' in 'users.id'
    pub name: String,              // e.g., the 'id' in 'users.id'
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Expr,
    pub op: BinaryOperator,
    pub right: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Eq,    // =
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=
}

impl Expr {
    pub fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Self {
        Expr::BinaryOp(Box::new(BinaryOp { left, op, right }))
    }

    pub fn function(name: &str, args: Vec<Expr>) -> Self {
        Expr::FunctionCall(FunctionCall {
            name: name.to_string(),
            args,
        })
    }

    pub fn in_list(expr: Expr, list: Vec<Expr>, negated: bool) -> Self {
        Expr::InList {
            expr: Box::new(expr),
            list,
            negated,
        }
    }

    pub fn is_null(expr: Expr, negated: bool) -> Self {
        Expr::IsNull {
            expr: Box::new(expr),
            negated,
        }
    }
}
