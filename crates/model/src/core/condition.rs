//! The condition tree consumed by the interpreters.
//!
//! A tree is built once (usually by an upstream parser or deserialized from
//! JSON) and is never mutated afterwards.

use crate::{
    core::{operator::Operator, value::Value},
    error::ConditionError,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Condition {
    Compound(CompoundCondition),
    Field(FieldCondition),
}

/// A leaf comparing one field against an operand, e.g. `age > 18`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldCondition {
    pub operator: Operator,
    /// Field name, possibly a dotted path such as `projects.name`.
    pub field: String,
    pub value: Operand,
}

/// An internal node combining child conditions, e.g. `and(a, b)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CompoundParts")]
pub struct CompoundCondition {
    pub operator: Operator,
    pub children: Vec<Condition>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CompoundParts {
    operator: Operator,
    children: Vec<Condition>,
}

impl TryFrom<CompoundParts> for CompoundCondition {
    type Error = ConditionError;

    fn try_from(parts: CompoundParts) -> Result<Self, Self::Error> {
        CompoundCondition::new(parts.operator, parts.children)
    }
}

/// Right-hand side of a field condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    /// A nested condition, used by structural operators like `elemMatch`.
    Condition(Box<Condition>),
    Pattern(Pattern),
    Value(Value),
}

/// A regular expression operand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pattern {
    #[serde(rename = "$regex")]
    pub source: String,
    #[serde(rename = "$ignoreCase", default)]
    pub ignore_case: bool,
}

impl Condition {
    pub fn field(
        operator: impl Into<Operator>,
        field: impl Into<String>,
        value: impl Into<Operand>,
    ) -> Self {
        Condition::Field(FieldCondition::new(operator, field, value))
    }

    pub fn compound(
        operator: impl Into<Operator>,
        children: Vec<Condition>,
    ) -> Result<Self, ConditionError> {
        CompoundCondition::new(operator, children).map(Condition::Compound)
    }

    pub fn operator(&self) -> &Operator {
        match self {
            Condition::Field(field) => &field.operator,
            Condition::Compound(compound) => &compound.operator,
        }
    }

    /// The field a leaf targets; `None` for compound nodes.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Condition::Field(field) => Some(&field.field),
            Condition::Compound(_) => None,
        }
    }

    pub fn as_field(&self) -> Option<&FieldCondition> {
        match self {
            Condition::Field(field) => Some(field),
            Condition::Compound(_) => None,
        }
    }

    pub fn as_compound(&self) -> Option<&CompoundCondition> {
        match self {
            Condition::Compound(compound) => Some(compound),
            Condition::Field(_) => None,
        }
    }
}

impl FieldCondition {
    pub fn new(
        operator: impl Into<Operator>,
        field: impl Into<String>,
        value: impl Into<Operand>,
    ) -> Self {
        Self {
            operator: operator.into(),
            field: field.into(),
            value: value.into(),
        }
    }
}

impl CompoundCondition {
    pub fn new(
        operator: impl Into<Operator>,
        children: Vec<Condition>,
    ) -> Result<Self, ConditionError> {
        let operator = operator.into();
        if children.is_empty() {
            return Err(ConditionError::EmptyCompound(operator.to_string()));
        }
        Ok(Self { operator, children })
    }
}

impl Operand {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Operand::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_pattern(&self) -> Option<&Pattern> {
        match self {
            Operand::Pattern(pattern) => Some(pattern),
            _ => None,
        }
    }

    pub fn as_condition(&self) -> Option<&Condition> {
        match self {
            Operand::Condition(condition) => Some(condition),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Condition(_) => "condition",
            Operand::Pattern(_) => "pattern",
            Operand::Value(value) => value.type_name(),
        }
    }
}

impl Pattern {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ignore_case: false,
        }
    }

    pub fn case_insensitive(mut self) -> Self {
        self.ignore_case = true;
        self
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Value(value)
    }
}

impl From<Pattern> for Operand {
    fn from(pattern: Pattern) -> Self {
        Operand::Pattern(pattern)
    }
}

impl From<Condition> for Operand {
    fn from(condition: Condition) -> Self {
        Operand::Condition(Box::new(condition))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Operand {
    fn from(items: Vec<T>) -> Self {
        Operand::Value(Value::from(items))
    }
}

macro_rules! impl_operand_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Operand {
                fn from(v: $ty) -> Self {
                    Operand::Value(Value::from(v))
                }
            }
        )*
    };
}

impl_operand_from!(bool, i32, i64, u32, f32, f64, String, &str);
