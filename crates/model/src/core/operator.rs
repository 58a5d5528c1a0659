use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

/// Operator named by a condition node.
///
/// The known operators are enumerated so they can be matched exhaustively;
/// anything else is carried as `Custom` and resolved purely by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
    // Comparison
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
    Within,
    Nin,
    Exists,
    Mod,
    Regex,

    // Structural
    ElemMatch,

    // Logical
    And,
    Or,
    Not,
    Nor,

    Custom(String),
}

impl Operator {
    /// The registry key of this operator.
    pub fn name(&self) -> &str {
        match self {
            Operator::Eq => "eq",
            Operator::Ne => "ne",
            Operator::Lt => "lt",
            Operator::Lte => "lte",
            Operator::Gt => "gt",
            Operator::Gte => "gte",
            Operator::In => "in",
            Operator::Within => "within",
            Operator::Nin => "nin",
            Operator::Exists => "exists",
            Operator::Mod => "mod",
            Operator::Regex => "regex",
            Operator::ElemMatch => "elemMatch",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Not => "not",
            Operator::Nor => "nor",
            Operator::Custom(name) => name,
        }
    }

    pub fn is_compound(&self) -> bool {
        matches!(
            self,
            Operator::And | Operator::Or | Operator::Not | Operator::Nor
        )
    }
}

impl FromStr for Operator {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "eq" => Operator::Eq,
            "ne" => Operator::Ne,
            "lt" => Operator::Lt,
            "lte" => Operator::Lte,
            "gt" => Operator::Gt,
            "gte" => Operator::Gte,
            "in" => Operator::In,
            "within" => Operator::Within,
            "nin" => Operator::Nin,
            "exists" => Operator::Exists,
            "mod" => Operator::Mod,
            "regex" => Operator::Regex,
            "elemMatch" => Operator::ElemMatch,
            "and" => Operator::And,
            "or" => Operator::Or,
            "not" => Operator::Not,
            "nor" => Operator::Nor,
            other => Operator::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Operator {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(op) => op,
            Err(never) => match never {},
        }
    }
}

impl From<String> for Operator {
    fn from(s: String) -> Self {
        Operator::from(s.as_str())
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.name().to_string()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
