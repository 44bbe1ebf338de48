use std::fmt;

use serde::{Deserialize, Serialize};

/// Post identifier as the like endpoints send it back, either a number or a string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostPk {
    Int(i64),
    Str(String),
}

impl fmt::Display for PostPk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostPk::Int(pk) => write!(f, "{pk}"),
            PostPk::Str(pk) => write!(f, "{pk}"),
        }
    }
}

impl From<i64> for PostPk {
    fn from(value: i64) -> Self {
        PostPk::Int(value)
    }
}

impl From<&str> for PostPk {
    /// Numeric only when the text round-trips exactly, so `042` stays `042`.
    fn from(value: &str) -> Self {
        match value.parse::<i64>() {
            Ok(pk) if pk.to_string() == value => PostPk::Int(pk),
            _ => PostPk::Str(value.to_string()),
        }
    }
}
