//! Comparison Operators

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors parsing an operator symbol.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OperatorError {
    /// The symbol is not a known operator.
    #[error("Unknown operator: {0}")]
    Unknown(String),
}

/// Comparison applied between a measured value (left) and a configured threshold (right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Equal
    #[serde(rename = "=")]
    Eq,

    /// Not equal
    #[serde(rename = "!=")]
    Neq,

    /// Less than
    #[serde(rename = "<")]
    Lt,

    /// Less than or equal
    #[serde(rename = "<=")]
    Lte,

    /// Greater than
    #[serde(rename = ">")]
    Gt,

    /// Greater than or equal
    #[serde(rename = ">=")]
    Gte,
}

impl Operator {
    /// All operators.
    pub const ALL: [Operator; 6] = [
        Operator::Eq,
        Operator::Neq,
        Operator::Lt,
        Operator::Lte,
        Operator::Gt,
        Operator::Gte,
    ];

    /// Compare `lhs` against `rhs`.
    pub fn compare<T: PartialOrd + ?Sized>(self, lhs: &T, rhs: &T) -> bool {
        match self {
            Operator::Eq => lhs == rhs,
            Operator::Neq => lhs != rhs,
            Operator::Lt => lhs < rhs,
            Operator::Lte => lhs <= rhs,
            Operator::Gt => lhs > rhs,
            Operator::Gte => lhs >= rhs,
        }
    }

    /// Symbol used in configuration.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Neq => "!=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = OperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s.trim();

        Self::ALL
            .into_iter()
            .find(|operator| operator.symbol() == symbol)
            .ok_or_else(|| OperatorError::Unknown(s.to_string()))
    }
}
