//! Comparison operators and logical combinators

use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// Comparison operator of a criterion.
///
/// The ordering operators read from the entity's point of view:
/// `GreaterThan` holds when the entity value is greater than the search
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equal,
    NotEqual,
    Like,
    GreaterThan,
    GreaterThanEqual,
    LesserThan,
    LesserThanEqual,
}

impl Operator {
    /// Whether the operator compares by ordering rather than membership
    #[must_use]
    pub const fn is_ordering(self) -> bool {
        matches!(
            self,
            Self::GreaterThan | Self::GreaterThanEqual | Self::LesserThan | Self::LesserThanEqual
        )
    }
}

/// Operator name outside the known set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator '{0}'")]
pub struct ParseOperatorError(pub String);

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equal" => Ok(Self::Equal),
            "notEqual" => Ok(Self::NotEqual),
            "like" => Ok(Self::Like),
            "greaterThan" => Ok(Self::GreaterThan),
            "greaterThanEqual" => Ok(Self::GreaterThanEqual),
            "lesserThan" => Ok(Self::LesserThan),
            "lesserThanEqual" => Ok(Self::LesserThanEqual),
            other => Err(ParseOperatorError(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => write!(f, "equal"),
            Self::NotEqual => write!(f, "notEqual"),
            Self::Like => write!(f, "like"),
            Self::GreaterThan => write!(f, "greaterThan"),
            Self::GreaterThanEqual => write!(f, "greaterThanEqual"),
            Self::LesserThan => write!(f, "lesserThan"),
            Self::LesserThanEqual => write!(f, "lesserThanEqual"),
        }
    }
}

/// How the values within one criterion combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogicalOperator {
    And,
    #[default]
    Or,
}

impl FromStr for LogicalOperator {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "and" => Ok(Self::And),
            "or" => Ok(Self::Or),
            other => Err(SearchError::UnknownLogicalOperator(other.to_string())),
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
        }
    }
}

/// Build the configuration error for an operator that has no semantics in
/// the given context
#[must_use]
pub fn wrong_operator(
    operator: impl fmt::Display,
    logical_operator: LogicalOperator,
    date_comparable: bool,
) -> SearchError {
    SearchError::WrongOperator {
        operator: operator.to_string(),
        logical_operator: logical_operator.to_string(),
        date_comparable,
    }
}
