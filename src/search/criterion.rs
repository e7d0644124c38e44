//! Raw and resolved search criteria
//!
//! A [`RawCriterion`] is what the API layer hands over; a
//! [`ResolvedCriterion`] is the same condition with its operator parsed and
//! its values turned into comparable [`SearchValue`]s.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::search::category::Category;
use crate::search::operator::{LogicalOperator, Operator};
use crate::search::value::SearchValue;

/// One raw comparison value as submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Integer(i64),
    Float(f64),
    Text(String),
    /// `(link type id, number)` for value-type searches, `[id, number]` in
    /// JSON
    Pair(i64, f64),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "'{s}'"),
            Self::Pair(id, x) => write!(f, "({id}, {x})"),
        }
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for RawValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<(i64, f64)> for RawValue {
    fn from((id, x): (i64, f64)) -> Self {
        Self::Pair(id, x)
    }
}

/// A search condition as submitted by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCriterion {
    pub category: String,
    pub operator: String,
    pub values: Vec<RawValue>,
    /// `and` or `or`; `or` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_operator: Option<String>,
    /// Index of the request object the criterion came from. A repeated
    /// category only replaces criteria of the same group.
    #[serde(default)]
    pub group: usize,
}

impl RawCriterion {
    #[must_use]
    pub fn new<V: Into<RawValue>>(
        category: impl Into<String>,
        operator: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self {
            category: category.into(),
            operator: operator.into(),
            values: values.into_iter().map(Into::into).collect(),
            logical_operator: None,
            group: 0,
        }
    }

    #[must_use]
    pub fn with_logical_operator(mut self, logical_operator: impl Into<String>) -> Self {
        self.logical_operator = Some(logical_operator.into());
        self
    }

    #[must_use]
    pub fn in_group(mut self, group: usize) -> Self {
        self.group = group;
        self
    }

    /// The parsed logical operator, defaulting to `or`
    pub fn parsed_logical_operator(&self) -> Result<LogicalOperator> {
        self.logical_operator
            .as_deref()
            .map_or(Ok(LogicalOperator::default()), |s| s.parse())
    }
}

/// A criterion ready for evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCriterion {
    pub category: Category,
    pub operator: Operator,
    pub search_values: Vec<SearchValue>,
    pub logical_operator: LogicalOperator,
    pub is_date_comparable: bool,
}

/// A criterion body as it appears in the API's JSON, keyed by category
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CriterionBody {
    operator: String,
    values: Vec<RawValue>,
    #[serde(default)]
    logical_operator: Option<String>,
}

/// Parse the API's JSON search request
///
/// The request is a list of objects mapping category names to lists of
/// criteria:
///
/// ```json
/// [{"entityName": [{"operator": "like", "values": ["rome"], "logicalOperator": "or"}]}]
/// ```
///
/// Criteria of one category keep their submitted order. Each criterion
/// records the index of the object it came from in [`RawCriterion::group`].
pub fn parse_search_request(json: &str) -> Result<Vec<RawCriterion>> {
    let groups: Vec<BTreeMap<String, Vec<CriterionBody>>> = serde_json::from_str(json)?;

    Ok(groups
        .into_iter()
        .enumerate()
        .flat_map(|(index, group)| {
            group.into_iter().flat_map(move |(category, bodies)| {
                bodies.into_iter().map(move |body| RawCriterion {
                    category: category.clone(),
                    operator: body.operator,
                    values: body.values,
                    logical_operator: body.logical_operator,
                    group: index,
                })
            })
        })
        .collect())
}
