//! Operator evaluation
//!
//! Decides whether the values extracted from one entity satisfy a criterion.
//! Comparisons run over the cross product of search values and entity
//! values; the logical operator decides whether any or all search values
//! must succeed.

use crate::error::Result;
use crate::search::operator::{LogicalOperator, Operator, wrong_operator};
use crate::search::value::SearchValue;

/// Evaluate one criterion against the values of one entity
///
/// # Arguments
/// * `entity_values` - Values extracted from the entity
/// * `operator` - The comparison operator
/// * `search_values` - Resolved values of the criterion
/// * `logical_operator` - Whether any or all search values must match
/// * `is_date_comparable` - Whether ordering operators are allowed
///
/// # Errors
/// Returns `WrongOperator` for an ordering operator on a criterion that is
/// not date comparable.
pub fn evaluate(
    entity_values: &[SearchValue],
    operator: Operator,
    search_values: &[SearchValue],
    logical_operator: LogicalOperator,
    is_date_comparable: bool,
) -> Result<bool> {
    // Absent data never satisfies a substring or ordering test
    if entity_values.is_empty() && (operator == Operator::Like || is_date_comparable) {
        return Ok(false);
    }

    if operator.is_ordering() && !is_date_comparable {
        return Err(wrong_operator(operator, logical_operator, is_date_comparable));
    }

    let test = |search: &SearchValue| -> bool {
        match operator {
            Operator::Equal | Operator::NotEqual => entity_values.contains(search),
            Operator::Like => match logical_operator {
                LogicalOperator::Or => {
                    let needle = search.as_text();
                    entity_values
                        .iter()
                        .any(|value| value.as_text().contains(needle.as_ref()))
                }
                LogicalOperator::And => joined(entity_values).contains(search.as_text().as_ref()),
            },
            // Inverted naming: the entity value is the left-hand side
            Operator::GreaterThan => entity_values.iter().all(|value| search < value),
            Operator::GreaterThanEqual => entity_values.iter().all(|value| search <= value),
            Operator::LesserThan => entity_values.iter().all(|value| search > value),
            Operator::LesserThanEqual => entity_values.iter().all(|value| search >= value),
        }
    };

    let matched = match (operator, logical_operator) {
        (Operator::NotEqual, LogicalOperator::Or) => !search_values.iter().any(test),
        (Operator::NotEqual, LogicalOperator::And) => !search_values.iter().all(test),
        (_, LogicalOperator::Or) => search_values.iter().any(test),
        (_, LogicalOperator::And) => search_values.iter().all(test),
    };

    Ok(matched)
}

/// Entity values joined by single spaces, for `like` with `and`
fn joined(values: &[SearchValue]) -> String {
    values
        .iter()
        .map(|value| value.as_text())
        .collect::<Vec<_>>()
        .join(" ")
}
