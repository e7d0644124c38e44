//! Criterion resolution
//!
//! Turns raw criteria into [`ResolvedCriterion`]s: parses operators,
//! lowercases strings, parses date bounds and expands the indirect
//! categories through the type hierarchy and the relationship links.

use itertools::Itertools;
use log::{debug, warn};
use rustc_hash::FxHashSet;

use crate::common::traits::{DateParser, LinkLookup, TypeHierarchy};
use crate::config::{DuplicateCategoryPolicy, SearchConfig};
use crate::error::{Result, SearchError};
use crate::search::category::Category;
use crate::search::criterion::{RawCriterion, RawValue, ResolvedCriterion};
use crate::search::evaluate::evaluate;
use crate::search::operator::{LogicalOperator, Operator, wrong_operator};
use crate::search::value::SearchValue;

/// Collect every descendant of `type_id`, depth first, without the type
/// itself. Types already visited are skipped, so a cyclic hierarchy
/// terminates.
pub fn collect_sub_type_ids(hierarchy: &dyn TypeHierarchy, type_id: i64) -> Vec<i64> {
    let mut visited = FxHashSet::default();
    visited.insert(type_id);
    descendants(hierarchy, type_id, &mut visited)
}

fn descendants(
    hierarchy: &dyn TypeHierarchy,
    type_id: i64,
    visited: &mut FxHashSet<i64>,
) -> Vec<i64> {
    let mut found = Vec::new();
    for child in hierarchy.sub_type_ids(type_id) {
        if visited.insert(child) {
            found.push(child);
            found.extend(descendants(hierarchy, child, visited));
        }
    }
    found
}

/// Resolves raw criteria against the collaborators of one search call
pub struct CriterionResolver<'a> {
    types: &'a dyn TypeHierarchy,
    links: &'a dyn LinkLookup,
    dates: &'a dyn DateParser,
    config: &'a SearchConfig,
}

impl<'a> CriterionResolver<'a> {
    #[must_use]
    pub fn new(
        types: &'a dyn TypeHierarchy,
        links: &'a dyn LinkLookup,
        dates: &'a dyn DateParser,
        config: &'a SearchConfig,
    ) -> Self {
        Self {
            types,
            links,
            dates,
            config,
        }
    }

    /// Resolve every criterion of a search call.
    ///
    /// Repeated categories are handled according to
    /// [`SearchConfig::duplicate_categories`]: with `LastWins` the later
    /// criterion takes the slot of an earlier one from the same group.
    /// Criteria from different groups never replace each other.
    pub fn resolve_all(&self, raw: &[RawCriterion]) -> Result<Vec<ResolvedCriterion>> {
        let mut resolved: Vec<ResolvedCriterion> = Vec::with_capacity(raw.len());
        let mut groups: Vec<usize> = Vec::with_capacity(raw.len());

        for criterion in raw {
            let next = self.resolve(criterion)?;

            if self.config.duplicate_categories == DuplicateCategoryPolicy::LastWins {
                let slot = resolved.iter().zip(&groups).position(|(r, group)| {
                    *group == criterion.group && r.category == next.category
                });
                if let Some(slot) = slot {
                    warn!(
                        "Criterion for category '{}' replaces an earlier one in group {}",
                        next.category, criterion.group
                    );
                    resolved[slot] = next;
                    continue;
                }
            }

            resolved.push(next);
            groups.push(criterion.group);
        }

        Ok(resolved)
    }

    /// Resolve a single criterion
    ///
    /// # Errors
    /// Returns an error if the operator or logical operator is unknown, if a
    /// value has the wrong shape for the category, or, in strict mode, if the
    /// category is unknown.
    pub fn resolve(&self, raw: &RawCriterion) -> Result<ResolvedCriterion> {
        let category = Category::from(raw.category.as_str());
        if !category.is_known() {
            if self.config.strict_categories {
                return Err(SearchError::UnknownCategory(raw.category.clone()));
            }
            warn!(
                "Unknown search category '{}'; no entity has values for it",
                raw.category
            );
        }

        let logical_operator = raw.parsed_logical_operator()?;
        let is_date_comparable = category.is_date();
        let operator: Operator = raw
            .operator
            .parse()
            .map_err(|_| wrong_operator(&raw.operator, logical_operator, is_date_comparable))?;

        let search_values = match &category {
            Category::TypeIdWithSubs => self.type_ids_with_subs(&category, &raw.values)?,
            Category::RelationToId => self.related_entity_ids(&category, &raw.values)?,
            Category::ValueTypeId => {
                self.value_type_entity_ids(&category, &raw.values, operator, logical_operator)?
            }
            Category::Date(_) => self.date_bounds(&category, &raw.values)?,
            _ => raw.values.iter().map(plain_value).collect(),
        };

        let operator = if category.forces_equal() {
            Operator::Equal
        } else {
            operator
        };
        // Rejected up front, independent of which entities reach this criterion
        if operator.is_ordering() && !is_date_comparable {
            return Err(wrong_operator(operator, logical_operator, is_date_comparable));
        }

        debug!(
            "Resolved {category} {operator}/{logical_operator} to {} search values",
            search_values.len()
        );

        Ok(ResolvedCriterion {
            category,
            operator,
            search_values,
            logical_operator,
            is_date_comparable,
        })
    }

    /// Given type ids followed by all their descendants, first occurrence
    /// kept
    fn type_ids_with_subs(
        &self,
        category: &Category,
        values: &[RawValue],
    ) -> Result<Vec<SearchValue>> {
        let roots = integer_ids(category, values)?;
        let subs = roots
            .iter()
            .flat_map(|id| collect_sub_type_ids(self.types, *id))
            .collect::<Vec<_>>();

        Ok(roots
            .into_iter()
            .chain(subs)
            .unique()
            .map(SearchValue::Int)
            .collect())
    }

    /// Entities linked to any of the given entity ids
    fn related_entity_ids(
        &self,
        category: &Category,
        values: &[RawValue],
    ) -> Result<Vec<SearchValue>> {
        Ok(integer_ids(category, values)?
            .into_iter()
            .flat_map(|id| self.links.linked_entity_ids(id))
            .unique()
            .map(SearchValue::Int)
            .collect())
    }

    /// Domain entities of value links that satisfy the submitted
    /// `(link type, number)` pairs under the criterion's own operator
    fn value_type_entity_ids(
        &self,
        category: &Category,
        values: &[RawValue],
        operator: Operator,
        logical_operator: LogicalOperator,
    ) -> Result<Vec<SearchValue>> {
        let mut ids = Vec::new();

        for value in values {
            let RawValue::Pair(link_type_id, number) = value else {
                return Err(SearchError::invalid_value(
                    category.to_string(),
                    value,
                    "expected a [link type id, number] pair",
                ));
            };
            let bound = [SearchValue::Float(*number)];

            for link in self.links.links_for_type(*link_type_id) {
                let Some(link_value) = link.numeric_value() else {
                    continue;
                };
                if evaluate(
                    &[SearchValue::Float(link_value)],
                    operator,
                    &bound,
                    logical_operator,
                    true,
                )? {
                    ids.push(link.domain_id);
                }
            }
        }

        Ok(ids.into_iter().unique().map(SearchValue::Int).collect())
    }

    /// Date bounds parsed through the date parser
    fn date_bounds(&self, category: &Category, values: &[RawValue]) -> Result<Vec<SearchValue>> {
        values
            .iter()
            .map(|value| match value {
                RawValue::Text(raw) => self
                    .dates
                    .parse_date(raw)
                    .map(SearchValue::Date)
                    .ok_or_else(|| {
                        SearchError::invalid_value(category.to_string(), value, "not a valid date")
                    }),
                other => Err(SearchError::invalid_value(
                    category.to_string(),
                    other,
                    "dates must be given as strings",
                )),
            })
            .collect()
    }
}

/// A raw value as a comparable value, strings lowercased
fn plain_value(value: &RawValue) -> SearchValue {
    match value {
        RawValue::Integer(n) => SearchValue::Int(*n),
        RawValue::Float(x) => SearchValue::Float(*x),
        RawValue::Text(s) => SearchValue::from(s.as_str()),
        RawValue::Pair(id, x) => SearchValue::Text(format!("({id}, {x})")),
    }
}

fn integer_ids(category: &Category, values: &[RawValue]) -> Result<Vec<i64>> {
    values
        .iter()
        .map(|value| match value {
            RawValue::Integer(id) => Ok(*id),
            other => Err(SearchError::invalid_value(
                category.to_string(),
                other,
                "expected an integer id",
            )),
        })
        .collect()
}
