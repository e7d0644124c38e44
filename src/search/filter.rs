//! Generic filtering framework
//!
//! A trait-based approach to deciding whether an entity passes a search. A
//! resolved criterion becomes a [`CriterionFilter`]; the criteria of one
//! search are combined by an [`OrFilter`].
//!
//! Combination happens on two levels. Within one criterion, its logical
//! operator decides whether any or all of its values must match. Across
//! criteria, an entity passes when at least one criterion matches it; the
//! criteria's own logical operators play no part at that level.

use std::fmt::{self, Debug};

use rustc_hash::FxHashSet;

use crate::common::traits::DateParser;
use crate::error::Result;
use crate::models::SearchableEntity;
use crate::search::category::Category;
use crate::search::criterion::ResolvedCriterion;
use crate::search::evaluate::evaluate;
use crate::search::extract::extract;

/// A filter that can be applied to any entity type
pub trait Filter<T: ?Sized>: Debug {
    /// Decide whether the input passes the filter
    ///
    /// # Errors
    /// Returns an error if the filter has no defined semantics for its
    /// operator.
    fn matches(&self, input: &T) -> Result<bool>;

    /// Returns the set of categories read by this filter
    fn required_categories(&self) -> FxHashSet<Category>;
}

/// A filter backed by one resolved criterion
pub struct CriterionFilter<'a> {
    criterion: ResolvedCriterion,
    dates: &'a dyn DateParser,
}

impl<'a> CriterionFilter<'a> {
    /// Create a new criterion filter
    #[must_use]
    pub fn new(criterion: ResolvedCriterion, dates: &'a dyn DateParser) -> Self {
        Self { criterion, dates }
    }

    #[must_use]
    pub const fn criterion(&self) -> &ResolvedCriterion {
        &self.criterion
    }
}

impl Debug for CriterionFilter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CriterionFilter")
            .field("criterion", &self.criterion)
            .finish_non_exhaustive()
    }
}

impl<E: SearchableEntity + ?Sized> Filter<E> for CriterionFilter<'_> {
    fn matches(&self, input: &E) -> Result<bool> {
        let criterion = &self.criterion;
        let entity_values = extract(input, &criterion.category, self.dates);

        evaluate(
            &entity_values,
            criterion.operator,
            &criterion.search_values,
            criterion.logical_operator,
            criterion.is_date_comparable,
        )
    }

    fn required_categories(&self) -> FxHashSet<Category> {
        let mut categories = FxHashSet::default();
        categories.insert(self.criterion.category.clone());
        categories
    }
}

/// A filter that combines multiple filters with a logical OR.
///
/// An empty OR filter matches nothing.
#[derive(Debug)]
pub struct OrFilter<F> {
    filters: Vec<F>,
}

impl<F> OrFilter<F> {
    /// Create a new OR filter
    #[must_use]
    pub fn new(filters: Vec<F>) -> Self {
        Self { filters }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl<T: ?Sized, F: Filter<T>> Filter<T> for OrFilter<F> {
    fn matches(&self, input: &T) -> Result<bool> {
        for filter in &self.filters {
            if filter.matches(input)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn required_categories(&self) -> FxHashSet<Category> {
        let mut categories = FxHashSet::default();
        for filter in &self.filters {
            categories.extend(filter.required_categories());
        }
        categories
    }
}
