//! Search orchestration
//!
//! Resolves the criteria of a search once, then runs every entity through
//! the resulting filter.

use log::info;

use crate::common::traits::{DateParser, LinkLookup, TypeHierarchy};
use crate::config::SearchConfig;
use crate::error::Result;
use crate::models::SearchableEntity;
use crate::search::criterion::{RawCriterion, ResolvedCriterion};
use crate::search::date::ChronoDateParser;
use crate::search::filter::{CriterionFilter, Filter, OrFilter};
use crate::search::resolve::CriterionResolver;

/// Search engine bound to the lookups of one storage snapshot
pub struct SearchEngine<'a> {
    types: &'a dyn TypeHierarchy,
    links: &'a dyn LinkLookup,
    dates: &'a dyn DateParser,
    config: SearchConfig,
}

impl<'a> SearchEngine<'a> {
    /// Create a new search engine
    ///
    /// # Arguments
    /// * `types` - Type hierarchy used by `typeIDWithSubs`
    /// * `links` - Relationship links used by `relationToID` and `valueTypeID`
    /// * `dates` - Parser for stored and submitted dates
    /// * `config` - Search configuration
    #[must_use]
    pub fn new(
        types: &'a dyn TypeHierarchy,
        links: &'a dyn LinkLookup,
        dates: &'a dyn DateParser,
        config: SearchConfig,
    ) -> Self {
        Self {
            types,
            links,
            dates,
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Resolve criteria without running them
    pub fn resolve(&self, criteria: &[RawCriterion]) -> Result<Vec<ResolvedCriterion>> {
        CriterionResolver::new(self.types, self.links, self.dates, &self.config)
            .resolve_all(criteria)
    }

    /// Keep the entities that match at least one criterion, in input order
    ///
    /// # Errors
    /// Returns an error if a criterion is malformed: an unknown operator or
    /// logical operator, a value of the wrong shape, or an operator without
    /// semantics for its category.
    pub fn search<'e, E: SearchableEntity>(
        &self,
        entities: &'e [E],
        criteria: &[RawCriterion],
    ) -> Result<Vec<&'e E>> {
        let filter = OrFilter::new(
            self.resolve(criteria)?
                .into_iter()
                .map(|criterion| CriterionFilter::new(criterion, self.dates))
                .collect(),
        );

        let mut matched = Vec::new();
        for entity in entities {
            if filter.matches(entity)? {
                matched.push(entity);
            }
        }

        info!(
            "Search with {} criteria matched {} of {} entities",
            filter.len(),
            matched.len(),
            entities.len()
        );

        Ok(matched)
    }
}

/// Filter `entities` by `criteria` with the default configuration and date
/// parser
///
/// # Errors
/// See [`SearchEngine::search`].
pub fn search<'e, E: SearchableEntity>(
    entities: &'e [E],
    criteria: &[RawCriterion],
    types: &dyn TypeHierarchy,
    links: &dyn LinkLookup,
) -> Result<Vec<&'e E>> {
    let dates = ChronoDateParser::default();
    SearchEngine::new(types, links, &dates, SearchConfig::default()).search(entities, criteria)
}
