//! Criterion-based entity search
//!
//! This module implements a small query language over research entities.
//! A search is a list of criteria; each criterion names a category, an
//! operator, one or more values and a logical operator.
//!
//! # Pipeline
//!
//! ```text
//! RawCriterion ──► CriterionResolver ──► ResolvedCriterion
//!                                              │
//! Entity ──► extract (per category) ──► evaluate ──► OrFilter ──► matches
//! ```
//!
//! Criteria are resolved once per search. Resolution expands the indirect
//! categories: `typeIDWithSubs` through the type hierarchy, `relationToID`
//! through relationship links, and `valueTypeID` through the numeric values
//! stored on value links.

pub mod category;
pub mod criterion;
pub mod date;
pub mod engine;
pub mod evaluate;
pub mod extract;
pub mod filter;
pub mod operator;
pub mod resolve;
pub mod value;

pub use category::Category;
pub use criterion::{RawCriterion, RawValue, ResolvedCriterion, parse_search_request};
pub use date::ChronoDateParser;
pub use engine::{SearchEngine, search};
pub use evaluate::evaluate;
pub use extract::extract;
pub use filter::{CriterionFilter, Filter, OrFilter};
pub use operator::{LogicalOperator, Operator};
pub use resolve::{CriterionResolver, collect_sub_type_ids};
pub use value::{EntityValues, SearchValue};
