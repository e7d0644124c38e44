//! Lookup traits over the type hierarchy and relationship links
//!
//! Both traits assume consistent data: a lookup for an unknown id returns an
//! empty list rather than an error.

use crate::models::Link;

/// Access to the type tree
pub trait TypeHierarchy {
    /// Ids of the direct children of a type. Callers recurse for deeper
    /// descendants.
    fn sub_type_ids(&self, type_id: i64) -> Vec<i64>;
}

/// Access to relationship links between entities
pub trait LinkLookup {
    /// Ids of all entities reachable from `entity_id` through relationship
    /// links
    fn linked_entity_ids(&self, entity_id: i64) -> Vec<i64>;

    /// All links whose type is `link_type_id`
    fn links_for_type(&self, link_type_id: i64) -> Vec<Link>;
}

impl<T: TypeHierarchy + ?Sized> TypeHierarchy for &T {
    fn sub_type_ids(&self, type_id: i64) -> Vec<i64> {
        (**self).sub_type_ids(type_id)
    }
}

impl<T: LinkLookup + ?Sized> LinkLookup for &T {
    fn linked_entity_ids(&self, entity_id: i64) -> Vec<i64> {
        (**self).linked_entity_ids(entity_id)
    }

    fn links_for_type(&self, link_type_id: i64) -> Vec<Link> {
        (**self).links_for_type(link_type_id)
    }
}
