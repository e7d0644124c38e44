//! In-memory entity catalog
//!
//! This module provides a collection of entities, type records and links
//! indexed for the lookups the search engine needs. It stands in for the
//! storage layer when searching a JSON snapshot, and serves as the reference
//! implementation of [`TypeHierarchy`] and [`LinkLookup`].

use std::collections::VecDeque;
use std::path::Path;

use log::info;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::common::traits::{LinkLookup, TypeHierarchy};
use crate::error::Result;
use crate::error::util::read_json_file;
use crate::models::{Entity, Link, TypeRecord};

/// Serialized form of a catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub types: Vec<TypeRecord>,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Entities, type hierarchy and links of one snapshot
#[derive(Debug, Default)]
pub struct Catalog {
    /// Entities in load order
    entities: Vec<Entity>,
    /// Type records indexed by ID
    types: FxHashMap<i64, TypeRecord>,
    /// Child type ids indexed by parent ID, in load order
    children: FxHashMap<i64, Vec<i64>>,
    links: Vec<Link>,
    /// Neighbours in either link direction, indexed by entity ID
    neighbours: FxHashMap<i64, Vec<i64>>,
}

impl Catalog {
    /// Create a new empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from a snapshot
    #[must_use]
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        let mut catalog = Self::new();
        for entity in snapshot.entities {
            catalog.add_entity(entity);
        }
        for record in snapshot.types {
            catalog.add_type(record);
        }
        for link in snapshot.links {
            catalog.add_link(link);
        }
        catalog
    }

    /// Load a catalog from a JSON snapshot file
    pub fn load(path: &Path) -> Result<Self> {
        let snapshot: CatalogSnapshot = read_json_file(path)?;
        info!(
            "Loaded {} entities, {} types and {} links from {}",
            snapshot.entities.len(),
            snapshot.types.len(),
            snapshot.links.len(),
            path.display()
        );
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn add_type(&mut self, record: TypeRecord) {
        if let Some(parent) = record.parent {
            self.children.entry(parent).or_default().push(record.id);
        }
        self.types.insert(record.id, record);
    }

    pub fn add_link(&mut self, link: Link) {
        self.neighbours
            .entry(link.domain_id)
            .or_default()
            .push(link.range_id);
        self.neighbours
            .entry(link.range_id)
            .or_default()
            .push(link.domain_id);
        self.links.push(link);
    }

    /// All entities in load order
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    #[must_use]
    pub fn type_record(&self, type_id: i64) -> Option<&TypeRecord> {
        self.types.get(&type_id)
    }

    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }
}

impl TypeHierarchy for Catalog {
    fn sub_type_ids(&self, type_id: i64) -> Vec<i64> {
        self.children.get(&type_id).cloned().unwrap_or_default()
    }
}

impl LinkLookup for Catalog {
    /// Breadth-first traversal over links in both directions. The start
    /// entity is not part of the result.
    fn linked_entity_ids(&self, entity_id: i64) -> Vec<i64> {
        let mut visited = FxHashSet::default();
        visited.insert(entity_id);
        let mut queue = VecDeque::from([entity_id]);
        let mut reached = Vec::new();

        while let Some(current) = queue.pop_front() {
            let Some(next) = self.neighbours.get(&current) else {
                continue;
            };
            for &neighbour in next {
                if visited.insert(neighbour) {
                    reached.push(neighbour);
                    queue.push_back(neighbour);
                }
            }
        }

        reached
    }

    fn links_for_type(&self, link_type_id: i64) -> Vec<Link> {
        self.links
            .iter()
            .filter(|link| link.type_id == Some(link_type_id))
            .cloned()
            .collect()
    }
}
