use std::path::Path;

use entity_search::collections::CatalogSnapshot;
use entity_search::error::SearchError;
use entity_search::{Catalog, LinkLookup, TypeHierarchy};

use crate::utils::{TYPE_C1, TYPE_C2, TYPE_G1, TYPE_R, VALUE_LINK_TYPE, sample_catalog};

#[test]
fn test_catalog_type_hierarchy() {
    let catalog = sample_catalog();

    assert_eq!(catalog.sub_type_ids(TYPE_R), vec![TYPE_C1, TYPE_C2]);
    assert_eq!(catalog.sub_type_ids(TYPE_C1), vec![TYPE_G1]);
    assert!(catalog.sub_type_ids(TYPE_G1).is_empty());
}

#[test]
fn test_catalog_links() {
    let catalog = sample_catalog();

    // 3 and 7 share the range entity 200
    let mut reached = catalog.linked_entity_ids(7);
    reached.sort_unstable();
    assert_eq!(reached, vec![3, 200]);
    assert_eq!(catalog.linked_entity_ids(2), vec![1]);

    let values: Vec<f64> = catalog
        .links_for_type(VALUE_LINK_TYPE)
        .iter()
        .filter_map(|link| link.numeric_value())
        .collect();
    assert_eq!(values, vec![42.5, 12.0]);
}

#[test]
fn test_catalog_from_snapshot() {
    let snapshot: CatalogSnapshot = serde_json::from_str(
        r#"{
            "entities": [
                {"id": 1, "name": "Carnuntum", "system_class": "place", "cidoc_class": "E18",
                 "aliases": {"5": "Petronell"}, "types": [{"id": 9, "name": "Castrum"}],
                 "begin_from": "0006-01-01"}
            ],
            "types": [{"id": 8, "name": "Military"}, {"id": 9, "name": "Castrum", "parent": 8}]
        }"#,
    )
    .unwrap();
    let catalog = Catalog::from_snapshot(snapshot);

    assert_eq!(catalog.entities().len(), 1);
    assert_eq!(catalog.entities()[0].aliases.get(&5).map(String::as_str), Some("Petronell"));
    assert_eq!(catalog.sub_type_ids(8), vec![9]);
    assert!(catalog.links().is_empty());
}

#[test]
fn test_load_missing_snapshot() {
    let path = Path::new("/nonexistent/snapshot.json");

    let result = Catalog::load(path);

    assert!(matches!(result, Err(SearchError::Io { ref path, .. }) if path == Path::new("/nonexistent/snapshot.json")));
}
