use entity_search::error::SearchError;
use entity_search::{RawValue, parse_search_request, search};

use crate::utils::{ids, sample_catalog};

/// Test a request in the API's JSON format from parsing to results
#[test]
fn test_request_end_to_end() {
    let catalog = sample_catalog();
    let criteria = parse_search_request(
        r#"[
            {"entityName": [{"operator": "like", "values": ["rome"], "logicalOperator": "or"}]},
            {"valueTypeID": [{"operator": "greaterThanEqual", "values": [[50, 40]]}]}
        ]"#,
    )
    .unwrap();

    assert_eq!(criteria.len(), 2);
    assert_eq!(criteria[1].values, vec![RawValue::Pair(50, 40.0)]);

    let matched = ids(&search(catalog.entities(), &criteria, &catalog, &catalog).unwrap());
    assert_eq!(matched, vec![2, 7]);
}

/// A category repeated in separate request objects keeps both conditions
#[test]
fn test_repeated_category_across_objects() {
    let catalog = sample_catalog();
    let criteria = parse_search_request(
        r#"[
            {"entityName": [{"operator": "equal", "values": ["rome"]}]},
            {"entityName": [{"operator": "equal", "values": ["veii"]}]}
        ]"#,
    )
    .unwrap();

    let matched = ids(&search(catalog.entities(), &criteria, &catalog, &catalog).unwrap());
    assert_eq!(matched, vec![2, 3]);
}

/// Within one request object the later criterion of a category replaces
/// the earlier one
#[test]
fn test_repeated_category_within_object() {
    let catalog = sample_catalog();
    let criteria = parse_search_request(
        r#"[{"entityName": [
            {"operator": "equal", "values": ["rome"]},
            {"operator": "equal", "values": ["veii"]}
        ]}]"#,
    )
    .unwrap();

    let matched = ids(&search(catalog.entities(), &criteria, &catalog, &catalog).unwrap());
    assert_eq!(matched, vec![3]);
}

/// Categories within one request object come out in name order
#[test]
fn test_request_category_order() {
    let criteria = parse_search_request(
        r#"[{"typeID": [{"operator": "equal", "values": [101]}],
             "entityID": [{"operator": "equal", "values": [1]}, {"operator": "equal", "values": [2]}]}]"#,
    )
    .unwrap();

    let categories: Vec<&str> = criteria.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(categories, vec!["entityID", "entityID", "typeID"]);
    assert_eq!(criteria[1].values, vec![RawValue::Integer(2)]);
}

#[test]
fn test_request_with_mixed_values() {
    let catalog = sample_catalog();
    let criteria = parse_search_request(
        r#"[{"entityID": [{"operator": "equal", "values": [3, "1"], "logicalOperator": "or"}]}]"#,
    )
    .unwrap();

    // The string "1" is not the integer 1
    let matched = ids(&search(catalog.entities(), &criteria, &catalog, &catalog).unwrap());
    assert_eq!(matched, vec![3]);
}

#[test]
fn test_malformed_request() {
    let missing_values = parse_search_request(r#"[{"entityName": [{"operator": "equal"}]}]"#);
    assert!(matches!(missing_values, Err(SearchError::Json(_))));

    let not_json = parse_search_request("entityName=rome");
    assert!(matches!(not_json, Err(ref err) if err.is_client_error()));
}
