use entity_search::{Catalog, Entity, Link, TypeNode, TypeRecord};
use entity_search::models::DateField;

/// Type ids of the sample hierarchy: root R with children C1 and C2, and G1
/// below C1
pub const TYPE_R: i64 = 100;
pub const TYPE_C1: i64 = 101;
pub const TYPE_C2: i64 = 102;
pub const TYPE_G1: i64 = 103;

/// Link type carrying numeric values
pub const VALUE_LINK_TYPE: i64 = 50;

/// Entity "A": a place in San Francisco tagged with C1
#[must_use]
pub fn entity_a() -> Entity {
    Entity::new(1, "San Francisco", "place", "E18")
        .with_description("Port city on the Pacific coast")
        .with_alias(11, "Yerba Buena")
        .with_type(TypeNode::new(TYPE_C1, "Harbour"))
        .with_date(DateField::BeginFrom, "1990-01-01")
}

/// Entity "B": a place in Rome tagged with G1
#[must_use]
pub fn entity_b() -> Entity {
    Entity::new(2, "Rome", "place", "E18")
        .with_type(TypeNode::new(TYPE_G1, "Capital"))
        .with_date(DateField::BeginFrom, "0753-04-21")
}

/// Entity "C": a person without types or dates
#[must_use]
pub fn entity_c() -> Entity {
    Entity::new(3, "Veii", "person", "E21")
}

/// An artifact with a measured value
#[must_use]
pub fn entity_measured() -> Entity {
    Entity::new(7, "Bronze Fibula", "artifact", "E22")
}

#[must_use]
pub fn sample_entities() -> Vec<Entity> {
    vec![entity_a(), entity_b(), entity_c(), entity_measured()]
}

/// Catalog holding the sample entities, the type tree and a few links
#[must_use]
pub fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for entity in sample_entities() {
        catalog.add_entity(entity);
    }

    for (id, name, parent) in [
        (TYPE_R, "Site", None),
        (TYPE_C1, "Harbour", Some(TYPE_R)),
        (TYPE_C2, "Burial", Some(TYPE_R)),
        (TYPE_G1, "Capital", Some(TYPE_C1)),
    ] {
        catalog.add_type(TypeRecord {
            id,
            name: name.to_string(),
            parent,
        });
    }

    // Relationship links
    catalog.add_link(Link::new(1, 2));
    // Value links
    catalog.add_link(
        Link::new(7, 200)
            .with_type(VALUE_LINK_TYPE)
            .with_description("42.5"),
    );
    catalog.add_link(
        Link::new(3, 200)
            .with_type(VALUE_LINK_TYPE)
            .with_description("12"),
    );

    catalog
}

/// Ids of the matched entities, in result order
#[must_use]
pub fn ids(matched: &[&Entity]) -> Vec<i64> {
    matched.iter().map(|entity| entity.id).collect()
}
