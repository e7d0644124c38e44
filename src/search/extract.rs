//! Entity-side value extraction
//!
//! Reads the attribute a category refers to off an entity and reduces it to
//! comparable values. Extraction never fails: a missing attribute, an
//! unparseable date or an unknown category all produce an empty list.

use smallvec::smallvec;

use crate::common::traits::DateParser;
use crate::models::SearchableEntity;
use crate::search::category::Category;
use crate::search::value::{EntityValues, SearchValue};

/// Extract the values of `entity` that criteria of `category` compare
/// against
pub fn extract<E>(entity: &E, category: &Category, dates: &dyn DateParser) -> EntityValues
where
    E: SearchableEntity + ?Sized,
{
    match category {
        Category::EntityId | Category::RelationToId | Category::ValueTypeId => {
            smallvec![SearchValue::Int(entity.id())]
        }
        Category::EntityName => smallvec![SearchValue::from(entity.name())],
        Category::EntityDescription => entity
            .description()
            .map(SearchValue::from)
            .into_iter()
            .collect(),
        Category::EntityAliases => entity
            .aliases()
            .into_iter()
            .map(SearchValue::from)
            .collect(),
        Category::EntityCidocClass => smallvec![SearchValue::from(entity.cidoc_class())],
        Category::EntitySystemClass => smallvec![SearchValue::from(entity.system_class())],
        Category::TypeName => entity
            .types()
            .iter()
            .map(|node| SearchValue::from(node.name.as_str()))
            .collect(),
        Category::TypeId | Category::TypeIdWithSubs => entity
            .types()
            .iter()
            .map(|node| SearchValue::Int(node.id))
            .collect(),
        Category::Date(field) => entity
            .date(*field)
            .and_then(|raw| dates.parse_date(raw))
            .map(SearchValue::Date)
            .into_iter()
            .collect(),
        Category::Unknown(_) => EntityValues::new(),
    }
}
