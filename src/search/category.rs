//! Search categories
//!
//! A category decides both which entity attribute a criterion reads and how
//! the criterion's raw values are resolved.

use std::fmt;
use std::str::FromStr;

use crate::models::DateField;

/// The attribute a criterion searches on
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    EntityId,
    EntityName,
    EntityDescription,
    EntityAliases,
    EntityCidocClass,
    EntitySystemClass,
    TypeName,
    TypeId,
    TypeIdWithSubs,
    Date(DateField),
    RelationToId,
    ValueTypeId,
    /// A category name this engine does not know
    Unknown(String),
}

impl Category {
    /// Whether the category's values are dates and support ordering operators
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Whether the criterion is always compared with `equal`, regardless of
    /// the operator it was submitted with
    #[must_use]
    pub const fn forces_equal(&self) -> bool {
        matches!(self, Self::RelationToId | Self::ValueTypeId)
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "entityID" => Self::EntityId,
            "entityName" => Self::EntityName,
            "entityDescription" => Self::EntityDescription,
            "entityAliases" => Self::EntityAliases,
            "entityCidocClass" => Self::EntityCidocClass,
            "entitySystemClass" => Self::EntitySystemClass,
            "typeName" => Self::TypeName,
            "typeID" => Self::TypeId,
            "typeIDWithSubs" => Self::TypeIdWithSubs,
            "beginFrom" => Self::Date(DateField::BeginFrom),
            "beginTo" => Self::Date(DateField::BeginTo),
            "endFrom" => Self::Date(DateField::EndFrom),
            "endTo" => Self::Date(DateField::EndTo),
            "relationToID" => Self::RelationToId,
            "valueTypeID" => Self::ValueTypeId,
            other => Self::Unknown(other.to_string()),
        })
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(category) => category,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntityId => write!(f, "entityID"),
            Self::EntityName => write!(f, "entityName"),
            Self::EntityDescription => write!(f, "entityDescription"),
            Self::EntityAliases => write!(f, "entityAliases"),
            Self::EntityCidocClass => write!(f, "entityCidocClass"),
            Self::EntitySystemClass => write!(f, "entitySystemClass"),
            Self::TypeName => write!(f, "typeName"),
            Self::TypeId => write!(f, "typeID"),
            Self::TypeIdWithSubs => write!(f, "typeIDWithSubs"),
            Self::Date(field) => write!(f, "{field}"),
            Self::RelationToId => write!(f, "relationToID"),
            Self::ValueTypeId => write!(f, "valueTypeID"),
            Self::Unknown(name) => write!(f, "{name}"),
        }
    }
}
