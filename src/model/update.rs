//! Change-intent record applied by the data access layer

use super::ParseError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Entity types that accept field updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Shipment,
    Inventory,
    Supplier,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Shipment => "shipment",
            EntityKind::Inventory => "inventory",
            EntityKind::Supplier => "supplier",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shipment" => Ok(EntityKind::Shipment),
            "inventory" => Ok(EntityKind::Inventory),
            "supplier" => Ok(EntityKind::Supplier),
            other => Err(ParseError::new("entity kind", other)),
        }
    }
}

/// A request to change one field of one entity.
///
/// Values travel as strings; the data layer parses `new_value` into the
/// field's native type when it applies the update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub entity_kind: EntityKind,
    pub entity_id: String,
    /// Field name as it appears in the CSV header.
    pub field: String,
    pub old_value: String,
    pub new_value: String,
    /// Stamped onto the entity's updated_at / last_updated field.
    pub timestamp: DateTime<Utc>,
}

impl StatusUpdate {
    pub fn new(
        entity_kind: EntityKind,
        entity_id: impl Into<String>,
        field: impl Into<String>,
        old_value: impl Into<String>,
        new_value: impl Into<String>,
    ) -> Self {
        StatusUpdate {
            entity_kind,
            entity_id: entity_id.into(),
            field: field.into(),
            old_value: old_value.into(),
            new_value: new_value.into(),
            timestamp: Utc::now(),
        }
    }
}
