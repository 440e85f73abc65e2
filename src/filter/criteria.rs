//! Structured filter criteria

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Criteria for reducing a snapshot. Every field is optional; set fields
/// combine with AND semantics. Criteria that do not apply to an entity type
/// (e.g. `category` for shipments) are silently ignored for that type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Inclusive range matched against each entity's reference timestamp
    /// (estimated_delivery for shipments, last_updated otherwise).
    pub date_range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    /// Status wire values, e.g. `in_transit` or `congested`.
    pub status: Option<Vec<String>>,
    pub location: Option<Vec<String>>,
    pub category: Option<Vec<String>>,
    pub search_query: Option<String>,
    /// Field names the search query is matched against.
    pub search_fields: Option<Vec<String>>,
}

impl FilterCriteria {
    /// Criteria with every filter cleared; applying it is the identity
    /// operation. This is also the "reset filters" state.
    pub fn new() -> Self {
        FilterCriteria::default()
    }

    /// True when no filter is set.
    pub fn is_empty(&self) -> bool {
        self.date_range.is_none()
            && self.status.is_none()
            && self.location.is_none()
            && self.category.is_none()
            && self.search_query.is_none()
    }
}
