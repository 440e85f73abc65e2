//! Supplier record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A supplier and its stored performance scores.
///
/// `on_time_delivery_rate` is stored redundantly with the value the supplier
/// tracker recomputes from delivered shipments; the tracker prefers the
/// recomputed figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub contact: String,
    /// Overall performance score, 0-100.
    pub performance_score: f64,
    /// Stored on-time delivery percentage, 0-100.
    pub on_time_delivery_rate: f64,
    /// Quality rating, 0-100.
    pub quality_score: f64,
    /// Mean lead time in days.
    pub average_lead_time: f64,
    pub total_shipments: u64,
    pub last_updated: DateTime<Utc>,
}
