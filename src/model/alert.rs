//! Alert record emitted by the rule engine
//!
//! Alerts are never persisted; they are recomputed on every generation pass
//! and only acknowledgment state survives, keyed by the generated id.

use super::ParseError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which rule set produced an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    ShipmentDelay,
    LowStock,
    SupplierPerformance,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::ShipmentDelay => "shipment_delay",
            AlertType::LowStock => "low_stock",
            AlertType::SupplierPerformance => "supplier_performance",
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordinal severity rank. Derives `Ord` with `Low` lowest so monotonicity
/// properties can be asserted directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Low => "low",
            AlertSeverity::Medium => "medium",
            AlertSeverity::High => "high",
            AlertSeverity::Critical => "critical",
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AlertSeverity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(AlertSeverity::Low),
            "medium" => Ok(AlertSeverity::Medium),
            "high" => Ok(AlertSeverity::High),
            "critical" => Ok(AlertSeverity::Critical),
            other => Err(ParseError::new("alert severity", other)),
        }
    }
}

/// A single triggered condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Generated unique id, fresh on every generation pass.
    pub id: String,
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub message: String,
    /// Id of the shipment, inventory item or supplier the alert concerns.
    pub entity_id: String,
    pub created_at: DateTime<Utc>,
    pub acknowledged: bool,
    /// Set exactly when `acknowledged` transitions to true.
    pub acknowledged_at: Option<DateTime<Utc>>,
}
