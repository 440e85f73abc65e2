//! Shipment record and status lifecycle

use super::ParseError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Pending,
    InTransit,
    Delayed,
    Delivered,
}

impl ShipmentStatus {
    /// Wire value used in CSV cells and filter criteria.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipmentStatus::Pending => "pending",
            ShipmentStatus::InTransit => "in_transit",
            ShipmentStatus::Delayed => "delayed",
            ShipmentStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShipmentStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ShipmentStatus::Pending),
            "in_transit" => Ok(ShipmentStatus::InTransit),
            "delayed" => Ok(ShipmentStatus::Delayed),
            "delivered" => Ok(ShipmentStatus::Delivered),
            other => Err(ParseError::new("shipment status", other)),
        }
    }
}

/// A shipment moving between two locations.
///
/// `supplier_id` references a [`super::Supplier`] in the unfiltered dataset.
/// Well-formed data has `actual_delivery` set exactly when the status is
/// `Delivered`; the data layer does not enforce this on load and the
/// delivery-rate calculators key off `actual_delivery` presence alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub current_location: String,
    pub status: ShipmentStatus,
    pub estimated_delivery: DateTime<Utc>,
    pub actual_delivery: Option<DateTime<Utc>>,
    /// Identifiers of the items carried, in load order.
    pub items: Vec<String>,
    pub supplier_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Shipment {
    /// Whether the shipment was delivered on or before its estimate.
    /// `None` when it has not been delivered yet.
    pub fn delivered_on_time(&self) -> Option<bool> {
        self.actual_delivery
            .map(|actual| actual <= self.estimated_delivery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            ShipmentStatus::Pending,
            ShipmentStatus::InTransit,
            ShipmentStatus::Delayed,
            ShipmentStatus::Delivered,
        ] {
            assert_eq!(status.as_str().parse::<ShipmentStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_status_rejects_unknown() {
        let err = "lost".parse::<ShipmentStatus>().unwrap_err();
        assert_eq!(err.kind, "shipment status");
    }
}
