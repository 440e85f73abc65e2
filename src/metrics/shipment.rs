//! Shipment listing, detail lookup and single-field search

use super::{MetricsError, MetricsResult};
use crate::filter::{FilterCriteria, FilterEngine};
use crate::model::{Shipment, SupplyChainData};
use serde::Serialize;

/// Fields the single-field shipment search accepts.
const SEARCHABLE_FIELDS: [&str; 4] = ["id", "origin", "destination", "current_location"];

/// A shipment joined with its supplier's name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipmentDetails {
    pub shipment: Shipment,
    /// None when the supplier id does not resolve.
    pub supplier_name: Option<String>,
}

/// Shipment queries over a snapshot.
#[derive(Debug, Default)]
pub struct ShipmentTracker {
    filter_engine: FilterEngine,
}

impl ShipmentTracker {
    pub fn new() -> Self {
        ShipmentTracker {
            filter_engine: FilterEngine::new(),
        }
    }

    /// Shipments matching the given criteria.
    pub fn list_shipments(
        &self,
        data: &SupplyChainData,
        criteria: &FilterCriteria,
    ) -> Vec<Shipment> {
        self.filter_engine.apply_filters(data, criteria).shipments
    }

    /// One shipment with its supplier name resolved.
    pub fn shipment_details(
        &self,
        data: &SupplyChainData,
        shipment_id: &str,
    ) -> MetricsResult<ShipmentDetails> {
        let shipment = data
            .shipments
            .iter()
            .find(|s| s.id == shipment_id)
            .ok_or_else(|| MetricsError::ShipmentNotFound(shipment_id.to_string()))?;

        let supplier_name = data
            .suppliers
            .iter()
            .find(|s| s.id == shipment.supplier_id)
            .map(|s| s.name.clone());

        Ok(ShipmentDetails {
            shipment: shipment.clone(),
            supplier_name,
        })
    }

    /// Case-insensitive search in exactly one of the routing fields.
    pub fn search_shipments(
        &self,
        data: &SupplyChainData,
        query: &str,
        field: &str,
    ) -> MetricsResult<Vec<Shipment>> {
        if !SEARCHABLE_FIELDS.contains(&field) {
            return Err(MetricsError::InvalidSearchField(field.to_string()));
        }
        let result = self
            .filter_engine
            .search(data, query, &[field.to_string()]);
        Ok(result.shipments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ShipmentStatus;
    use chrono::Utc;

    fn snapshot() -> SupplyChainData {
        let now = Utc::now();
        let mut data = SupplyChainData::empty();
        data.shipments.push(Shipment {
            id: "shp-1".to_string(),
            origin: "Hamburg".to_string(),
            destination: "Oslo".to_string(),
            current_location: "Copenhagen".to_string(),
            status: ShipmentStatus::InTransit,
            estimated_delivery: now,
            actual_delivery: None,
            items: vec!["item-1".to_string()],
            supplier_id: "sup-1".to_string(),
            created_at: now,
            updated_at: now,
        });
        data
    }

    #[test]
    fn test_details_missing_shipment() {
        let tracker = ShipmentTracker::new();
        let err = tracker.shipment_details(&snapshot(), "ghost").unwrap_err();
        assert_eq!(err, MetricsError::ShipmentNotFound("ghost".to_string()));
    }

    #[test]
    fn test_details_without_supplier() {
        let tracker = ShipmentTracker::new();
        let details = tracker.shipment_details(&snapshot(), "shp-1").unwrap();
        assert_eq!(details.supplier_name, None);
    }

    #[test]
    fn test_search_field_validation() {
        let tracker = ShipmentTracker::new();
        let err = tracker
            .search_shipments(&snapshot(), "ham", "status")
            .unwrap_err();
        assert_eq!(err, MetricsError::InvalidSearchField("status".to_string()));

        let hits = tracker
            .search_shipments(&snapshot(), "HAM", "origin")
            .unwrap();
        assert_eq!(hits.len(), 1);
    }
}
