//! Inventory monitoring: low-stock detection and trend series

use super::{MetricsError, MetricsResult};
use crate::filter::{FilterCriteria, FilterEngine};
use crate::model::{InventoryItem, SupplyChainData};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Per-day series for a single inventory item, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    pub item_id: String,
    pub dates: Vec<DateTime<Utc>>,
    pub values: Vec<f64>,
}

/// Read-only queries over the inventory collection.
#[derive(Debug, Default)]
pub struct InventoryMonitor {
    filter_engine: FilterEngine,
}

impl InventoryMonitor {
    pub fn new() -> Self {
        InventoryMonitor {
            filter_engine: FilterEngine::new(),
        }
    }

    /// Inventory items matching the given criteria.
    pub fn inventory_levels(
        &self,
        data: &SupplyChainData,
        criteria: &FilterCriteria,
    ) -> Vec<InventoryItem> {
        self.filter_engine.apply_filters(data, criteria).inventory
    }

    /// Items with quantity strictly below `threshold * reorder_point`.
    pub fn low_stock_items<'a>(
        &self,
        data: &'a SupplyChainData,
        threshold: f64,
    ) -> Vec<&'a InventoryItem> {
        data.inventory
            .iter()
            .filter(|item| item.quantity < threshold * item.reorder_point)
            .collect()
    }

    /// Synthetic trend series for one item over the trailing `days` days.
    ///
    /// There is no historical time-series store; the series is derived
    /// deterministically from the current quantity as a stand-in for a real
    /// backend. Day `i` of `n` carries
    /// `max(0, quantity * (1 + (i - n/2) * 0.05))`.
    pub fn inventory_trends(
        &self,
        data: &SupplyChainData,
        item_id: &str,
        days: u32,
    ) -> MetricsResult<TimeSeries> {
        let item = data
            .inventory
            .iter()
            .find(|i| i.id == item_id)
            .ok_or_else(|| MetricsError::ItemNotFound(item_id.to_string()))?;

        let end = Utc::now();
        let half = (days / 2) as f64;
        let mut dates = Vec::with_capacity(days as usize);
        let mut values = Vec::with_capacity(days as usize);

        for i in 0..days {
            dates.push(end - Duration::days((days - 1 - i) as i64));
            let variation = (i as f64 - half) * 0.05;
            values.push((item.quantity * (1.0 + variation)).max(0.0));
        }

        Ok(TimeSeries {
            item_id: item_id.to_string(),
            dates,
            values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SupplyChainData;
    use chrono::Utc;

    fn snapshot_with_item(quantity: f64, reorder_point: f64) -> SupplyChainData {
        let mut data = SupplyChainData::empty();
        data.inventory.push(InventoryItem {
            id: "inv-1".to_string(),
            name: "Bolt".to_string(),
            category: "parts".to_string(),
            location: "Hamburg".to_string(),
            quantity,
            unit: "pcs".to_string(),
            reorder_point,
            last_updated: Utc::now(),
        });
        data
    }

    #[test]
    fn test_low_stock_threshold_scales_reorder_point() {
        let monitor = InventoryMonitor::new();
        let data = snapshot_with_item(120.0, 100.0);
        assert!(monitor.low_stock_items(&data, 1.0).is_empty());
        assert_eq!(monitor.low_stock_items(&data, 1.5).len(), 1);
    }

    #[test]
    fn test_trends_unknown_item() {
        let monitor = InventoryMonitor::new();
        let data = snapshot_with_item(10.0, 100.0);
        let err = monitor.inventory_trends(&data, "missing", 7).unwrap_err();
        assert_eq!(err, MetricsError::ItemNotFound("missing".to_string()));
    }

    #[test]
    fn test_trends_deterministic_and_non_negative() {
        let monitor = InventoryMonitor::new();
        let data = snapshot_with_item(10.0, 100.0);

        let a = monitor.inventory_trends(&data, "inv-1", 30).unwrap();
        let b = monitor.inventory_trends(&data, "inv-1", 30).unwrap();
        assert_eq!(a.values, b.values);
        assert_eq!(a.values.len(), 30);
        assert!(a.values.iter().all(|v| *v >= 0.0));
    }

    #[test]
    fn test_trends_zero_days_is_empty() {
        let monitor = InventoryMonitor::new();
        let data = snapshot_with_item(10.0, 100.0);
        let series = monitor.inventory_trends(&data, "inv-1", 0).unwrap();
        assert!(series.dates.is_empty());
        assert!(series.values.is_empty());
    }
}
