//! Headline dashboard metrics

use crate::filter::{FilterCriteria, FilterEngine};
use crate::model::{ShipmentStatus, SupplyChainData};
use serde::Serialize;

/// Key counts and averages shown on the main dashboard.
///
/// The four per-status shipment counts always sum to `total_shipments`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub total_shipments: usize,
    pub in_transit_count: usize,
    pub delayed_count: usize,
    pub delivered_count: usize,
    pub pending_count: usize,
    /// Items with quantity below their reorder point.
    pub low_stock_count: usize,
    pub total_inventory_items: usize,
    pub total_suppliers: usize,
    /// Arithmetic mean of supplier performance scores; 0.0 when there are
    /// no suppliers, never NaN.
    pub average_supplier_performance: f64,
}

/// Computes dashboard metrics from a snapshot.
#[derive(Debug, Default)]
pub struct Dashboard {
    filter_engine: FilterEngine,
}

impl Dashboard {
    pub fn new() -> Self {
        Dashboard {
            filter_engine: FilterEngine::new(),
        }
    }

    /// Metrics over the whole snapshot.
    pub fn metrics(&self, data: &SupplyChainData) -> DashboardMetrics {
        let count_status = |status: ShipmentStatus| {
            data.shipments.iter().filter(|s| s.status == status).count()
        };

        let total_suppliers = data.suppliers.len();
        let average_supplier_performance = if total_suppliers > 0 {
            data.suppliers
                .iter()
                .map(|s| s.performance_score)
                .sum::<f64>()
                / total_suppliers as f64
        } else {
            0.0
        };

        DashboardMetrics {
            total_shipments: data.shipments.len(),
            in_transit_count: count_status(ShipmentStatus::InTransit),
            delayed_count: count_status(ShipmentStatus::Delayed),
            delivered_count: count_status(ShipmentStatus::Delivered),
            pending_count: count_status(ShipmentStatus::Pending),
            low_stock_count: data.inventory.iter().filter(|i| i.is_low_stock()).count(),
            total_inventory_items: data.inventory.len(),
            total_suppliers,
            average_supplier_performance,
        }
    }

    /// Metrics over the snapshot reduced by the given criteria.
    pub fn metrics_filtered(
        &self,
        data: &SupplyChainData,
        criteria: &FilterCriteria,
    ) -> DashboardMetrics {
        if criteria.is_empty() {
            return self.metrics(data);
        }
        let filtered = self.filter_engine.apply_filters(data, criteria);
        self.metrics(&filtered)
    }
}
