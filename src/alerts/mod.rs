//! Rule-based alert generation and acknowledgment tracking
//!
//! Three independent rule sets run over a snapshot: shipment delays, low
//! stock and supplier performance. Alerts are recomputed on every pass with
//! fresh ids; nothing is deduplicated against earlier passes and nothing is
//! persisted. Acknowledgment state lives in the generator and only covers
//! the most recent pass.

use crate::model::{
    Alert, AlertSeverity, AlertType, InventoryItem, Shipment, ShipmentStatus, Supplier,
    SupplyChainData,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

/// Errors from acknowledgment lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlertError {
    /// The id is not part of the most recent generation pass. Ids from
    /// earlier passes become unacknowledgeable once a new pass has run.
    #[error("alert not found: {0}")]
    AlertNotFound(String),
}

pub type AlertResult<T> = Result<T, AlertError>;

/// Named thresholds for the three rule sets. Hosts can deserialize this
/// from their own configuration; defaults match the documented contract.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AlertRules {
    /// Hours past estimated delivery before an undelivered shipment alerts.
    pub delay_threshold_hours: f64,
    /// Multiplier of the reorder point below which stock alerts.
    pub low_stock_threshold: f64,
    /// Minimum acceptable supplier performance score.
    pub supplier_performance_threshold: f64,
}

impl Default for AlertRules {
    fn default() -> Self {
        AlertRules {
            delay_threshold_hours: 24.0,
            low_stock_threshold: 1.0,
            supplier_performance_threshold: 70.0,
        }
    }
}

/// Generates alerts and tracks acknowledgment for the latest pass.
///
/// Construct one per session and reuse it across generation and
/// acknowledgment calls; the internal id map is replaced wholesale on each
/// [`AlertGenerator::generate_alerts`] call.
#[derive(Debug, Default)]
pub struct AlertGenerator {
    alerts: HashMap<String, Alert>,
}

impl AlertGenerator {
    pub fn new() -> Self {
        AlertGenerator {
            alerts: HashMap::new(),
        }
    }

    /// Run all three rule sets over the snapshot.
    ///
    /// Returns the alerts of this pass and repopulates the acknowledgment
    /// map with exactly these alerts, invalidating ids from earlier passes.
    pub fn generate_alerts(&mut self, data: &SupplyChainData, rules: &AlertRules) -> Vec<Alert> {
        let mut alerts = self.check_shipment_delays(&data.shipments, rules.delay_threshold_hours);
        alerts.extend(self.check_inventory_levels(&data.inventory, rules.low_stock_threshold));
        alerts.extend(
            self.check_supplier_performance(&data.suppliers, rules.supplier_performance_threshold),
        );

        self.alerts.clear();
        for alert in &alerts {
            self.alerts.insert(alert.id.clone(), alert.clone());
        }

        info!(
            count = alerts.len(),
            "alert generation pass complete, acknowledgment map reset"
        );
        alerts
    }

    /// Alerts for shipments explicitly marked delayed, or undelivered past
    /// the estimate by more than `delay_threshold_hours`.
    pub fn check_shipment_delays(
        &self,
        shipments: &[Shipment],
        delay_threshold_hours: f64,
    ) -> Vec<Alert> {
        let now = Utc::now();
        let mut alerts = Vec::new();

        for shipment in shipments {
            let hours_overdue = hours_between(shipment.estimated_delivery, now);

            if shipment.status == ShipmentStatus::Delayed {
                let severity = delay_severity(hours_overdue, delay_threshold_hours);
                alerts.push(new_alert(
                    AlertType::ShipmentDelay,
                    severity,
                    format!(
                        "Shipment {} from {} to {} is delayed",
                        shipment.id, shipment.origin, shipment.destination
                    ),
                    &shipment.id,
                    now,
                ));
            } else if shipment.status != ShipmentStatus::Delivered
                && hours_overdue > delay_threshold_hours
            {
                let severity = delay_severity(hours_overdue, delay_threshold_hours);
                alerts.push(new_alert(
                    AlertType::ShipmentDelay,
                    severity,
                    format!(
                        "Shipment {} is {} hours overdue",
                        shipment.id, hours_overdue as i64
                    ),
                    &shipment.id,
                    now,
                ));
            }
        }

        debug!(count = alerts.len(), "shipment delay check");
        alerts
    }

    /// Alerts for items below `reorder_point * low_stock_threshold`.
    pub fn check_inventory_levels(
        &self,
        inventory: &[InventoryItem],
        low_stock_threshold: f64,
    ) -> Vec<Alert> {
        let now = Utc::now();
        let mut alerts = Vec::new();

        for item in inventory {
            let threshold = item.reorder_point * low_stock_threshold;
            if item.quantity < threshold {
                let severity = low_stock_severity(item.quantity, threshold);
                alerts.push(new_alert(
                    AlertType::LowStock,
                    severity,
                    format!(
                        "Low stock alert: {} at {} has {} {} (threshold: {})",
                        item.name, item.location, item.quantity, item.unit, threshold
                    ),
                    &item.id,
                    now,
                ));
            }
        }

        debug!(count = alerts.len(), "low stock check");
        alerts
    }

    /// Alerts for suppliers scoring below `performance_threshold`.
    pub fn check_supplier_performance(
        &self,
        suppliers: &[Supplier],
        performance_threshold: f64,
    ) -> Vec<Alert> {
        let now = Utc::now();
        let mut alerts = Vec::new();

        for supplier in suppliers {
            if supplier.performance_score < performance_threshold {
                let severity =
                    supplier_severity(supplier.performance_score, performance_threshold);
                alerts.push(new_alert(
                    AlertType::SupplierPerformance,
                    severity,
                    format!(
                        "Supplier {} performance below threshold: {:.1}% (threshold: {}%)",
                        supplier.name, supplier.performance_score, performance_threshold
                    ),
                    &supplier.id,
                    now,
                ));
            }
        }

        debug!(count = alerts.len(), "supplier performance check");
        alerts
    }

    /// Mark an alert from the most recent pass as acknowledged.
    pub fn acknowledge_alert(&mut self, alert_id: &str) -> AlertResult<()> {
        let alert = self
            .alerts
            .get_mut(alert_id)
            .ok_or_else(|| AlertError::AlertNotFound(alert_id.to_string()))?;
        alert.acknowledged = true;
        alert.acknowledged_at = Some(Utc::now());
        Ok(())
    }

    /// Alert from the most recent pass, if present.
    pub fn get_alert(&self, alert_id: &str) -> Option<&Alert> {
        self.alerts.get(alert_id)
    }

    /// Number of alerts tracked from the most recent pass.
    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }
}

fn new_alert(
    alert_type: AlertType,
    severity: AlertSeverity,
    message: String,
    entity_id: &str,
    now: DateTime<Utc>,
) -> Alert {
    Alert {
        id: Uuid::new_v4().to_string(),
        alert_type,
        severity,
        message,
        entity_id: entity_id.to_string(),
        created_at: now,
        acknowledged: false,
        acknowledged_at: None,
    }
}

fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_seconds() as f64 / 3600.0
}

/// Severity ladder for shipment delays, strictly-greater at every multiple
/// of the threshold: exactly 2x overdue is Medium, not High. The Low branch
/// only fires for shipments explicitly marked delayed before they are a
/// full threshold overdue.
pub fn delay_severity(hours_overdue: f64, threshold_hours: f64) -> AlertSeverity {
    if hours_overdue > threshold_hours * 3.0 {
        AlertSeverity::Critical
    } else if hours_overdue > threshold_hours * 2.0 {
        AlertSeverity::High
    } else if hours_overdue > threshold_hours {
        AlertSeverity::Medium
    } else {
        AlertSeverity::Low
    }
}

/// Severity ladder for low stock, by quantity as a percentage of the
/// effective threshold. A non-positive threshold counts as 0%.
pub fn low_stock_severity(quantity: f64, threshold: f64) -> AlertSeverity {
    let percentage = if threshold > 0.0 {
        quantity / threshold * 100.0
    } else {
        0.0
    };

    if percentage < 25.0 {
        AlertSeverity::Critical
    } else if percentage < 50.0 {
        AlertSeverity::High
    } else if percentage < 75.0 {
        AlertSeverity::Medium
    } else {
        AlertSeverity::Low
    }
}

/// Severity ladder for supplier performance, by gap below the threshold.
pub fn supplier_severity(score: f64, threshold: f64) -> AlertSeverity {
    let gap = threshold - score;
    if gap > 30.0 {
        AlertSeverity::Critical
    } else if gap > 20.0 {
        AlertSeverity::High
    } else if gap > 10.0 {
        AlertSeverity::Medium
    } else {
        AlertSeverity::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_severity_boundaries() {
        // Strictly-greater convention: exact multiples stay in the lower band.
        assert_eq!(delay_severity(24.0, 24.0), AlertSeverity::Low);
        assert_eq!(delay_severity(25.0, 24.0), AlertSeverity::Medium);
        assert_eq!(delay_severity(48.0, 24.0), AlertSeverity::Medium);
        assert_eq!(delay_severity(49.0, 24.0), AlertSeverity::High);
        assert_eq!(delay_severity(72.0, 24.0), AlertSeverity::High);
        assert_eq!(delay_severity(73.0, 24.0), AlertSeverity::Critical);
    }

    #[test]
    fn test_delay_severity_monotonic() {
        let mut last = AlertSeverity::Low;
        for hours in 0..200 {
            let severity = delay_severity(hours as f64, 24.0);
            assert!(severity >= last, "severity dropped at {hours}h");
            last = severity;
        }
    }

    #[test]
    fn test_low_stock_severity_bands() {
        assert_eq!(low_stock_severity(10.0, 100.0), AlertSeverity::Critical);
        assert_eq!(low_stock_severity(25.0, 100.0), AlertSeverity::High);
        assert_eq!(low_stock_severity(50.0, 100.0), AlertSeverity::Medium);
        assert_eq!(low_stock_severity(75.0, 100.0), AlertSeverity::Low);
        assert_eq!(low_stock_severity(5.0, 0.0), AlertSeverity::Critical);
    }

    #[test]
    fn test_supplier_severity_bands() {
        assert_eq!(supplier_severity(35.0, 70.0), AlertSeverity::Critical);
        assert_eq!(supplier_severity(45.0, 70.0), AlertSeverity::High);
        assert_eq!(supplier_severity(55.0, 70.0), AlertSeverity::Medium);
        assert_eq!(supplier_severity(65.0, 70.0), AlertSeverity::Low);
        // Gaps of exactly 10/20/30 stay in the lower band.
        assert_eq!(supplier_severity(60.0, 70.0), AlertSeverity::Low);
        assert_eq!(supplier_severity(50.0, 70.0), AlertSeverity::Medium);
        assert_eq!(supplier_severity(40.0, 70.0), AlertSeverity::High);
    }

    #[test]
    fn test_default_rules() {
        let rules = AlertRules::default();
        assert_eq!(rules.delay_threshold_hours, 24.0);
        assert_eq!(rules.low_stock_threshold, 1.0);
        assert_eq!(rules.supplier_performance_threshold, 70.0);
    }
}
