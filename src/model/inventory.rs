//! Inventory item record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stocked item at a single location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub location: String,
    /// Current stock level, never negative in well-formed data.
    pub quantity: f64,
    pub unit: String,
    /// Reorder threshold the quantity is compared against.
    pub reorder_point: f64,
    pub last_updated: DateTime<Utc>,
}

impl InventoryItem {
    /// True when the current quantity has fallen below the reorder point.
    pub fn is_low_stock(&self) -> bool {
        self.quantity < self.reorder_point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: f64, reorder_point: f64) -> InventoryItem {
        InventoryItem {
            id: "inv-1".to_string(),
            name: "Widget".to_string(),
            category: "parts".to_string(),
            location: "Hamburg".to_string(),
            quantity,
            unit: "pcs".to_string(),
            reorder_point,
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn test_low_stock_is_strict() {
        assert!(item(99.0, 100.0).is_low_stock());
        assert!(!item(100.0, 100.0).is_low_stock());
        assert!(!item(101.0, 100.0).is_low_stock());
    }
}
