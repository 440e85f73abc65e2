//! Aggregate snapshot of all entity collections

use super::{Edge, InventoryItem, Node, Shipment, Supplier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// All five entity collections at a point in time.
///
/// Consumers treat a snapshot as immutable: filtering and searching produce
/// new snapshots rather than mutating in place. The one exception is the
/// data access layer's cache, which applies status updates to its own copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyChainData {
    pub shipments: Vec<Shipment>,
    pub inventory: Vec<InventoryItem>,
    pub suppliers: Vec<Supplier>,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub last_updated: DateTime<Utc>,
}

impl SupplyChainData {
    /// An empty snapshot stamped with the current time.
    pub fn empty() -> Self {
        SupplyChainData {
            shipments: Vec::new(),
            inventory: Vec::new(),
            suppliers: Vec::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            last_updated: Utc::now(),
        }
    }

    /// Total number of entities across all five collections.
    pub fn entity_count(&self) -> usize {
        self.shipments.len()
            + self.inventory.len()
            + self.suppliers.len()
            + self.nodes.len()
            + self.edges.len()
    }
}
