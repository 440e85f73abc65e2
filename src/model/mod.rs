//! Entity records for the supply-chain snapshot
//!
//! All entities are plain value records identified by a string `id`. They are
//! produced by CSV deserialization (alerts by the generator at query time)
//! and are treated as immutable by every consumer except the data access
//! layer's cache.

pub mod alert;
pub mod inventory;
pub mod network;
pub mod shipment;
pub mod snapshot;
pub mod supplier;
pub mod update;

pub use alert::{Alert, AlertSeverity, AlertType};
pub use inventory::InventoryItem;
pub use network::{Edge, Node, NodeStatus, NodeType};
pub use shipment::{Shipment, ShipmentStatus};
pub use snapshot::SupplyChainData;
pub use supplier::Supplier;
pub use update::{EntityKind, StatusUpdate};

/// Failure to parse a wire value (enum discriminant, timestamp, number)
/// into its typed representation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} value: {value:?}")]
pub struct ParseError {
    /// What was being parsed, e.g. "shipment status".
    pub kind: &'static str,
    /// The offending input.
    pub value: String,
}

impl ParseError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        ParseError {
            kind,
            value: value.into(),
        }
    }
}
