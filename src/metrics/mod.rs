//! Aggregation, ranking and trend views over a snapshot
//!
//! All engines here are pure readers: they take a snapshot by reference,
//! never mutate it, and run in time proportional to its size.

pub mod dashboard;
pub mod inventory;
pub mod network;
pub mod shipment;
pub mod supplier;

pub use dashboard::{Dashboard, DashboardMetrics};
pub use inventory::{InventoryMonitor, TimeSeries};
pub use network::{NetworkMonitor, NodeDetails};
pub use shipment::{ShipmentDetails, ShipmentTracker};
pub use supplier::{
    PerformanceDataPoint, RankingMetric, SupplierMetrics, SupplierRanking, SupplierTracker,
};

use thiserror::Error;

/// Errors from metric and ranking queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsError {
    #[error("supplier not found: {0}")]
    SupplierNotFound(String),

    #[error("inventory item not found: {0}")]
    ItemNotFound(String),

    #[error("shipment not found: {0}")]
    ShipmentNotFound(String),

    #[error("node not found: {0}")]
    NodeNotFound(String),

    #[error("invalid ranking metric: {0}")]
    InvalidMetric(String),

    #[error("days must be non-negative, got {0}")]
    NegativeDays(i64),

    #[error("invalid search field: {0}")]
    InvalidSearchField(String),
}

pub type MetricsResult<T> = Result<T, MetricsError>;
