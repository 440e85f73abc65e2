//! Chainview supply-chain visibility core
//!
//! A single-process, synchronous, in-memory data-transformation library
//! over supply-chain entities (shipments, inventory, suppliers, network
//! nodes and edges) backed by CSV files.
//!
//! # Architecture
//!
//! - [`model`]: plain entity records plus the [`model::SupplyChainData`]
//!   snapshot and the [`model::StatusUpdate`] change record.
//! - [`filter`]: criteria/search engine producing reduced snapshots while
//!   guaranteeing every surviving edge's endpoints survive too.
//! - [`alerts`]: rule evaluation with severity grading and per-pass
//!   acknowledgment tracking.
//! - [`metrics`]: dashboard counts, inventory monitoring, supplier
//!   ranking/history, shipment and network lookups.
//! - [`data`]: the CSV data access layer owning the single mutable cache.
//! - [`export`]: flattening a filtered snapshot into one tabular structure.
//!
//! Presentation (pages, widgets, app bootstrap) is an external collaborator
//! that calls into this crate and renders its outputs. The crate performs no
//! retries and installs no tracing subscriber; both belong to the host.
//!
//! # Example
//!
//! ```no_run
//! use chainview::alerts::{AlertGenerator, AlertRules};
//! use chainview::data::DataAccessService;
//! use chainview::filter::{FilterCriteria, FilterEngine};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut service = DataAccessService::new();
//! let data = service.load_data("data")?;
//!
//! let engine = FilterEngine::new();
//! let delayed = engine.apply_filters(
//!     &data,
//!     &FilterCriteria {
//!         status: Some(vec!["delayed".to_string()]),
//!         ..Default::default()
//!     },
//! );
//!
//! let mut generator = AlertGenerator::new();
//! let alerts = generator.generate_alerts(&delayed, &AlertRules::default());
//! for alert in &alerts {
//!     println!("[{}] {}", alert.severity, alert.message);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]

pub mod alerts;
pub mod data;
pub mod export;
pub mod filter;
pub mod metrics;
pub mod model;

// Re-export main types for convenience
pub use alerts::{AlertError, AlertGenerator, AlertResult, AlertRules};
pub use data::{DataAccessService, DataError, DataResult};
pub use export::{ExportError, ExportResult, ExportService, ExportTable};
pub use filter::{FilterCriteria, FilterEngine};
pub use metrics::{
    Dashboard, DashboardMetrics, InventoryMonitor, MetricsError, MetricsResult, NetworkMonitor,
    NodeDetails, PerformanceDataPoint, RankingMetric, ShipmentDetails, ShipmentTracker,
    SupplierMetrics, SupplierRanking, SupplierTracker, TimeSeries,
};
pub use model::{
    Alert, AlertSeverity, AlertType, Edge, EntityKind, InventoryItem, Node, NodeStatus, NodeType,
    ParseError, Shipment, ShipmentStatus, StatusUpdate, Supplier, SupplyChainData,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
