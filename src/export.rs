//! Export: flatten a (optionally filtered) snapshot into one table
//!
//! Every entity becomes one row with a `type` discriminator; columns are
//! the union of all entity fields in a fixed order, with empty cells where
//! a column does not apply. Spreadsheet output is a host concern; the core
//! serializes to CSV bytes only.

use crate::filter::{FilterCriteria, FilterEngine};
use crate::model::SupplyChainData;
use indexmap::IndexMap;
use thiserror::Error;

/// Errors from serializing an export table.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// Union of all entity columns, in output order.
const COLUMNS: [&str; 33] = [
    "type",
    "id",
    "name",
    "origin",
    "destination",
    "current_location",
    "status",
    "estimated_delivery",
    "actual_delivery",
    "items",
    "supplier_id",
    "created_at",
    "updated_at",
    "category",
    "location",
    "quantity",
    "unit",
    "reorder_point",
    "last_updated",
    "contact",
    "performance_score",
    "on_time_delivery_rate",
    "quality_score",
    "average_lead_time",
    "total_shipments",
    "node_type",
    "latitude",
    "longitude",
    "capacity",
    "source_node_id",
    "target_node_id",
    "shipment_ids",
    "active",
];

/// A flattened, type-discriminated view of a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    /// Serialize the table to CSV bytes, header row first.
    pub fn to_csv(&self) -> ExportResult<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))
    }
}

/// Exports filtered snapshots as flat tables.
#[derive(Debug, Default)]
pub struct ExportService {
    filter_engine: FilterEngine,
}

impl ExportService {
    pub fn new() -> Self {
        ExportService {
            filter_engine: FilterEngine::new(),
        }
    }

    /// Flatten the snapshot, applying `criteria` first when any is active.
    pub fn prepare_export(
        &self,
        data: &SupplyChainData,
        criteria: &FilterCriteria,
    ) -> ExportTable {
        let filtered;
        let data = if criteria.is_empty() {
            data
        } else {
            filtered = self.filter_engine.apply_filters(data, criteria);
            &filtered
        };

        let mut rows = Vec::with_capacity(data.entity_count());

        for s in &data.shipments {
            rows.push(make_row([
                ("type", "shipment".to_string()),
                ("id", s.id.clone()),
                ("origin", s.origin.clone()),
                ("destination", s.destination.clone()),
                ("current_location", s.current_location.clone()),
                ("status", s.status.as_str().to_string()),
                ("estimated_delivery", s.estimated_delivery.to_rfc3339()),
                (
                    "actual_delivery",
                    s.actual_delivery
                        .map(|d| d.to_rfc3339())
                        .unwrap_or_default(),
                ),
                ("items", s.items.join(";")),
                ("supplier_id", s.supplier_id.clone()),
                ("created_at", s.created_at.to_rfc3339()),
                ("updated_at", s.updated_at.to_rfc3339()),
            ]));
        }

        for i in &data.inventory {
            rows.push(make_row([
                ("type", "inventory".to_string()),
                ("id", i.id.clone()),
                ("name", i.name.clone()),
                ("category", i.category.clone()),
                ("location", i.location.clone()),
                ("quantity", i.quantity.to_string()),
                ("unit", i.unit.clone()),
                ("reorder_point", i.reorder_point.to_string()),
                ("last_updated", i.last_updated.to_rfc3339()),
            ]));
        }

        for s in &data.suppliers {
            rows.push(make_row([
                ("type", "supplier".to_string()),
                ("id", s.id.clone()),
                ("name", s.name.clone()),
                ("contact", s.contact.clone()),
                ("performance_score", s.performance_score.to_string()),
                (
                    "on_time_delivery_rate",
                    s.on_time_delivery_rate.to_string(),
                ),
                ("quality_score", s.quality_score.to_string()),
                ("average_lead_time", s.average_lead_time.to_string()),
                ("total_shipments", s.total_shipments.to_string()),
                ("last_updated", s.last_updated.to_rfc3339()),
            ]));
        }

        for n in &data.nodes {
            rows.push(make_row([
                ("type", "node".to_string()),
                ("id", n.id.clone()),
                ("name", n.name.clone()),
                ("node_type", n.node_type.as_str().to_string()),
                ("location", n.location.clone()),
                (
                    "latitude",
                    n.latitude.map(|v| v.to_string()).unwrap_or_default(),
                ),
                (
                    "longitude",
                    n.longitude.map(|v| v.to_string()).unwrap_or_default(),
                ),
                ("status", n.status.as_str().to_string()),
                (
                    "capacity",
                    n.capacity.map(|v| v.to_string()).unwrap_or_default(),
                ),
            ]));
        }

        for e in &data.edges {
            rows.push(make_row([
                ("type", "edge".to_string()),
                ("id", e.id.clone()),
                ("source_node_id", e.source_node_id.clone()),
                ("target_node_id", e.target_node_id.clone()),
                ("shipment_ids", e.shipment_ids.join(";")),
                ("active", e.active.to_string()),
            ]));
        }

        ExportTable {
            columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }
}

fn make_row<const N: usize>(cells: [(&'static str, String); N]) -> Vec<String> {
    let filled: IndexMap<&'static str, String> = IndexMap::from(cells);
    COLUMNS
        .iter()
        .map(|column| filled.get(column).cloned().unwrap_or_default())
        .collect()
}
