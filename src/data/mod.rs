//! Data access layer: CSV-backed load, refresh and update persistence
//!
//! [`DataAccessService`] owns the single in-process cache. Every consumer
//! reads snapshots it hands out; applying a [`StatusUpdate`] is the only
//! place entity fields are mutated, and each applied update rewrites the
//! one CSV file it touched.

mod codec;

use crate::model::{
    EntityKind, InventoryItem, ParseError, Shipment, StatusUpdate, Supplier, SupplyChainData,
};
use chrono::Utc;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors from loading and persisting supply-chain data.
#[derive(Debug, Error)]
pub enum DataError {
    /// The data directory does not exist.
    #[error("data source not found: {0}")]
    SourceNotFound(PathBuf),

    /// The update targets an entity id that is not in the cache.
    #[error("{kind} not found: {id}")]
    EntityNotFound { kind: EntityKind, id: String },

    /// An update was attempted before any data was loaded.
    #[error("no cached data available, load data first")]
    NoCachedData,

    /// The update names a field the entity type does not have.
    #[error("invalid field for {kind}: {field}")]
    UnknownField { kind: EntityKind, field: String },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DataResult<T> = Result<T, DataError>;

const SHIPMENTS_FILE: &str = "shipments.csv";
const INVENTORY_FILE: &str = "inventory.csv";
const SUPPLIERS_FILE: &str = "suppliers.csv";
const NODES_FILE: &str = "nodes.csv";
const EDGES_FILE: &str = "edges.csv";

/// CSV-backed data source with a single mutable cache.
///
/// One instance is the single writer for its backing directory. A host
/// serving multiple requests must wrap the service in a mutex; the core is
/// single-threaded by contract.
#[derive(Debug, Default)]
pub struct DataAccessService {
    cache: Option<SupplyChainData>,
}

impl DataAccessService {
    pub fn new() -> Self {
        DataAccessService { cache: None }
    }

    /// Load all five entity files from `source` and replace the cache.
    ///
    /// A missing file loads as an empty collection; a missing directory
    /// fails with `SourceNotFound`. On any failure the previous cache is
    /// left intact.
    pub fn load_data(&mut self, source: impl AsRef<Path>) -> DataResult<SupplyChainData> {
        let source = source.as_ref();
        if !source.exists() {
            return Err(DataError::SourceNotFound(source.to_path_buf()));
        }

        let data = SupplyChainData {
            shipments: codec::read_shipments(&source.join(SHIPMENTS_FILE))?,
            inventory: codec::read_inventory(&source.join(INVENTORY_FILE))?,
            suppliers: codec::read_suppliers(&source.join(SUPPLIERS_FILE))?,
            nodes: codec::read_nodes(&source.join(NODES_FILE))?,
            edges: codec::read_edges(&source.join(EDGES_FILE))?,
            last_updated: Utc::now(),
        };

        info!(
            source = %source.display(),
            entities = data.entity_count(),
            "loaded supply chain snapshot"
        );

        self.cache = Some(data.clone());
        Ok(data)
    }

    /// The last loaded snapshot, if any.
    pub fn cached_data(&self) -> Option<&SupplyChainData> {
        self.cache.as_ref()
    }

    /// Re-read from disk, replacing the cache.
    pub fn refresh_data(&mut self, source: impl AsRef<Path>) -> DataResult<SupplyChainData> {
        self.load_data(source)
    }

    /// Apply a field update to the cached entity and rewrite its CSV file.
    ///
    /// Fails with `NoCachedData` before any load, `SourceNotFound` when the
    /// directory is gone, `EntityNotFound` for an unknown id and
    /// `UnknownField` for a field the entity type does not have. The
    /// update's timestamp is stamped onto the entity's updated_at /
    /// last_updated field.
    ///
    /// The update is applied to a scratch copy of the collection and only
    /// committed to the cache once the file rewrite succeeds, so a failed
    /// write leaves cache and disk consistent.
    pub fn persist_update(
        &mut self,
        update: &StatusUpdate,
        source: impl AsRef<Path>,
    ) -> DataResult<()> {
        let source = source.as_ref();
        let cache = self.cache.as_mut().ok_or(DataError::NoCachedData)?;
        if !source.exists() {
            return Err(DataError::SourceNotFound(source.to_path_buf()));
        }

        match update.entity_kind {
            EntityKind::Shipment => {
                let mut shipments = cache.shipments.clone();
                apply_shipment_update(&mut shipments, update)?;
                codec::write_shipments(&source.join(SHIPMENTS_FILE), &shipments)?;
                cache.shipments = shipments;
            }
            EntityKind::Inventory => {
                let mut inventory = cache.inventory.clone();
                apply_inventory_update(&mut inventory, update)?;
                codec::write_inventory(&source.join(INVENTORY_FILE), &inventory)?;
                cache.inventory = inventory;
            }
            EntityKind::Supplier => {
                let mut suppliers = cache.suppliers.clone();
                apply_supplier_update(&mut suppliers, update)?;
                codec::write_suppliers(&source.join(SUPPLIERS_FILE), &suppliers)?;
                cache.suppliers = suppliers;
            }
        }

        cache.last_updated = Utc::now();
        debug!(
            kind = %update.entity_kind,
            entity_id = %update.entity_id,
            field = %update.field,
            "persisted status update"
        );
        Ok(())
    }
}

fn apply_shipment_update(shipments: &mut [Shipment], update: &StatusUpdate) -> DataResult<()> {
    let shipment = shipments
        .iter_mut()
        .find(|s| s.id == update.entity_id)
        .ok_or_else(|| DataError::EntityNotFound {
            kind: EntityKind::Shipment,
            id: update.entity_id.clone(),
        })?;

    let value = update.new_value.as_str();
    match update.field.as_str() {
        "origin" => shipment.origin = value.to_string(),
        "destination" => shipment.destination = value.to_string(),
        "current_location" => shipment.current_location = value.to_string(),
        "status" => shipment.status = value.parse()?,
        "estimated_delivery" => shipment.estimated_delivery = codec::parse_timestamp(value)?,
        "actual_delivery" => shipment.actual_delivery = codec::parse_opt_timestamp(value)?,
        "items" => shipment.items = codec::split_list(value),
        "supplier_id" => shipment.supplier_id = value.to_string(),
        _ => {
            return Err(DataError::UnknownField {
                kind: EntityKind::Shipment,
                field: update.field.clone(),
            })
        }
    }
    shipment.updated_at = update.timestamp;
    Ok(())
}

fn apply_inventory_update(inventory: &mut [InventoryItem], update: &StatusUpdate) -> DataResult<()> {
    let item = inventory
        .iter_mut()
        .find(|i| i.id == update.entity_id)
        .ok_or_else(|| DataError::EntityNotFound {
            kind: EntityKind::Inventory,
            id: update.entity_id.clone(),
        })?;

    let value = update.new_value.as_str();
    match update.field.as_str() {
        "name" => item.name = value.to_string(),
        "category" => item.category = value.to_string(),
        "location" => item.location = value.to_string(),
        "quantity" => item.quantity = codec::parse_f64("quantity", value)?,
        "unit" => item.unit = value.to_string(),
        "reorder_point" => item.reorder_point = codec::parse_f64("reorder_point", value)?,
        _ => {
            return Err(DataError::UnknownField {
                kind: EntityKind::Inventory,
                field: update.field.clone(),
            })
        }
    }
    item.last_updated = update.timestamp;
    Ok(())
}

fn apply_supplier_update(suppliers: &mut [Supplier], update: &StatusUpdate) -> DataResult<()> {
    let supplier = suppliers
        .iter_mut()
        .find(|s| s.id == update.entity_id)
        .ok_or_else(|| DataError::EntityNotFound {
            kind: EntityKind::Supplier,
            id: update.entity_id.clone(),
        })?;

    let value = update.new_value.as_str();
    match update.field.as_str() {
        "name" => supplier.name = value.to_string(),
        "contact" => supplier.contact = value.to_string(),
        "performance_score" => {
            supplier.performance_score = codec::parse_f64("performance_score", value)?
        }
        "on_time_delivery_rate" => {
            supplier.on_time_delivery_rate = codec::parse_f64("on_time_delivery_rate", value)?
        }
        "quality_score" => supplier.quality_score = codec::parse_f64("quality_score", value)?,
        "average_lead_time" => {
            supplier.average_lead_time = codec::parse_f64("average_lead_time", value)?
        }
        "total_shipments" => {
            supplier.total_shipments = codec::parse_u64("total_shipments", value)?
        }
        _ => {
            return Err(DataError::UnknownField {
                kind: EntityKind::Supplier,
                field: update.field.clone(),
            })
        }
    }
    supplier.last_updated = update.timestamp;
    Ok(())
}
