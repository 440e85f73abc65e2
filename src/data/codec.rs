//! CSV encoding and decoding for the five entity files
//!
//! Wire conventions: enums as lowercase values, RFC 3339 timestamps,
//! optionals as empty cells, list cells joined with `;`, booleans as
//! `true`/`false` (case-insensitive on read). A missing file decodes to an
//! empty collection; a missing directory is the data layer's concern.

use super::DataResult;
use crate::model::{Edge, InventoryItem, Node, ParseError, Shipment, Supplier};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

// Raw row shapes: every cell as a string, exactly the CSV header order.

#[derive(Debug, Serialize, Deserialize)]
struct ShipmentRow {
    id: String,
    origin: String,
    destination: String,
    current_location: String,
    status: String,
    estimated_delivery: String,
    actual_delivery: String,
    items: String,
    supplier_id: String,
    created_at: String,
    updated_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct InventoryRow {
    id: String,
    name: String,
    category: String,
    location: String,
    quantity: String,
    unit: String,
    reorder_point: String,
    last_updated: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct SupplierRow {
    id: String,
    name: String,
    contact: String,
    performance_score: String,
    on_time_delivery_rate: String,
    quality_score: String,
    average_lead_time: String,
    total_shipments: String,
    last_updated: String,
}

// Nodes and edges are read-only; updates only target shipments, inventory
// and suppliers, so these two rows have no write path.
#[derive(Debug, Deserialize)]
struct NodeRow {
    id: String,
    name: String,
    #[serde(rename = "type")]
    node_type: String,
    location: String,
    latitude: String,
    longitude: String,
    status: String,
    capacity: String,
}

#[derive(Debug, Deserialize)]
struct EdgeRow {
    id: String,
    source_node_id: String,
    target_node_id: String,
    shipment_ids: String,
    active: String,
}

pub(crate) fn read_shipments(path: &Path) -> DataResult<Vec<Shipment>> {
    read_rows(path, |row: ShipmentRow| {
        Ok(Shipment {
            id: row.id,
            origin: row.origin,
            destination: row.destination,
            current_location: row.current_location,
            status: row.status.parse()?,
            estimated_delivery: parse_timestamp(&row.estimated_delivery)?,
            actual_delivery: parse_opt_timestamp(&row.actual_delivery)?,
            items: split_list(&row.items),
            supplier_id: row.supplier_id,
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
        })
    })
}

pub(crate) fn write_shipments(path: &Path, shipments: &[Shipment]) -> DataResult<()> {
    write_rows(
        path,
        shipments.iter().map(|s| ShipmentRow {
            id: s.id.clone(),
            origin: s.origin.clone(),
            destination: s.destination.clone(),
            current_location: s.current_location.clone(),
            status: s.status.as_str().to_string(),
            estimated_delivery: s.estimated_delivery.to_rfc3339(),
            actual_delivery: format_opt_timestamp(s.actual_delivery),
            items: s.items.join(";"),
            supplier_id: s.supplier_id.clone(),
            created_at: s.created_at.to_rfc3339(),
            updated_at: s.updated_at.to_rfc3339(),
        }),
    )
}

pub(crate) fn read_inventory(path: &Path) -> DataResult<Vec<InventoryItem>> {
    read_rows(path, |row: InventoryRow| {
        Ok(InventoryItem {
            id: row.id,
            name: row.name,
            category: row.category,
            location: row.location,
            quantity: parse_f64("quantity", &row.quantity)?,
            unit: row.unit,
            reorder_point: parse_f64("reorder_point", &row.reorder_point)?,
            last_updated: parse_timestamp(&row.last_updated)?,
        })
    })
}

pub(crate) fn write_inventory(path: &Path, inventory: &[InventoryItem]) -> DataResult<()> {
    write_rows(
        path,
        inventory.iter().map(|i| InventoryRow {
            id: i.id.clone(),
            name: i.name.clone(),
            category: i.category.clone(),
            location: i.location.clone(),
            quantity: i.quantity.to_string(),
            unit: i.unit.clone(),
            reorder_point: i.reorder_point.to_string(),
            last_updated: i.last_updated.to_rfc3339(),
        }),
    )
}

pub(crate) fn read_suppliers(path: &Path) -> DataResult<Vec<Supplier>> {
    read_rows(path, |row: SupplierRow| {
        Ok(Supplier {
            id: row.id,
            name: row.name,
            contact: row.contact,
            performance_score: parse_f64("performance_score", &row.performance_score)?,
            on_time_delivery_rate: parse_f64(
                "on_time_delivery_rate",
                &row.on_time_delivery_rate,
            )?,
            quality_score: parse_f64("quality_score", &row.quality_score)?,
            average_lead_time: parse_f64("average_lead_time", &row.average_lead_time)?,
            total_shipments: parse_u64("total_shipments", &row.total_shipments)?,
            last_updated: parse_timestamp(&row.last_updated)?,
        })
    })
}

pub(crate) fn write_suppliers(path: &Path, suppliers: &[Supplier]) -> DataResult<()> {
    write_rows(
        path,
        suppliers.iter().map(|s| SupplierRow {
            id: s.id.clone(),
            name: s.name.clone(),
            contact: s.contact.clone(),
            performance_score: s.performance_score.to_string(),
            on_time_delivery_rate: s.on_time_delivery_rate.to_string(),
            quality_score: s.quality_score.to_string(),
            average_lead_time: s.average_lead_time.to_string(),
            total_shipments: s.total_shipments.to_string(),
            last_updated: s.last_updated.to_rfc3339(),
        }),
    )
}

pub(crate) fn read_nodes(path: &Path) -> DataResult<Vec<Node>> {
    read_rows(path, |row: NodeRow| {
        Ok(Node {
            id: row.id,
            name: row.name,
            node_type: row.node_type.parse()?,
            location: row.location,
            latitude: parse_opt_f64("latitude", &row.latitude)?,
            longitude: parse_opt_f64("longitude", &row.longitude)?,
            status: row.status.parse()?,
            capacity: parse_opt_f64("capacity", &row.capacity)?,
        })
    })
}

pub(crate) fn read_edges(path: &Path) -> DataResult<Vec<Edge>> {
    read_rows(path, |row: EdgeRow| {
        Ok(Edge {
            id: row.id,
            source_node_id: row.source_node_id,
            target_node_id: row.target_node_id,
            shipment_ids: split_list(&row.shipment_ids),
            active: parse_bool("active", &row.active)?,
        })
    })
}

fn read_rows<Row, T, F>(path: &Path, convert: F) -> DataResult<Vec<T>>
where
    Row: serde::de::DeserializeOwned,
    F: Fn(Row) -> DataResult<T>,
{
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut out = Vec::new();
    for row in reader.deserialize::<Row>() {
        out.push(convert(row?)?);
    }
    Ok(out)
}

fn write_rows<Row, I>(path: &Path, rows: I) -> DataResult<()>
where
    Row: Serialize,
    I: Iterator<Item = Row>,
{
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

// Wire value parsing

pub(crate) fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, ParseError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    // Naive ISO-8601 without an offset is treated as UTC.
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| ParseError::new("timestamp", value))
}

pub(crate) fn parse_opt_timestamp(value: &str) -> Result<Option<DateTime<Utc>>, ParseError> {
    if value.is_empty() {
        Ok(None)
    } else {
        parse_timestamp(value).map(Some)
    }
}

pub(crate) fn format_opt_timestamp(value: Option<DateTime<Utc>>) -> String {
    value.map(|ts| ts.to_rfc3339()).unwrap_or_default()
}

pub(crate) fn parse_f64(kind: &'static str, value: &str) -> Result<f64, ParseError> {
    value
        .parse::<f64>()
        .map_err(|_| ParseError::new(kind, value))
}

fn parse_opt_f64(kind: &'static str, value: &str) -> Result<Option<f64>, ParseError> {
    if value.is_empty() {
        Ok(None)
    } else {
        parse_f64(kind, value).map(Some)
    }
}

pub(crate) fn parse_u64(kind: &'static str, value: &str) -> Result<u64, ParseError> {
    value
        .parse::<u64>()
        .map_err(|_| ParseError::new(kind, value))
}

pub(crate) fn parse_bool(kind: &'static str, value: &str) -> Result<bool, ParseError> {
    match value.to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::new(kind, value)),
    }
}

pub(crate) fn split_list(value: &str) -> Vec<String> {
    if value.is_empty() {
        Vec::new()
    } else {
        value.split(';').map(str::to_string).collect()
    }
}
