//! Per-entity field registries
//!
//! Searchable fields are a finite enumeration per entity type; a name not
//! listed here simply does not match (no error). Values are stringified the
//! same way they appear on the wire: enums as their lowercase value,
//! timestamps as RFC 3339, lists joined with `;`, numbers via `Display`.
//! An absent optional yields `None` and the entity cannot match on it.

use crate::model::{InventoryItem, Node, Shipment, Supplier};

pub(crate) fn shipment_field(shipment: &Shipment, field: &str) -> Option<String> {
    match field {
        "id" => Some(shipment.id.clone()),
        "origin" => Some(shipment.origin.clone()),
        "destination" => Some(shipment.destination.clone()),
        "current_location" => Some(shipment.current_location.clone()),
        "status" => Some(shipment.status.as_str().to_string()),
        "estimated_delivery" => Some(shipment.estimated_delivery.to_rfc3339()),
        "actual_delivery" => shipment.actual_delivery.map(|d| d.to_rfc3339()),
        "items" => Some(shipment.items.join(";")),
        "supplier_id" => Some(shipment.supplier_id.clone()),
        "created_at" => Some(shipment.created_at.to_rfc3339()),
        "updated_at" => Some(shipment.updated_at.to_rfc3339()),
        _ => None,
    }
}

pub(crate) fn inventory_field(item: &InventoryItem, field: &str) -> Option<String> {
    match field {
        "id" => Some(item.id.clone()),
        "name" => Some(item.name.clone()),
        "category" => Some(item.category.clone()),
        "location" => Some(item.location.clone()),
        "quantity" => Some(item.quantity.to_string()),
        "unit" => Some(item.unit.clone()),
        "reorder_point" => Some(item.reorder_point.to_string()),
        "last_updated" => Some(item.last_updated.to_rfc3339()),
        _ => None,
    }
}

pub(crate) fn supplier_field(supplier: &Supplier, field: &str) -> Option<String> {
    match field {
        "id" => Some(supplier.id.clone()),
        "name" => Some(supplier.name.clone()),
        "contact" => Some(supplier.contact.clone()),
        "performance_score" => Some(supplier.performance_score.to_string()),
        "on_time_delivery_rate" => Some(supplier.on_time_delivery_rate.to_string()),
        "quality_score" => Some(supplier.quality_score.to_string()),
        "average_lead_time" => Some(supplier.average_lead_time.to_string()),
        "total_shipments" => Some(supplier.total_shipments.to_string()),
        "last_updated" => Some(supplier.last_updated.to_rfc3339()),
        _ => None,
    }
}

pub(crate) fn node_field(node: &Node, field: &str) -> Option<String> {
    match field {
        "id" => Some(node.id.clone()),
        "name" => Some(node.name.clone()),
        "node_type" | "type" => Some(node.node_type.as_str().to_string()),
        "location" => Some(node.location.clone()),
        "latitude" => node.latitude.map(|v| v.to_string()),
        "longitude" => node.longitude.map(|v| v.to_string()),
        "status" => Some(node.status.as_str().to_string()),
        "capacity" => node.capacity.map(|v| v.to_string()),
        _ => None,
    }
}
