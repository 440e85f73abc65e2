//! Filter application and free-text search

use super::criteria::FilterCriteria;
use super::fields;
use crate::model::{Edge, InventoryItem, Node, Shipment, Supplier, SupplyChainData};
use std::collections::HashSet;

/// Applies filter criteria and text search to snapshots.
///
/// Both operations are pure: they never mutate the input and produce a new
/// snapshot whose entity collections are subsets of the input's. Edges are
/// re-derived from the surviving node set, never filtered directly.
#[derive(Debug, Default)]
pub struct FilterEngine;

impl FilterEngine {
    pub fn new() -> Self {
        FilterEngine
    }

    /// Apply filter criteria to a snapshot.
    ///
    /// Each criterion is applied to the entity types it is meaningful for
    /// and ignored elsewhere; an edge is kept exactly when both endpoint
    /// nodes survive.
    pub fn apply_filters(
        &self,
        data: &SupplyChainData,
        criteria: &FilterCriteria,
    ) -> SupplyChainData {
        let shipments = self.filter_shipments(&data.shipments, criteria);
        let inventory = self.filter_inventory(&data.inventory, criteria);
        let suppliers = self.filter_suppliers(&data.suppliers, criteria);
        let nodes = self.filter_nodes(&data.nodes, criteria);
        let edges = retain_connected_edges(&data.edges, &nodes);

        SupplyChainData {
            shipments,
            inventory,
            suppliers,
            nodes,
            edges,
            last_updated: data.last_updated,
        }
    }

    /// Case-insensitive substring search over the named fields.
    ///
    /// An entity matches when any listed field, stringified, contains the
    /// lowercased query. Fields absent on an entity type are skipped. An
    /// empty query or field list is the identity operation.
    pub fn search(
        &self,
        data: &SupplyChainData,
        query: &str,
        fields: &[String],
    ) -> SupplyChainData {
        if query.is_empty() || fields.is_empty() {
            return data.clone();
        }

        let needle = query.to_lowercase();

        let shipments: Vec<Shipment> = data
            .shipments
            .iter()
            .filter(|s| matches_fields(*s, &needle, fields, fields::shipment_field))
            .cloned()
            .collect();
        let inventory: Vec<InventoryItem> = data
            .inventory
            .iter()
            .filter(|i| matches_fields(*i, &needle, fields, fields::inventory_field))
            .cloned()
            .collect();
        let suppliers: Vec<Supplier> = data
            .suppliers
            .iter()
            .filter(|s| matches_fields(*s, &needle, fields, fields::supplier_field))
            .cloned()
            .collect();
        let nodes: Vec<Node> = data
            .nodes
            .iter()
            .filter(|n| matches_fields(*n, &needle, fields, fields::node_field))
            .cloned()
            .collect();
        let edges = retain_connected_edges(&data.edges, &nodes);

        SupplyChainData {
            shipments,
            inventory,
            suppliers,
            nodes,
            edges,
            last_updated: data.last_updated,
        }
    }

    fn filter_shipments(
        &self,
        shipments: &[Shipment],
        criteria: &FilterCriteria,
    ) -> Vec<Shipment> {
        let mut result: Vec<Shipment> = shipments
            .iter()
            .filter(|s| {
                if let Some((start, end)) = criteria.date_range {
                    if s.estimated_delivery < start || s.estimated_delivery > end {
                        return false;
                    }
                }
                if let Some(statuses) = &criteria.status {
                    if !statuses.iter().any(|v| v == s.status.as_str()) {
                        return false;
                    }
                }
                if let Some(locations) = &criteria.location {
                    let hit = locations.iter().any(|l| {
                        *l == s.origin || *l == s.destination || *l == s.current_location
                    });
                    if !hit {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();

        if let Some(needle) = search_needle(criteria) {
            let fields = criteria.search_fields.as_deref().unwrap_or(&[]);
            result.retain(|s| matches_fields(s, &needle, fields, fields::shipment_field));
        }
        result
    }

    fn filter_inventory(
        &self,
        inventory: &[InventoryItem],
        criteria: &FilterCriteria,
    ) -> Vec<InventoryItem> {
        let mut result: Vec<InventoryItem> = inventory
            .iter()
            .filter(|i| {
                if let Some((start, end)) = criteria.date_range {
                    if i.last_updated < start || i.last_updated > end {
                        return false;
                    }
                }
                if let Some(locations) = &criteria.location {
                    if !locations.contains(&i.location) {
                        return false;
                    }
                }
                if let Some(categories) = &criteria.category {
                    if !categories.contains(&i.category) {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();

        if let Some(needle) = search_needle(criteria) {
            let fields = criteria.search_fields.as_deref().unwrap_or(&[]);
            result.retain(|i| matches_fields(i, &needle, fields, fields::inventory_field));
        }
        result
    }

    fn filter_suppliers(
        &self,
        suppliers: &[Supplier],
        criteria: &FilterCriteria,
    ) -> Vec<Supplier> {
        // Status, location and category do not apply to suppliers.
        let mut result: Vec<Supplier> = suppliers
            .iter()
            .filter(|s| {
                if let Some((start, end)) = criteria.date_range {
                    if s.last_updated < start || s.last_updated > end {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();

        if let Some(needle) = search_needle(criteria) {
            let fields = criteria.search_fields.as_deref().unwrap_or(&[]);
            result.retain(|s| matches_fields(s, &needle, fields, fields::supplier_field));
        }
        result
    }

    fn filter_nodes(&self, nodes: &[Node], criteria: &FilterCriteria) -> Vec<Node> {
        // Date range does not apply to nodes; they carry no timestamp.
        let mut result: Vec<Node> = nodes
            .iter()
            .filter(|n| {
                if let Some(statuses) = &criteria.status {
                    if !statuses.iter().any(|v| v == n.status.as_str()) {
                        return false;
                    }
                }
                if let Some(locations) = &criteria.location {
                    if !locations.contains(&n.location) {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();

        if let Some(needle) = search_needle(criteria) {
            let fields = criteria.search_fields.as_deref().unwrap_or(&[]);
            result.retain(|n| matches_fields(n, &needle, fields, fields::node_field));
        }
        result
    }
}

/// Keep only edges whose both endpoints exist in `nodes`. This is the
/// engine's referential-integrity guarantee.
fn retain_connected_edges(edges: &[Edge], nodes: &[Node]) -> Vec<Edge> {
    let node_ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    edges
        .iter()
        .filter(|e| {
            node_ids.contains(e.source_node_id.as_str())
                && node_ids.contains(e.target_node_id.as_str())
        })
        .cloned()
        .collect()
}

/// Lowercased query when both a query and at least one field are set.
fn search_needle(criteria: &FilterCriteria) -> Option<String> {
    let query = criteria.search_query.as_deref().filter(|q| !q.is_empty())?;
    criteria.search_fields.as_deref().filter(|f| !f.is_empty())?;
    Some(query.to_lowercase())
}

fn matches_fields<T>(
    entity: &T,
    needle: &str,
    fields: &[String],
    accessor: fn(&T, &str) -> Option<String>,
) -> bool {
    fields.iter().any(|field| {
        accessor(entity, field)
            .map(|value| value.to_lowercase().contains(needle))
            .unwrap_or(false)
    })
}
