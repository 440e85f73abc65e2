//! Network node detail lookup
//!
//! Rendering the topology is a presentation concern; the core only resolves
//! a node's connectivity.

use super::{MetricsError, MetricsResult};
use crate::model::{Node, SupplyChainData};
use serde::Serialize;
use std::collections::BTreeSet;

/// A node with its connectivity in the edge set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeDetails {
    pub node: Node,
    /// Shipments routed through any adjacent edge, deduplicated and sorted.
    pub connected_shipment_ids: Vec<String>,
    pub incoming_edges: usize,
    pub outgoing_edges: usize,
}

/// Network topology queries over a snapshot.
#[derive(Debug, Default)]
pub struct NetworkMonitor;

impl NetworkMonitor {
    pub fn new() -> Self {
        NetworkMonitor
    }

    /// Resolve one node and its edge connectivity.
    pub fn node_details(
        &self,
        data: &SupplyChainData,
        node_id: &str,
    ) -> MetricsResult<NodeDetails> {
        let node = data
            .nodes
            .iter()
            .find(|n| n.id == node_id)
            .ok_or_else(|| MetricsError::NodeNotFound(node_id.to_string()))?;

        let mut connected: BTreeSet<String> = BTreeSet::new();
        let mut incoming = 0;
        let mut outgoing = 0;

        for edge in &data.edges {
            if edge.source_node_id == node_id {
                outgoing += 1;
                connected.extend(edge.shipment_ids.iter().cloned());
            }
            if edge.target_node_id == node_id {
                incoming += 1;
                connected.extend(edge.shipment_ids.iter().cloned());
            }
        }

        Ok(NodeDetails {
            node: node.clone(),
            connected_shipment_ids: connected.into_iter().collect(),
            incoming_edges: incoming,
            outgoing_edges: outgoing,
        })
    }
}
