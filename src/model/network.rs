//! Network topology records: nodes and the edges connecting them

use super::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of facility a network node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Warehouse,
    DistributionCenter,
    Port,
    Factory,
    Store,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Warehouse => "warehouse",
            NodeType::DistributionCenter => "distribution_center",
            NodeType::Port => "port",
            NodeType::Factory => "factory",
            NodeType::Store => "store",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "warehouse" => Ok(NodeType::Warehouse),
            "distribution_center" => Ok(NodeType::DistributionCenter),
            "port" => Ok(NodeType::Port),
            "factory" => Ok(NodeType::Factory),
            "store" => Ok(NodeType::Store),
            other => Err(ParseError::new("node type", other)),
        }
    }
}

/// Operational status of a network node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    Normal,
    Congested,
    Disrupted,
}

impl NodeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeStatus::Normal => "normal",
            NodeStatus::Congested => "congested",
            NodeStatus::Disrupted => "disrupted",
        }
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NodeStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(NodeStatus::Normal),
            "congested" => Ok(NodeStatus::Congested),
            "disrupted" => Ok(NodeStatus::Disrupted),
            other => Err(ParseError::new("node status", other)),
        }
    }
}

/// A facility in the supply-chain network.
///
/// Latitude and longitude come as a pair in practice; a node missing either
/// is simply excluded from geographic views by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub node_type: NodeType,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: NodeStatus,
    pub capacity: Option<f64>,
}

/// A directed lane between two network nodes.
///
/// Both endpoints reference nodes; the filter engine guarantees an edge only
/// survives filtering when both endpoints do. Source and target are distinct
/// in well-formed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source_node_id: String,
    pub target_node_id: String,
    /// Shipments routed through this lane.
    pub shipment_ids: Vec<String>,
    pub active: bool,
}
