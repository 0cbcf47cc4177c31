//! Grid topology and the two cost models derived from it.

pub mod cost_model;
pub mod topology;

use crate::core::node::NodeId;
use thiserror::Error;

/// Errors arising from invalid grid configuration.
///
/// All configuration is validated at construction time, before any
/// computation runs. In-algorithm edge cases (unreachable nodes, zero-size
/// transfers, empty net-energy maps) are ordinary control flow, not errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid must contain at least one node")]
    InvalidNodeCount,
    #[error("connection density must be within [0, 1], got {value}")]
    InvalidDensity { value: f64 },
    #[error("power capacity for node {node} must be positive, got {value}")]
    NonPositivePower { node: NodeId, value: f64 },
    #[error("power profile covers {actual} nodes but the grid has {expected}")]
    PowerCountMismatch { expected: usize, actual: usize },
    #[error("node {node} is out of range for a grid of {node_count} nodes")]
    NodeOutOfRange { node: NodeId, node_count: usize },
    #[error("self-loop on node {node} is not allowed")]
    SelfLoop { node: NodeId },
    #[error("duplicate edge between {u} and {v}")]
    DuplicateEdge { u: NodeId, v: NodeId },
    #[error("base cost for edge {u}-{v} must be positive, got {cost}")]
    InvalidBaseCost { u: NodeId, v: NodeId, cost: u32 },
}
