use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a grid participant (a household, feeder, or substation).
///
/// Nodes are dense integer indices in `[0, node_count)`, so per-node
/// attributes (power capacity, net energy, wallet balance) can live in
/// plain index-addressed vectors.
///
/// # Examples
///
/// ```
/// use grid_trading_engine::core::node::NodeId;
///
/// let a = NodeId::new(0);
/// let b = NodeId::new(3);
/// assert!(a < b);
/// assert_eq!(b.index(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Create a node identifier from a dense index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The underlying dense index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}
