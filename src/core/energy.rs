use crate::core::node::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Signed per-node energy balances for one simulation tick.
///
/// Positive = surplus, negative = deficit, zero = balanced. Not every graph
/// node needs an entry; a missing node simply does not participate in
/// trading. Balances are mutated in place over the course of one run.
///
/// Entries are kept in a `BTreeMap` so iteration order is ascending node id,
/// which fixes the surplus iteration order of the trading engine.
///
/// # Examples
///
/// ```
/// use grid_trading_engine::core::energy::NetEnergyMap;
/// use grid_trading_engine::core::node::NodeId;
///
/// let mut net = NetEnergyMap::new();
/// net.set(NodeId::new(0), 5.0);
/// net.set(NodeId::new(1), -2.0);
///
/// assert_eq!(net.surplus_nodes(), vec![NodeId::new(0)]);
/// assert_eq!(net.deficit_nodes(), vec![NodeId::new(1)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetEnergyMap {
    balances: BTreeMap<NodeId, f64>,
}

impl NetEnergyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a node's net-energy balance.
    pub fn set(&mut self, node: NodeId, balance: f64) {
        self.balances.insert(node, balance);
    }

    /// A node's current balance; missing entries read as zero.
    pub fn balance(&self, node: NodeId) -> f64 {
        self.balances.get(&node).copied().unwrap_or(0.0)
    }

    /// Shift a node's balance by `delta`, creating the entry if absent.
    pub fn adjust(&mut self, node: NodeId, delta: f64) {
        *self.balances.entry(node).or_insert(0.0) += delta;
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.balances.contains_key(&node)
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Iterate entries in ascending node id.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.balances.iter().map(|(&node, &balance)| (node, balance))
    }

    /// Nodes with a strictly positive balance, ascending node id.
    pub fn surplus_nodes(&self) -> Vec<NodeId> {
        self.iter()
            .filter(|&(_, balance)| balance > 0.0)
            .map(|(node, _)| node)
            .collect()
    }

    /// Nodes with a strictly negative balance, ascending node id.
    pub fn deficit_nodes(&self) -> Vec<NodeId> {
        self.iter()
            .filter(|&(_, balance)| balance < 0.0)
            .map(|(node, _)| node)
            .collect()
    }
}

impl FromIterator<(NodeId, f64)> for NetEnergyMap {
    fn from_iter<T: IntoIterator<Item = (NodeId, f64)>>(iter: T) -> Self {
        Self {
            balances: iter.into_iter().collect(),
        }
    }
}
