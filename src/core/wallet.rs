use crate::core::energy::NetEnergyMap;
use crate::core::node::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Token balances for every trading participant.
///
/// A token is an integer unit of tradable energy credit. Balances are
/// unsigned: a node can never owe tokens, and every transfer is capped by
/// the sender's current balance, so debits cannot underflow.
///
/// Missing entries read as a zero balance; crediting an absent node creates
/// its entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletMap {
    balances: BTreeMap<NodeId, u64>,
}

impl WalletMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed wallets from a net-energy snapshot: each participating node
    /// starts with `max(0, floor(net_energy))` tokens.
    pub fn from_net_energy(net: &NetEnergyMap) -> Self {
        let mut wallets = Self::new();
        for (node, balance) in net.iter() {
            wallets.set(node, balance.floor().max(0.0) as u64);
        }
        wallets
    }

    pub fn set(&mut self, node: NodeId, tokens: u64) {
        self.balances.insert(node, tokens);
    }

    /// A node's current balance; missing entries read as zero.
    pub fn tokens(&self, node: NodeId) -> u64 {
        self.balances.get(&node).copied().unwrap_or(0)
    }

    /// Add tokens to a node, creating its entry if absent.
    pub fn credit(&mut self, node: NodeId, tokens: u64) {
        *self.balances.entry(node).or_insert(0) += tokens;
    }

    /// Remove tokens from a node.
    ///
    /// # Panics
    ///
    /// Panics if the node holds fewer than `tokens`. The trading engine caps
    /// every transfer by the sender's balance, so this is unreachable there.
    pub fn debit(&mut self, node: NodeId, tokens: u64) {
        let balance = self.balances.entry(node).or_insert(0);
        assert!(
            *balance >= tokens,
            "wallet {} underflow: balance {} debit {}",
            node,
            balance,
            tokens
        );
        *balance -= tokens;
    }

    /// Sum of all balances. Conserved across a trading run.
    pub fn total_tokens(&self) -> u64 {
        self.balances.values().sum()
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Iterate entries in ascending node id.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, u64)> + '_ {
        self.balances.iter().map(|(&node, &tokens)| (node, tokens))
    }
}
