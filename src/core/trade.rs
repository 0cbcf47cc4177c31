use crate::core::node::NodeId;
use serde::{Deserialize, Serialize};

/// One atomic token transfer between a surplus and a deficit node along a
/// computed cheapest route.
///
/// Trades are immutable once recorded. The `route` is the full ordered node
/// sequence from sender to receiver, and `path_cost` is the route's total
/// cost under the cost model the trading run was given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Sending (surplus) node.
    pub from: NodeId,
    /// Receiving (deficit) node.
    pub to: NodeId,
    /// Tokens transferred.
    pub tokens: u64,
    /// Total route cost at the moment of the trade.
    pub path_cost: f64,
    /// Ordered node sequence from sender to receiver.
    pub route: Vec<NodeId>,
}

impl Trade {
    /// Number of edges traversed by this trade's route.
    pub fn hop_count(&self) -> usize {
        self.route.len().saturating_sub(1)
    }
}

/// Append-only ordered record of every trade executed in one run.
///
/// The ledger is reset at the start of each run; its order is part of the
/// engine's deterministic output and is meaningful for replay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeLedger {
    trades: Vec<Trade>,
}

impl TradeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, trade: Trade) {
        self.trades.push(trade);
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// Total tokens moved across all trades.
    pub fn total_tokens(&self) -> u64 {
        self.trades.iter().map(|t| t.tokens).sum()
    }

    /// Total delivery cost: sum of tokens × route cost per trade.
    pub fn total_cost(&self) -> f64 {
        self.trades
            .iter()
            .map(|t| t.tokens as f64 * t.path_cost)
            .sum()
    }

    /// Cost of the same transfers if every hop had unit cost.
    /// A topology-only baseline for judging the cost model's effect.
    pub fn naive_cost(&self) -> f64 {
        self.trades
            .iter()
            .map(|t| t.tokens as f64 * t.hop_count() as f64)
            .sum()
    }

    /// Estimated cost saved versus the unit-hop baseline.
    pub fn savings(&self) -> f64 {
        self.naive_cost() - self.total_cost()
    }
}

impl FromIterator<Trade> for TradeLedger {
    fn from_iter<T: IntoIterator<Item = Trade>>(iter: T) -> Self {
        Self {
            trades: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for TradeLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Trade Ledger ===")?;
        writeln!(f, "Trades:        {}", self.len())?;
        writeln!(f, "Tokens Traded: {}", self.total_tokens())?;
        writeln!(f, "Total Cost:    {:.2}", self.total_cost())?;
        writeln!(f, "Naive Cost:    {:.2}", self.naive_cost())?;
        writeln!(f, "Cost Saved:    {:.2}", self.savings())?;

        for (i, trade) in self.trades.iter().enumerate() {
            let route: Vec<String> = trade.route.iter().map(|n| n.to_string()).collect();
            writeln!(
                f,
                "  [{}] {} → {}  {} tokens  cost {:.2}  via {}",
                i,
                trade.from,
                trade.to,
                trade.tokens,
                trade.path_cost,
                route.join(" → ")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trade() -> Trade {
        Trade {
            from: NodeId::new(0),
            to: NodeId::new(2),
            tokens: 3,
            path_cost: 10.0,
            route: vec![NodeId::new(0), NodeId::new(1), NodeId::new(2)],
        }
    }

    #[test]
    fn test_hop_count() {
        assert_eq!(sample_trade().hop_count(), 2);
    }

    #[test]
    fn test_ledger_totals() {
        let mut ledger = TradeLedger::new();
        ledger.record(sample_trade());
        ledger.record(Trade {
            from: NodeId::new(0),
            to: NodeId::new(1),
            tokens: 2,
            path_cost: 4.0,
            route: vec![NodeId::new(0), NodeId::new(1)],
        });

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.total_tokens(), 5);
        // 3 * 10.0 + 2 * 4.0
        assert_eq!(ledger.total_cost(), 38.0);
        // 3 * 2 hops + 2 * 1 hop
        assert_eq!(ledger.naive_cost(), 8.0);
        assert_eq!(ledger.savings(), -30.0);
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = TradeLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_tokens(), 0);
        assert_eq!(ledger.total_cost(), 0.0);
    }

    #[test]
    fn test_ledger_serializes_flat() {
        let ledger: TradeLedger = [sample_trade()].into_iter().collect();
        let json = serde_json::to_string(&ledger).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_array());
        assert_eq!(parsed[0]["from"], 0);
        assert_eq!(parsed[0]["to"], 2);
        assert_eq!(parsed[0]["tokens"], 3);
        assert_eq!(parsed[0]["route"][1], 1);
    }
}
