use crate::core::energy::NetEnergyMap;
use crate::core::node::NodeId;
use crate::core::trade::{Trade, TradeLedger};
use crate::core::wallet::WalletMap;
use crate::graph::cost_model::CostGraph;
use crate::routing::shortest_path::shortest_paths;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Final state of one trading run: wallets, the ordered trade ledger, and
/// the net-energy map after all transfers were applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingOutcome {
    pub wallets: WalletMap,
    pub ledger: TradeLedger,
    pub net_energy: NetEnergyMap,
}

/// The greedy token-settlement engine.
///
/// Moves tokens from surplus nodes to deficit nodes along the cheapest
/// routes of a cost-model graph. The allocation is surplus-major and
/// order-sensitive: surplus and deficit membership is frozen at the start
/// of the run while balances mutate underneath, so earlier surplus nodes
/// see fresher needs than later ones. That path dependence is part of the
/// algorithm's contract and is reproduced exactly, not corrected.
pub struct TradingEngine;

impl TradingEngine {
    /// Execute one trading run over a private net-energy map.
    ///
    /// Never fails: empty surplus or deficit sets, unreachable
    /// counterparties, and net-energy entries outside the graph all reduce
    /// to an empty or partial ledger.
    ///
    /// # Algorithm
    ///
    /// 1. Seed wallets with `max(0, floor(net_energy))` per entry.
    /// 2. Classify surplus and deficit nodes once, from the initial
    ///    snapshot; membership is not recomputed as balances change.
    /// 3. For each surplus node in ascending id order: run one
    ///    shortest-path search, rank the deficit nodes by route cost
    ///    (ties by ascending id, unreachable last), and transfer
    ///    `min(available, floor(|need|))` tokens to each in turn while
    ///    tokens remain, recording a [`Trade`] per transfer.
    ///
    /// Every transfer conserves total tokens and is capped by the sender's
    /// balance, so no wallet ever goes negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use grid_trading_engine::prelude::*;
    ///
    /// let topology = GridTopology::from_edges(3, [(0, 1, 4), (1, 2, 6)]).unwrap();
    /// let graph = CostGraph::standard(&topology);
    /// let net: NetEnergyMap = [(0, 5.0), (1, -2.0), (2, -3.0)]
    ///     .into_iter()
    ///     .map(|(n, b)| (NodeId::new(n), b))
    ///     .collect();
    ///
    /// let outcome = TradingEngine::run(&graph, net);
    /// assert_eq!(outcome.ledger.len(), 2);
    /// assert_eq!(outcome.wallets.tokens(NodeId::new(0)), 0);
    /// assert_eq!(outcome.wallets.tokens(NodeId::new(2)), 3);
    /// ```
    pub fn run(graph: &CostGraph, net_energy: NetEnergyMap) -> TradingOutcome {
        let mut net = net_energy;
        let mut wallets = WalletMap::from_net_energy(&net);
        let mut ledger = TradeLedger::new();

        // Membership frozen from the initial snapshot.
        let surplus_nodes = net.surplus_nodes();
        let deficit_nodes = net.deficit_nodes();
        info!(
            "trading run: {} surplus, {} deficit, {} tokens minted",
            surplus_nodes.len(),
            deficit_nodes.len(),
            wallets.total_tokens()
        );

        for &seller in &surplus_nodes {
            let mut available = wallets.tokens(seller);
            if seller.index() >= graph.node_count() {
                debug!("surplus node {} is outside the grid, skipping", seller);
                continue;
            }
            let search = shortest_paths(graph, seller);

            // Cheapest counterparties first; infinities sort last and are
            // skipped below. Ties break by ascending node id.
            let mut ranked = deficit_nodes.clone();
            ranked.sort_by(|a, b| {
                search
                    .distance(*a)
                    .total_cmp(&search.distance(*b))
                    .then(a.cmp(b))
            });

            for buyer in ranked {
                if available == 0 {
                    break;
                }
                if !search.is_reachable(buyer) {
                    continue;
                }

                // Need reflects transfers already applied earlier this run.
                let need = net.balance(buyer).abs();
                let transfer = available.min(need.floor() as u64);
                if transfer == 0 {
                    continue;
                }

                wallets.debit(seller, transfer);
                wallets.credit(buyer, transfer);
                net.adjust(seller, -(transfer as f64));
                net.adjust(buyer, transfer as f64);
                available -= transfer;

                debug!(
                    "trade: {} → {} {} tokens at cost {:.2}",
                    seller,
                    buyer,
                    transfer,
                    search.distance(buyer)
                );
                ledger.record(Trade {
                    from: seller,
                    to: buyer,
                    tokens: transfer,
                    path_cost: search.distance(buyer),
                    route: search.path(buyer).to_vec(),
                });
            }
        }

        info!(
            "trading run complete: {} trades, {} tokens moved",
            ledger.len(),
            ledger.total_tokens()
        );
        TradingOutcome {
            wallets,
            ledger,
            net_energy: net,
        }
    }
}
