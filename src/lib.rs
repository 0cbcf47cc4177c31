//! # grid-trading-engine
//!
//! Energy trading and routing simulation engine for multi-node smart grids.
//!
//! Given per-node energy surpluses and deficits, the engine computes
//! least-cost transfer routes over a randomly generated grid topology and
//! executes a greedy settlement protocol that moves tradable energy tokens
//! from surplus nodes to deficit nodes along the cheapest discovered routes.
//!
//! ## Architecture
//!
//! - **core** — Foundational types: node ids, net-energy maps, wallets, trades
//! - **graph** — Topology generation and the Standard / Power-Aware cost models
//! - **routing** — Single-source shortest-path engine with a replayable trace
//! - **trading** — Greedy token-settlement engine and its outcome report

pub mod core;
pub mod graph;
pub mod routing;
pub mod trading;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::energy::NetEnergyMap;
    pub use crate::core::node::NodeId;
    pub use crate::core::trade::{Trade, TradeLedger};
    pub use crate::core::wallet::WalletMap;
    pub use crate::graph::cost_model::{CostGraph, CostVariant, PowerProfile};
    pub use crate::graph::topology::{GridTopology, TopologyConfig};
    pub use crate::graph::ConfigError;
    pub use crate::routing::shortest_path::{shortest_paths, RouteSearch, TraversalStep};
    pub use crate::trading::engine::{TradingEngine, TradingOutcome};
}
