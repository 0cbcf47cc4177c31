//! Basic token trading example.
//!
//! Walks a three-node grid through one greedy settlement run and shows
//! how the cheapest deficit node is served first.

use grid_trading_engine::prelude::*;

fn main() {
    println!("╔══════════════════════════════════════════════╗");
    println!("║  grid-trading-engine: Basic Trading Example  ║");
    println!("╚══════════════════════════════════════════════╝\n");

    // --- A tiny line grid: 0 —(4)— 1 —(6)— 2 ---
    let topology = GridTopology::from_edges(3, [(0, 1, 4), (1, 2, 6)]).unwrap();

    // Unit powers make the power-aware model coincide with the base costs,
    // so the route costs below are easy to verify by hand.
    let powers = PowerProfile::from_values(vec![1.0, 1.0, 1.0]).unwrap();
    let graph = CostGraph::power_aware(&topology, powers).unwrap();

    // Node 0 holds a surplus of 5; nodes 1 and 2 run deficits.
    let net_energy: NetEnergyMap = [(0, 5.0), (1, -2.0), (2, -3.0)]
        .into_iter()
        .map(|(n, b)| (NodeId::new(n), b))
        .collect();

    println!("━━━ Initial balances ━━━\n");
    for (node, balance) in net_energy.iter() {
        println!("  node {}: {:+.1}", node, balance);
    }
    println!();

    let outcome = TradingEngine::run(&graph, net_energy);

    println!("━━━ Settlement ━━━\n");
    println!("{}", outcome.ledger);

    println!("━━━ Final wallets ━━━\n");
    for (node, tokens) in outcome.wallets.iter() {
        println!("  node {}: {} tokens", node, tokens);
    }

    // Node 1 sits one cheap hop away, so its 2-token need settles first;
    // the remaining 3 tokens travel the 0 → 1 → 2 route at cost 10.
    assert_eq!(outcome.ledger.len(), 2);
    assert_eq!(outcome.wallets.tokens(NodeId::new(0)), 0);
}
