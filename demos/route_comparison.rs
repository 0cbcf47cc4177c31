//! Standard vs power-aware route comparison.
//!
//! Generates a random grid, runs the shortest-path engine under both cost
//! models, and prints the per-node cost comparison plus the traversal trace
//! that a visualization layer would replay step by step.

use grid_trading_engine::prelude::*;

fn main() {
    println!("╔═══════════════════════════════════════════════════╗");
    println!("║  grid-trading-engine: Route Comparison Example    ║");
    println!("╚═══════════════════════════════════════════════════╝\n");

    let config = TopologyConfig {
        node_count: 8,
        density: 0.5,
        seed: 42,
    };
    let topology = GridTopology::generate(&config).unwrap();
    let powers = PowerProfile::generate(config.node_count, 7);

    println!(
        "Grid: {} nodes, {} edges (density {}, seed {})\n",
        topology.node_count(),
        topology.edge_count(),
        config.density,
        config.seed
    );

    let standard = CostGraph::standard(&topology);
    let aware = CostGraph::power_aware(&topology, powers).unwrap();

    let source = NodeId::new(0);
    let std_search = shortest_paths(&standard, source);
    let pow_search = shortest_paths(&aware, source);

    println!("━━━ Cost comparison from node {} ━━━\n", source);
    println!("{:>5} {:>10} {:>13}", "node", "standard", "power-aware");
    for node in topology.nodes() {
        let std_cost = std_search.distance(node);
        let pow_cost = pow_search.distance(node);
        println!(
            "{:>5} {:>10} {:>13}",
            node,
            if std_cost.is_finite() { format!("{:.2}", std_cost) } else { "inf".into() },
            if pow_cost.is_finite() { format!("{:.2}", pow_cost) } else { "inf".into() },
        );
    }

    println!("\n━━━ Power-aware traversal trace ━━━\n");
    for (i, step) in pow_search.steps().iter().enumerate() {
        let reached = step
            .distances
            .iter()
            .filter(|d| d.is_finite())
            .count();
        println!(
            "  step {}: finalized node {} ({} nodes reached so far)",
            i, step.finalized, reached
        );
    }

    println!("\n━━━ Power-aware routes ━━━\n");
    for node in topology.nodes() {
        let route = pow_search.path(node);
        if node != source && !route.is_empty() {
            let hops: Vec<String> = route.iter().map(|n| n.to_string()).collect();
            println!("  {} → {} : {}", source, node, hops.join(" → "));
        }
    }
}
