use grid_trading_engine::prelude::*;
use proptest::prelude::*;

/// Generate a topology configuration small enough to keep runs fast but
/// varied in shape: every density from empty to complete.
fn arb_config() -> impl Strategy<Value = TopologyConfig> {
    (1usize..15, 0u32..=100, any::<u64>()).prop_map(|(node_count, density_pct, seed)| {
        TopologyConfig {
            node_count,
            density: density_pct as f64 / 100.0,
            seed,
        }
    })
}

/// Generate a net-energy map over the first `node_count` ids, mixing
/// surpluses, deficits, balanced nodes, and absent entries.
fn arb_net_energy(node_count: usize) -> impl Strategy<Value = NetEnergyMap> {
    prop::collection::vec(
        prop_oneof![
            (-10.0f64..10.0).prop_map(Some),
            Just(None), // node does not participate
        ],
        node_count,
    )
    .prop_map(|balances| {
        balances
            .into_iter()
            .enumerate()
            .filter_map(|(i, b)| b.map(|b| (NodeId::new(i), b)))
            .collect()
    })
}

/// A complete random scenario: cost graph plus net-energy map.
fn arb_scenario() -> impl Strategy<Value = (CostGraph, NetEnergyMap)> {
    (arb_config(), any::<u64>())
        .prop_flat_map(|(config, power_seed)| {
            let topology = GridTopology::generate(&config).unwrap();
            let powers = PowerProfile::generate(config.node_count, power_seed);
            let graph = CostGraph::power_aware(&topology, powers).unwrap();
            (Just(graph), arb_net_energy(config.node_count))
        })
}

proptest! {
    // ===================================================================
    // INVARIANT 1: Token conservation.
    //
    // The total across all wallets after a run equals the total after
    // initial clamping: sum(max(0, floor(net_energy))). Trading only
    // moves tokens, it never mints or burns them.
    // ===================================================================
    #[test]
    fn tokens_are_conserved((graph, energy) in arb_scenario()) {
        let minted = WalletMap::from_net_energy(&energy).total_tokens();
        let outcome = TradingEngine::run(&graph, energy);
        prop_assert_eq!(
            outcome.wallets.total_tokens(),
            minted,
            "trading must neither mint nor burn tokens"
        );
    }

    // ===================================================================
    // INVARIANT 2: No wallet ever ends negative, and no trade moves more
    // than the sender held. Balances are unsigned, so it suffices that
    // the run completes and each trade is positive and sender-capped.
    // ===================================================================
    #[test]
    fn transfers_are_positive_and_capped((graph, energy) in arb_scenario()) {
        let minted = WalletMap::from_net_energy(&energy);
        let outcome = TradingEngine::run(&graph, energy);
        let mut spent = std::collections::BTreeMap::new();
        for trade in outcome.ledger.trades() {
            prop_assert!(trade.tokens > 0, "zero-size trades must be skipped");
            *spent.entry(trade.from).or_insert(0u64) += trade.tokens;
        }
        for (node, total) in spent {
            prop_assert!(
                total <= minted.tokens(node),
                "node {} sold {} but only minted {}",
                node, total, minted.tokens(node)
            );
        }
    }

    // ===================================================================
    // INVARIANT 3: Per-seller trade costs are non-decreasing.
    //
    // Each surplus node serves its counterparties cheapest-first, so the
    // ledger entries of one seller appear in ascending path-cost order.
    // ===================================================================
    #[test]
    fn per_seller_costs_ascend((graph, energy) in arb_scenario()) {
        let outcome = TradingEngine::run(&graph, energy);
        let mut last_cost: std::collections::BTreeMap<NodeId, f64> =
            std::collections::BTreeMap::new();
        for trade in outcome.ledger.trades() {
            if let Some(&prev) = last_cost.get(&trade.from) {
                prop_assert!(
                    trade.path_cost >= prev,
                    "seller {} traded at {} after {}",
                    trade.from, trade.path_cost, prev
                );
            }
            last_cost.insert(trade.from, trade.path_cost);
        }
    }

    // ===================================================================
    // INVARIANT 4: Trading is deterministic.
    //
    // Identical graph, powers, and net-energy map produce a bit-identical
    // outcome across repeated runs. No hidden state.
    // ===================================================================
    #[test]
    fn trading_is_deterministic((graph, energy) in arb_scenario()) {
        let a = TradingEngine::run(&graph, energy.clone());
        let b = TradingEngine::run(&graph, energy);
        prop_assert_eq!(a, b);
    }

    // ===================================================================
    // INVARIANT 5: Every trade's route is a real path.
    //
    // Routes start at the seller, end at the buyer, follow existing
    // edges, and their recorded cost equals the sum of edge weights.
    // ===================================================================
    #[test]
    fn trade_routes_are_valid_paths((graph, energy) in arb_scenario()) {
        let outcome = TradingEngine::run(&graph, energy);
        for trade in outcome.ledger.trades() {
            prop_assert_eq!(trade.route.first(), Some(&trade.from));
            prop_assert_eq!(trade.route.last(), Some(&trade.to));
            let mut cost = 0.0;
            for pair in trade.route.windows(2) {
                let weight = graph.edge_weight(pair[0], pair[1]);
                prop_assert!(weight.is_some(), "route uses a nonexistent edge");
                cost += weight.unwrap();
            }
            prop_assert!(
                (cost - trade.path_cost).abs() < 1e-6,
                "route cost {} disagrees with recorded {}",
                cost, trade.path_cost
            );
        }
    }

    // ===================================================================
    // INVARIANT 6: Shortest-path relaxation is complete.
    //
    // After a search, no edge can improve any distance:
    // dist[v] <= dist[u] + w for every edge (u, v).
    // ===================================================================
    #[test]
    fn no_edge_improves_final_distances(config in arb_config(), source_pick in any::<prop::sample::Index>()) {
        let topology = GridTopology::generate(&config).unwrap();
        let graph = CostGraph::standard(&topology);
        let source = NodeId::new(source_pick.index(config.node_count));
        let search = shortest_paths(&graph, source);

        prop_assert_eq!(search.distance(source), 0.0);
        for u in 0..config.node_count {
            for &(v, weight) in graph.neighbors(NodeId::new(u)) {
                let via = search.distance(NodeId::new(u)) + weight;
                prop_assert!(
                    search.distance(v) <= via + 1e-9,
                    "edge {}-{} would still relax",
                    u, v
                );
            }
        }
    }

    // ===================================================================
    // INVARIANT 7: Paths and distances agree.
    //
    // A node has a non-empty path exactly when its distance is finite;
    // non-empty paths start at the source and end at the target.
    // ===================================================================
    #[test]
    fn paths_match_reachability(config in arb_config(), source_pick in any::<prop::sample::Index>()) {
        let topology = GridTopology::generate(&config).unwrap();
        let graph = CostGraph::standard(&topology);
        let source = NodeId::new(source_pick.index(config.node_count));
        let search = shortest_paths(&graph, source);

        for i in 0..config.node_count {
            let node = NodeId::new(i);
            let path = search.path(node);
            prop_assert_eq!(search.is_reachable(node), !path.is_empty());
            if !path.is_empty() {
                prop_assert_eq!(path.first(), Some(&source));
                prop_assert_eq!(path.last(), Some(&node));
            }
        }
        prop_assert_eq!(search.path(source), &[source][..]);
    }

    // ===================================================================
    // INVARIANT 8: The traversal trace covers exactly the reachable set.
    //
    // One step per reachable node, each finalized once, and the final
    // snapshot equals the returned distance map.
    // ===================================================================
    #[test]
    fn trace_covers_reachable_set(config in arb_config(), source_pick in any::<prop::sample::Index>()) {
        let topology = GridTopology::generate(&config).unwrap();
        let graph = CostGraph::standard(&topology);
        let source = NodeId::new(source_pick.index(config.node_count));
        let search = shortest_paths(&graph, source);

        let reachable = (0..config.node_count)
            .filter(|&i| search.is_reachable(NodeId::new(i)))
            .count();
        prop_assert_eq!(search.steps().len(), reachable);

        let mut seen = std::collections::HashSet::new();
        for step in search.steps() {
            prop_assert!(seen.insert(step.finalized));
            prop_assert!(search.is_reachable(step.finalized));
        }
        if let Some(last) = search.steps().last() {
            prop_assert_eq!(&last.distances[..], search.distances());
        }
    }

    // ===================================================================
    // INVARIANT 9: Both cost variants agree on reachability.
    //
    // The variants share one edge set; power weighting changes costs,
    // never connectivity.
    // ===================================================================
    #[test]
    fn variants_agree_on_reachability(config in arb_config(), power_seed in any::<u64>()) {
        let topology = GridTopology::generate(&config).unwrap();
        let standard = CostGraph::standard(&topology);
        let aware = CostGraph::power_aware(
            &topology,
            PowerProfile::generate(config.node_count, power_seed),
        )
        .unwrap();

        let std_search = shortest_paths(&standard, NodeId::new(0));
        let pow_search = shortest_paths(&aware, NodeId::new(0));
        for i in 0..config.node_count {
            prop_assert_eq!(
                std_search.is_reachable(NodeId::new(i)),
                pow_search.is_reachable(NodeId::new(i))
            );
        }
    }
}
