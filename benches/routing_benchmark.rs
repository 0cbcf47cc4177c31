use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grid_trading_engine::prelude::*;

fn grid(node_count: usize, density: f64, seed: u64) -> CostGraph {
    let topology = GridTopology::generate(&TopologyConfig {
        node_count,
        density,
        seed,
    })
    .unwrap();
    let powers = PowerProfile::generate(node_count, seed.wrapping_add(1));
    CostGraph::power_aware(&topology, powers).unwrap()
}

fn sample_energy(node_count: usize) -> NetEnergyMap {
    // Alternate surpluses and deficits across the grid.
    (0..node_count)
        .map(|i| {
            let balance = if i % 2 == 0 { 5.0 } else { -5.0 };
            (NodeId::new(i), balance)
        })
        .collect()
}

fn bench_shortest_paths_50_nodes(c: &mut Criterion) {
    let graph = grid(50, 0.4, 1);
    c.bench_function("shortest_paths_50_nodes", |b| {
        b.iter(|| shortest_paths(black_box(&graph), NodeId::new(0)))
    });
}

fn bench_shortest_paths_200_nodes(c: &mut Criterion) {
    let graph = grid(200, 0.3, 2);
    c.bench_function("shortest_paths_200_nodes", |b| {
        b.iter(|| shortest_paths(black_box(&graph), NodeId::new(0)))
    });
}

fn bench_trading_50_nodes(c: &mut Criterion) {
    let graph = grid(50, 0.4, 3);
    let energy = sample_energy(50);
    c.bench_function("trading_50_nodes", |b| {
        b.iter(|| TradingEngine::run(black_box(&graph), black_box(energy.clone())))
    });
}

fn bench_trading_200_nodes(c: &mut Criterion) {
    let graph = grid(200, 0.3, 4);
    let energy = sample_energy(200);
    c.bench_function("trading_200_nodes", |b| {
        b.iter(|| TradingEngine::run(black_box(&graph), black_box(energy.clone())))
    });
}

criterion_group!(
    benches,
    bench_shortest_paths_50_nodes,
    bench_shortest_paths_200_nodes,
    bench_trading_50_nodes,
    bench_trading_200_nodes
);
criterion_main!(benches);
