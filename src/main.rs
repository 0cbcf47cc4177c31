//! grid-trading-engine CLI
//!
//! Run grid generation, route exploration, and token trading from the
//! command line.
//!
//! # Usage
//!
//! ```bash
//! # Generate a random grid scenario
//! grid-trading-engine generate --nodes 10 --density 0.4 --seed 42
//!
//! # Compare standard vs power-aware routing from a source node
//! grid-trading-engine route --input scenario.json --source 0
//!
//! # Run a token trading simulation
//! grid-trading-engine trade --input scenario.json --format json
//! ```

use grid_trading_engine::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"grid-trading-engine — energy trading and routing simulation for smart grids

USAGE:
    grid-trading-engine <COMMAND> [OPTIONS]

COMMANDS:
    generate    Generate a random grid scenario (topology, powers, net energy)
    route       Explore shortest routes from a source node
    trade       Run a greedy token trading simulation
    help        Show this message

OPTIONS (generate):
    --nodes <N>         Number of grid nodes (default: 10)
    --density <D>       Connection probability in [0, 1] (default: 0.4)
    --seed <S>          Random seed (default: 42)
    --output <FILE>     Write to file instead of stdout

OPTIONS (route):
    --input <FILE>      Path to JSON scenario file
    --source <N>        Source node id (default: 0)
    --steps             Also print the traversal trace
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (trade):
    --input <FILE>      Path to JSON scenario file
    --variant <V>       Cost model: power-aware (default) or standard
    --format <FORMAT>   Output format: text (default) or json

EXAMPLES:
    grid-trading-engine generate --nodes 12 --density 0.5 --output scenario.json
    grid-trading-engine route --input scenario.json --source 3 --steps
    grid-trading-engine trade --input scenario.json --format json"#
    );
}

/// JSON schema for scenario files, as emitted by `generate`.
#[derive(serde::Serialize, serde::Deserialize)]
struct ScenarioFile {
    node_count: usize,
    edges: Vec<EdgeInput>,
    #[serde(default)]
    powers: Option<Vec<f64>>,
    #[serde(default)]
    net_energy: NetEnergyMap,
}

#[derive(serde::Serialize, serde::Deserialize)]
struct EdgeInput {
    u: usize,
    v: usize,
    base_cost: u32,
}

fn load_scenario(path: &str) -> (GridTopology, PowerProfile, NetEnergyMap) {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    let file: ScenarioFile = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "node_count": 3,
  "edges": [ {{ "u": 0, "v": 1, "base_cost": 4 }} ],
  "powers": [1.0, 1.0, 1.0],
  "net_energy": {{ "0": 5.0, "1": -2.0, "2": -3.0 }}
}}"#
        );
        process::exit(1);
    });

    let topology = GridTopology::from_edges(
        file.node_count,
        file.edges.iter().map(|e| (e.u, e.v, e.base_cost)),
    )
    .unwrap_or_else(|e| {
        eprintln!("Invalid topology: {}", e);
        process::exit(1);
    });

    let powers = match file.powers {
        Some(values) => PowerProfile::from_values(values).unwrap_or_else(|e| {
            eprintln!("Invalid power profile: {}", e);
            process::exit(1);
        }),
        None => PowerProfile::generate(file.node_count, 42),
    };
    if powers.len() != topology.node_count() {
        eprintln!(
            "Power profile covers {} nodes but the grid has {}",
            powers.len(),
            topology.node_count()
        );
        process::exit(1);
    }

    (topology, powers, file.net_energy)
}

fn cmd_generate(args: &[String]) {
    let mut node_count = 10usize;
    let mut density = 0.4f64;
    let mut seed = 42u64;
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--nodes" => {
                i += 1;
                node_count = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--nodes requires a number");
                    process::exit(1);
                });
            }
            "--density" => {
                i += 1;
                density = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--density requires a number in [0, 1]");
                    process::exit(1);
                });
            }
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--seed requires a number");
                    process::exit(1);
                });
            }
            "--output" => {
                i += 1;
                output_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--output requires a file path");
                    process::exit(1);
                }));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let topology = GridTopology::generate(&TopologyConfig {
        node_count,
        density,
        seed,
    })
    .unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        process::exit(1);
    });

    let powers = PowerProfile::generate(node_count, seed.wrapping_add(1));

    // Default per-node balances in [-5, 5], one decimal, seeded separately
    // so topology and demand can be varied independently.
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(2));
    let mut net_energy = NetEnergyMap::new();
    for node in topology.nodes() {
        let balance: f64 = rng.gen_range(-5.0..=5.0);
        net_energy.set(node, (balance * 10.0).round() / 10.0);
    }

    let file = ScenarioFile {
        node_count,
        edges: topology
            .edges()
            .iter()
            .map(|e| EdgeInput {
                u: e.u.index(),
                v: e.v.index(),
                base_cost: e.base_cost,
            })
            .collect(),
        powers: Some(powers.values().to_vec()),
        net_energy,
    };

    let json = serde_json::to_string_pretty(&file).unwrap();
    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!(
            "Generated {} nodes, {} edges → {}",
            node_count,
            file.edges.len(),
            path
        );
    } else {
        println!("{}", json);
    }
}

/// JSON output schema for route queries.
#[derive(serde::Serialize)]
struct RouteOutput {
    source: usize,
    nodes: Vec<RouteNodeOutput>,
    standard_steps: usize,
    power_aware_steps: usize,
}

#[derive(serde::Serialize)]
struct RouteNodeOutput {
    node: usize,
    standard_cost: Option<f64>,
    power_aware_cost: Option<f64>,
    route: Vec<usize>,
}

fn cmd_route(args: &[String]) {
    let mut input_path = None;
    let mut source = 0usize;
    let mut show_steps = false;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--source" => {
                i += 1;
                source = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--source requires a node id");
                    process::exit(1);
                });
            }
            "--steps" => show_steps = true,
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    let (topology, powers, _) = load_scenario(&path);
    if source >= topology.node_count() {
        eprintln!(
            "Source node {} is out of range for a grid of {} nodes",
            source,
            topology.node_count()
        );
        process::exit(1);
    }

    let standard = CostGraph::standard(&topology);
    let aware = CostGraph::power_aware(&topology, powers).unwrap_or_else(|e| {
        eprintln!("Invalid power profile: {}", e);
        process::exit(1);
    });

    let src = NodeId::new(source);
    let std_search = shortest_paths(&standard, src);
    let pow_search = shortest_paths(&aware, src);

    if format == "json" {
        let nodes = topology
            .nodes()
            .map(|node| RouteNodeOutput {
                node: node.index(),
                standard_cost: finite(std_search.distance(node)),
                power_aware_cost: finite(pow_search.distance(node)),
                route: pow_search.path(node).iter().map(|n| n.index()).collect(),
            })
            .collect();
        let output = RouteOutput {
            source,
            nodes,
            standard_steps: std_search.steps().len(),
            power_aware_steps: pow_search.steps().len(),
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
        return;
    }

    println!("=== Routes from node {} ===", source);
    println!("{:>5} {:>12} {:>14} {:>12}", "node", "standard", "power-aware", "improvement");
    for node in topology.nodes() {
        let std_cost = std_search.distance(node);
        let pow_cost = pow_search.distance(node);
        let improvement = if std_cost.is_finite() && std_cost > 0.0 && pow_cost.is_finite() {
            format!("{:.1}%", (std_cost - pow_cost) / std_cost * 100.0)
        } else {
            "—".to_string()
        };
        println!(
            "{:>5} {:>12} {:>14} {:>12}",
            node,
            fmt_cost(std_cost),
            fmt_cost(pow_cost),
            improvement
        );
    }

    println!("\nPower-aware routes:");
    for node in topology.nodes() {
        let route = pow_search.path(node);
        if node != src && !route.is_empty() {
            let hops: Vec<String> = route.iter().map(|n| n.to_string()).collect();
            println!(
                "  {} → {} : {} (cost {:.2})",
                source,
                node,
                hops.join(" → "),
                pow_search.distance(node)
            );
        }
    }

    if show_steps {
        println!("\nPower-aware traversal trace:");
        for (i, step) in pow_search.steps().iter().enumerate() {
            let dists: Vec<String> = step.distances.iter().map(|&d| fmt_cost(d)).collect();
            println!("  step {:>3}: finalized {:>3}  [{}]", i, step.finalized, dists.join(", "));
        }
    }
}

fn cmd_trade(args: &[String]) {
    let mut input_path = None;
    let mut variant = CostVariant::PowerAware;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--variant" => {
                i += 1;
                variant = match args.get(i).map(String::as_str) {
                    Some("standard") => CostVariant::Standard,
                    Some("power-aware") => CostVariant::PowerAware,
                    _ => {
                        eprintln!("--variant requires 'standard' or 'power-aware'");
                        process::exit(1);
                    }
                };
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    let (topology, powers, net_energy) = load_scenario(&path);
    let graph = match variant {
        CostVariant::Standard => CostGraph::standard(&topology),
        CostVariant::PowerAware => CostGraph::power_aware(&topology, powers)
            .unwrap_or_else(|e| {
                eprintln!("Invalid power profile: {}", e);
                process::exit(1);
            }),
    };

    let outcome = TradingEngine::run(&graph, net_energy);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&outcome).unwrap());
    } else {
        println!("{}", outcome.ledger);
        println!("=== Final Wallets ===");
        for (node, tokens) in outcome.wallets.iter() {
            println!("  node {:>3}: {} tokens", node, tokens);
        }
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

fn fmt_cost(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}", value)
    } else {
        "inf".to_string()
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "generate" => cmd_generate(rest),
        "route" => cmd_route(rest),
        "trade" => cmd_trade(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
