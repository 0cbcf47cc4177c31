use crate::core::node::NodeId;
use crate::graph::ConfigError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Configuration for generating a random grid topology.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologyConfig {
    /// Number of grid nodes. Must be at least 1.
    pub node_count: usize,
    /// Probability that any unordered node pair is connected. Within [0, 1].
    pub density: f64,
    /// Seed for the deterministic random source.
    pub seed: u64,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            node_count: 10,
            density: 0.4,
            seed: 42,
        }
    }
}

/// An undirected weighted edge between two grid nodes.
///
/// Stored with `u < v`; the cost is symmetric and fixed at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridEdge {
    pub u: NodeId,
    pub v: NodeId,
    /// Raw transmission cost, drawn uniformly from [1, 20] at generation.
    pub base_cost: u32,
}

/// An undirected grid topology: a node set plus a unique-pair edge set.
///
/// Invariants: no self-loops, at most one edge per unordered pair, symmetric
/// cost. Built once per configuration and read-only thereafter; both cost
/// models wrap the same topology so their results stay comparable.
///
/// # Examples
///
/// ```
/// use grid_trading_engine::prelude::*;
///
/// let topology = GridTopology::generate(&TopologyConfig {
///     node_count: 8,
///     density: 0.5,
///     seed: 7,
/// }).unwrap();
///
/// assert_eq!(topology.node_count(), 8);
/// // Same seed, same grid.
/// let again = GridTopology::generate(&TopologyConfig {
///     node_count: 8,
///     density: 0.5,
///     seed: 7,
/// }).unwrap();
/// assert_eq!(topology.edges(), again.edges());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridTopology {
    node_count: usize,
    edges: Vec<GridEdge>,
}

impl GridTopology {
    /// Generate a random topology from an explicit seed.
    ///
    /// Every unordered pair `(i, j)` with `i < j` is connected with
    /// probability `density`; connected pairs draw an integer base cost
    /// uniformly from `[1, 20]`. A density of 0 yields isolated nodes, which
    /// is valid: downstream path queries report unreachability.
    pub fn generate(config: &TopologyConfig) -> Result<Self, ConfigError> {
        if config.node_count == 0 {
            return Err(ConfigError::InvalidNodeCount);
        }
        if !(0.0..=1.0).contains(&config.density) {
            return Err(ConfigError::InvalidDensity {
                value: config.density,
            });
        }

        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut edges = Vec::new();
        for i in 0..config.node_count {
            for j in (i + 1)..config.node_count {
                if rng.gen::<f64>() < config.density {
                    edges.push(GridEdge {
                        u: NodeId::new(i),
                        v: NodeId::new(j),
                        base_cost: rng.gen_range(1..=20),
                    });
                }
            }
        }

        Ok(Self {
            node_count: config.node_count,
            edges,
        })
    }

    /// Build a topology from an explicit edge list.
    ///
    /// Rejects out-of-range endpoints, self-loops, duplicate pairs, and
    /// non-positive base costs. Edge endpoints are normalized to `u < v`.
    pub fn from_edges(
        node_count: usize,
        edges: impl IntoIterator<Item = (usize, usize, u32)>,
    ) -> Result<Self, ConfigError> {
        if node_count == 0 {
            return Err(ConfigError::InvalidNodeCount);
        }

        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        let mut normalized = Vec::new();
        for (a, b, base_cost) in edges {
            let (u, v) = if a <= b { (a, b) } else { (b, a) };
            if u == v {
                return Err(ConfigError::SelfLoop { node: NodeId::new(u) });
            }
            if v >= node_count {
                return Err(ConfigError::NodeOutOfRange {
                    node: NodeId::new(v),
                    node_count,
                });
            }
            if base_cost == 0 {
                return Err(ConfigError::InvalidBaseCost {
                    u: NodeId::new(u),
                    v: NodeId::new(v),
                    cost: base_cost,
                });
            }
            if !seen.insert((u, v)) {
                return Err(ConfigError::DuplicateEdge {
                    u: NodeId::new(u),
                    v: NodeId::new(v),
                });
            }
            normalized.push(GridEdge {
                u: NodeId::new(u),
                v: NodeId::new(v),
                base_cost,
            });
        }

        Ok(Self {
            node_count,
            edges: normalized,
        })
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edges(&self) -> &[GridEdge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count).map(NodeId::new)
    }

    /// Symmetric adjacency over base costs: `adjacency()[u] = [(v, cost)]`.
    pub fn adjacency(&self) -> Vec<Vec<(NodeId, u32)>> {
        let mut adj = vec![Vec::new(); self.node_count];
        for edge in &self.edges {
            adj[edge.u.index()].push((edge.v, edge.base_cost));
            adj[edge.v.index()].push((edge.u, edge.base_cost));
        }
        adj
    }
}
