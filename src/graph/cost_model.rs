use crate::core::node::NodeId;
use crate::graph::topology::GridTopology;
use crate::graph::ConfigError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Round to two decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Per-node power capacity ratings.
///
/// Capacities modulate edge costs in the power-aware model: a link between
/// two high-capacity nodes is cheaper to push energy through. Values are
/// strictly positive; defaults are seeded uniform draws from [0.5, 2.0]
/// rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PowerProfile {
    capacities: Vec<f64>,
}

impl PowerProfile {
    /// Draw a default capacity per node from an explicit seed.
    pub fn generate(node_count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let capacities = (0..node_count)
            .map(|_| round2(rng.gen_range(0.5..=2.0)))
            .collect();
        Self { capacities }
    }

    /// Use explicitly supplied capacities. Rejects any `power ≤ 0`
    /// (or non-finite) value.
    pub fn from_values(capacities: Vec<f64>) -> Result<Self, ConfigError> {
        for (i, &value) in capacities.iter().enumerate() {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NonPositivePower {
                    node: NodeId::new(i),
                    value,
                });
            }
        }
        Ok(Self { capacities })
    }

    pub fn capacity(&self, node: NodeId) -> f64 {
        self.capacities[node.index()]
    }

    pub fn len(&self) -> usize {
        self.capacities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capacities.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.capacities
    }
}

/// Which weight function a [`CostGraph`] applies to the shared edge set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CostVariant {
    /// Edge weight is the raw base cost.
    Standard,
    /// Edge weight is `round(base_cost / (power(u) * power(v)), 2)`.
    PowerAware,
}

impl std::fmt::Display for CostVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostVariant::Standard => write!(f, "standard"),
            CostVariant::PowerAware => write!(f, "power-aware"),
        }
    }
}

/// A weighted view of a grid topology under one cost variant.
///
/// Both variants wrap the identical edge set, so their distances and routes
/// are directly comparable; only the weight function differs. The graph is
/// read-only during routing and trading runs.
///
/// # Examples
///
/// ```
/// use grid_trading_engine::prelude::*;
///
/// let topology = GridTopology::from_edges(3, [(0, 1, 4), (1, 2, 6)]).unwrap();
/// let powers = PowerProfile::from_values(vec![2.0, 1.0, 0.5]).unwrap();
///
/// let standard = CostGraph::standard(&topology);
/// let aware = CostGraph::power_aware(&topology, powers).unwrap();
///
/// assert_eq!(standard.edge_weight(0.into(), 1.into()), Some(4.0));
/// // 4 / (2.0 * 1.0)
/// assert_eq!(aware.edge_weight(0.into(), 1.into()), Some(2.0));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostGraph {
    node_count: usize,
    variant: CostVariant,
    powers: Option<PowerProfile>,
    adjacency: Vec<Vec<(NodeId, f64)>>,
}

impl CostGraph {
    /// Wrap a topology with raw base costs.
    pub fn standard(topology: &GridTopology) -> Self {
        Self::build(topology, CostVariant::Standard, None)
    }

    /// Wrap a topology with power-weighted costs.
    ///
    /// The profile must rate every node of the topology.
    pub fn power_aware(
        topology: &GridTopology,
        powers: PowerProfile,
    ) -> Result<Self, ConfigError> {
        if powers.len() != topology.node_count() {
            return Err(ConfigError::PowerCountMismatch {
                expected: topology.node_count(),
                actual: powers.len(),
            });
        }
        Ok(Self::build(topology, CostVariant::PowerAware, Some(powers)))
    }

    fn build(topology: &GridTopology, variant: CostVariant, powers: Option<PowerProfile>) -> Self {
        let mut adjacency = vec![Vec::new(); topology.node_count()];
        for edge in topology.edges() {
            let weight = match (&variant, &powers) {
                (CostVariant::Standard, _) => edge.base_cost as f64,
                (CostVariant::PowerAware, Some(p)) => {
                    round2(edge.base_cost as f64 / (p.capacity(edge.u) * p.capacity(edge.v)))
                }
                (CostVariant::PowerAware, None) => unreachable!("power-aware graph without powers"),
            };
            adjacency[edge.u.index()].push((edge.v, weight));
            adjacency[edge.v.index()].push((edge.u, weight));
        }
        Self {
            node_count: topology.node_count(),
            variant,
            powers,
            adjacency,
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn variant(&self) -> CostVariant {
        self.variant
    }

    /// The power profile backing a power-aware graph, if any.
    pub fn powers(&self) -> Option<&PowerProfile> {
        self.powers.as_ref()
    }

    /// Weighted neighbors of a node.
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, f64)] {
        &self.adjacency[node.index()]
    }

    /// Weight of the edge between `u` and `v`, if one exists.
    pub fn edge_weight(&self, u: NodeId, v: NodeId) -> Option<f64> {
        self.adjacency[u.index()]
            .iter()
            .find(|&&(n, _)| n == v)
            .map(|&(_, w)| w)
    }
}
