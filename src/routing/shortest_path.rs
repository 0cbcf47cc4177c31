use crate::core::node::NodeId;
use crate::graph::cost_model::CostGraph;
use crate::routing::path::reconstruct_path;
use serde::{Deserialize, Serialize};

/// One finalization event of the shortest-path search: the node that was
/// just finalized and an independent snapshot of every tentative distance
/// at that instant. The step sequence replays the full search for
/// visualization and audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraversalStep {
    /// The node whose distance became final on this step.
    pub finalized: NodeId,
    /// Snapshot of the full distance map, indexed by node id.
    /// Unreached nodes hold `f64::INFINITY`.
    pub distances: Vec<f64>,
}

/// Complete result of one single-source shortest-path search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSearch {
    source: NodeId,
    distances: Vec<f64>,
    predecessors: Vec<Option<NodeId>>,
    paths: Vec<Vec<NodeId>>,
    steps: Vec<TraversalStep>,
}

impl RouteSearch {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Least cost from the source to `node`. Unreachable or out-of-range
    /// nodes report `f64::INFINITY`.
    pub fn distance(&self, node: NodeId) -> f64 {
        self.distances
            .get(node.index())
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// The full distance map, indexed by node id.
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Route from the source to `node`: the source's own path is
    /// `[source]`; unreachable or out-of-range targets yield an empty path.
    pub fn path(&self, node: NodeId) -> &[NodeId] {
        self.paths
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_finite()
    }

    /// Ordered finalization trace, one step per reachable node.
    pub fn steps(&self) -> &[TraversalStep] {
        &self.steps
    }

    pub fn predecessors(&self) -> &[Option<NodeId>] {
        &self.predecessors
    }
}

/// Single-source least-cost search over a cost-model graph.
///
/// O(V²) selection variant: repeatedly pick the unvisited node with the
/// minimum tentative distance — ties broken by ascending node id, a fixed
/// rule rather than incidental ordering — mark it visited, relax its
/// neighbor edges, then record a [`TraversalStep`]. The search ends when no
/// finite-distance unvisited node remains, so unreachable nodes keep
/// infinite distance and no predecessor. Deterministic for a fixed graph.
///
/// # Panics
///
/// Panics if `source` is not a node of the graph.
///
/// # Examples
///
/// ```
/// use grid_trading_engine::prelude::*;
///
/// let topology = GridTopology::from_edges(3, [(0, 1, 4), (1, 2, 6)]).unwrap();
/// let graph = CostGraph::standard(&topology);
/// let search = shortest_paths(&graph, NodeId::new(0));
///
/// assert_eq!(search.distance(NodeId::new(2)), 10.0);
/// assert_eq!(
///     search.path(NodeId::new(2)),
///     &[NodeId::new(0), NodeId::new(1), NodeId::new(2)]
/// );
/// ```
pub fn shortest_paths(graph: &CostGraph, source: NodeId) -> RouteSearch {
    let n = graph.node_count();
    assert!(
        source.index() < n,
        "source node {} out of range for a grid of {} nodes",
        source,
        n
    );

    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut steps = Vec::new();
    distances[source.index()] = 0.0;

    loop {
        // Ascending-id scan with strict `<` keeps the lowest id on ties.
        let mut selected = None;
        let mut best = f64::INFINITY;
        for (i, &dist) in distances.iter().enumerate() {
            if !visited[i] && dist < best {
                best = dist;
                selected = Some(i);
            }
        }
        // Every remaining unvisited node is unreachable.
        let Some(u) = selected else { break };

        visited[u] = true;
        for &(v, weight) in graph.neighbors(NodeId::new(u)) {
            let candidate = distances[u] + weight;
            if candidate < distances[v.index()] {
                distances[v.index()] = candidate;
                predecessors[v.index()] = Some(NodeId::new(u));
            }
        }
        steps.push(TraversalStep {
            finalized: NodeId::new(u),
            distances: distances.clone(),
        });
    }

    let paths = (0..n)
        .map(|t| reconstruct_path(&predecessors, source, NodeId::new(t)))
        .collect();

    RouteSearch {
        source,
        distances,
        predecessors,
        paths,
        steps,
    }
}
