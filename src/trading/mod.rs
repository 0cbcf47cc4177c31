//! Greedy token-settlement trading over a cost-model graph.

pub mod engine;
