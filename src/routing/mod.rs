//! Least-cost route discovery: the traced shortest-path engine and
//! predecessor-walk path reconstruction.

pub mod path;
pub mod shortest_path;
