use std::collections::HashMap;

use crate::graph::NodeId;

/// Cost-to-goal estimator consumed by the informed strategies.
///
/// Estimates must be non-negative. A* additionally requires admissibility
/// (never overestimating the true remaining cost) for its optimality
/// guarantee; the engine does not verify this and will silently return a
/// suboptimal path if it is violated.
pub trait Heuristic<N: NodeId> {
    fn estimate(&self, node: &N) -> i64;
}

/// Identically-zero estimate. Under this heuristic A* behaves exactly like
/// uniform-cost search.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl<N: NodeId> Heuristic<N> for ZeroHeuristic {
    fn estimate(&self, _node: &N) -> i64 {
        0
    }
}

/// Precomputed per-node estimates. Nodes absent from the table estimate 0,
/// which is always admissible.
#[derive(Clone, Debug)]
pub struct TableHeuristic<N: NodeId> {
    table: HashMap<N, i64>,
}

impl<N: NodeId> TableHeuristic<N> {
    pub fn new(table: HashMap<N, i64>) -> Self {
        Self { table }
    }
}

impl<N: NodeId> FromIterator<(N, i64)> for TableHeuristic<N> {
    fn from_iter<I: IntoIterator<Item = (N, i64)>>(iter: I) -> Self {
        Self {
            table: iter.into_iter().collect(),
        }
    }
}

impl<N: NodeId> Heuristic<N> for TableHeuristic<N> {
    fn estimate(&self, node: &N) -> i64 {
        self.table.get(node).copied().unwrap_or(0)
    }
}
