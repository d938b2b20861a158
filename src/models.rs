use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::graph::NodeId;
use crate::trace::TraceEvent;

/// Which frontier ordering policy a run uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// FIFO frontier; expansion in discovery order.
    BreadthFirst,
    /// LIFO frontier; most recently discovered first.
    DepthFirst,
    /// Priority by ascending cumulative cost.
    UniformCost,
    /// Priority by ascending heuristic estimate only.
    GreedyBestFirst,
    /// Priority by ascending cumulative cost + heuristic estimate.
    /// Optimal only under an admissible heuristic.
    AStar,
    /// LIFO frontier; nodes at the depth limit are not expanded further.
    DepthLimited { limit: u32 },
    /// Repeated depth-limited runs at limits `0..max_depth`, first hit wins.
    IterativeDeepening { max_depth: u32 },
}

impl StrategyKind {
    /// True when the strategy consults the heuristic estimate.
    pub fn is_informed(self) -> bool {
        matches!(self, Self::GreedyBestFirst | Self::AStar)
    }
}

/// Final output of a search run.
///
/// `trace` is the complete step-indexed history of the run; events are
/// immutable and meant to be replayed strictly in index order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<N: NodeId> {
    pub strategy: StrategyKind,
    pub success: bool,
    /// Start-to-goal node sequence; empty when the goal is unreachable.
    pub path: Vec<N>,
    pub total_cost: i64,
    /// Nodes actually expanded (stale skips and the initial event excluded).
    pub expanded: u64,
    /// Candidate nodes generated, counting the start node.
    pub generated: u64,
    /// High-water mark of the frontier size.
    pub max_frontier: u64,
    pub elapsed: Duration,
    pub trace: Vec<TraceEvent<N>>,
}
