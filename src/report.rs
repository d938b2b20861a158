use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::graph::{Graph, NodeId};
use crate::models::{SearchResult, StrategyKind};

/// One line of a cross-strategy comparison table. Plain data; rendering and
/// plotting belong to the consumer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub strategy: StrategyKind,
    pub path_len: usize,
    pub total_cost: i64,
    pub expanded: u64,
    pub generated: u64,
    pub max_frontier: u64,
    pub elapsed_ms: f64,
}

fn elapsed_ms(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}

/// Builds comparison rows for the successful runs, in input order.
pub fn comparison_rows<N: NodeId>(results: &[SearchResult<N>]) -> Vec<ComparisonRow> {
    results
        .iter()
        .filter(|r| r.success)
        .map(|r| ComparisonRow {
            strategy: r.strategy,
            path_len: r.path.len(),
            total_cost: r.total_cost,
            expanded: r.expanded,
            generated: r.generated,
            max_frontier: r.max_frontier,
            elapsed_ms: elapsed_ms(r.elapsed),
        })
        .collect()
}

/// Ranks successful runs by an efficiency score in 0..=100, weighting
/// expansion count and wall-clock time equally. Higher is better.
pub fn rank<N: NodeId>(results: &[SearchResult<N>]) -> Vec<(StrategyKind, f64)> {
    let successful: Vec<&SearchResult<N>> = results.iter().filter(|r| r.success).collect();
    let max_expanded = successful.iter().map(|r| r.expanded).max().unwrap_or(1);
    let max_time = successful
        .iter()
        .map(|r| elapsed_ms(r.elapsed))
        .fold(0.0_f64, f64::max);

    let mut scores: Vec<(StrategyKind, f64)> = successful
        .iter()
        .map(|r| {
            let nodes_score = if max_expanded > 0 {
                1.0 - r.expanded as f64 / max_expanded as f64
            } else {
                1.0
            };
            let time_score = if max_time > 0.0 {
                1.0 - elapsed_ms(r.elapsed) / max_time
            } else {
                1.0
            };
            (r.strategy, nodes_score * 50.0 + time_score * 50.0)
        })
        .collect();
    scores.sort_by(|a, b| b.1.total_cmp(&a.1));
    scores
}

/// Recomputes a path's cost straight from the graph, independent of the
/// engine's bookkeeping. `None` when a consecutive pair is not connected.
pub fn path_cost<N, G>(graph: &G, path: &[N]) -> Option<i64>
where
    N: NodeId,
    G: Graph<N> + ?Sized,
{
    let mut total = 0;
    for pair in path.windows(2) {
        let cost = graph
            .neighbors(&pair[0])
            .into_iter()
            .filter(|(n, _)| *n == pair[1])
            .map(|(_, c)| c)
            .min()?;
        total += cost;
    }
    Some(total)
}

/// Human-readable elapsed time: µs below a millisecond, ms below a second,
/// seconds above.
pub fn format_elapsed(elapsed: Duration) -> String {
    let ms = elapsed_ms(elapsed);
    if ms < 1.0 {
        format!("{:.2} µs", ms * 1000.0)
    } else if ms < 1000.0 {
        format!("{ms:.2} ms")
    } else {
        format!("{:.2} s", ms / 1000.0)
    }
}
