use std::time::Instant;

use indexmap::IndexSet;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::errors::InvalidGraphError;
use crate::frontier::{Candidate, Frontier};
use crate::graph::{Graph, NodeId};
use crate::heuristic::Heuristic;
use crate::models::{SearchResult, StrategyKind};
use crate::trace::TraceRecorder;

/// Runs one search to completion.
///
/// Unreachability is a normal outcome: the result comes back with
/// `success == false` and an empty path. `Err` is reserved for structural
/// graph defects (unknown node, negative edge cost), which abort the run.
///
/// A missing heuristic is treated as identically zero, so `a_star` degrades
/// to `uniform_cost` and `greedy_best_first` to discovery order.
pub fn run<N, G>(
    graph: &G,
    heuristic: Option<&dyn Heuristic<N>>,
    start: N,
    goal: N,
    kind: StrategyKind,
) -> Result<SearchResult<N>, InvalidGraphError>
where
    N: NodeId,
    G: Graph<N> + ?Sized,
{
    match kind {
        StrategyKind::IterativeDeepening { max_depth } => {
            run_iterative(graph, heuristic, start, goal, max_depth)
        }
        _ => run_single(graph, heuristic, start, goal, kind),
    }
}

/// Per-run mutable bookkeeping, owned exclusively by one loop execution.
struct SearchState<N: NodeId> {
    frontier: Frontier<N>,
    /// Best discovered cumulative cost per node, pending or finalized.
    best_cost: FxHashMap<N, i64>,
    /// Cost at which a node was expanded; presence marks it visited.
    finalized: FxHashMap<N, i64>,
    /// Predecessor along the route each node was finalized from.
    came_from: FxHashMap<N, N>,
    /// Finalization order, for trace snapshots.
    visited: IndexSet<N>,
}

fn run_single<N, G>(
    graph: &G,
    heuristic: Option<&dyn Heuristic<N>>,
    start: N,
    goal: N,
    kind: StrategyKind,
) -> Result<SearchResult<N>, InvalidGraphError>
where
    N: NodeId,
    G: Graph<N> + ?Sized,
{
    for endpoint in [&start, &goal] {
        if !graph.contains(endpoint) {
            return Err(InvalidGraphError::UnknownNode {
                node: format!("{endpoint:?}"),
            });
        }
    }

    let depth_limit = match kind {
        StrategyKind::DepthLimited { limit } => Some(limit),
        _ => None,
    };
    let estimate = |n: &N| heuristic.map_or(0, |h| h.estimate(n));

    debug!(strategy = ?kind, "search start");

    let mut state = SearchState {
        frontier: Frontier::for_strategy(kind),
        best_cost: FxHashMap::default(),
        finalized: FxHashMap::default(),
        came_from: FxHashMap::default(),
        visited: IndexSet::new(),
    };
    let mut recorder = TraceRecorder::new(kind);

    state.best_cost.insert(start.clone(), 0);
    state.frontier.insert(Candidate {
        node: start.clone(),
        predecessor: None,
        cost: 0,
        estimate: estimate(&start),
        depth: 0,
    });
    recorder.record_initial(state.frontier.snapshot());

    loop {
        let Ok(current) = state.frontier.pop_next() else {
            // Exhausted: goal unreachable. Normal termination, not a fault.
            debug!(expanded = recorder.expanded(), "frontier exhausted");
            return Ok(recorder.finish(false, Vec::new(), 0));
        };

        if current.node == goal {
            if let Some(pred) = &current.predecessor {
                state.came_from.insert(current.node.clone(), pred.clone());
            }
            let path = reconstruct(&state.came_from, &start, &goal);
            debug!(cost = current.cost, expanded = recorder.expanded(), "goal reached");
            return Ok(recorder.finish(true, path, current.cost));
        }

        // Lazy deletion: an entry superseded after insertion pops here with
        // a cost no better than the finalized one and is skipped.
        if let Some(&final_cost) = state.finalized.get(&current.node) {
            if final_cost <= current.cost {
                recorder.record_stale(
                    current.node.clone(),
                    current.cost,
                    state.frontier.snapshot(),
                    state.visited.iter().cloned().collect(),
                );
                continue;
            }
        }

        state.finalized.insert(current.node.clone(), current.cost);
        state.visited.insert(current.node.clone());
        if let Some(pred) = &current.predecessor {
            state.came_from.insert(current.node.clone(), pred.clone());
        }
        trace!(node = ?current.node, cost = current.cost, depth = current.depth, "expand");

        let within_limit = depth_limit.map_or(true, |limit| current.depth < limit);
        if within_limit {
            for (neighbor, edge_cost) in graph.neighbors(&current.node) {
                recorder.note_generated();
                if !graph.contains(&neighbor) {
                    return Err(InvalidGraphError::UnknownNode {
                        node: format!("{neighbor:?}"),
                    });
                }
                if edge_cost < 0 {
                    return Err(InvalidGraphError::NegativeCost {
                        from: format!("{:?}", current.node),
                        to: format!("{neighbor:?}"),
                        cost: edge_cost,
                    });
                }
                let candidate_cost = current.cost + edge_cost;
                let improves = state
                    .best_cost
                    .get(&neighbor)
                    .map_or(true, |&best| candidate_cost < best);
                if improves {
                    state.best_cost.insert(neighbor.clone(), candidate_cost);
                    state.frontier.insert(Candidate {
                        estimate: estimate(&neighbor),
                        node: neighbor,
                        predecessor: Some(current.node.clone()),
                        cost: candidate_cost,
                        depth: current.depth + 1,
                    });
                }
            }
        }

        recorder.record_expansion(
            current.node.clone(),
            current.cost,
            state.frontier.snapshot(),
            state.visited.iter().cloned().collect(),
        );
    }
}

/// Follows predecessor links from the goal back to the start and reverses.
fn reconstruct<N: NodeId>(came_from: &FxHashMap<N, N>, start: &N, goal: &N) -> Vec<N> {
    let mut path = vec![goal.clone()];
    let mut current = goal;
    while current != start {
        let prev = came_from
            .get(current)
            .expect("finalized node missing predecessor link");
        path.push(prev.clone());
        current = prev;
    }
    path.reverse();
    path
}

/// Depth-limited runs at limits `0..max_depth`; traces concatenate and
/// metrics accumulate across iterations, the first successful run wins.
/// A start equal to the goal succeeds without deepening, whatever the
/// `max_depth`.
fn run_iterative<N, G>(
    graph: &G,
    heuristic: Option<&dyn Heuristic<N>>,
    start: N,
    goal: N,
    max_depth: u32,
) -> Result<SearchResult<N>, InvalidGraphError>
where
    N: NodeId,
    G: Graph<N> + ?Sized,
{
    let started = Instant::now();
    let strategy = StrategyKind::IterativeDeepening { max_depth };

    for endpoint in [&start, &goal] {
        if !graph.contains(endpoint) {
            return Err(InvalidGraphError::UnknownNode {
                node: format!("{endpoint:?}"),
            });
        }
    }
    // The trivial route needs no deepening; a single zero-limit run settles
    // it even when max_depth is 0.
    if start == goal {
        let mut result =
            run_single(graph, heuristic, start, goal, StrategyKind::DepthLimited { limit: 0 })?;
        result.strategy = strategy;
        return Ok(result);
    }

    let mut trace = Vec::new();
    let mut expanded = 0;
    let mut generated = 0;
    let mut max_frontier = 0;

    for limit in 0..max_depth {
        let result = run_single(
            graph,
            heuristic,
            start.clone(),
            goal.clone(),
            StrategyKind::DepthLimited { limit },
        )?;
        expanded += result.expanded;
        generated += result.generated;
        max_frontier = max_frontier.max(result.max_frontier);
        for mut event in result.trace {
            event.step = trace.len() as u64;
            trace.push(event);
        }
        if result.success {
            debug!(limit, expanded, "iterative deepening hit goal");
            return Ok(SearchResult {
                strategy,
                success: true,
                path: result.path,
                total_cost: result.total_cost,
                expanded,
                generated,
                max_frontier,
                elapsed: started.elapsed(),
                trace,
            });
        }
    }

    Ok(SearchResult {
        strategy,
        success: false,
        path: Vec::new(),
        total_cost: 0,
        expanded,
        generated,
        max_frontier,
        elapsed: started.elapsed(),
        trace,
    })
}
