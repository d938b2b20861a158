use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::graph::NodeId;
use crate::models::{SearchResult, StrategyKind};

/// One step of a run's history. Events are immutable once appended; the
/// sequence is a total, step-indexed record that replays identically for
/// identical inputs and strategy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEvent<N: NodeId> {
    pub step: u64,
    /// Node expanded this step; `None` for the initial pre-expansion event.
    pub expanded: Option<N>,
    /// True when the popped entry had already been finalized at an
    /// equal-or-better cost and was skipped without expansion.
    pub stale: bool,
    /// Frontier contents after this step, in expansion-priority order.
    pub frontier: Vec<N>,
    /// Nodes finalized so far, in finalization order.
    pub visited: Vec<N>,
    /// Cumulative cost of the expanded node (0 for the initial event).
    pub cost: i64,
}

/// Passive accumulator for a single run: appends events as the engine emits
/// them and keeps the summary counters. Nothing here feeds back into the
/// expansion loop.
#[derive(Debug)]
pub struct TraceRecorder<N: NodeId> {
    strategy: StrategyKind,
    events: Vec<TraceEvent<N>>,
    expanded: u64,
    generated: u64,
    max_frontier: u64,
    started: Instant,
}

impl<N: NodeId> TraceRecorder<N> {
    pub fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            events: Vec::new(),
            expanded: 0,
            // The start node counts as generated.
            generated: 1,
            max_frontier: 0,
            started: Instant::now(),
        }
    }

    fn push(&mut self, expanded: Option<N>, stale: bool, frontier: Vec<N>, visited: Vec<N>, cost: i64) {
        let step = self.events.len() as u64;
        self.max_frontier = self.max_frontier.max(frontier.len() as u64);
        self.events.push(TraceEvent {
            step,
            expanded,
            stale,
            frontier,
            visited,
            cost,
        });
    }

    /// Pre-loop event: frontier holds only the start node, nothing visited.
    pub fn record_initial(&mut self, frontier: Vec<N>) {
        self.push(None, false, frontier, Vec::new(), 0);
    }

    pub fn record_expansion(&mut self, node: N, cost: i64, frontier: Vec<N>, visited: Vec<N>) {
        self.expanded += 1;
        self.push(Some(node), false, frontier, visited, cost);
    }

    /// No-op event for a popped entry that was already finalized cheaper.
    pub fn record_stale(&mut self, node: N, cost: i64, frontier: Vec<N>, visited: Vec<N>) {
        self.push(Some(node), true, frontier, visited, cost);
    }

    pub fn note_generated(&mut self) {
        self.generated += 1;
    }

    pub fn expanded(&self) -> u64 {
        self.expanded
    }

    /// Seals the recorder into the final result, transferring event
    /// ownership to the caller.
    pub fn finish(self, success: bool, path: Vec<N>, total_cost: i64) -> SearchResult<N> {
        SearchResult {
            strategy: self.strategy,
            success,
            path,
            total_cost,
            expanded: self.expanded,
            generated: self.generated,
            max_frontier: self.max_frontier,
            elapsed: self.started.elapsed(),
            trace: self.events,
        }
    }
}
