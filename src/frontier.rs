use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use rustc_hash::FxHashMap;

use crate::errors::FrontierEmptyError;
use crate::graph::NodeId;
use crate::models::StrategyKind;

/// A discovered-but-unexpanded node together with the bookkeeping the engine
/// needs when it is finally popped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate<N: NodeId> {
    pub node: N,
    pub predecessor: Option<N>,
    /// Cumulative cost from the start node along the discovering route.
    pub cost: i64,
    pub estimate: i64,
    /// Edge count from the start node; consulted by the depth-limited cutoff.
    pub depth: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PriorityKey {
    Cost,
    Estimate,
    CostPlusEstimate,
}

impl PriorityKey {
    fn key_of<N: NodeId>(self, c: &Candidate<N>) -> i64 {
        match self {
            Self::Cost => c.cost,
            Self::Estimate => c.estimate,
            Self::CostPlusEstimate => c.cost + c.estimate,
        }
    }
}

#[derive(Debug)]
struct HeapEntry<N: NodeId> {
    key: i64,
    seq: u64,
    candidate: Candidate<N>,
}

impl<N: NodeId> PartialEq for HeapEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}
impl<N: NodeId> Eq for HeapEntry<N> {}
impl<N: NodeId> PartialOrd for HeapEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<N: NodeId> Ord for HeapEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; invert for min-heap behavior.
        // Ties break on seq, so equal keys pop in insertion order.
        (other.key, other.seq).cmp(&(self.key, self.seq))
    }
}

/// Frontier ordering policy, tagged by variant rather than trait objects so
/// the engine loop stays monomorphic over one concrete type.
#[derive(Debug)]
pub struct Frontier<N: NodeId>(Repr<N>);

#[derive(Debug)]
enum Repr<N: NodeId> {
    Fifo(VecDeque<Candidate<N>>),
    Lifo(Vec<Candidate<N>>),
    Priority {
        key: PriorityKey,
        heap: BinaryHeap<HeapEntry<N>>,
        /// Best pending cumulative cost per node. Heap entries whose cost no
        /// longer matches are stale (lazy deletion) and skipped on pop.
        pending: FxHashMap<N, i64>,
        seq: u64,
    },
}

impl<N: NodeId> Frontier<N> {
    /// Builds the frontier variant a strategy calls for. Iterative deepening
    /// is driven as repeated depth-limited runs, hence LIFO.
    pub fn for_strategy(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::BreadthFirst => Self(Repr::Fifo(VecDeque::new())),
            StrategyKind::DepthFirst
            | StrategyKind::DepthLimited { .. }
            | StrategyKind::IterativeDeepening { .. } => Self(Repr::Lifo(Vec::new())),
            StrategyKind::UniformCost => Self::priority(PriorityKey::Cost),
            StrategyKind::GreedyBestFirst => Self::priority(PriorityKey::Estimate),
            StrategyKind::AStar => Self::priority(PriorityKey::CostPlusEstimate),
        }
    }

    fn priority(key: PriorityKey) -> Self {
        Self(Repr::Priority {
            key,
            heap: BinaryHeap::new(),
            pending: FxHashMap::default(),
            seq: 0,
        })
    }

    /// Adds or updates a candidate.
    ///
    /// Priority variants apply decrease-key semantics: a strictly cheaper
    /// route to a pending node supersedes the old entry (the old heap entry
    /// is discarded when it reaches the top). FIFO/LIFO variants keep the
    /// first discovery of a pending node and ignore re-inserts.
    pub fn insert(&mut self, candidate: Candidate<N>) {
        match &mut self.0 {
            Repr::Fifo(queue) => {
                if !queue.iter().any(|c| c.node == candidate.node) {
                    queue.push_back(candidate);
                }
            }
            Repr::Lifo(stack) => {
                if !stack.iter().any(|c| c.node == candidate.node) {
                    stack.push(candidate);
                }
            }
            Repr::Priority {
                key,
                heap,
                pending,
                seq,
            } => {
                if let Some(&best) = pending.get(&candidate.node) {
                    if best <= candidate.cost {
                        return;
                    }
                }
                pending.insert(candidate.node.clone(), candidate.cost);
                *seq += 1;
                heap.push(HeapEntry {
                    key: key.key_of(&candidate),
                    seq: *seq,
                    candidate,
                });
            }
        }
    }

    /// Removes and returns the next candidate per the variant's ordering.
    ///
    /// Priority variants discard entries superseded while the node was still
    /// pending (lazy deletion) — under estimate ordering the replacement
    /// shares the old entry's key, so the discard must happen here, before
    /// the engine sees the entry. Entries for nodes that already popped live
    /// still surface; the engine recognizes those against its finalized
    /// costs and skips them as stale.
    pub fn pop_next(&mut self) -> Result<Candidate<N>, FrontierEmptyError> {
        match &mut self.0 {
            Repr::Fifo(queue) => queue.pop_front().ok_or(FrontierEmptyError),
            Repr::Lifo(stack) => stack.pop().ok_or(FrontierEmptyError),
            Repr::Priority { heap, pending, .. } => loop {
                let entry = heap.pop().ok_or(FrontierEmptyError)?;
                match pending.get(&entry.candidate.node) {
                    Some(&cost) if cost != entry.candidate.cost => continue,
                    Some(_) => {
                        pending.remove(&entry.candidate.node);
                        return Ok(entry.candidate);
                    }
                    None => return Ok(entry.candidate),
                }
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live candidate count (stale priority entries excluded).
    pub fn len(&self) -> usize {
        match &self.0 {
            Repr::Fifo(queue) => queue.len(),
            Repr::Lifo(stack) => stack.len(),
            Repr::Priority { pending, .. } => pending.len(),
        }
    }

    /// Current contents in expansion-priority order, for trace snapshots.
    pub fn snapshot(&self) -> Vec<N> {
        match &self.0 {
            Repr::Fifo(queue) => queue.iter().map(|c| c.node.clone()).collect(),
            Repr::Lifo(stack) => stack.iter().rev().map(|c| c.node.clone()).collect(),
            Repr::Priority { heap, pending, .. } => {
                let mut live: Vec<&HeapEntry<N>> = heap
                    .iter()
                    .filter(|e| pending.get(&e.candidate.node) == Some(&e.candidate.cost))
                    .collect();
                live.sort_by_key(|e| (e.key, e.seq));
                live.into_iter().map(|e| e.candidate.node.clone()).collect()
            }
        }
    }
}
