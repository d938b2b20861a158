use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::errors::InvalidGraphError;

/// Bounds required of a node identifier. The engine treats nodes as opaque:
/// no attributes are read or written, only identity and ordering are used.
pub trait NodeId: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> NodeId for T {}

/// Read-only weighted-graph view consumed by the engine.
///
/// The engine never mutates the graph; directed vs undirected semantics are
/// the implementation's own declaration.
pub trait Graph<N: NodeId> {
    /// Outgoing edges of `node` as `(neighbor, cost)` pairs. The returned
    /// order must be deterministic: it drives insertion-order tie-breaking.
    fn neighbors(&self, node: &N) -> Vec<(N, i64)>;

    fn contains(&self, node: &N) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeDirection {
    Directed,
    Undirected,
}

/// In-memory adjacency-list graph with insertion-ordered nodes and edges.
#[derive(Clone, Debug)]
pub struct AdjacencyGraph<N: NodeId> {
    adjacency: IndexMap<N, Vec<(N, i64)>>,
}

impl<N: NodeId> Default for AdjacencyGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> AdjacencyGraph<N> {
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }

    /// Registers a node with no edges. Idempotent.
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Adds an edge, creating endpoints as needed. Undirected edges are
    /// stored as a pair of directed edges.
    pub fn add_edge(
        &mut self,
        from: N,
        to: N,
        cost: i64,
        direction: EdgeDirection,
    ) -> Result<(), InvalidGraphError> {
        if cost < 0 {
            return Err(InvalidGraphError::NegativeCost {
                from: format!("{from:?}"),
                to: format!("{to:?}"),
                cost,
            });
        }
        self.adjacency.entry(to.clone()).or_default();
        self.adjacency
            .entry(from.clone())
            .or_default()
            .push((to.clone(), cost));
        if direction == EdgeDirection::Undirected {
            self.adjacency.entry(to).or_default().push((from, cost));
        }
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }
}

impl<N: NodeId> Graph<N> for AdjacencyGraph<N> {
    fn neighbors(&self, node: &N) -> Vec<(N, i64)> {
        self.adjacency.get(node).cloned().unwrap_or_default()
    }

    fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }
}
