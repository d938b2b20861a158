pub mod engine;
pub mod errors;
pub mod frontier;
pub mod graph;
pub mod heuristic;
pub mod models;
pub mod report;
pub mod trace;

pub use engine::run;
pub use errors::{FrontierEmptyError, InvalidGraphError};
pub use frontier::{Candidate, Frontier};
pub use graph::{AdjacencyGraph, EdgeDirection, Graph, NodeId};
pub use heuristic::{Heuristic, TableHeuristic, ZeroHeuristic};
pub use models::{SearchResult, StrategyKind};
pub use report::{comparison_rows, format_elapsed, path_cost, rank, ComparisonRow};
pub use trace::{TraceEvent, TraceRecorder};
