use thiserror::Error;

/// Structural defect in the supplied graph. Fatal: the run aborts without
/// producing a `SearchResult`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidGraphError {
    #[error("edge references unknown node {node}")]
    UnknownNode { node: String },
    #[error("negative edge cost {cost} on {from} -> {to}")]
    NegativeCost {
        from: String,
        to: String,
        cost: i64,
    },
}

/// Raised by `Frontier::pop_next` when no candidates remain. Internal only:
/// the engine converts it into a failed `SearchResult` (goal unreachable),
/// so callers never observe it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("frontier is empty")]
pub struct FrontierEmptyError;
