//! Error types for graph operations.

use std::fmt;

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur during connectivity and spanning tree computations.
///
/// A disconnected input graph is not an error; it is reported through
/// [`MSTResult::connected`](super::MSTResult::connected).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A disjoint-set operation referenced an id that was never created.
    InvalidNode { node: usize, num_nodes: usize },

    /// A labelled operation referenced a label that was never registered.
    UnknownLabel { label: String },

    /// An edge endpoint lies outside the node domain `[lower, upper)`.
    EdgeOutOfRange {
        edge: usize,
        from: usize,
        to: usize,
        lower: usize,
        upper: usize,
    },

    /// An edge weight does not take part in the total order (NaN).
    InvalidWeight { edge: usize, reason: String },

    /// The accumulated tree cost is not representable in the weight type.
    CostOverflow { edge: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNode { node, num_nodes } => {
                write!(
                    f,
                    "Invalid node {}: disjoint set has {} elements",
                    node, num_nodes
                )
            }
            Self::UnknownLabel { label } => {
                write!(f, "Unknown node label {}", label)
            }
            Self::EdgeOutOfRange {
                edge,
                from,
                to,
                lower,
                upper,
            } => {
                write!(
                    f,
                    "Edge {} ({} - {}) references a node outside [{}, {})",
                    edge, from, to, lower, upper
                )
            }
            Self::InvalidWeight { edge, reason } => {
                write!(f, "Invalid weight on edge {}: {}", edge, reason)
            }
            Self::CostOverflow { edge } => {
                write!(f, "Total cost overflowed while accepting edge {}", edge)
            }
        }
    }
}

impl std::error::Error for GraphError {}
