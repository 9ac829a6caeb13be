//! Validation helpers for graph inputs.

use crate::weight::Weight;

use super::error::{GraphError, GraphResult};
use super::traits::types::GraphData;

/// Validate every edge of `graph` before anything is computed.
///
/// Endpoints must lie in the graph's node range and weights must be ordered.
pub fn validate_edges<W: Weight>(graph: &GraphData<W>) -> GraphResult<()> {
    let range = graph.node_range();

    for (i, edge) in graph.edges.iter().enumerate() {
        if !range.contains(&edge.from) || !range.contains(&edge.to) {
            return Err(GraphError::EdgeOutOfRange {
                edge: i,
                from: edge.from,
                to: edge.to,
                lower: range.start,
                upper: range.end,
            });
        }
        if !edge.weight.is_ordered() {
            return Err(GraphError::InvalidWeight {
                edge: i,
                reason: format!("{:?} is not comparable", edge.weight),
            });
        }
    }

    Ok(())
}
