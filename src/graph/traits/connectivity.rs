//! Graph connectivity algorithm traits.

use crate::graph::error::GraphResult;
use crate::weight::Weight;

use super::types::{ComponentResult, GraphData};

/// Graph connectivity algorithms.
///
/// Determines connected components of undirected graphs.
pub trait ConnectivityAlgorithms<W: Weight> {
    /// Find connected components.
    ///
    /// Union-find over all edges. Each node gets labeled with its component
    /// ID (smallest node id in the component, in the graph's index base).
    fn connected_components(&self, graph: &GraphData<W>) -> GraphResult<ComponentResult>;

    /// Check if the graph is connected. A graph without nodes is connected.
    fn is_connected(&self, graph: &GraphData<W>) -> GraphResult<bool> {
        let result = self.connected_components(graph)?;
        Ok(result.num_components <= 1)
    }
}
