//! Serial implementation of connectivity algorithms.

use crate::graph::error::GraphResult;
use crate::graph::impl_generic::connected_components_impl;
use crate::graph::traits::connectivity::ConnectivityAlgorithms;
use crate::graph::traits::types::{ComponentResult, GraphData};
use crate::runtime::SerialClient;
use crate::weight::Weight;

impl<W: Weight> ConnectivityAlgorithms<W> for SerialClient {
    fn connected_components(&self, graph: &GraphData<W>) -> GraphResult<ComponentResult> {
        connected_components_impl(self, graph)
    }
}
