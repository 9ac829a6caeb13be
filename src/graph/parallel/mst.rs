//! Parallel implementation of MST algorithms.

use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::error::GraphResult;
use crate::graph::impl_generic::{kruskal_batch_impl, kruskal_impl, labeled_kruskal_impl};
use crate::graph::traits::mst::MSTAlgorithms;
use crate::graph::traits::types::{GraphData, LabeledGraph, MSTOptions, MSTResult};
use crate::runtime::ParallelClient;
use crate::weight::Weight;

impl<W: Weight> MSTAlgorithms<W> for ParallelClient {
    fn minimum_spanning_tree_with(
        &self,
        graph: &GraphData<W>,
        options: &MSTOptions,
    ) -> GraphResult<MSTResult<usize, W>> {
        kruskal_impl(self, graph, options)
    }

    fn labeled_minimum_spanning_tree_with<L>(
        &self,
        graph: &LabeledGraph<L, W>,
        options: &MSTOptions,
    ) -> GraphResult<MSTResult<L, W>>
    where
        L: Clone + Eq + Hash + Debug,
    {
        labeled_kruskal_impl(self, graph, options)
    }

    fn minimum_spanning_forests_with(
        &self,
        graphs: &[GraphData<W>],
        options: &MSTOptions,
    ) -> Vec<GraphResult<MSTResult<usize, W>>> {
        kruskal_batch_impl(self, graphs, options)
    }
}
