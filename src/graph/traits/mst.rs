//! Minimum spanning tree algorithm traits.

use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::error::GraphResult;
use crate::weight::Weight;

use super::types::{GraphData, LabeledGraph, MSTOptions, MSTResult};

/// Minimum spanning tree algorithms.
///
/// Finds the subset of edges that connects all nodes with minimum total
/// weight. On a disconnected graph the result is a minimum spanning forest
/// with `connected == false`.
pub trait MSTAlgorithms<W: Weight> {
    /// Compute the minimum spanning tree using Kruskal's algorithm.
    ///
    /// Sorts a copy of the edges by weight (stable, so ties keep input order)
    /// and greedily adds edges that don't form cycles (using union-find).
    ///
    /// # Complexity
    /// O(E log E) for sorting + O(E α(V)) for union-find.
    ///
    /// # Errors
    /// `EdgeOutOfRange` or `InvalidWeight` for malformed edges, raised before
    /// any edge is processed. `CostOverflow` if the total is not representable.
    fn minimum_spanning_tree(&self, graph: &GraphData<W>) -> GraphResult<MSTResult<usize, W>> {
        self.minimum_spanning_tree_with(graph, &MSTOptions::default())
    }

    /// Same as [`minimum_spanning_tree`](Self::minimum_spanning_tree) with
    /// explicit options.
    fn minimum_spanning_tree_with(
        &self,
        graph: &GraphData<W>,
        options: &MSTOptions,
    ) -> GraphResult<MSTResult<usize, W>>;

    /// Minimum spanning tree of a labelled graph, with labels restored in the
    /// result edges.
    fn labeled_minimum_spanning_tree<L>(
        &self,
        graph: &LabeledGraph<L, W>,
    ) -> GraphResult<MSTResult<L, W>>
    where
        L: Clone + Eq + Hash + Debug,
    {
        self.labeled_minimum_spanning_tree_with(graph, &MSTOptions::default())
    }

    /// Same as [`labeled_minimum_spanning_tree`](Self::labeled_minimum_spanning_tree)
    /// with explicit options.
    fn labeled_minimum_spanning_tree_with<L>(
        &self,
        graph: &LabeledGraph<L, W>,
        options: &MSTOptions,
    ) -> GraphResult<MSTResult<L, W>>
    where
        L: Clone + Eq + Hash + Debug;

    /// Independent minimum spanning trees of several graphs.
    ///
    /// Every graph gets its own union-find; one malformed graph does not
    /// affect the others.
    fn minimum_spanning_forests(
        &self,
        graphs: &[GraphData<W>],
    ) -> Vec<GraphResult<MSTResult<usize, W>>> {
        self.minimum_spanning_forests_with(graphs, &MSTOptions::default())
    }

    /// Same as [`minimum_spanning_forests`](Self::minimum_spanning_forests)
    /// with explicit options, shared by every graph in the batch.
    fn minimum_spanning_forests_with(
        &self,
        graphs: &[GraphData<W>],
        options: &MSTOptions,
    ) -> Vec<GraphResult<MSTResult<usize, W>>>;
}
