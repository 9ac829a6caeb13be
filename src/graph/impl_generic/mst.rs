//! Minimum spanning tree via Kruskal's algorithm (undirected graphs).
//!
//! Uses union-find with path compression and union by rank.
//! The greedy scan is sequential on every client; clients only change how
//! the edges are sorted.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::graph::error::{GraphError, GraphResult};
use crate::graph::traits::types::{GraphData, LabeledGraph, MSTOptions, MSTResult};
use crate::graph::union_find::UnionFind;
use crate::graph::validation::validate_edges;
use crate::runtime::RuntimeClient;
use crate::weight::Weight;

/// Kruskal's minimum spanning tree algorithm.
///
/// Time: O(E log E) for sorting + O(E α(V)) for union-find.
///
/// All edges are validated before the union-find is created, so a failed
/// call leaves no partial state behind. The input edge list is not modified.
pub fn kruskal_impl<C, W>(
    client: &C,
    graph: &GraphData<W>,
    options: &MSTOptions,
) -> GraphResult<MSTResult<usize, W>>
where
    C: RuntimeClient,
    W: Weight,
{
    validate_edges(graph)?;

    let n = graph.num_nodes;
    let base = graph.index_base.offset();
    let target = n.saturating_sub(1);

    debug!(
        num_nodes = n,
        num_edges = graph.num_edges(),
        client = client.name(),
        "computing minimum spanning tree"
    );

    let order = client.argsort_by_weight(&graph.edges);

    let mut uf = UnionFind::new(n);
    let mut mst_edges = Vec::with_capacity(target);
    let mut total_cost = W::zero();

    for i in order {
        // Stop when we have n-1 edges
        if options.early_exit && mst_edges.len() == target {
            break;
        }

        let edge = &graph.edges[i];
        if edge.is_self_loop() {
            trace!(edge = i, "rejected self-loop");
            continue;
        }

        let ru = uf.root(edge.from - base);
        let rv = uf.root(edge.to - base);
        if !uf.link(ru, rv) {
            trace!(edge = i, "rejected cycle-forming edge");
            continue;
        }

        total_cost = total_cost
            .checked_add(edge.weight)
            .ok_or(GraphError::CostOverflow { edge: i })?;
        mst_edges.push(*edge);
    }

    let num_components = n - mst_edges.len();
    let connected = mst_edges.len() == target;

    debug!(
        accepted = mst_edges.len(),
        connected,
        num_components,
        total_cost = ?total_cost,
        "minimum spanning tree done"
    );

    Ok(MSTResult {
        total_cost,
        edges: mst_edges,
        connected,
        num_components,
    })
}

/// Kruskal's algorithm over a labelled graph.
///
/// Runs [`kruskal_impl`] on the indexed view and maps accepted edges back to
/// their labels.
pub fn labeled_kruskal_impl<C, L, W>(
    client: &C,
    graph: &LabeledGraph<L, W>,
    options: &MSTOptions,
) -> GraphResult<MSTResult<L, W>>
where
    C: RuntimeClient,
    L: Clone + Eq + Hash + Debug,
    W: Weight,
{
    let result = kruskal_impl(client, &graph.to_graph_data(), options)?;

    let edges = result
        .edges
        .iter()
        .map(|edge| {
            graph.label_edge(edge).ok_or(GraphError::InvalidNode {
                node: edge.from.max(edge.to),
                num_nodes: graph.num_nodes(),
            })
        })
        .collect::<GraphResult<Vec<_>>>()?;

    Ok(MSTResult {
        total_cost: result.total_cost,
        edges,
        connected: result.connected,
        num_components: result.num_components,
    })
}

/// Independent spanning trees for a batch of graphs, one union-find each.
pub fn kruskal_batch_impl<C, W>(
    client: &C,
    graphs: &[GraphData<W>],
    options: &MSTOptions,
) -> Vec<GraphResult<MSTResult<usize, W>>>
where
    C: RuntimeClient,
    W: Weight,
{
    debug!(
        num_graphs = graphs.len(),
        client = client.name(),
        "computing minimum spanning tree batch"
    );
    client.map_batch(graphs, |graph| kruskal_impl(client, graph, options))
}
