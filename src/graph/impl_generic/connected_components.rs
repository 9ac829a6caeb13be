//! Connected components via union-find (undirected graphs).
//!
//! Labels each node with its component ID (smallest node id in component).

use tracing::debug;

use crate::graph::error::GraphResult;
use crate::graph::traits::types::{ComponentResult, GraphData};
use crate::graph::union_find::UnionFind;
use crate::graph::validation::validate_edges;
use crate::runtime::RuntimeClient;
use crate::weight::Weight;

/// Connected components via union-find.
///
/// Time: O(V + E α(V)). Edges are validated like in
/// [`kruskal_impl`](super::kruskal_impl); weights play no other role.
pub fn connected_components_impl<C, W>(
    client: &C,
    graph: &GraphData<W>,
) -> GraphResult<ComponentResult>
where
    C: RuntimeClient,
    W: Weight,
{
    validate_edges(graph)?;

    let n = graph.num_nodes;
    let base = graph.index_base.offset();

    let mut uf = UnionFind::new(n);
    for edge in &graph.edges {
        let ru = uf.root(edge.from - base);
        let rv = uf.root(edge.to - base);
        uf.link(ru, rv);
    }

    // Nodes are visited in increasing order, so the first node seen in a
    // component is its smallest member.
    let mut smallest = vec![usize::MAX; n];
    let mut labels = Vec::with_capacity(n);
    for node in 0..n {
        let root = uf.root(node);
        if smallest[root] == usize::MAX {
            smallest[root] = node + base;
        }
        labels.push(smallest[root]);
    }

    let num_components = uf.component_count();

    debug!(
        num_nodes = n,
        num_components,
        client = client.name(),
        "connected components done"
    );

    Ok(ComponentResult {
        labels,
        num_components,
    })
}
