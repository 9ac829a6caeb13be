//! Shared helper functions for graph algorithms.

use crate::graph::traits::types::Edge;

/// Adjacency lists of an undirected multigraph: `(neighbor, edge id)` per entry.
pub type AdjacencyList = Vec<Vec<(usize, usize)>>;

/// Build zero-based adjacency lists from an edge list.
///
/// Both directions are stored for every edge; a self-loop is stored twice on
/// its node. Endpoints outside `[base, base + num_nodes)` are skipped.
pub fn build_adjacency<W>(
    num_nodes: usize,
    base: usize,
    edges: &[Edge<usize, W>],
) -> AdjacencyList {
    let mut adj: AdjacencyList = vec![Vec::new(); num_nodes];

    for (id, edge) in edges.iter().enumerate() {
        let (Some(u), Some(v)) = (
            local(edge.from, base, num_nodes),
            local(edge.to, base, num_nodes),
        ) else {
            continue;
        };
        adj[u].push((v, id));
        adj[v].push((u, id));
    }

    adj
}

fn local(node: usize, base: usize, num_nodes: usize) -> Option<usize> {
    node.checked_sub(base).filter(|&u| u < num_nodes)
}
