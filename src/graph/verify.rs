//! Independent verification of spanning forest results.
//!
//! These checks do not use union-find: cycles and components are found by
//! plain graph traversal, so they can be used to cross-check the builder.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::weight::Weight;

use super::impl_generic::helpers::build_adjacency;
use super::traits::types::{Edge, GraphData, MSTResult};

/// Verification report for a spanning forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForestReport {
    /// Number of edges in the forest.
    pub num_edges: usize,
    /// The forest contains no cycle (self-loops count as cycles).
    pub acyclic: bool,
    /// Every forest edge occurs in the input, respecting multiplicity.
    pub edges_from_input: bool,
    /// The forest has exactly as many components as the input graph.
    pub components_preserved: bool,
    /// `connected` agrees with the edge count.
    pub connected_flag_consistent: bool,
    /// `num_components` agrees with the edge count.
    pub component_count_consistent: bool,
    /// `total_cost` equals the sum of the forest's edge weights.
    pub cost_consistent: bool,
}

impl ForestReport {
    /// Returns true if every check passed.
    pub fn is_valid(&self) -> bool {
        self.acyclic
            && self.edges_from_input
            && self.components_preserved
            && self.connected_flag_consistent
            && self.component_count_consistent
            && self.cost_consistent
    }
}

/// Check that `result` is a spanning forest of `graph`.
///
/// Minimality is not checked here.
pub fn verify_spanning_forest<W: Weight>(
    graph: &GraphData<W>,
    result: &MSTResult<usize, W>,
) -> ForestReport {
    let n = graph.num_nodes;
    let base = graph.index_base.offset();

    let in_range = result
        .edges
        .iter()
        .all(|e| graph.node_range().contains(&e.from) && graph.node_range().contains(&e.to));
    let acyclic = in_range && is_acyclic(n, base, &result.edges);

    let forest_components = count_components(n, base, &result.edges);
    let graph_components = count_components(n, base, &graph.edges);

    let expected_connected = n == 0 || result.edges.len() + 1 == n;

    let cost = result
        .edges
        .iter()
        .try_fold(W::zero(), |acc, e| acc.checked_add(e.weight));

    ForestReport {
        num_edges: result.edges.len(),
        acyclic,
        edges_from_input: is_sub_multiset(&result.edges, &graph.edges),
        components_preserved: in_range && forest_components == graph_components,
        connected_flag_consistent: result.connected == expected_connected,
        component_count_consistent: n.checked_sub(result.edges.len())
            == Some(result.num_components),
        cost_consistent: cost.is_some_and(|c| c.total_order(&result.total_cost).is_eq()),
    }
}

/// Returns true if the edges form a forest over `[base, base + num_nodes)`.
///
/// Parallel edges and self-loops are cycles. Out-of-range endpoints are ignored.
pub fn is_acyclic<W>(num_nodes: usize, base: usize, edges: &[Edge<usize, W>]) -> bool {
    let adj = build_adjacency(num_nodes, base, edges);
    let mut visited = vec![false; num_nodes];

    for start in 0..num_nodes {
        if visited[start] {
            continue;
        }
        visited[start] = true;

        // (node, edge used to reach it)
        let mut stack = vec![(start, usize::MAX)];
        while let Some((u, via)) = stack.pop() {
            for &(v, id) in &adj[u] {
                if id == via {
                    continue;
                }
                if visited[v] {
                    return false;
                }
                visited[v] = true;
                stack.push((v, id));
            }
        }
    }

    true
}

/// Number of connected components, found by BFS.
pub fn count_components<W>(num_nodes: usize, base: usize, edges: &[Edge<usize, W>]) -> usize {
    let adj = build_adjacency(num_nodes, base, edges);
    let mut visited = vec![false; num_nodes];
    let mut num_components = 0;

    for start in 0..num_nodes {
        if visited[start] {
            continue;
        }
        num_components += 1;
        visited[start] = true;

        let mut queue = VecDeque::new();
        queue.push_back(start);
        while let Some(u) = queue.pop_front() {
            for &(v, _) in &adj[u] {
                if !visited[v] {
                    visited[v] = true;
                    queue.push_back(v);
                }
            }
        }
    }

    num_components
}

fn is_sub_multiset<W: Weight>(subset: &[Edge<usize, W>], superset: &[Edge<usize, W>]) -> bool {
    let mut available: FxHashMap<(usize, usize), Vec<W>> = FxHashMap::default();
    for e in superset {
        available.entry(endpoints(e)).or_default().push(e.weight);
    }

    subset.iter().all(|e| {
        let Some(weights) = available.get_mut(&endpoints(e)) else {
            return false;
        };
        match weights.iter().position(|w| w.total_order(&e.weight).is_eq()) {
            Some(pos) => {
                weights.swap_remove(pos);
                true
            }
            None => false,
        }
    })
}

fn endpoints<W>(e: &Edge<usize, W>) -> (usize, usize) {
    (e.from.min(e.to), e.from.max(e.to))
}
