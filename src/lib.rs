//! spannet - Incremental connectivity and minimum spanning networks
//!
//! spannet builds minimum-cost networks (utility grids, road layouts, cable
//! runs) from a list of candidate links. At its core is a disjoint-set forest
//! with path compression and union by rank, and Kruskal's greedy builder
//! gated by it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                       graph                              │
//! │   (MSTAlgorithms, ConnectivityAlgorithms, UnionFind)    │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ implemented for
//! ┌──────────────────────────▼──────────────────────────────┐
//! │                      runtime                             │
//! │          (SerialClient, ParallelClient)                  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`graph`] - Union-find, Kruskal MST, connected components, verification
//! - [`runtime`] - Execution clients
//! - [`weight`] - Edge weight abstraction
//!
//! # Feature Flags
//!
//! | Feature    | Description | Dependencies |
//! |------------|-------------|--------------|
//! | `parallel` | Enable `ParallelClient` (default) | rayon |
//!
//! # Example
//!
//! ```
//! use spannet::{compute_mst, Edge};
//!
//! let edges = [
//!     Edge::new(0, 1, 1),
//!     Edge::new(1, 2, 2),
//!     Edge::new(2, 3, 3),
//!     Edge::new(0, 3, 10),
//! ];
//!
//! let result = compute_mst(4, &edges).unwrap();
//! assert_eq!(result.total_cost, 6);
//! assert!(result.connected);
//! ```
//!
//! Disconnected inputs are not errors; check [`MSTResult::connected`]:
//!
//! ```
//! use spannet::graph::{GraphData, MSTAlgorithms};
//! use spannet::runtime::SerialClient;
//!
//! let graph = GraphData::from_edge_list(3, &[(0, 1, 5)]);
//! let result = SerialClient::new().minimum_spanning_tree(&graph).unwrap();
//! assert!(!result.connected);
//! assert_eq!(result.num_components, 2);
//! ```

pub mod graph;
pub mod runtime;
pub mod weight;

pub use graph::{
    ComponentResult, ConnectivityAlgorithms, Edge, GraphData, GraphError, GraphResult, IndexBase,
    LabeledGraph, LabeledUnionFind, MSTAlgorithms, MSTOptions, MSTResult, UnionFind,
};
#[cfg(feature = "parallel")]
pub use runtime::ParallelClient;
pub use runtime::{RuntimeClient, SerialClient};
pub use weight::Weight;

/// Minimum spanning tree of a zero-based graph with `node_count` nodes.
///
/// Serial, default options. Fails with [`GraphError::EdgeOutOfRange`] if an
/// edge endpoint is not in `0..node_count`.
pub fn compute_mst<W: Weight>(
    node_count: usize,
    edges: &[Edge<usize, W>],
) -> GraphResult<MSTResult<usize, W>> {
    let graph = GraphData::new(node_count, edges.to_vec());
    SerialClient::new().minimum_spanning_tree(&graph)
}
