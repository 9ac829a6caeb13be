//! Execution backends.
//!
//! Algorithm traits such as [`MSTAlgorithms`](crate::graph::MSTAlgorithms) are
//! implemented for every client. Clients only differ in how they sort edge
//! lists and how they fan out batches of independent computations; the greedy
//! scan is always sequential.
//!
//! - [`SerialClient`] runs everything on the calling thread.
//! - [`ParallelClient`] uses the rayon thread pool (feature `parallel`).

#[cfg(feature = "parallel")]
mod parallel;

#[cfg(feature = "parallel")]
pub use parallel::ParallelClient;

use crate::graph::Edge;
use crate::weight::Weight;

/// Backend hooks used by the generic algorithm implementations.
pub trait RuntimeClient: Send + Sync {
    /// Short backend name for diagnostics.
    fn name(&self) -> &'static str;

    /// Edge indices in ascending weight order. The sort is stable: equal
    /// weights keep their input order. All weights must already satisfy
    /// [`Weight::is_ordered`].
    fn argsort_by_weight<N: Sync, W: Weight>(&self, edges: &[Edge<N, W>]) -> Vec<usize>;

    /// Applies `f` to every item, preserving order.
    fn map_batch<T, U, F>(&self, items: &[T], f: F) -> Vec<U>
    where
        T: Sync,
        U: Send,
        F: Fn(&T) -> U + Sync + Send;
}

/// Single-threaded client.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialClient;

impl SerialClient {
    pub fn new() -> Self {
        Self
    }
}

impl RuntimeClient for SerialClient {
    fn name(&self) -> &'static str {
        "serial"
    }

    fn argsort_by_weight<N: Sync, W: Weight>(&self, edges: &[Edge<N, W>]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..edges.len()).collect();
        order.sort_by(|&a, &b| edges[a].weight.total_order(&edges[b].weight));
        order
    }

    fn map_batch<T, U, F>(&self, items: &[T], f: F) -> Vec<U>
    where
        T: Sync,
        U: Send,
        F: Fn(&T) -> U + Sync + Send,
    {
        items.iter().map(f).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_sort_is_stable() {
        let edges = vec![
            Edge::new(0, 1, 3),
            Edge::new(1, 2, 1),
            Edge::new(2, 3, 3),
            Edge::new(3, 4, 1),
        ];
        let order = SerialClient::new().argsort_by_weight(&edges);
        assert_eq!(order, vec![1, 3, 0, 2]);
    }
}
