//! Rayon-backed client.

use rayon::prelude::*;

use super::RuntimeClient;
use crate::graph::Edge;
use crate::weight::Weight;

/// Client that sorts and fans out batches on the rayon thread pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelClient;

impl ParallelClient {
    pub fn new() -> Self {
        Self
    }

    /// Worker threads available to this client.
    pub fn num_threads(&self) -> usize {
        rayon::current_num_threads().max(1)
    }
}

impl RuntimeClient for ParallelClient {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn argsort_by_weight<N: Sync, W: Weight>(&self, edges: &[Edge<N, W>]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..edges.len()).collect();
        // par_sort_by is a stable merge sort
        order.par_sort_by(|&a, &b| edges[a].weight.total_order(&edges[b].weight));
        order
    }

    fn map_batch<T, U, F>(&self, items: &[T], f: F) -> Vec<U>
    where
        T: Sync,
        U: Send,
        F: Fn(&T) -> U + Sync + Send,
    {
        items.par_iter().map(f).collect()
    }
}
