#![allow(dead_code)]

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use spannet::{Edge, GraphData};

/// Random multigraph with `n` nodes and `m` edges, weights in `1..=max_weight`.
///
/// Self-loops and parallel edges occur naturally.
pub fn random_graph(n: usize, m: usize, max_weight: u32, seed: u64) -> GraphData<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_graph_with_rng(n, m, max_weight, &mut rng)
}

pub fn random_graph_with_rng<R: Rng + ?Sized>(
    n: usize,
    m: usize,
    max_weight: u32,
    rng: &mut R,
) -> GraphData<u32> {
    let edges = (0..m)
        .map(|_| {
            Edge::new(
                rng.gen_range(0..n),
                rng.gen_range(0..n),
                rng.gen_range(1..=max_weight),
            )
        })
        .collect();
    GraphData::new(n, edges)
}

/// Random graph with floating-point weights in `[0, 1)`.
pub fn random_float_graph(n: usize, m: usize, seed: u64) -> GraphData<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let edges = (0..m)
        .map(|_| Edge::new(rng.gen_range(0..n), rng.gen_range(0..n), rng.gen::<f64>()))
        .collect();
    GraphData::new(n, edges)
}

/// Two random connected blocks `0..a` and `a..a+b` with no edge between them.
///
/// Each block gets a random spanning path first so it is connected, then
/// `extra` random edges inside the block.
pub fn two_blocks(a: usize, b: usize, extra: usize, seed: u64) -> GraphData<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut edges = Vec::new();

    for (start, len) in [(0, a), (a, b)] {
        for i in 1..len {
            let w = rng.gen_range(1..=50);
            edges.push(Edge::new(start + i - 1, start + i, w));
        }
        if len > 0 {
            for _ in 0..extra {
                let u = start + rng.gen_range(0..len);
                let v = start + rng.gen_range(0..len);
                edges.push(Edge::new(u, v, rng.gen_range(1..=50)));
            }
        }
    }

    GraphData::new(a + b, edges)
}

/// Number of connected components, by repeated label relaxation.
pub fn naive_components(n: usize, edges: &[Edge<usize, u32>]) -> usize {
    let mut label: Vec<usize> = (0..n).collect();
    loop {
        let mut changed = false;
        for e in edges {
            let low = label[e.from].min(label[e.to]);
            for node in [e.from, e.to] {
                if label[node] != low {
                    label[node] = low;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    let mut roots = label;
    roots.sort_unstable();
    roots.dedup();
    roots.len()
}

/// Weight of a minimum spanning forest by exhaustive search over edge subsets.
///
/// Only usable for small edge counts (2^m subsets).
pub fn brute_force_forest_weight(graph: &GraphData<u32>) -> u32 {
    let n = graph.num_nodes;
    let m = graph.edges.len();
    assert!(m <= 20, "too many edges for brute force");

    let target = n - naive_components(n, &graph.edges);
    let mut best = u32::MAX;

    for mask in 0u32..(1 << m) {
        if mask.count_ones() as usize != target {
            continue;
        }
        let chosen: Vec<Edge<usize, u32>> = (0..m)
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| graph.edges[i])
            .collect();
        // `target` edges reaching the same component count as the graph
        // must be a spanning forest
        if naive_components(n, &chosen) != n - target {
            continue;
        }
        let weight = chosen.iter().map(|e| e.weight).sum();
        best = best.min(weight);
    }

    best
}
