//! Disjoint-set forests.
//!
//! [`UnionFind`] partitions the dense ids `0..n`; [`LabeledUnionFind`] does the
//! same for arbitrary hashable labels, creating sets on first registration.
//!
//! Both use path compression in `find` and union by rank in `union`, giving
//! amortized O(α(n)) per operation.

mod labeled;

pub use labeled::LabeledUnionFind;

use super::error::{GraphError, GraphResult};

/// Union-Find data structure with path compression and union by rank.
///
/// # Example
///
/// ```
/// use spannet::graph::UnionFind;
///
/// let mut uf = UnionFind::new(4);
/// assert!(uf.union(0, 1).unwrap());
/// assert!(uf.union(2, 3).unwrap());
/// assert!(!uf.union(1, 0).unwrap());
/// assert_eq!(uf.component_count(), 2);
/// assert!(uf.find(7).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets `{0}, {1}, ..., {n-1}`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            size: vec![1; n],
            components: n,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Adds a new singleton set and returns its id.
    pub fn make_set(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(id);
        self.rank.push(0);
        self.size.push(1);
        self.components += 1;
        id
    }

    /// Representative of the set containing `x`.
    ///
    /// Every node on the path from `x` to the root is re-pointed directly at
    /// the root.
    ///
    /// # Errors
    /// [`GraphError::InvalidNode`] if `x >= len()`.
    pub fn find(&mut self, x: usize) -> GraphResult<usize> {
        self.check(x)?;
        Ok(self.root(x))
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `true` if a merge happened, `false` if both were already in
    /// the same set. The root of strictly greater rank becomes the new root;
    /// on a tie the root of `a` wins and its rank grows by one.
    ///
    /// # Errors
    /// [`GraphError::InvalidNode`] if either id is unknown. Nothing is
    /// mutated in that case.
    pub fn union(&mut self, a: usize, b: usize) -> GraphResult<bool> {
        self.check(a)?;
        self.check(b)?;
        let ra = self.root(a);
        let rb = self.root(b);
        Ok(self.link(ra, rb))
    }

    /// Returns `true` if `a` and `b` are in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> GraphResult<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Number of elements in the set containing `x`.
    pub fn set_size(&mut self, x: usize) -> GraphResult<usize> {
        let root = self.find(x)?;
        Ok(self.size[root])
    }

    /// Rank of `x`. Only meaningful for roots, where it bounds tree height.
    pub fn rank(&self, x: usize) -> GraphResult<u32> {
        self.check(x)?;
        Ok(self.rank[x])
    }

    fn check(&self, x: usize) -> GraphResult<()> {
        if x < self.parent.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidNode {
                node: x,
                num_nodes: self.parent.len(),
            })
        }
    }

    /// Iterative find for ids already known to be in range.
    pub(crate) fn root(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Path compression
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Links two roots. Returns `false` if they are the same root.
    pub(crate) fn link(&mut self, ra: usize, rb: usize) -> bool {
        if ra == rb {
            return false;
        }

        // Union by rank
        let (root, child) = if self.rank[ra] < self.rank[rb] {
            (rb, ra)
        } else {
            if self.rank[ra] == self.rank[rb] {
                self.rank[ra] += 1;
            }
            (ra, rb)
        };

        self.parent[child] = root;
        self.size[root] += self.size[child];
        self.components -= 1;
        true
    }
}
