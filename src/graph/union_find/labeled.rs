//! Disjoint sets keyed by labels.

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use super::UnionFind;
use crate::graph::error::{GraphError, GraphResult};

/// Union-Find over arbitrary labels (area names, junction codes, ...).
///
/// Labels are interned to dense ids in registration order. Sets are created
/// implicitly by [`make_set`](Self::make_set).
#[derive(Debug, Clone)]
pub struct LabeledUnionFind<L> {
    inner: UnionFind,
    labels: Vec<L>,
    index: FxHashMap<L, usize>,
}

impl<L> Default for LabeledUnionFind<L> {
    fn default() -> Self {
        Self {
            inner: UnionFind::new(0),
            labels: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}

impl<L: Clone + Eq + Hash + Debug> LabeledUnionFind<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: &L) -> bool {
        self.index.contains_key(label)
    }

    /// Number of disjoint sets.
    pub fn component_count(&self) -> usize {
        self.inner.component_count()
    }

    /// Registers `label` as a singleton set if it is new. Returns its id.
    pub fn make_set(&mut self, label: L) -> usize {
        if let Some(&id) = self.index.get(&label) {
            return id;
        }
        let id = self.inner.make_set();
        self.labels.push(label.clone());
        self.index.insert(label, id);
        id
    }

    /// Representative label of the set containing `label`.
    ///
    /// # Errors
    /// [`GraphError::UnknownLabel`] if `label` was never registered.
    pub fn find(&mut self, label: &L) -> GraphResult<&L> {
        let id = self.id_of(label)?;
        let root = self.inner.root(id);
        Ok(&self.labels[root])
    }

    /// Merges the sets containing `a` and `b`. See [`UnionFind::union`].
    pub fn union(&mut self, a: &L, b: &L) -> GraphResult<bool> {
        let ia = self.id_of(a)?;
        let ib = self.id_of(b)?;
        let ra = self.inner.root(ia);
        let rb = self.inner.root(ib);
        Ok(self.inner.link(ra, rb))
    }

    pub fn connected(&mut self, a: &L, b: &L) -> GraphResult<bool> {
        let ia = self.id_of(a)?;
        let ib = self.id_of(b)?;
        Ok(self.inner.root(ia) == self.inner.root(ib))
    }

    fn id_of(&self, label: &L) -> GraphResult<usize> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::UnknownLabel {
                label: format!("{:?}", label),
            })
    }
}
