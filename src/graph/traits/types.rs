//! Graph data types and result structures.

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::graph::error::{GraphError, GraphResult};
use crate::weight::Weight;

/// An undirected weighted edge between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<N, W> {
    pub from: N,
    pub to: N,
    pub weight: W,
}

impl<N, W> Edge<N, W> {
    pub fn new(from: N, to: N, weight: W) -> Self {
        Self { from, to, weight }
    }
}

impl<N: PartialEq, W> Edge<N, W> {
    /// Self-loops never join two components.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl<N, W> From<(N, N, W)> for Edge<N, W> {
    fn from((from, to, weight): (N, N, W)) -> Self {
        Self { from, to, weight }
    }
}

/// Id of the first node in an indexed graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexBase {
    /// Nodes are `0..n`.
    #[default]
    Zero,
    /// Nodes are `1..=n`.
    One,
}

impl IndexBase {
    pub fn offset(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

/// Graph given as a node count and an undirected edge list.
///
/// # Construction
///
/// ```
/// use spannet::graph::{GraphData, IndexBase};
///
/// let graph = GraphData::from_edge_list(4, &[(0, 1, 1), (1, 2, 2), (2, 3, 3)]);
/// assert_eq!(graph.num_edges(), 3);
///
/// let one_based = GraphData::from_edge_list(3, &[(1, 2, 4.0), (2, 3, 1.5)])
///     .with_index_base(IndexBase::One);
/// assert_eq!(one_based.node_range(), 1..4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GraphData<W> {
    /// Number of nodes in the graph.
    pub num_nodes: usize,
    /// Id of the first node.
    pub index_base: IndexBase,
    /// Undirected edges. Parallel edges and self-loops are allowed.
    pub edges: Vec<Edge<usize, W>>,
}

impl<W: Weight> GraphData<W> {
    /// Creates a zero-based graph.
    pub fn new(num_nodes: usize, edges: Vec<Edge<usize, W>>) -> Self {
        Self {
            num_nodes,
            index_base: IndexBase::Zero,
            edges,
        }
    }

    /// Creates a zero-based graph from `(from, to, weight)` triples.
    pub fn from_edge_list(num_nodes: usize, edges: &[(usize, usize, W)]) -> Self {
        Self::new(num_nodes, edges.iter().map(|&e| Edge::from(e)).collect())
    }

    pub fn with_index_base(mut self, index_base: IndexBase) -> Self {
        self.index_base = index_base;
        self
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Valid node ids.
    pub fn node_range(&self) -> std::ops::Range<usize> {
        let base = self.index_base.offset();
        base..base + self.num_nodes
    }
}

/// Graph over labelled nodes, discovered from its edges.
///
/// Labels get dense ids in first-appearance order, the way a dataset of
/// `area_from area_to cost` records assigns ids to area names.
///
/// ```
/// use spannet::graph::LabeledGraph;
///
/// let mut graph = LabeledGraph::new();
/// graph.add_edge("Central Market", "Railway Station", 4);
/// graph.add_edge("Railway Station", "Old City", 4);
/// assert_eq!(graph.num_nodes(), 3);
/// assert_eq!(graph.index_of(&"Old City").unwrap(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct LabeledGraph<L, W> {
    labels: Vec<L>,
    index: FxHashMap<L, usize>,
    edges: Vec<Edge<usize, W>>,
}

impl<L, W> Default for LabeledGraph<L, W> {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            index: FxHashMap::default(),
            edges: Vec::new(),
        }
    }
}

impl<L, W> LabeledGraph<L, W>
where
    L: Clone + Eq + Hash + Debug,
    W: Weight,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(from, to, weight)` records.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (L, L, W)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Registers a node, returning its id. Existing labels keep their id.
    pub fn add_node(&mut self, label: L) -> usize {
        if let Some(&id) = self.index.get(&label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.clone());
        self.index.insert(label, id);
        id
    }

    /// Adds an edge, registering unseen endpoints.
    pub fn add_edge(&mut self, from: L, to: L, weight: W) {
        let from = self.add_node(from);
        let to = self.add_node(to);
        self.edges.push(Edge::new(from, to, weight));
    }

    pub fn num_nodes(&self) -> usize {
        self.labels.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    pub fn label(&self, id: usize) -> Option<&L> {
        self.labels.get(id)
    }

    /// Dense id of `label`.
    ///
    /// # Errors
    /// [`GraphError::UnknownLabel`] if the label was never added.
    pub fn index_of(&self, label: &L) -> GraphResult<usize> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::UnknownLabel {
                label: format!("{:?}", label),
            })
    }

    /// Zero-based indexed view of this graph.
    pub fn to_graph_data(&self) -> GraphData<W> {
        GraphData::new(self.labels.len(), self.edges.clone())
    }

    /// Maps an indexed edge back to labels. `None` if an id is unknown.
    pub fn label_edge(&self, edge: &Edge<usize, W>) -> Option<Edge<L, W>> {
        Some(Edge::new(
            self.label(edge.from)?.clone(),
            self.label(edge.to)?.clone(),
            edge.weight,
        ))
    }
}

/// Options for minimum spanning tree construction.
#[derive(Debug, Clone)]
pub struct MSTOptions {
    /// Stop scanning once `V - 1` edges are accepted.
    /// Does not change the result, only skips work.
    /// Default: true
    pub early_exit: bool,
}

impl Default for MSTOptions {
    fn default() -> Self {
        Self { early_exit: true }
    }
}

/// Result of minimum spanning tree algorithms.
#[derive(Debug, Clone, PartialEq)]
pub struct MSTResult<N, W> {
    /// Sum of accepted edge weights.
    pub total_cost: W,
    /// Accepted edges in acceptance (ascending weight) order.
    pub edges: Vec<Edge<N, W>>,
    /// `true` when the edges span every node. A `false` here means the
    /// result is a spanning forest, not a tree.
    pub connected: bool,
    /// Number of trees in the forest.
    pub num_components: usize,
}

impl<N, W> MSTResult<N, W> {
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }
}

/// Result of connected component algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentResult {
    /// Component label for each node: the smallest node id in its component.
    /// `labels[i]` belongs to node `base + i`.
    pub labels: Vec<usize>,
    /// Number of connected components.
    pub num_components: usize,
}
