//! Serial implementation of minimum spanning tree algorithms.

use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::error::GraphResult;
use crate::graph::impl_generic::{kruskal_batch_impl, kruskal_impl, labeled_kruskal_impl};
use crate::graph::traits::mst::MSTAlgorithms;
use crate::graph::traits::types::{GraphData, LabeledGraph, MSTOptions, MSTResult};
use crate::runtime::SerialClient;
use crate::weight::Weight;

impl<W: Weight> MSTAlgorithms<W> for SerialClient {
    fn minimum_spanning_tree_with(
        &self,
        graph: &GraphData<W>,
        options: &MSTOptions,
    ) -> GraphResult<MSTResult<usize, W>> {
        kruskal_impl(self, graph, options)
    }

    fn labeled_minimum_spanning_tree_with<L>(
        &self,
        graph: &LabeledGraph<L, W>,
        options: &MSTOptions,
    ) -> GraphResult<MSTResult<L, W>>
    where
        L: Clone + Eq + Hash + Debug,
    {
        labeled_kruskal_impl(self, graph, options)
    }

    fn minimum_spanning_forests_with(
        &self,
        graphs: &[GraphData<W>],
        options: &MSTOptions,
    ) -> Vec<GraphResult<MSTResult<usize, W>>> {
        kruskal_batch_impl(self, graphs, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::error::GraphError;
    use crate::graph::traits::types::{Edge, IndexBase};

    #[test]
    fn test_mst() {
        let client = SerialClient::new();

        // Triangle: 0-1 (1), 1-2 (2), 0-2 (3)
        let graph = GraphData::from_edge_list(3, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)]);

        let result = client.minimum_spanning_tree(&graph).unwrap();
        assert!((result.total_cost - 3.0f64).abs() < 1e-10); // edges 1+2=3
        assert!(result.connected);
    }

    #[test]
    fn test_path_with_heavy_shortcut() {
        let client = SerialClient::new();
        let graph = GraphData::from_edge_list(4, &[(0, 1, 1), (1, 2, 2), (2, 3, 3), (0, 3, 10)]);

        let result = client.minimum_spanning_tree(&graph).unwrap();
        assert_eq!(result.total_cost, 6);
        assert_eq!(
            result.edges,
            vec![Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(2, 3, 3)]
        );
        assert!(result.connected);
        assert_eq!(result.num_components, 1);
    }

    #[test]
    fn test_one_based_network() {
        let client = SerialClient::new();
        let graph = GraphData::from_edge_list(
            5,
            &[
                (1, 2, 10),
                (1, 3, 5),
                (2, 3, 8),
                (2, 4, 12),
                (3, 4, 7),
                (3, 5, 15),
                (4, 5, 9),
            ],
        )
        .with_index_base(IndexBase::One);

        let result = client.minimum_spanning_tree(&graph).unwrap();
        assert_eq!(result.total_cost, 29);
        assert_eq!(
            result.edges,
            vec![
                Edge::new(1, 3, 5),
                Edge::new(3, 4, 7),
                Edge::new(2, 3, 8),
                Edge::new(4, 5, 9),
            ]
        );
        assert!(result.connected);

        // Same edges read as 0-based must fail: node 5 is out of range
        let zero_based = graph.with_index_base(IndexBase::Zero);
        assert!(matches!(
            client.minimum_spanning_tree(&zero_based),
            Err(GraphError::EdgeOutOfRange { edge: 5, .. })
        ));
    }

    #[test]
    fn test_isolated_node() {
        let client = SerialClient::new();
        let graph = GraphData::from_edge_list(3, &[(0, 1, 5)]);

        let result = client.minimum_spanning_tree(&graph).unwrap();
        assert!(!result.connected);
        assert_eq!(result.edges.len(), 1);
        assert_eq!(result.total_cost, 5);
        assert_eq!(result.num_components, 2);
    }

    #[test]
    fn test_self_loop_rejected() {
        let client = SerialClient::new();
        let graph = GraphData::from_edge_list(3, &[(2, 2, 5), (0, 1, 7), (1, 2, 9)]);

        let result = client.minimum_spanning_tree(&graph).unwrap();
        assert_eq!(result.total_cost, 16);
        assert!(result.edges.iter().all(|e| !e.is_self_loop()));
        assert!(result.connected);
    }

    #[test]
    fn test_empty_inputs() {
        let client = SerialClient::new();

        let empty: GraphData<u32> = GraphData::new(0, Vec::new());
        let result = client.minimum_spanning_tree(&empty).unwrap();
        assert!(result.connected);
        assert!(result.edges.is_empty());
        assert_eq!(result.total_cost, 0);
        assert_eq!(result.num_components, 0);

        let single: GraphData<u32> = GraphData::new(1, Vec::new());
        assert!(client.minimum_spanning_tree(&single).unwrap().connected);

        let no_edges: GraphData<u32> = GraphData::new(4, Vec::new());
        let result = client.minimum_spanning_tree(&no_edges).unwrap();
        assert!(!result.connected);
        assert_eq!(result.num_components, 4);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let client = SerialClient::new();
        // Square with equal weights: the first three edges win
        let graph = GraphData::from_edge_list(4, &[(2, 3, 1), (0, 1, 1), (1, 2, 1), (3, 0, 1)]);

        let result = client.minimum_spanning_tree(&graph).unwrap();
        assert_eq!(
            result.edges,
            vec![Edge::new(2, 3, 1), Edge::new(0, 1, 1), Edge::new(1, 2, 1)]
        );
    }

    #[test]
    fn test_early_exit_does_not_change_result() {
        let client = SerialClient::new();
        let graph = GraphData::from_edge_list(
            4,
            &[(0, 1, 4), (1, 2, 1), (2, 3, 2), (0, 2, 3), (1, 3, 6), (3, 3, 0)],
        );

        let fast = client.minimum_spanning_tree(&graph).unwrap();
        let full = client
            .minimum_spanning_tree_with(&graph, &MSTOptions { early_exit: false })
            .unwrap();
        assert_eq!(fast, full);
        assert_eq!(fast.total_cost, 6);
    }

    #[test]
    fn test_nan_weight_rejected() {
        let client = SerialClient::new();
        let graph = GraphData::from_edge_list(3, &[(0, 1, 1.0), (1, 2, f64::NAN)]);
        assert!(matches!(
            client.minimum_spanning_tree(&graph),
            Err(GraphError::InvalidWeight { edge: 1, .. })
        ));
    }

    #[test]
    fn test_cost_overflow() {
        let client = SerialClient::new();
        let graph = GraphData::from_edge_list(3, &[(0, 1, 200u8), (1, 2, 100)]);
        assert_eq!(
            client.minimum_spanning_tree(&graph),
            Err(GraphError::CostOverflow { edge: 0 })
        );
    }

    #[test]
    fn test_input_not_mutated() {
        let client = SerialClient::new();
        let graph = GraphData::from_edge_list(3, &[(0, 1, 9), (1, 2, 1), (0, 2, 5)]);
        let before = graph.clone();
        client.minimum_spanning_tree(&graph).unwrap();
        assert_eq!(graph, before);
    }

    #[test]
    fn test_labeled_mst() {
        let client = SerialClient::new();
        let graph = LabeledGraph::from_edges([
            ("Central Market", "Railway Station", 4),
            ("Railway Station", "Residential Block A", 3),
            ("Central Market", "Residential Block A", 6),
            ("Residential Block A", "Residential Block B", 2),
        ]);

        let result = client.labeled_minimum_spanning_tree(&graph).unwrap();
        assert_eq!(result.total_cost, 9);
        assert!(result.connected);
        assert_eq!(
            result.edges,
            vec![
                Edge::new("Residential Block A", "Residential Block B", 2),
                Edge::new("Railway Station", "Residential Block A", 3),
                Edge::new("Central Market", "Railway Station", 4),
            ]
        );
    }

    #[test]
    fn test_batch() {
        let client = SerialClient::new();
        let graphs = vec![
            GraphData::from_edge_list(2, &[(0, 1, 3)]),
            GraphData::from_edge_list(2, &[(0, 2, 3)]),
            GraphData::from_edge_list(3, &[(0, 1, 3)]),
        ];

        let results = client.minimum_spanning_forests(&graphs);
        assert_eq!(results.len(), 3);
        assert!(results[0].as_ref().unwrap().connected);
        assert!(results[1].is_err());
        assert!(!results[2].as_ref().unwrap().connected);
    }

    #[test]
    fn test_labeled_and_batch_accept_options() {
        let client = SerialClient::new();
        let full_scan = MSTOptions { early_exit: false };

        let graph = LabeledGraph::from_edges([
            ("Old City", "Slum Area", 2),
            ("Slum Area", "Industrial Area", 6),
            ("Old City", "Industrial Area", 9),
            ("Industrial Area", "Industrial Area", 1),
        ]);
        let fast = client.labeled_minimum_spanning_tree(&graph).unwrap();
        let full = client
            .labeled_minimum_spanning_tree_with(&graph, &full_scan)
            .unwrap();
        assert_eq!(fast, full);
        assert_eq!(full.total_cost, 8);

        let graphs = vec![
            GraphData::from_edge_list(3, &[(0, 1, 1), (1, 2, 2), (0, 2, 3)]),
            GraphData::from_edge_list(3, &[(0, 1, 1), (1, 5, 2)]),
        ];
        let results = client.minimum_spanning_forests_with(&graphs, &full_scan);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap().total_cost, 3);
        assert!(matches!(
            results[1],
            Err(GraphError::EdgeOutOfRange { edge: 1, .. })
        ));
        assert_eq!(results, client.minimum_spanning_forests(&graphs));
    }
}
