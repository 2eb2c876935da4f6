//! The spanner graph under construction.
//!
//! Storage is a petgraph [UnGraph] (adjacency list with node and edge indices, O(1) edge insertion).
//! Node i of the graph corresponds to the point of rank i in the [PointSet] it was built from,
//! labels are kept in an IndexSet to go from label to node index.
//! Edges are only ever added, never removed nor re-weighted.

use indexmap::IndexSet;
use num_traits::Float;
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::error::{Result, SpannerError};
use crate::point::PointSet;

/// An edge of the spanner as exposed to users: the 2 labels and the euclidean length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpannerEdge<'a, F> {
    pub first: &'a str,
    pub second: &'a str,
    pub weight: F,
}

/// undirected weighted graph whose nodes are labelled points.
#[derive(Clone, Debug)]
pub struct SpannerGraph<F> {
    labels: IndexSet<String>,
    graph: UnGraph<(), F>,
}

impl<F: Float + std::fmt::Debug> SpannerGraph<F> {
    /// a graph with one isolated node for each point of the set
    pub fn from_points(points: &PointSet<F>) -> Self {
        let nb_nodes = points.len();
        let mut labels = IndexSet::<String>::with_capacity(nb_nodes);
        let mut graph = UnGraph::<(), F>::with_capacity(nb_nodes, 2 * nb_nodes);
        for label in points.labels() {
            labels.insert(label.to_string());
            graph.add_node(());
        }
        SpannerGraph { labels, graph }
    } // end of from_points

    /// adds edge between nodes of rank first and second
    pub(crate) fn add_edge_by_rank(&mut self, first: usize, second: usize, weight: F) -> EdgeIndex {
        assert!(first < self.labels.len() && second < self.labels.len());
        self.graph
            .add_edge(NodeIndex::new(first), NodeIndex::new(second), weight)
    }

    /// adds an edge between 2 labelled nodes. Parallel edges are not checked for.
    pub fn add_edge(&mut self, first: &str, second: &str, weight: F) -> Result<EdgeIndex> {
        let n1 = self.get_node(first)?;
        let n2 = self.get_node(second)?;
        Ok(self.graph.add_edge(n1, n2, weight))
    }

    pub fn get_nb_nodes(&self) -> usize {
        self.graph.node_count()
    }

    pub fn get_nb_edges(&self) -> usize {
        self.graph.edge_count()
    }

    /// returns node index of a label
    pub fn get_node(&self, label: &str) -> Result<NodeIndex> {
        self.labels
            .get_index_of(label)
            .map(NodeIndex::new)
            .ok_or_else(|| SpannerError::UnknownLabel {
                label: label.to_string(),
            })
    }

    pub fn get_label(&self, node: NodeIndex) -> Option<&str> {
        self.labels.get_index(node.index()).map(|l| l.as_str())
    }

    /// node labels, in node index order
    pub fn get_labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|l| l.as_str())
    }

    /// edges in insertion order. For a greedy spanner this is by increasing length.
    pub fn edges(&self) -> impl Iterator<Item = SpannerEdge<'_, F>> {
        self.graph.edge_references().map(|e| SpannerEdge {
            first: self.labels[e.source().index()].as_str(),
            second: self.labels[e.target().index()].as_str(),
            weight: *e.weight(),
        })
    }

    /// returns true if there is an edge between the 2 labels
    pub fn contains_edge(&self, first: &str, second: &str) -> bool {
        match (self.get_node(first), self.get_node(second)) {
            (Ok(n1), Ok(n2)) => self.graph.contains_edge(n1, n2),
            _ => false,
        }
    }

    /// sum of edge weights
    pub fn get_total_weight(&self) -> F {
        self.graph
            .edge_weights()
            .fold(F::zero(), |acc, w| acc + *w)
    }

    pub fn is_connected(&self) -> bool {
        petgraph::algo::connected_components(&self.graph) <= 1
    }

    /// access to the petgraph structure, to run other algorithms on it or to draw it.
    pub fn get_graph(&self) -> &UnGraph<(), F> {
        &self.graph
    }
} // end of impl SpannerGraph

//========================================================================================

#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_graph_storage() {
        log_init_test();
        //
        let points =
            PointSet::from_points(vec![("a", [0., 0.]), ("b", [1., 0.]), ("c", [1., 1.])]).unwrap();
        let mut graph = SpannerGraph::from_points(&points);
        assert_eq!(graph.get_nb_nodes(), 3);
        assert_eq!(graph.get_nb_edges(), 0);
        assert!(!graph.is_connected());
        //
        graph.add_edge("a", "b", 1.).unwrap();
        graph.add_edge_by_rank(1, 2, 1.);
        assert!(graph.is_connected());
        assert!(graph.contains_edge("b", "a"));
        assert!(!graph.contains_edge("a", "c"));
        assert!(!graph.contains_edge("a", "unknown"));
        assert_eq!(graph.get_total_weight(), 2.);
        //
        let edges: Vec<(&str, &str, f64)> =
            graph.edges().map(|e| (e.first, e.second, e.weight)).collect();
        assert_eq!(edges, vec![("a", "b", 1.), ("b", "c", 1.)]);
        assert_eq!(graph.get_label(NodeIndex::new(2)), Some("c"));
        let labels: Vec<&str> = graph.get_labels().collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    } // end of test_graph_storage

    #[test]
    fn test_unknown_label() {
        let points = PointSet::from_points(vec![("a", [0., 0.]), ("b", [1., 0.])]).unwrap();
        let mut graph = SpannerGraph::from_points(&points);
        assert_eq!(
            graph.add_edge("a", "x", 1.),
            Err(SpannerError::UnknownLabel {
                label: "x".to_string()
            })
        );
        assert_eq!(graph.get_nb_edges(), 0);
    }
} // end of mod tests
