//! Shortest path queries on the spanner under construction.
//!
//! The oracle is queried once per candidate edge while the graph grows, so it must always answer
//! on the current edge set. Nothing is cached between queries.
//! The [Dijkstra] oracle runs a single pair Dijkstra with a binary heap, stopping as soon as the
//! target is settled. Weights are euclidean lengths so they are non negative.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use num_traits::Float;
use num_traits::float::FloatCore;
use ordered_float::OrderedFloat;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::graph::SpannerGraph;

/// Result of a distance query. Unreachable target is a regular answer, not an error.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathLength<F> {
    Found(F),
    NoPath,
}

impl<F: Float> PathLength<F> {
    /// returns true if there is no path or if the path is strictly longer than bound.
    /// NoPath behaves as an infinite length.
    pub fn exceeds(&self, bound: F) -> bool {
        match self {
            PathLength::Found(d) => *d > bound,
            PathLength::NoPath => true,
        }
    }

    pub fn get_length(&self) -> Option<F> {
        match self {
            PathLength::Found(d) => Some(*d),
            PathLength::NoPath => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, PathLength::Found(_))
    }
} // end of impl PathLength

/// A distance oracle answers shortest path length queries between 2 nodes of the current graph.
pub trait DistanceOracle<F> {
    /// length of a shortest path between source and target, with edge weights as lengths.
    /// source and target must be nodes of graph.
    fn distance(&self, graph: &SpannerGraph<F>, source: NodeIndex, target: NodeIndex) -> PathLength<F>;
}

/// Dijkstra shortest path, with early exit on target.
#[derive(Copy, Clone, Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra
    }

    // runs Dijkstra from source. If goal is given we stop when it is settled, in this case
    // only the distance of goal is guaranteed exact.
    // returns for each node its distance from source, None if not reached.
    fn explore<F: Float + FloatCore + std::fmt::Debug>(
        &self,
        graph: &SpannerGraph<F>,
        source: NodeIndex,
        goal: Option<NodeIndex>,
    ) -> Vec<Option<F>> {
        let ugraph = graph.get_graph();
        let nb_nodes = ugraph.node_count();
        assert!(source.index() < nb_nodes);
        //
        let mut best: Vec<Option<F>> = vec![None; nb_nodes];
        let mut settled = vec![false; nb_nodes];
        let mut heap = BinaryHeap::<Reverse<(OrderedFloat<F>, usize)>>::new();
        best[source.index()] = Some(F::zero());
        heap.push(Reverse((OrderedFloat(F::zero()), source.index())));
        //
        while let Some(Reverse((OrderedFloat(dist), node))) = heap.pop() {
            if settled[node] {
                continue;
            }
            settled[node] = true;
            if goal.is_some_and(|g| g.index() == node) {
                break;
            }
            for edge in ugraph.edges(NodeIndex::new(node)) {
                let neighbour = edge.target().index();
                if settled[neighbour] {
                    continue;
                }
                let new_dist = dist + *edge.weight();
                let improved = match best[neighbour] {
                    Some(d) => new_dist < d,
                    None => true,
                };
                if improved {
                    best[neighbour] = Some(new_dist);
                    heap.push(Reverse((OrderedFloat(new_dist), neighbour)));
                }
            }
        }
        //
        best
    } // end of explore

    /// distances from source to all nodes (in node index order), None for unreachable nodes.
    pub fn distances_from<F: Float + FloatCore + std::fmt::Debug>(
        &self,
        graph: &SpannerGraph<F>,
        source: NodeIndex,
    ) -> Vec<Option<F>> {
        self.explore(graph, source, None)
    }
} // end of impl Dijkstra

impl<F: Float + FloatCore + std::fmt::Debug> DistanceOracle<F> for Dijkstra {
    fn distance(&self, graph: &SpannerGraph<F>, source: NodeIndex, target: NodeIndex) -> PathLength<F> {
        assert!(target.index() < graph.get_nb_nodes());
        let best = self.explore(graph, source, Some(target));
        let res = match best[target.index()] {
            Some(d) => PathLength::Found(d),
            None => PathLength::NoPath,
        };
        log::trace!("distance {:?} -> {:?} : {:?}", source, target, res);
        res
    }
} // end of impl DistanceOracle for Dijkstra

//========================================================================================

// end of mod tests
