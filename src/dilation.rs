//! Measures the stretch actually realised by a graph on a point set.
//!
//! One single source Dijkstra per point, run in parallel. This is quadratic in memory and is meant
//! to check spanners of a few hundred points.

use ndarray::Array2;
use num_traits::Float;
use num_traits::float::FloatCore;
use petgraph::graph::NodeIndex;
use quantiles::ckms::CKMS;
use rayon::prelude::*;

use crate::error::Result;
use crate::graph::SpannerGraph;
use crate::oracle::Dijkstra;
use crate::point::PointSet;

#[cfg_attr(doc, katexit::katexit)]
/// Dilation of a geometric graph $G$ on a point set $P$.
///
/// For 2 points $p \ne q$ the stretch of the pair is  $ \frac{d_{G}(p,q)}{|pq|} $ where $ d_{G} $ is the shortest
/// path length in $G$ and $|pq|$ the euclidean distance.
/// The dilation is $ \max_{p \ne q} \frac{d_{G}(p,q)}{|pq|} $, it is infinite if $G$ is not connected.
///
/// A greedy t-spanner has dilation at most t. The report also keeps a quantile summary of pair stretches,
/// which is usually much lower than the worst case.
pub struct DilationReport {
    // worst stretch over pairs
    dilation: f64,
    // labels of the pair realising the dilation
    worst_pair: Option<(String, String)>,
    nb_pairs: usize,
    // pairs with no path in graph
    nb_disconnected: usize,
    // spanner distances indexed by point ranks
    distances: Array2<f64>,
    // quantiles of stretch for connected pairs
    q_stretch: CKMS<f64>,
}

impl DilationReport {
    /// computes dilation of graph on points. Every point label must be a node of graph.
    pub fn compute<F>(points: &PointSet<F>, graph: &SpannerGraph<F>) -> Result<Self>
    where
        F: Float + FloatCore + std::fmt::Debug + Send + Sync,
    {
        let nb_points = points.len();
        log::debug!("computing dilation on {} points", nb_points);
        // map point ranks to graph nodes
        let nodes: Vec<NodeIndex> = points
            .labels()
            .map(|l| graph.get_node(l))
            .collect::<Result<Vec<NodeIndex>>>()?;
        //
        let dijkstra = Dijkstra::new();
        let rows: Vec<Vec<Option<F>>> = nodes
            .par_iter()
            .map(|node| dijkstra.distances_from(graph, *node))
            .collect();
        //
        let mut distances = Array2::<f64>::from_elem((nb_points, nb_points), f64::INFINITY);
        for i in 0..nb_points {
            for j in 0..nb_points {
                if let Some(d) = rows[i][nodes[j].index()] {
                    distances[[i, j]] = d.to_f64().unwrap_or(f64::INFINITY);
                }
            }
        }
        //
        let mut dilation = if nb_points >= 2 { 1. } else { 0. };
        let mut worst: Option<(usize, usize)> = None;
        let mut nb_disconnected = 0;
        let mut q_stretch = CKMS::<f64>::new(0.001);
        for i in 0..nb_points {
            for j in i + 1..nb_points {
                let direct = points.distance(i, j).to_f64().unwrap_or(f64::NAN);
                let in_graph = distances[[i, j]];
                let stretch = if in_graph.is_infinite() {
                    nb_disconnected += 1;
                    f64::INFINITY
                } else if direct > 0. {
                    in_graph / direct
                } else {
                    1.
                };
                if stretch.is_finite() {
                    q_stretch.insert(stretch);
                }
                if stretch > dilation || worst.is_none() {
                    dilation = stretch.max(dilation);
                    worst = Some((i, j));
                }
            }
        }
        let worst_pair = worst.map(|(i, j)| {
            (
                points.get_label(i).unwrap_or_default().to_string(),
                points.get_label(j).unwrap_or_default().to_string(),
            )
        });
        //
        let report = DilationReport {
            dilation,
            worst_pair,
            nb_pairs: nb_points * nb_points.saturating_sub(1) / 2,
            nb_disconnected,
            distances,
            q_stretch,
        };
        report.log();
        Ok(report)
    } // end of compute

    /// the worst stretch over all pairs
    pub fn get_dilation(&self) -> f64 {
        self.dilation
    }

    /// the pair of labels realising the dilation
    pub fn get_worst_pair(&self) -> Option<(&str, &str)> {
        self.worst_pair
            .as_ref()
            .map(|(l1, l2)| (l1.as_str(), l2.as_str()))
    }

    pub fn get_nb_pairs(&self) -> usize {
        self.nb_pairs
    }

    pub fn get_nb_disconnected(&self) -> usize {
        self.nb_disconnected
    }

    /// shortest path lengths in graph, indexed by point ranks. Infinite for disconnected pairs.
    pub fn get_distances(&self) -> &Array2<f64> {
        &self.distances
    }

    /// quantile of stretch over connected pairs, q in [0,1]
    pub fn get_stretch_quantile(&self, q: f64) -> Option<f64> {
        self.q_stretch.query(q).map(|(_, v)| v)
    }

    /// true if dilation is less than stretch * (1 + tolerance)
    pub fn is_t_spanner(&self, stretch: f64, tolerance: f64) -> bool {
        self.dilation <= stretch * (1. + tolerance)
    }

    pub fn log(&self) {
        log::info!(
            "dilation : {:.5e} for pair {:?}, nb pairs : {}, disconnected : {}",
            self.dilation,
            self.worst_pair,
            self.nb_pairs,
            self.nb_disconnected
        );
        if let (Some(q50), Some(q90), Some(q99)) = (
            self.get_stretch_quantile(0.5),
            self.get_stretch_quantile(0.9),
            self.get_stretch_quantile(0.99),
        ) {
            log::info!(
                "stretch quantiles at 0.5 : {:.3e}, 0.9 : {:.3e}, 0.99 : {:.3e}",
                q50,
                q90,
                q99
            );
        }
    } // end of log
} // end of impl DilationReport

//========================================================================================

#[cfg(test)]
mod tests {

    use super::*;
    use crate::generate::uniform_points;
    use crate::greedy::{GreedySpanner, SpannerParams};

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_complete_graph_dilation() {
        log_init_test();
        //
        let points = uniform_points::<f64>(20, 1., 3).unwrap();
        let mut graph = SpannerGraph::from_points(&points);
        for i in 0..points.len() {
            for j in i + 1..points.len() {
                graph.add_edge_by_rank(i, j, points.distance(i, j));
            }
        }
        let report = DilationReport::compute(&points, &graph).unwrap();
        assert!((report.get_dilation() - 1.).abs() < 1.0e-12);
        assert_eq!(report.get_nb_pairs(), 190);
        assert_eq!(report.get_nb_disconnected(), 0);
        assert!(report.is_t_spanner(1., 1.0e-9));
    } // end of test_complete_graph_dilation

    #[test]
    fn test_greedy_dilation() {
        log_init_test();
        //
        let points = uniform_points::<f64>(100, 50., 1454691).unwrap();
        for stretch in [1.2, 2.] {
            let params = SpannerParams::with_stretch(stretch);
            let graph = GreedySpanner::new(params).build(&points).unwrap();
            let report = DilationReport::compute(&points, &graph).unwrap();
            assert!(report.is_t_spanner(stretch, params.get_tolerance()));
            assert!(report.get_dilation() > 1.);
            let median = report.get_stretch_quantile(0.5).unwrap();
            assert!(median >= 1. && median <= report.get_dilation());
            // symmetric distance matrix with null diagonal
            let d = report.get_distances();
            for i in 0..points.len() {
                assert_eq!(d[[i, i]], 0.);
                for j in 0..i {
                    assert!((d[[i, j]] - d[[j, i]]).abs() <= 1.0e-9 * d[[i, j]]);
                }
            }
        }
    } // end of test_greedy_dilation

    #[test]
    fn test_disconnected_dilation() {
        log_init_test();
        //
        let points = PointSet::from_points(vec![
            ("a", [0., 0.]),
            ("b", [1., 0.]),
            ("c", [5., 0.]),
        ])
        .unwrap();
        let mut graph = SpannerGraph::from_points(&points);
        graph.add_edge("a", "b", 1.).unwrap();
        let report = DilationReport::compute(&points, &graph).unwrap();
        assert!(report.get_dilation().is_infinite());
        assert_eq!(report.get_nb_disconnected(), 2);
        assert!(!report.is_t_spanner(100., 0.));
        assert_eq!(report.get_worst_pair(), Some(("a", "c")));
    } // end of test_disconnected_dilation

    #[test]
    fn test_path_dilation() {
        // right triangle legs 3 and 4, path through the right angle vertex
        let points =
            PointSet::from_points(vec![("a", [0., 0.]), ("b", [3., 0.]), ("c", [0., 4.])]).unwrap();
        let mut graph = SpannerGraph::from_points(&points);
        graph.add_edge("a", "b", 3.).unwrap();
        graph.add_edge("a", "c", 4.).unwrap();
        let report = DilationReport::compute(&points, &graph).unwrap();
        assert!((report.get_dilation() - 1.4).abs() < 1.0e-12);
        assert_eq!(report.get_worst_pair(), Some(("b", "c")));
    }
} // end of mod tests
