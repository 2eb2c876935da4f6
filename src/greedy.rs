//! Greedy construction of a geometric t-spanner.
//!
//! Candidate edges are processed once, by increasing euclidean length (see [candidate](crate::candidate)).
//! An edge (u,v) of length d is admitted if the current spanner has no path between u and v
//! or if its shortest path is longer than t * d. Otherwise it is discarded for good.
//! Each admission depends on all previous ones, so the pass is strictly sequential.
//!
//! Rejection of (u,v) is always justified by a path of length <= t * d existing at rejection time,
//! and as edges are never removed the final graph is a t-spanner.
//!
//! To absorb rounding in path sums, the test is done against t * d * (1 + tolerance),
//! see [SpannerParams].

use std::time::{Duration, SystemTime};

use cpu_time::ProcessTime;
use num_traits::Float;
use num_traits::float::FloatCore;
use petgraph::graph::NodeIndex;

use crate::candidate::sorted_candidates;
use crate::error::{Result, SpannerError};
use crate::graph::SpannerGraph;
use crate::oracle::{Dijkstra, DistanceOracle};
use crate::point::PointSet;

/// Parameters of the greedy construction.
///
/// The acceptance test is always evaluated in f64, whatever the float type of points.
/// With f32 points a tolerance below f32 epsilon or a stretch close to 1 is still honoured,
/// but path lengths are summed in f32 so rounding of paths is of order f32 epsilon.
#[derive(Copy, Clone, Debug)]
pub struct SpannerParams {
    /// the stretch factor t, must be finite and > 1.
    stretch: f64,
    /// relative tolerance on the acceptance test. paths up to t * d * (1 + tolerance) are accepted as
    /// satisfying the stretch bound.
    tolerance: f64,
}

impl SpannerParams {
    pub fn new(stretch: f64, tolerance: f64) -> Self {
        SpannerParams { stretch, tolerance }
    }

    /// params with given stretch and default tolerance
    pub fn with_stretch(stretch: f64) -> Self {
        SpannerParams {
            stretch,
            ..Default::default()
        }
    }

    pub fn get_stretch(&self) -> f64 {
        self.stretch
    }

    pub fn get_tolerance(&self) -> f64 {
        self.tolerance
    }

    /// checks stretch is finite and > 1, tolerance finite and >= 0
    pub fn check(&self) -> Result<()> {
        if !self.stretch.is_finite() || self.stretch <= 1. {
            return Err(SpannerError::InvalidStretch {
                stretch: self.stretch,
            });
        }
        if !self.tolerance.is_finite() || self.tolerance < 0. {
            return Err(SpannerError::InvalidTolerance {
                tolerance: self.tolerance,
            });
        }
        Ok(())
    }
} // end of impl SpannerParams

impl Default for SpannerParams {
    fn default() -> Self {
        SpannerParams {
            stretch: 1.2,
            tolerance: 1.0e-9,
        }
    }
}

//==================================================================

/// Counters collected during a construction
#[derive(Clone, Debug, Default)]
pub struct SpannerStats {
    pub nb_points: usize,
    pub nb_candidates: usize,
    pub nb_admitted: usize,
    pub nb_rejected: usize,
    /// among admitted edges, those whose endpoints were not yet connected
    pub nb_admitted_unreachable: usize,
    pub total_weight: f64,
    pub cpu_time: Duration,
    pub sys_time: Duration,
}

impl SpannerStats {
    pub fn log(&self) {
        log::info!(
            "spanner stats, nb points : {}, nb candidates : {}, admitted : {} (connecting components : {}), rejected : {}",
            self.nb_points,
            self.nb_candidates,
            self.nb_admitted,
            self.nb_admitted_unreachable,
            self.nb_rejected
        );
        log::info!(
            "spanner total weight : {:.3e}, sys time(ms) {:?} cpu time(ms) {:?}",
            self.total_weight,
            self.sys_time.as_millis(),
            self.cpu_time.as_millis()
        );
    }
} // end of impl SpannerStats

//==================================================================

/// The greedy spanner builder. The oracle defaults to [Dijkstra].
pub struct GreedySpanner<O = Dijkstra> {
    params: SpannerParams,
    oracle: O,
    // stats of last successful construction
    stats: Option<SpannerStats>,
}

impl GreedySpanner<Dijkstra> {
    pub fn new(params: SpannerParams) -> Self {
        GreedySpanner::with_oracle(params, Dijkstra::new())
    }
}

impl<O> GreedySpanner<O> {
    /// builder using a specific distance oracle
    pub fn with_oracle(params: SpannerParams, oracle: O) -> Self {
        GreedySpanner {
            params,
            oracle,
            stats: None,
        }
    }

    pub fn get_params(&self) -> &SpannerParams {
        &self.params
    }

    /// statistics of the last successful call to [build](Self::build)
    pub fn get_stats(&self) -> Option<&SpannerStats> {
        self.stats.as_ref()
    }

    /// Builds the spanner of a point set.
    /// Parameters and points are checked before any work is done, on error nothing is built.
    pub fn build<F>(&mut self, points: &PointSet<F>) -> Result<SpannerGraph<F>>
    where
        F: Float + FloatCore + std::fmt::Debug + Send + Sync,
        O: DistanceOracle<F>,
    {
        //
        let cpu_start = ProcessTime::now();
        let sys_now = SystemTime::now();
        //
        self.params.check()?;
        points.check()?;
        // acceptance is decided in f64 so that f32 points do not lose the tolerance
        let factor = self.params.stretch * (1. + self.params.tolerance);
        log::info!(
            "greedy spanner, nb points : {}, stretch : {:.3e}, tolerance : {:.1e}",
            points.len(),
            self.params.stretch,
            self.params.tolerance
        );
        //
        let candidates = sorted_candidates(points)?;
        //
        let mut graph = SpannerGraph::from_points(points);
        let mut stats = SpannerStats {
            nb_points: points.len(),
            nb_candidates: candidates.len(),
            ..Default::default()
        };
        for edge in &candidates {
            let (first, second) = (edge.get_first(), edge.get_second());
            let length = edge.get_length();
            let bound = factor * length.to_f64().unwrap_or(f64::NAN);
            let path = self
                .oracle
                .distance(&graph, NodeIndex::new(first), NodeIndex::new(second));
            let admitted = match path.get_length() {
                Some(d) => d.to_f64().is_none_or(|d| d > bound),
                None => true,
            };
            if admitted {
                log::trace!(
                    "admitting edge ({:?}, {:?}) length {:?}, current path : {:?}",
                    points.get_label(first),
                    points.get_label(second),
                    length,
                    path
                );
                graph.add_edge_by_rank(first, second, length);
                stats.nb_admitted += 1;
                if !path.is_reachable() {
                    stats.nb_admitted_unreachable += 1;
                }
            } else {
                stats.nb_rejected += 1;
            }
        }
        // the candidate set is complete, so with an exact oracle the result spans all points
        if stats.nb_admitted_unreachable != points.len() - 1 {
            log::error!(
                "spanner is not connected, {} edges joined components for {} points",
                stats.nb_admitted_unreachable,
                points.len()
            );
        }
        //
        stats.total_weight = graph.get_total_weight().to_f64().unwrap_or(f64::NAN);
        stats.cpu_time = cpu_start.elapsed();
        stats.sys_time = sys_now.elapsed().unwrap_or_default();
        stats.log();
        self.stats = Some(stats);
        //
        Ok(graph)
    } // end of build
} // end of impl GreedySpanner

/// builds a greedy t-spanner with default tolerance and Dijkstra oracle
pub fn greedy_spanner<F>(points: &PointSet<F>, stretch: f64) -> Result<SpannerGraph<F>>
where
    F: Float + FloatCore + std::fmt::Debug + Send + Sync,
{
    GreedySpanner::new(SpannerParams::with_stretch(stretch)).build(points)
}

//========================================================================================

// end of mod tests
