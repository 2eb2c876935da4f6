//! candidate edges: every unordered pair of distinct points, with its euclidean length.
//!
//! Candidates are sorted by increasing length. Ties are broken on the (smaller label, larger label)
//! couple in lexicographic order so that the greedy pass is reproducible whatever the insertion
//! order of points.

use std::cmp::Ordering;

use num_traits::Float;
use num_traits::float::FloatCore;
use ordered_float::OrderedFloat;
use rayon::prelude::*;

use crate::error::{Result, SpannerError};
use crate::point::PointSet;

/// A candidate edge between points of rank *first* and *second*.
/// The pair is normalized so that label of *first* is lexicographically smaller than label of *second*.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CandidateEdge<F> {
    first: usize,
    second: usize,
    length: F,
}

impl<F: Float> CandidateEdge<F> {
    pub fn get_first(&self) -> usize {
        self.first
    }

    pub fn get_second(&self) -> usize {
        self.second
    }

    /// euclidean distance between the 2 points
    pub fn get_length(&self) -> F {
        self.length
    }
} // end of impl CandidateEdge

// ordering of candidates: length then labels
fn compare<F: Float + FloatCore + std::fmt::Debug>(
    points: &PointSet<F>,
    e1: &CandidateEdge<F>,
    e2: &CandidateEdge<F>,
) -> Ordering {
    OrderedFloat(e1.length)
        .cmp(&OrderedFloat(e2.length))
        .then_with(|| points.get_label(e1.first).cmp(&points.get_label(e2.first)))
        .then_with(|| points.get_label(e1.second).cmp(&points.get_label(e2.second)))
}

/// enumerates the n*(n-1)/2 candidate edges of a point set and sorts them.
/// Returns an error if 2 points are coincident, as the corresponding edge would have null length.
pub fn sorted_candidates<F>(points: &PointSet<F>) -> Result<Vec<CandidateEdge<F>>>
where
    F: Float + FloatCore + std::fmt::Debug + Send + Sync,
{
    let nb_points = points.len();
    log::debug!("enumerating candidate edges for {} points", nb_points);
    //
    let mut candidates: Vec<CandidateEdge<F>> = (0..nb_points)
        .into_par_iter()
        .flat_map_iter(move |i| {
            (i + 1..nb_points).map(move |j| {
                let (first, second) = if points.get_label(i) < points.get_label(j) {
                    (i, j)
                } else {
                    (j, i)
                };
                CandidateEdge {
                    first,
                    second,
                    length: points.distance(i, j),
                }
            })
        })
        .collect();
    assert_eq!(candidates.len(), nb_points * nb_points.saturating_sub(1) / 2);
    //
    candidates.par_sort_unstable_by(|e1, e2| compare(points, e1, e2));
    // null lengths are sorted first
    if let Some(e) = candidates.first() {
        if e.length <= F::zero() {
            let first = points.get_label(e.first).unwrap_or_default().to_string();
            let second = points.get_label(e.second).unwrap_or_default().to_string();
            log::error!("coincident points {:?} and {:?}", first, second);
            return Err(SpannerError::CoincidentPoints { first, second });
        }
    }
    log::debug!("sorted {} candidate edges", candidates.len());
    //
    Ok(candidates)
} // end of sorted_candidates

//========================================================================================

#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_enumeration_is_complete() {
        log_init_test();
        //
        let points = PointSet::from_points(vec![
            ("d", [0., 0.]),
            ("c", [1., 0.]),
            ("b", [3., 0.]),
            ("a", [7., 0.]),
        ])
        .unwrap();
        let candidates = sorted_candidates(&points).unwrap();
        assert_eq!(candidates.len(), 6);
        // each unordered pair once, no self pair, labels normalized
        let mut pairs: Vec<(&str, &str)> = candidates
            .iter()
            .map(|e| {
                (
                    points.get_label(e.get_first()).unwrap(),
                    points.get_label(e.get_second()).unwrap(),
                )
            })
            .collect();
        for (l1, l2) in &pairs {
            assert!(l1 < l2);
        }
        pairs.sort();
        pairs.dedup();
        assert_eq!(pairs.len(), 6);
        // lengths increase
        let lengths: Vec<f64> = candidates.iter().map(|e| e.get_length()).collect();
        assert_eq!(lengths, vec![1., 2., 3., 4., 6., 7.]);
    } // end of test_enumeration_is_complete

    #[test]
    fn test_ties_broken_on_labels() {
        log_init_test();
        // a square: 4 sides of length 1 and 2 diagonals of equal length
        let points = PointSet::from_points(vec![
            ("z", [0., 0.]),
            ("x", [1., 1.]),
            ("y", [1., 0.]),
            ("w", [0., 1.]),
        ])
        .unwrap();
        let candidates = sorted_candidates(&points).unwrap();
        let pairs: Vec<(&str, &str)> = candidates
            .iter()
            .map(|e| {
                (
                    points.get_label(e.get_first()).unwrap(),
                    points.get_label(e.get_second()).unwrap(),
                )
            })
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("w", "x"),
                ("w", "z"),
                ("x", "y"),
                ("y", "z"),
                ("w", "y"),
                ("x", "z")
            ]
        );
    } // end of test_ties_broken_on_labels

    #[test]
    fn test_coincident_points() {
        log_init_test();
        //
        let points =
            PointSet::from_points(vec![("a", [0., 0.]), ("b", [1., 1.]), ("c", [1., 1.])]).unwrap();
        let res = sorted_candidates(&points);
        assert_eq!(
            res,
            Err(SpannerError::CoincidentPoints {
                first: "b".to_string(),
                second: "c".to_string()
            })
        );
    } // end of test_coincident_points
} // end of mod tests
