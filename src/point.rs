//! labelled planar points.
//!
//! A [PointSet] maps a unique label to a 2-d position. Insertion order is kept (we use an IndexMap)
//! and the rank of a point in the set is the index of its node in the spanner graph.

use indexmap::IndexMap;
use num_traits::Float;

use crate::error::{Result, SpannerError};

/// euclidean distance between 2 planar points
#[inline]
pub fn euclidean<F: Float>(p1: &[F; 2], p2: &[F; 2]) -> F {
    (p1[0] - p2[0]).hypot(p1[1] - p2[1])
}

/// An ordered collection of labelled points. Labels are unique, coordinates are finite.
/// Points are immutable once inserted.
#[derive(Clone, Debug)]
pub struct PointSet<F: Float> {
    points: IndexMap<String, [F; 2]>,
}

impl<F: Float + std::fmt::Debug> PointSet<F> {
    pub fn new() -> Self {
        PointSet {
            points: IndexMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PointSet {
            points: IndexMap::with_capacity(capacity),
        }
    }

    /// builds a set from (label, position) couples, failing on the first bad point
    pub fn from_points<S, I>(points: I) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, [F; 2])>,
    {
        let iter = points.into_iter();
        let mut set = PointSet::with_capacity(iter.size_hint().0);
        for (label, position) in iter {
            set.insert(label, position)?;
        }
        Ok(set)
    } // end of from_points

    /// inserts a point and returns its rank.
    /// Fails if label is already present or if a coordinate is NaN or infinite.
    pub fn insert(&mut self, label: impl Into<String>, position: [F; 2]) -> Result<usize> {
        let label = label.into();
        if !position[0].is_finite() || !position[1].is_finite() {
            return Err(SpannerError::NonFiniteCoordinate { label });
        }
        if self.points.contains_key(&label) {
            return Err(SpannerError::DuplicateLabel { label });
        }
        log::trace!("inserting point {:?} at {:?}", label, position);
        let (rank, _) = self.points.insert_full(label, position);
        Ok(rank)
    } // end of insert

    /// return number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get_position(&self, label: &str) -> Option<&[F; 2]> {
        self.points.get(label)
    }

    /// rank of a label in insertion order
    pub fn get_rank(&self, label: &str) -> Option<usize> {
        self.points.get_index_of(label)
    }

    /// retrieve label and position of point of given rank if rank is Ok
    pub fn get_point(&self, rank: usize) -> Option<(&str, &[F; 2])> {
        self.points
            .get_index(rank)
            .map(|(label, position)| (label.as_str(), position))
    }

    pub fn get_label(&self, rank: usize) -> Option<&str> {
        self.get_point(rank).map(|(label, _)| label)
    }

    /// iterates on (label, position) in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[F; 2])> {
        self.points.iter().map(|(l, p)| (l.as_str(), p))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.keys().map(|l| l.as_str())
    }

    // distance between points of rank i and j. ranks must be valid.
    pub(crate) fn distance(&self, i: usize, j: usize) -> F {
        euclidean(&self.points[i], &self.points[j])
    }

    /// checks the set can serve as spanner input. Finiteness is already ensured at insertion,
    /// coincident points are detected during candidate enumeration.
    pub fn check(&self) -> Result<()> {
        if self.points.len() < 2 {
            return Err(SpannerError::TooFewPoints {
                found: self.points.len(),
            });
        }
        Ok(())
    }
} // end of impl block PointSet

impl<F: Float + std::fmt::Debug> Default for PointSet<F> {
    fn default() -> Self {
        PointSet::new()
    }
}

//========================================================================================

// end of mod tests
