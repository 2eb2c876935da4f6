//! errors reported by spanner construction.
//!
//! All input checks are done before any construction work, so an error means nothing was built.

use thiserror::Error;

/// Errors reported by [PointSet](crate::point::PointSet), [GreedySpanner](crate::greedy::GreedySpanner)
/// and [SpannerGraph](crate::graph::SpannerGraph) queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpannerError {
    /// a spanner needs at least 2 points
    #[error("at least 2 points are needed, found {found}")]
    TooFewPoints { found: usize },

    #[error("point {label:?} has a non finite coordinate")]
    NonFiniteCoordinate { label: String },

    #[error("point label {label:?} is already present")]
    DuplicateLabel { label: String },

    /// two points share the same position, their edge would have null length
    #[error("points {first:?} and {second:?} are coincident")]
    CoincidentPoints { first: String, second: String },

    /// stretch factor must be finite and strictly greater than 1.
    #[error("stretch factor must be finite and > 1, got {stretch}")]
    InvalidStretch { stretch: f64 },

    #[error("tolerance must be finite and >= 0, got {tolerance}")]
    InvalidTolerance { tolerance: f64 },

    #[error("unknown point label {label:?}")]
    UnknownLabel { label: String },
} // end of SpannerError

pub type Result<T> = std::result::Result<T, SpannerError>;
