//! Greedy geometric t-spanners.
//!
//! Given labelled points in the plane and a stretch factor t > 1, the greedy algorithm builds a sparse
//! graph in which the shortest path between any 2 points is at most t times their euclidean distance.
//!
//! - [point] : labelled point sets
//! - [candidate] : enumeration and ordering of candidate edges
//! - [graph] : the spanner graph
//! - [oracle] : shortest path queries on the graph under construction
//! - [greedy] : the greedy construction
//! - [dilation] : measure of the stretch realised by a graph
//!
//! ```
//! use greedyspanner::prelude::*;
//!
//! let points = PointSet::from_points(vec![("a", [0., 0.]), ("b", [3., 0.]), ("c", [0., 4.])]).unwrap();
//! let spanner = greedy_spanner(&points, 1.5).unwrap();
//! assert_eq!(spanner.get_nb_edges(), 2);
//! ```

pub mod prelude;

pub mod error;
pub mod point;

pub mod candidate;
pub mod graph;
pub mod oracle;

pub mod greedy;

pub mod dilation;
pub mod generate;
