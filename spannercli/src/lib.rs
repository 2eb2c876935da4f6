//! Loading of point sets for the greedyspanner binary.

pub mod io;
