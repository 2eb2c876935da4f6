// inclusion facility

pub use crate::error::SpannerError;

pub use crate::point::*;

pub use crate::graph::*;

pub use crate::oracle::*;

pub use crate::greedy::*;

pub use crate::dilation::*;

pub use crate::generate::*;
