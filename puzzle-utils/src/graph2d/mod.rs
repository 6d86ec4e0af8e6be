//! 2D grid specialization of the graph model.
//!
//! A [`Map2d`] is a [`Graph`](crate::graph::Graph) keyed by [`Coordinate`] whose
//! links are derived from neighbour adjacency among the coordinates present.

mod coordinate;
mod map2d;

pub use coordinate::Coordinate;
pub use map2d::{Map2d, Map2dBuilder};
