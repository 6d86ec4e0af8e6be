//! Error types for the utilities library

use thiserror::Error;

use crate::graph2d::Coordinate;

/// Error type for graph construction and traversal
///
/// Node ids are rendered with `Debug` so the error stays independent of the
/// id type of the graph that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A link references a node that is not part of the graph
    #[error("Dangling edge: link {link} references node {node} which is not in the graph")]
    DanglingEdge { link: String, node: String },
    /// Two nodes share the same id
    #[error("Duplicate node: {0}")]
    DuplicateNode(String),
    /// A link was traversed from a node that is not one of its endpoints
    #[error("Invalid endpoint: {node} is not an endpoint of {link}")]
    InvalidEndpoint { node: String, link: String },
    /// The requested node id is not part of the graph
    #[error("Unknown node: {0}")]
    UnknownNode(String),
    /// The requested coordinate is not part of the map
    #[error("Coordinate {0} is not in the map")]
    UnknownCoordinate(Coordinate),
    /// A grid cell could not be parsed
    #[error("Invalid cell {found:?} at {coordinate}")]
    InvalidCell { coordinate: Coordinate, found: char },
}

/// Error type for memoized computations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoError {
    /// The dependency graph loops back onto an index still being computed
    #[error("Dependency cycle detected at {0}")]
    Cycle(String),
}

/// Error type for matrix construction and products
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A matrix needs at least one row and one column
    #[error("Matrix must have at least one row and one column")]
    Empty,
    /// Rows do not all have the same length
    #[error("Row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Operand shapes are incompatible for the product
    #[error("Dimension mismatch: {left} columns against {right} rows")]
    DimensionMismatch { left: usize, right: usize },
}
