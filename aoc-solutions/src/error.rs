//! Error types for puzzle solutions

use puzzle_utils::{GraphError, MatrixError, MemoError};
use thiserror::Error;

/// Error type for parsing puzzle input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
}

/// Error type for solving a specific part
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The requested part number does not exist
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The input admits no answer
    #[error("No solution: {0}")]
    NoSolution(String),
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
    #[error("Memo error: {0}")]
    Memo(#[from] MemoError),
    #[error("Matrix error: {0}")]
    Matrix(#[from] MatrixError),
}

/// Error type for running a puzzle end to end
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Solve error: {0}")]
    Solve(#[from] SolveError),
}
