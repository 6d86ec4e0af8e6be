//! Shared utilities for puzzle solutions
//!
//! This crate provides the reusable pieces that recur across Advent of Code style puzzles:
//! - A lazy, restartable exploration engine ([`explore`]) with FIFO or best-first frontiers
//! - A generic weighted graph model ([`graph`]) with path enumeration and shortest path
//! - A 2D grid specialization ([`graph2d`]) with automatic neighbour links
//! - Caller-owned memoization ([`memo`])
//! - Hex digests for hash-mining puzzles ([`hash`])
//! - Small dense matrix/vector math ([`matrix`])
//!
//! # Quick Example
//!
//! ```
//! use puzzle_utils::graph2d::{Coordinate, Map2d};
//!
//! let map = Map2d::builder()
//!     .link_weight(0)
//!     .parse_weights("131\n919\n111")
//!     .unwrap()
//!     .build();
//!
//! let path = map
//!     .shortest_path(Coordinate::new(0, 0), Coordinate::new(2, 2))
//!     .unwrap()
//!     .expect("end is reachable");
//!
//! // The start node's own weight is part of the path weight.
//! assert_eq!(path.weight() - path.start().weight(), 6);
//! ```

pub mod error;
pub mod explore;
pub mod graph;
pub mod graph2d;
pub mod hash;
pub mod matrix;
pub mod memo;

pub use error::{GraphError, MatrixError, MemoError};
pub use explore::{Explore, explore};
