//! Generic weighted graph model.
//!
//! - [`Node`]: identity-keyed vertex with a payload and an intrinsic weight
//! - [`Link`]: undirected weighted edge, equal regardless of declared direction
//! - [`Path`]: persistent walk with derived end and total weight
//! - [`Graph`]: immutable node set plus adjacency index, built through [`GraphBuilder`]
//!
//! Path weights count every link traversed and every node visited, the start included.
//! Shortest-path queries assume non-negative weights.

mod adjacency;
mod link;
mod node;
mod path;

use std::fmt::Debug;
use std::hash::Hash;

pub use adjacency::{Graph, GraphBuilder};
pub use link::Link;
pub use node::Node;
pub use path::Path;

/// Integer weight carried by nodes, links and paths
pub type Weight = i64;

/// Bound satisfied by every type usable as a node id.
pub trait NodeId: Hash + Eq + Clone + Debug {}

impl<T: Hash + Eq + Clone + Debug> NodeId for T {}
