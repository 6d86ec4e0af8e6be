//! Caller-owned memoization.
//!
//! - [`DpCache`]: dependency-resolving cache for recurrences, built from a
//!   [`DpProblem`] and a storage [`Backend`]
//! - [`Memoized`]: plain function wrapper with an owned result table
//!
//! Caches live as long as the value that owns them; nothing is global.
//!
//! # Cycle Behavior
//!
//! [`DpCache::get`] tracks the indices currently being resolved and reports a
//! dependency loop as [`MemoError::Cycle`](crate::MemoError::Cycle) instead of
//! recursing forever.
//!
//! # Example
//!
//! ```rust
//! use puzzle_utils::memo::{DpCache, DpProblem, VecBackend};
//!
//! struct Fibonacci;
//!
//! impl DpProblem<usize, u64> for Fibonacci {
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         if *n <= 1 { vec![] }
//!         else { vec![n - 1, n - 2] }
//!     }
//!     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
//!         if *n <= 1 { *n as u64 }
//!         else { deps[0] + deps[1] }
//!     }
//! }
//!
//! let cache = DpCache::builder()
//!     .backend(VecBackend::new())
//!     .problem(Fibonacci)
//!     .build();
//! assert_eq!(cache.get(&10).unwrap(), 55);
//! ```
//!
//! # Example: Closure-based API with ClosureProblem
//!
//! ```rust
//! use puzzle_utils::memo::{ClosureProblem, DpCache, HashMapBackend};
//!
//! let paths = ClosureProblem::new(
//!     |&(r, c): &(u32, u32)| match (r, c) {
//!         (0, _) | (_, 0) => vec![],
//!         _ => vec![(r - 1, c), (r, c - 1)],
//!     },
//!     |_: &(u32, u32), deps: Vec<u64>| if deps.is_empty() { 1 } else { deps.iter().sum() },
//! );
//!
//! let cache = DpCache::builder()
//!     .backend(HashMapBackend::new())
//!     .problem(paths)
//!     .build();
//! assert_eq!(cache.get(&(4, 4)).unwrap(), 70);
//! ```

mod backend;
mod cache;
mod memoized;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::{DpCache, DpCacheBuilder};
pub use memoized::Memoized;
pub use problem::{ClosureProblem, DpProblem};
