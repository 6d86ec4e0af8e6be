//! Advent of Code puzzle solutions
//!
//! Each day implements [`Puzzle`]: a parser producing the day's input model and
//! one function per part. [`solve`] runs a day end to end for a part number.
//! Solutions are grouped by year behind the `year-2015` / `year-2021` features.
//!
//! ```
//! # #[cfg(feature = "year-2015")] {
//! use aoc_solutions::solve;
//! use aoc_solutions::year_2015::day_9::Day9;
//!
//! let input = "London to Dublin = 464\nLondon to Belfast = 518\nDublin to Belfast = 141";
//! assert_eq!(solve::<Day9>(input, 1).unwrap(), "605");
//! # }
//! ```

pub mod error;
pub mod solver;

#[cfg(feature = "year-2015")]
pub mod year_2015;

#[cfg(feature = "year-2021")]
pub mod year_2021;

pub use error::{ParseError, SolveError, SolverError};
pub use solver::{Puzzle, solve, solve_parsed};
