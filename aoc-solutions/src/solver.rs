//! Core puzzle trait and the part dispatcher

use tracing::debug;

use crate::error::{ParseError, SolveError, SolverError};

/// One day of Advent of Code.
///
/// # Example
///
/// ```
/// use aoc_solutions::{ParseError, Puzzle, SolveError, solve};
///
/// struct Sum;
///
/// impl Puzzle for Sum {
///     const YEAR: u16 = 2000;
///     const DAY: u8 = 1;
///     type Input = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::Input, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
///
///     fn part1(input: &Self::Input) -> Result<String, SolveError> {
///         Ok(input.iter().sum::<i64>().to_string())
///     }
///
///     fn part2(input: &Self::Input) -> Result<String, SolveError> {
///         Ok(input.iter().product::<i64>().to_string())
///     }
/// }
///
/// assert_eq!(solve::<Sum>("2\n3\n4", 2).unwrap(), "24");
/// ```
pub trait Puzzle {
    const YEAR: u16;
    const DAY: u8;

    /// Parsed form of the puzzle input, shared by both parts
    type Input;

    fn parse(input: &str) -> Result<Self::Input, ParseError>;

    fn part1(input: &Self::Input) -> Result<String, SolveError>;

    fn part2(input: &Self::Input) -> Result<String, SolveError>;
}

/// Solves `part` of an already parsed input.
///
/// # Returns
/// * `Ok(String)` - The answer for this part
/// * `Err(SolveError::PartOutOfRange)` - `part` is neither 1 nor 2
/// * `Err(SolveError)` - The part itself failed
pub fn solve_parsed<P: Puzzle>(input: &P::Input, part: u8) -> Result<String, SolveError> {
    match part {
        1 => P::part1(input),
        2 => P::part2(input),
        other => Err(SolveError::PartOutOfRange(other)),
    }
}

/// Parses `input` and solves `part`.
pub fn solve<P: Puzzle>(input: &str, part: u8) -> Result<String, SolverError> {
    let parsed = P::parse(input)?;
    let answer = solve_parsed::<P>(&parsed, part)?;
    debug!(year = P::YEAR, day = P::DAY, part, %answer, "solved");
    Ok(answer)
}
