//! Lanternfish: population growth counted per timer value.
//!
//! Part 1 memoizes descendants over `(timer, days left)`; part 2 raises the
//! daily timer transition matrix to the number of days.

use anyhow::anyhow;
use puzzle_utils::matrix::{Matrix, Vector};
use puzzle_utils::memo::{DpCache, DpProblem, HashMapBackend};
use puzzle_utils::{MatrixError, MemoError};

use crate::error::{ParseError, SolveError};
use crate::solver::Puzzle;

const RESET_TIMER: u8 = 6;
const NEWBORN_TIMER: u8 = 8;

pub struct Day6;

/// Number of fish a single fish with timer `t` turns into after `d` days.
struct Descendants;

impl DpProblem<(u8, u32), u64> for Descendants {
    fn deps(&self, &(timer, days): &(u8, u32)) -> Vec<(u8, u32)> {
        match (timer, days) {
            (_, 0) => vec![],
            (0, _) => vec![(RESET_TIMER, days - 1), (NEWBORN_TIMER, days - 1)],
            _ => vec![(timer - 1, days - 1)],
        }
    }

    fn compute(&self, _index: &(u8, u32), deps: Vec<u64>) -> u64 {
        if deps.is_empty() { 1 } else { deps.iter().sum() }
    }
}

/// Size of the school descending from `timers` after `days`.
pub fn population_after(timers: &[u8], days: u32) -> Result<u64, MemoError> {
    let cache = DpCache::builder()
        .backend(HashMapBackend::new())
        .problem(Descendants)
        .build();
    timers
        .iter()
        .map(|&timer| cache.get(&(timer, days)))
        .sum()
}

/// Same count as [`population_after`], by powering the one-day transition on
/// the number of fish per timer value.
pub fn population_by_matrix(timers: &[u8], days: u32) -> Result<u64, MatrixError> {
    let oldest = timers.iter().copied().max().unwrap_or(0).max(NEWBORN_TIMER);
    let size = usize::from(oldest) + 1;
    let day = Matrix::new(
        (0..size)
            .map(|to| {
                (0..size)
                    .map(|from| u64::from(feeds(from, to)))
                    .collect()
            })
            .collect(),
    )?;

    let mut counts = vec![0u64; size];
    for &timer in timers {
        counts[usize::from(timer)] += 1;
    }

    let after = day.pow(u64::from(days))?.mul_vector(&Vector::new(counts))?;
    Ok(after.values().iter().sum())
}

/// Whether fish at timer `from` end the day at timer `to`.
fn feeds(from: usize, to: usize) -> bool {
    match from {
        0 => to == usize::from(RESET_TIMER) || to == usize::from(NEWBORN_TIMER),
        _ => to == from - 1,
    }
}

impl Puzzle for Day6 {
    const YEAR: u16 = 2021;
    const DAY: u8 = 6;

    type Input = Vec<u8>;

    fn parse(input: &str) -> Result<Self::Input, ParseError> {
        let timers = input
            .trim()
            .split(',')
            .map(|value| -> Result<u8, anyhow::Error> {
                let timer: u8 = value.trim().parse()?;
                if timer > NEWBORN_TIMER {
                    return Err(anyhow!("timer {} exceeds {}", timer, NEWBORN_TIMER));
                }
                Ok(timer)
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        Ok(timers)
    }

    fn part1(input: &Self::Input) -> Result<String, SolveError> {
        Ok(population_after(input, 80)?.to_string())
    }

    fn part2(input: &Self::Input) -> Result<String, SolveError> {
        Ok(population_by_matrix(input, 256)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    const EXAMPLE: &str = "3,4,3,1,2";

    #[test]
    fn test_example_after_18_days() {
        let timers = Day6::parse(EXAMPLE).unwrap();
        assert_eq!(population_after(&timers, 18).unwrap(), 26);
    }

    #[test]
    fn test_matrix_power_matches_memoized_count() {
        let timers = Day6::parse(EXAMPLE).unwrap();
        for days in [0, 1, 18, 80] {
            assert_eq!(
                population_by_matrix(&timers, days).unwrap(),
                population_after(&timers, days).unwrap()
            );
        }
    }

    #[test]
    fn test_example_part1() {
        assert_eq!(solve::<Day6>(EXAMPLE, 1).unwrap(), "5934");
    }

    #[test]
    fn test_example_part2() {
        assert_eq!(solve::<Day6>(EXAMPLE, 2).unwrap(), "26984457539");
    }

    #[test]
    fn test_parse_rejects_large_timer() {
        assert!(matches!(Day6::parse("3,9"), Err(ParseError::InvalidFormat(_))));
    }
}
