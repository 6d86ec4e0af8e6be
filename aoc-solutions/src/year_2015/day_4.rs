//! The Ideal Stocking Stuffer: mine the lowest number whose MD5 with the
//! secret key starts with enough zeros.

use puzzle_utils::hash::md5;

use crate::error::{ParseError, SolveError};
use crate::solver::Puzzle;

pub struct Day4;

/// Lowest positive number `n` such that `md5(key + n)` starts with `zeros` zeros.
pub fn mine(key: &str, zeros: usize) -> Option<u64> {
    let prefix = "0".repeat(zeros);
    (1..=u64::MAX).find(|n| md5(&format!("{}{}", key, n)).starts_with(&prefix))
}

impl Puzzle for Day4 {
    const YEAR: u16 = 2015;
    const DAY: u8 = 4;

    type Input = String;

    fn parse(input: &str) -> Result<Self::Input, ParseError> {
        let key = input.trim();
        if key.is_empty() {
            return Err(ParseError::MissingData("secret key".to_string()));
        }
        Ok(key.to_string())
    }

    fn part1(input: &Self::Input) -> Result<String, SolveError> {
        mined(input, 5)
    }

    fn part2(input: &Self::Input) -> Result<String, SolveError> {
        mined(input, 6)
    }
}

fn mined(key: &str, zeros: usize) -> Result<String, SolveError> {
    mine(key, zeros)
        .map(|n| n.to_string())
        .ok_or_else(|| SolveError::NoSolution(format!("no number mines {} zeros", zeros)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    #[test]
    fn test_example_part1() {
        assert_eq!(solve::<Day4>("abcdef\n", 1).unwrap(), "609043");
    }

    #[test]
    fn test_mine_without_zeros_takes_first_number() {
        assert_eq!(mine("pqrstuv", 0), Some(1));
    }

    #[test]
    fn test_parse_requires_key() {
        assert!(matches!(Day4::parse("  \n"), Err(ParseError::MissingData(_))));
    }
}
