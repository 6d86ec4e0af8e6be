//! Smoke Basin: low points of a height map and the basins draining into them.

use puzzle_utils::graph2d::{Coordinate, Map2d};

use crate::error::{ParseError, SolveError};
use crate::solver::Puzzle;

const RIDGE: u32 = 9;

pub struct Day9;

/// Coordinates strictly lower than every neighbour.
fn low_points(map: &Map2d<u32>) -> Vec<Coordinate> {
    map.nodes()
        .filter(|node| map.neighbours(*node.id()).all(|n| n.data() > node.data()))
        .map(|node| *node.id())
        .collect()
}

impl Puzzle for Day9 {
    const YEAR: u16 = 2021;
    const DAY: u8 = 9;

    type Input = Map2d<u32>;

    fn parse(input: &str) -> Result<Self::Input, ParseError> {
        let map = Map2d::builder()
            .parse_values(input.trim(), |c| c.to_digit(10))
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?
            .build();
        if map.is_empty() {
            return Err(ParseError::MissingData("empty height map".to_string()));
        }
        Ok(map)
    }

    fn part1(input: &Self::Input) -> Result<String, SolveError> {
        let risk = low_points(input)
            .into_iter()
            .map(|low| input.value(low).map(|height| height + 1))
            .sum::<Result<u32, _>>()?;
        Ok(risk.to_string())
    }

    fn part2(input: &Self::Input) -> Result<String, SolveError> {
        let mut sizes = low_points(input)
            .into_iter()
            .map(|low| {
                input
                    .area(low, false, |_, to| *to.data() != RIDGE)
                    .map(|basin| basin.len())
            })
            .collect::<Result<Vec<_>, _>>()?;
        if sizes.len() < 3 {
            return Err(SolveError::NoSolution(format!("only {} basins", sizes.len())));
        }
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        Ok(sizes.iter().take(3).product::<usize>().to_string())
    }
}
