//! Dumbo Octopus: an energy automaton where flashes cascade to all 8 neighbours.

use std::collections::HashSet;

use puzzle_utils::graph2d::{Coordinate, Map2d};

use crate::error::{ParseError, SolveError};
use crate::solver::Puzzle;

const FLASH_LEVEL: u32 = 9;

pub struct Day11;

/// Advances the grid by one step, returning the new grid and how many octopuses flashed.
pub fn step(map: &Map2d<u32>) -> (Map2d<u32>, usize) {
    let mut flash_count = 0;
    let next = map.map_values(|energy| energy + 1).edit(|grid| {
        let mut pending: Vec<Coordinate> = grid
            .coordinates()
            .filter(|&c| grid.value(c).is_some_and(|&energy| energy > FLASH_LEVEL))
            .collect();
        let mut flashed = HashSet::new();

        while let Some(octopus) = pending.pop() {
            if !flashed.insert(octopus) {
                continue;
            }
            for neighbour in octopus.neighbours(true) {
                let Some(&energy) = grid.value(neighbour) else {
                    continue;
                };
                grid.set_value(neighbour, energy + 1);
                if energy + 1 > FLASH_LEVEL && !flashed.contains(&neighbour) {
                    pending.push(neighbour);
                }
            }
        }

        for &octopus in &flashed {
            grid.set_value(octopus, 0);
        }
        flash_count = flashed.len();
    });
    (next, flash_count)
}

/// Total flashes over `steps` steps.
pub fn flashes_after(map: &Map2d<u32>, steps: usize) -> usize {
    let (_, total) = (0..steps).fold((map.map_values(|&energy| energy), 0), |(grid, total), _| {
        let (next, flashes) = step(&grid);
        (next, total + flashes)
    });
    total
}

impl Puzzle for Day11 {
    const YEAR: u16 = 2021;
    const DAY: u8 = 11;

    type Input = Map2d<u32>;

    fn parse(input: &str) -> Result<Self::Input, ParseError> {
        let map = Map2d::builder()
            .with_diagonals(true)
            .parse_digits(input.trim())
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?
            .build();
        if map.is_empty() {
            return Err(ParseError::MissingData("empty grid".to_string()));
        }
        Ok(map)
    }

    fn part1(input: &Self::Input) -> Result<String, SolveError> {
        Ok(flashes_after(input, 100).to_string())
    }

    fn part2(input: &Self::Input) -> Result<String, SolveError> {
        let mut grid = input.map_values(|&energy| energy);
        for round in 1u64.. {
            let (next, flashes) = step(&grid);
            if flashes == next.len() {
                return Ok(round.to_string());
            }
            grid = next;
        }
        Err(SolveError::NoSolution("grid never synchronizes".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    const EXAMPLE: &str = "\
5483143223
2745854711
5264556173
6141336146
6357385478
4167524645
2176841721
6882881134
4846848554
5283751526";

    #[test]
    fn test_single_step_cascade() {
        let map = Day11::parse("11111\n19991\n19191\n19991\n11111").unwrap();
        let (next, flashes) = step(&map);
        assert_eq!(flashes, 9);
        assert_eq!(next.get(Coordinate::new(2, 2)), Some(&0));
        assert_eq!(next.get(Coordinate::new(0, 0)), Some(&3));
        assert_eq!(next.get(Coordinate::new(2, 0)), Some(&5));
    }

    #[test]
    fn test_example_after_10_steps() {
        let map = Day11::parse(EXAMPLE).unwrap();
        assert_eq!(flashes_after(&map, 10), 204);
    }

    #[test]
    fn test_example_part1() {
        assert_eq!(solve::<Day11>(EXAMPLE, 1).unwrap(), "1656");
    }

    #[test]
    fn test_example_part2() {
        assert_eq!(solve::<Day11>(EXAMPLE, 2).unwrap(), "195");
    }
}
