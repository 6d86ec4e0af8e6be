//! Chiton: lowest total risk across a grid, and across the grid tiled 5×5.

use puzzle_utils::graph::{Node, Weight};
use puzzle_utils::graph2d::{Coordinate, Map2d};
use tracing::debug;

use crate::error::{ParseError, SolveError};
use crate::solver::Puzzle;

const TILES: i64 = 5;

pub struct Day15;

/// Parsed risk levels; each part builds its own map.
pub struct Cavern {
    risks: Vec<Vec<Weight>>,
}

impl Cavern {
    fn width(&self) -> i64 {
        self.risks.first().map_or(0, |row| row.len() as i64)
    }

    fn height(&self) -> i64 {
        self.risks.len() as i64
    }

    fn risk_at(&self, x: i64, y: i64) -> Weight {
        let (width, height) = (self.width(), self.height());
        let base = self.risks[(y % height) as usize][(x % width) as usize];
        (base + x / width + y / height - 1) % 9 + 1
    }

    /// The cavern repeated `tiles` times in each direction, risk increasing per tile.
    fn map(&self, tiles: i64) -> Map2d<()> {
        let (width, height) = (self.width() * tiles, self.height() * tiles);
        let nodes = (0..height).flat_map(|y| {
            (0..width).map(move |x| Node::with_weight(Coordinate::new(x, y), (), self.risk_at(x, y)))
        });
        Map2d::of_nodes(nodes, false, 0)
    }
}

fn lowest_risk(map: &Map2d<()>) -> Result<Weight, SolveError> {
    let (Some(max_x), Some(max_y)) = (map.max_x(), map.max_y()) else {
        return Err(SolveError::NoSolution("empty cavern".to_string()));
    };
    let path = map
        .shortest_path(Coordinate::new(0, 0), Coordinate::new(max_x, max_y))?
        .ok_or_else(|| SolveError::NoSolution("exit unreachable".to_string()))?;
    debug!(steps = path.len(), weight = path.weight(), "found safest path");
    // Entering the start position carries no risk.
    Ok(path.weight() - path.start().weight())
}

impl Puzzle for Day15 {
    const YEAR: u16 = 2021;
    const DAY: u8 = 15;

    type Input = Cavern;

    fn parse(input: &str) -> Result<Self::Input, ParseError> {
        let risks = input
            .trim()
            .lines()
            .enumerate()
            .map(|(y, line)| {
                line.trim()
                    .chars()
                    .map(|c| c.to_digit(10).map(Weight::from))
                    .collect::<Option<Vec<_>>>()
                    .ok_or_else(|| ParseError::InvalidFormat(format!("(line {}) expected digits", y + 1)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let width = risks.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(ParseError::MissingData("empty cavern".to_string()));
        }
        if let Some(y) = risks.iter().position(|row| row.len() != width) {
            return Err(ParseError::InvalidFormat(format!("(line {}) ragged row", y + 1)));
        }
        Ok(Cavern { risks })
    }

    fn part1(input: &Self::Input) -> Result<String, SolveError> {
        Ok(lowest_risk(&input.map(1))?.to_string())
    }

    fn part2(input: &Self::Input) -> Result<String, SolveError> {
        Ok(lowest_risk(&input.map(TILES))?.to_string())
    }
}
