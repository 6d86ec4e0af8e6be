//! All in a Single Night: shortest and longest route visiting every city once.

use anyhow::anyhow;
use itertools::Itertools;
use puzzle_utils::graph::{Graph, Link, Node, Path, Weight};
use regex::Regex;

use crate::error::{ParseError, SolveError};
use crate::solver::Puzzle;

pub struct Day9;

impl Puzzle for Day9 {
    const YEAR: u16 = 2015;
    const DAY: u8 = 9;

    type Input = Graph<String, ()>;

    fn parse(input: &str) -> Result<Self::Input, ParseError> {
        let pattern = Regex::new(r"^(\w+) to (\w+) = (\d+)$")
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        let links = input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| -> Result<Link<String, ()>, anyhow::Error> {
                let captures = pattern
                    .captures(line.trim())
                    .ok_or_else(|| anyhow!("(line {}) expected `A to B = distance`", line_idx + 1))?;
                let distance = captures[3]
                    .parse()
                    .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))?;
                Ok(Link::with_weight(
                    Node::new(captures[1].to_string(), ()),
                    Node::new(captures[2].to_string(), ()),
                    distance,
                ))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        if links.is_empty() {
            return Err(ParseError::MissingData("no distances".to_string()));
        }
        Ok(Graph::from_links(links))
    }

    fn part1(input: &Self::Input) -> Result<String, SolveError> {
        route_bounds(input).map(|(shortest, _)| shortest.to_string())
    }

    fn part2(input: &Self::Input) -> Result<String, SolveError> {
        route_bounds(input).map(|(_, longest)| longest.to_string())
    }
}

/// Weights of the shortest and longest route through every city.
fn route_bounds(graph: &Graph<String, ()>) -> Result<(Weight, Weight), SolveError> {
    graph
        .all_paths_with_all_nodes()
        .iter()
        .map(Path::weight)
        .minmax()
        .into_option()
        .ok_or_else(no_route)
}

fn no_route() -> SolveError {
    SolveError::NoSolution("no route visits every city".to_string())
}
