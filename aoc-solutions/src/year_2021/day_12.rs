//! Passage Pathing: count cave walks where small caves are visited at most once
//! (part 2: one small cave may be visited twice).

use std::collections::HashSet;

use anyhow::anyhow;
use puzzle_utils::graph::{Graph, Link, Node, Path};

use crate::error::{ParseError, SolveError};
use crate::solver::Puzzle;

const START: &str = "start";
const END: &str = "end";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Small,
    Big,
}

type Caves = Graph<String, Size>;

pub struct Day12;

fn cave(name: &str) -> Node<String, Size> {
    let size = if name.chars().all(|c| c.is_ascii_uppercase()) {
        Size::Big
    } else {
        Size::Small
    };
    Node::new(name.to_string(), size)
}

/// Whether some small cave already appears twice in `path`.
fn has_small_revisit(path: &Path<String, Size>) -> bool {
    let nodes = path.nodes();
    let mut seen = HashSet::new();
    nodes
        .iter()
        .filter(|node| *node.data() == Size::Small)
        .any(|node| !seen.insert(node.id()))
}

fn count_paths(caves: &Caves, allow_one_revisit: bool) -> Result<usize, SolveError> {
    let start = START.to_string();
    let end = END.to_string();
    let paths = caves.all_paths(&start, &end, |next, path| {
        if *next.data() == Size::Big || !path.contains_node(next) {
            return true;
        }
        allow_one_revisit && next.id() != START && !has_small_revisit(path)
    })?;
    Ok(paths.len())
}

impl Puzzle for Day12 {
    const YEAR: u16 = 2021;
    const DAY: u8 = 12;

    type Input = Caves;

    fn parse(input: &str) -> Result<Self::Input, ParseError> {
        let links = input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| -> Result<Link<String, Size>, anyhow::Error> {
                let (from, to) = line
                    .trim()
                    .split_once('-')
                    .ok_or_else(|| anyhow!("(line {}) expected `a-b`", line_idx + 1))?;
                Ok(Link::new(cave(from), cave(to)))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        let caves = Graph::from_links(links);
        for required in [START, END] {
            if !caves.contains(&required.to_string()) {
                return Err(ParseError::MissingData(format!("no `{}` cave", required)));
            }
        }
        Ok(caves)
    }

    fn part1(input: &Self::Input) -> Result<String, SolveError> {
        Ok(count_paths(input, false)?.to_string())
    }

    fn part2(input: &Self::Input) -> Result<String, SolveError> {
        Ok(count_paths(input, true)?.to_string())
    }
}
