use std::cell::OnceCell;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::rc::Rc;

use tracing::debug;

use super::Coordinate;
use crate::error::GraphError;
use crate::explore::explore;
use crate::graph::{Graph, Node, Path, Weight};

/// Mutable working copy of a grid: coordinate-keyed nodes plus link configuration.
///
/// Later insertions at the same coordinate replace earlier ones. [`build`](Self::build)
/// derives the neighbour links and freezes the grid into a [`Map2d`].
#[derive(Debug, Clone)]
pub struct Map2dBuilder<T> {
    nodes: BTreeMap<Coordinate, Node<Coordinate, T>>,
    with_diagonals: bool,
    link_weight: Weight,
}

impl<T> Map2dBuilder<T> {
    /// Orthogonal links of weight 1, no nodes.
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            with_diagonals: false,
            link_weight: 1,
        }
    }

    /// Also link each coordinate to its 4 diagonal neighbours.
    pub fn with_diagonals(mut self, with_diagonals: bool) -> Self {
        self.with_diagonals = with_diagonals;
        self
    }

    /// Weight of every derived link.
    pub fn link_weight(mut self, weight: Weight) -> Self {
        self.link_weight = weight;
        self
    }

    pub fn node(mut self, node: Node<Coordinate, T>) -> Self {
        self.insert(node);
        self
    }

    pub fn nodes(mut self, nodes: impl IntoIterator<Item = Node<Coordinate, T>>) -> Self {
        for node in nodes {
            self.insert(node);
        }
        self
    }

    /// Adds one node per character of `input`, `x` being the column and `y` the line.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidCell`] for the first character `parse` rejects.
    pub fn parse_nodes<F>(mut self, input: &str, mut parse: F) -> Result<Self, GraphError>
    where
        F: FnMut(Coordinate, char) -> Option<Node<Coordinate, T>>,
    {
        for (y, line) in (0..).zip(input.lines()) {
            for (x, found) in (0..).zip(line.chars()) {
                let coordinate = Coordinate::new(x, y);
                let node = parse(coordinate, found).ok_or(GraphError::InvalidCell { coordinate, found })?;
                self.insert(node);
            }
        }
        Ok(self)
    }

    /// Like [`parse_nodes`](Self::parse_nodes) for weightless nodes carrying `parse(char)`.
    pub fn parse_values<F>(self, input: &str, mut parse: F) -> Result<Self, GraphError>
    where
        F: FnMut(char) -> Option<T>,
    {
        self.parse_nodes(input, |coordinate, found| {
            parse(found).map(|value| Node::new(coordinate, value))
        })
    }

    /// Replaces the node at its coordinate, returning the previous one.
    pub fn insert(&mut self, node: Node<Coordinate, T>) -> Option<Node<Coordinate, T>> {
        self.nodes.insert(*node.id(), node)
    }

    pub fn remove(&mut self, coordinate: Coordinate) -> Option<Node<Coordinate, T>> {
        self.nodes.remove(&coordinate)
    }

    pub fn get(&self, coordinate: Coordinate) -> Option<&Node<Coordinate, T>> {
        self.nodes.get(&coordinate)
    }

    /// Value at `coordinate`, if present.
    pub fn value(&self, coordinate: Coordinate) -> Option<&T> {
        self.get(coordinate).map(Node::data)
    }

    /// Replaces the value at `coordinate`, keeping the node weight.
    ///
    /// Returns the previous value, or `None` (and changes nothing) when absent.
    pub fn set_value(&mut self, coordinate: Coordinate, value: T) -> Option<T> {
        let (id, previous, weight) = self.nodes.remove(&coordinate)?.into_parts();
        self.nodes.insert(coordinate, Node::with_weight(id, value, weight));
        Some(previous)
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.nodes.contains_key(&coordinate)
    }

    /// Present coordinates in reading order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.nodes.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Derives the neighbour links and freezes the grid.
    pub fn build(self) -> Map2d<T> {
        let position: HashMap<Coordinate, usize> = self
            .nodes
            .keys()
            .enumerate()
            .map(|(position, &coordinate)| (coordinate, position))
            .collect();

        let mut links = Vec::new();
        for (at, &from) in self.nodes.keys().enumerate() {
            for to in from.neighbours(self.with_diagonals).filter(|to| from < *to) {
                if let Some(&target) = position.get(&to) {
                    links.push((at, target, self.link_weight));
                }
            }
        }

        let nodes = self.nodes.into_values().map(Rc::new).collect();
        Map2d {
            graph: Graph::from_indexed(nodes, links),
            with_diagonals: self.with_diagonals,
            link_weight: self.link_weight,
            bounds: OnceCell::new(),
        }
    }
}

impl Map2dBuilder<u32> {
    /// Parses a grid of decimal digits into node values.
    pub fn parse_digits(self, input: &str) -> Result<Self, GraphError> {
        self.parse_values(input, |found| found.to_digit(10))
    }
}

impl Map2dBuilder<()> {
    /// Parses a grid of decimal digits into node weights.
    pub fn parse_weights(self, input: &str) -> Result<Self, GraphError> {
        self.parse_nodes(input, |coordinate, found| {
            found
                .to_digit(10)
                .map(|digit| Node::with_weight(coordinate, (), Weight::from(digit)))
        })
    }
}

impl<T> Default for Map2dBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    min: Coordinate,
    max: Coordinate,
}

/// An immutable grid graph.
///
/// Every present coordinate is linked to each present orthogonal (optionally
/// diagonal) neighbour with a uniform link weight; absent coordinates simply have
/// no links, so sparse maps are fine.
pub struct Map2d<T> {
    graph: Graph<Coordinate, T>,
    with_diagonals: bool,
    link_weight: Weight,
    bounds: OnceCell<Option<Bounds>>,
}

impl<T> Map2d<T> {
    pub fn builder() -> Map2dBuilder<T> {
        Map2dBuilder::new()
    }

    pub fn of_nodes(
        nodes: impl IntoIterator<Item = Node<Coordinate, T>>,
        with_diagonals: bool,
        link_weight: Weight,
    ) -> Self {
        Map2dBuilder::new()
            .with_diagonals(with_diagonals)
            .link_weight(link_weight)
            .nodes(nodes)
            .build()
    }

    /// An empty builder with the same link configuration.
    fn configured<R>(&self) -> Map2dBuilder<R> {
        Map2dBuilder::new()
            .with_diagonals(self.with_diagonals)
            .link_weight(self.link_weight)
    }

    pub fn graph(&self) -> &Graph<Coordinate, T> {
        &self.graph
    }

    pub fn uses_diagonals(&self) -> bool {
        self.with_diagonals
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Nodes in reading order.
    pub fn nodes(&self) -> impl Iterator<Item = &Rc<Node<Coordinate, T>>> {
        self.graph.nodes()
    }

    pub fn node(&self, coordinate: Coordinate) -> Option<&Rc<Node<Coordinate, T>>> {
        self.graph.node(&coordinate)
    }

    pub fn get(&self, coordinate: Coordinate) -> Option<&T> {
        self.node(coordinate).map(|node| node.data())
    }

    /// Value at `coordinate`.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownCoordinate`] when the coordinate is absent.
    pub fn value(&self, coordinate: Coordinate) -> Result<&T, GraphError> {
        self.get(coordinate)
            .ok_or(GraphError::UnknownCoordinate(coordinate))
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.graph.contains(&coordinate)
    }

    /// Linked neighbours of `coordinate`; empty when absent.
    pub fn neighbours(&self, coordinate: Coordinate) -> impl Iterator<Item = &Rc<Node<Coordinate, T>>> {
        self.graph.neighbours(&coordinate)
    }

    fn bounds(&self) -> Option<Bounds> {
        *self.bounds.get_or_init(|| {
            let mut coordinates = self.graph.nodes().map(|node| *node.id());
            let first = coordinates.next()?;
            Some(coordinates.fold(
                Bounds {
                    min: first,
                    max: first,
                },
                |bounds, c| Bounds {
                    min: Coordinate::new(bounds.min.x.min(c.x), bounds.min.y.min(c.y)),
                    max: Coordinate::new(bounds.max.x.max(c.x), bounds.max.y.max(c.y)),
                },
            ))
        })
    }

    pub fn min_x(&self) -> Option<i64> {
        self.bounds().map(|bounds| bounds.min.x)
    }

    pub fn min_y(&self) -> Option<i64> {
        self.bounds().map(|bounds| bounds.min.y)
    }

    pub fn max_x(&self) -> Option<i64> {
        self.bounds().map(|bounds| bounds.max.x)
    }

    pub fn max_y(&self) -> Option<i64> {
        self.bounds().map(|bounds| bounds.max.y)
    }

    fn require(&self, coordinate: Coordinate) -> Result<&Rc<Node<Coordinate, T>>, GraphError> {
        self.node(coordinate)
            .ok_or(GraphError::UnknownCoordinate(coordinate))
    }

    /// Cheapest path between two coordinates.
    ///
    /// Guided by a distance heuristic scaled by the cheapest possible step
    /// (link weight plus the lightest node weight), which never overestimates.
    pub fn shortest_path(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<Option<Path<Coordinate, T>>, GraphError> {
        let lightest = self.nodes().map(|node| node.weight()).min().unwrap_or(0);
        let step = (self.link_weight + lightest).max(0);
        let with_diagonals = self.with_diagonals;

        self.shortest_path_with(start, end, move |node| {
            let distance = if with_diagonals {
                node.id().chebyshev_distance(&end)
            } else {
                node.id().manhattan_distance(&end)
            };
            distance * step
        })
    }

    /// Cheapest path between two coordinates with a caller-supplied admissible heuristic.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownCoordinate`] if either coordinate is absent.
    pub fn shortest_path_with(
        &self,
        start: Coordinate,
        end: Coordinate,
        heuristic: impl FnMut(&Node<Coordinate, T>) -> Weight,
    ) -> Result<Option<Path<Coordinate, T>>, GraphError> {
        self.require(start)?;
        self.require(end)?;
        self.graph.shortest_path_with(&start, &end, heuristic)
    }

    /// Coordinates reachable from `start` through neighbour steps accepted by
    /// `link_filter(from, to)`.
    ///
    /// Steps follow grid adjacency with the given diagonal setting, independently
    /// of the map's own links. `start` is always part of the area.
    pub fn area(
        &self,
        start: Coordinate,
        with_diagonals: bool,
        mut link_filter: impl FnMut(&Node<Coordinate, T>, &Node<Coordinate, T>) -> bool,
    ) -> Result<HashSet<Coordinate>, GraphError> {
        self.require(start)?;

        let mut visited = HashSet::from([start]);
        let area: HashSet<_> = explore(start, |from: &Coordinate| {
            let mut reached = Vec::new();
            if let Some(origin) = self.node(*from) {
                for to in from.neighbours(with_diagonals).filter_map(|c| self.node(c)) {
                    if link_filter(origin, to) {
                        reached.push(*to.id());
                    }
                }
            }
            reached
        })
        .filter_exploration(move |to: &Coordinate| visited.insert(*to))
        .into_iter()
        .collect();

        Ok(area)
    }

    /// Same coordinates and links, transformed values.
    pub fn map_values<R>(&self, f: impl FnMut(&T) -> R) -> Map2d<R> {
        Map2d {
            graph: self.graph.map_values(f),
            with_diagonals: self.with_diagonals,
            link_weight: self.link_weight,
            bounds: self.bounds.clone(),
        }
    }

    /// Transforms every node, possibly moving it.
    ///
    /// Nodes landing on the same coordinate are combined with `merge`, in reading
    /// order of their source coordinates; the first node's weight is kept.
    pub fn map<R>(
        &self,
        mut f: impl FnMut(&Node<Coordinate, T>) -> Node<Coordinate, R>,
        mut merge: impl FnMut(R, R) -> R,
    ) -> Map2d<R> {
        let mut mapped: BTreeMap<Coordinate, Node<Coordinate, R>> = BTreeMap::new();
        for node in self.nodes() {
            let node = f(node);
            let node = match mapped.remove(node.id()) {
                Some(existing) => {
                    let (coordinate, kept, weight) = existing.into_parts();
                    let (_, incoming, _) = node.into_parts();
                    Node::with_weight(coordinate, merge(kept, incoming), weight)
                }
                None => node,
            };
            mapped.insert(*node.id(), node);
        }
        self.configured().nodes(mapped.into_values()).build()
    }
}

impl<T: Clone> Map2d<T> {
    /// Runs a batch `mutation` on a working copy and rebuilds the links.
    pub fn edit(&self, mutation: impl FnOnce(&mut Map2dBuilder<T>)) -> Map2d<T> {
        let mut working = self
            .configured()
            .nodes(self.nodes().map(|node| (**node).clone()));
        mutation(&mut working);
        debug!(nodes = working.len(), "rebuilding edited map");
        working.build()
    }

    /// Keeps the nodes accepted by `predicate`; links to removed nodes disappear.
    pub fn filter(&self, mut predicate: impl FnMut(&Node<Coordinate, T>) -> bool) -> Map2d<T> {
        self.configured()
            .nodes(
                self.nodes()
                    .filter(|node| predicate(node))
                    .map(|node| (**node).clone()),
            )
            .build()
    }
}

#[cfg(test)]
mod tests;
