use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use super::{Link, Node, NodeId, Path, Weight};
use crate::error::GraphError;
use crate::explore::explore;

/// Builder for constructing a [`Graph`].
///
/// Nodes and links are accumulated freely; [`build`](Self::build) validates them
/// and freezes the result.
///
/// # Example
///
/// ```
/// use puzzle_utils::graph::{Graph, Link, Node};
///
/// let graph = Graph::builder()
///     .node(Node::new("a", ()))
///     .node(Node::new("b", ()))
///     .link(Link::new(Node::new("a", ()), Node::new("b", ())))
///     .build()
///     .unwrap();
/// assert_eq!(graph.len(), 2);
/// ```
pub struct GraphBuilder<Id, Data> {
    nodes: Vec<Rc<Node<Id, Data>>>,
    links: Vec<Link<Id, Data>>,
}

impl<Id: NodeId, Data> GraphBuilder<Id, Data> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            links: Vec::new(),
        }
    }

    pub fn node(mut self, node: impl Into<Rc<Node<Id, Data>>>) -> Self {
        self.nodes.push(node.into());
        self
    }

    pub fn nodes<N>(mut self, nodes: impl IntoIterator<Item = N>) -> Self
    where
        N: Into<Rc<Node<Id, Data>>>,
    {
        self.nodes.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn link(mut self, link: Link<Id, Data>) -> Self {
        self.links.push(link);
        self
    }

    pub fn links(mut self, links: impl IntoIterator<Item = Link<Id, Data>>) -> Self {
        self.links.extend(links);
        self
    }

    /// Validates and freezes the graph.
    ///
    /// Link endpoints are re-bound to the builder's nodes (matched by id), so the
    /// graph sees a single payload and weight per node.
    ///
    /// # Errors
    ///
    /// - [`GraphError::DuplicateNode`] if two nodes share an id
    /// - [`GraphError::DanglingEdge`] if a link endpoint is not one of the nodes
    pub fn build(self) -> Result<Graph<Id, Data>, GraphError> {
        let index = index_nodes(&self.nodes)?;

        let ends = self
            .links
            .iter()
            .map(|link| -> Result<(usize, usize), GraphError> {
                let locate = |node: &Node<Id, Data>| {
                    index
                        .get(node.id())
                        .copied()
                        .ok_or_else(|| GraphError::DanglingEdge {
                            link: link.describe(),
                            node: format!("{:?}", node.id()),
                        })
                };
                Ok((locate(link.from())?, locate(link.to())?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let links = self
            .links
            .iter()
            .zip(&ends)
            .map(|(link, &(from, to))| {
                Rc::new(link.rebind(Rc::clone(&self.nodes[from]), Rc::clone(&self.nodes[to])))
            })
            .collect();

        Ok(Graph::assemble(self.nodes, index, links, ends))
    }
}

impl<Id: NodeId, Data> Default for GraphBuilder<Id, Data> {
    fn default() -> Self {
        Self::new()
    }
}

fn index_nodes<Id: NodeId, Data>(
    nodes: &[Rc<Node<Id, Data>>],
) -> Result<HashMap<Id, usize>, GraphError> {
    let mut index = HashMap::with_capacity(nodes.len());
    for (position, node) in nodes.iter().enumerate() {
        match index.entry(node.id().clone()) {
            Entry::Occupied(_) => return Err(GraphError::DuplicateNode(format!("{:?}", node.id()))),
            Entry::Vacant(slot) => {
                slot.insert(position);
            }
        }
    }
    Ok(index)
}

/// An immutable, undirected, node- and link-weighted graph.
///
/// The adjacency index is built once at construction. Transformations such as
/// [`map_values`](Self::map_values) produce a new graph with the same topology.
pub struct Graph<Id, Data> {
    nodes: Vec<Rc<Node<Id, Data>>>,
    index: HashMap<Id, usize>,
    links: Vec<Rc<Link<Id, Data>>>,
    /// Endpoint positions of each link, parallel to `links`
    ends: Vec<(usize, usize)>,
    /// Positions in `links` touching each node, parallel to `nodes`
    adjacency: Vec<Vec<usize>>,
}

impl<Id: NodeId, Data> Graph<Id, Data> {
    pub fn builder() -> GraphBuilder<Id, Data> {
        GraphBuilder::new()
    }

    /// Builds a graph from explicit nodes and links.
    ///
    /// # Errors
    ///
    /// See [`GraphBuilder::build`].
    pub fn new(
        nodes: impl IntoIterator<Item = Node<Id, Data>>,
        links: impl IntoIterator<Item = Link<Id, Data>>,
    ) -> Result<Self, GraphError> {
        GraphBuilder::new().nodes(nodes).links(links).build()
    }

    /// Builds a graph whose nodes are the link endpoints.
    ///
    /// When several links carry nodes with the same id, the first one seen wins.
    pub fn from_links(links: impl IntoIterator<Item = Link<Id, Data>>) -> Self {
        let links: Vec<_> = links.into_iter().collect();
        let mut nodes = Vec::new();
        let mut index = HashMap::new();
        for node in links.iter().flat_map(|link| [link.from(), link.to()]) {
            if let Entry::Vacant(slot) = index.entry(node.id().clone()) {
                slot.insert(nodes.len());
                nodes.push(Rc::clone(node));
            }
        }

        let ends: Vec<_> = links
            .iter()
            .map(|link| (index[link.from().id()], index[link.to().id()]))
            .collect();
        let links = links
            .iter()
            .zip(&ends)
            .map(|(link, &(from, to))| {
                Rc::new(link.rebind(Rc::clone(&nodes[from]), Rc::clone(&nodes[to])))
            })
            .collect();

        Self::assemble(nodes, index, links, ends)
    }

    /// Assembles a graph from nodes with distinct ids and `(from, to, weight)` links
    /// given as positions into `nodes`.
    pub(crate) fn from_indexed(
        nodes: Vec<Rc<Node<Id, Data>>>,
        links: impl IntoIterator<Item = (usize, usize, Weight)>,
    ) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(position, node)| (node.id().clone(), position))
            .collect();
        let (links, ends): (Vec<_>, Vec<_>) = links
            .into_iter()
            .map(|(from, to, weight)| {
                let link = Link::with_weight(Rc::clone(&nodes[from]), Rc::clone(&nodes[to]), weight);
                (Rc::new(link), (from, to))
            })
            .unzip();
        Self::assemble(nodes, index, links, ends)
    }

    fn assemble(
        nodes: Vec<Rc<Node<Id, Data>>>,
        index: HashMap<Id, usize>,
        links: Vec<Rc<Link<Id, Data>>>,
        ends: Vec<(usize, usize)>,
    ) -> Self {
        let mut adjacency = vec![Vec::new(); nodes.len()];
        for (position, &(from, to)) in ends.iter().enumerate() {
            adjacency[from].push(position);
            if to != from {
                adjacency[to].push(position);
            }
        }
        Self {
            nodes,
            index,
            links,
            ends,
            adjacency,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Rc<Node<Id, Data>>> {
        self.nodes.iter()
    }

    pub fn node(&self, id: &Id) -> Option<&Rc<Node<Id, Data>>> {
        self.index.get(id).map(|&position| &self.nodes[position])
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.index.contains_key(id)
    }

    pub fn links(&self) -> &[Rc<Link<Id, Data>>] {
        &self.links
    }

    /// Links touching the node `id`; empty for unknown ids.
    pub fn links_of<'a>(&'a self, id: &Id) -> impl Iterator<Item = &'a Rc<Link<Id, Data>>> + use<'a, Id, Data> {
        self.index
            .get(id)
            .into_iter()
            .flat_map(move |&position| self.adjacency[position].iter().map(move |&link| &self.links[link]))
    }

    /// Nodes one link away from `id`; empty for unknown ids.
    pub fn neighbours<'a>(&'a self, id: &Id) -> impl Iterator<Item = &'a Rc<Node<Id, Data>>> + use<'a, Id, Data> {
        self.index
            .get(id)
            .into_iter()
            .flat_map(move |&position| self.adjacent(position).map(|(_, to)| to))
    }

    fn require(&self, id: &Id) -> Result<&Rc<Node<Id, Data>>, GraphError> {
        self.node(id)
            .ok_or_else(|| GraphError::UnknownNode(format!("{:?}", id)))
    }

    /// `(link, far endpoint)` pairs around the node at `position`.
    fn adjacent(&self, position: usize) -> impl Iterator<Item = (&Rc<Link<Id, Data>>, &Rc<Node<Id, Data>>)> {
        self.adjacency[position].iter().map(move |&link| {
            let (from, to) = self.ends[link];
            let far = if from == position { to } else { from };
            (&self.links[link], &self.nodes[far])
        })
    }

    fn adjacent_to<'a>(
        &'a self,
        node: &Node<Id, Data>,
    ) -> impl Iterator<Item = (&'a Rc<Link<Id, Data>>, &'a Rc<Node<Id, Data>>)> + use<'a, Id, Data> {
        self.index
            .get(node.id())
            .into_iter()
            .flat_map(move |&position| self.adjacent(position))
    }

    /// Every path extending `path` by one link.
    fn successors<'a>(&'a self, path: &Path<Id, Data>) -> impl Iterator<Item = Path<Id, Data>> + use<'a, Id, Data> {
        let path = path.clone();
        self.adjacent_to(path.end())
            .map(move |(link, to)| path.then(Rc::clone(link), Rc::clone(to)))
    }

    /// Cheapest path from `start` to `end` (Dijkstra).
    ///
    /// # Returns
    /// * `Ok(Some(path))` - A path of minimal weight
    /// * `Ok(None)` - `end` is not reachable from `start`
    /// * `Err(GraphError::UnknownNode)` - `start` or `end` is not in the graph
    pub fn shortest_path(&self, start: &Id, end: &Id) -> Result<Option<Path<Id, Data>>, GraphError> {
        self.shortest_path_with(start, end, |_| 0)
    }

    /// Cheapest path from `start` to `end` guided by `heuristic` (A*).
    ///
    /// The heuristic estimates the remaining weight from a node to `end`; it must
    /// never overestimate for the result to be optimal. Weights must be non-negative.
    ///
    /// A path is only kept in the frontier when it reaches its end node more cheaply
    /// than any path seen before, so among equally cheap paths the first one found wins
    /// and every finite reachable set is exhausted in finite time.
    pub fn shortest_path_with(
        &self,
        start: &Id,
        end: &Id,
        heuristic: impl FnMut(&Node<Id, Data>) -> Weight,
    ) -> Result<Option<Path<Id, Data>>, GraphError> {
        let (found, expanded) = self.search(start, end, heuristic)?;
        debug!(
            ?start,
            ?end,
            expanded,
            weight = found.as_ref().map(Path::weight),
            "shortest path search finished"
        );
        Ok(found)
    }

    /// Best-first search behind [`shortest_path_with`](Self::shortest_path_with),
    /// also returning how many frontier paths were expanded.
    ///
    /// A popped path whose end has since been reached more cheaply is yielded but
    /// not expanded.
    fn search(
        &self,
        start: &Id,
        end: &Id,
        mut heuristic: impl FnMut(&Node<Id, Data>) -> Weight,
    ) -> Result<(Option<Path<Id, Data>>, usize), GraphError> {
        let start_node = self.require(start)?;
        self.require(end)?;

        let best = RefCell::new(HashMap::from([(start.clone(), start_node.weight())]));
        let mut expanded = 0usize;

        let found = explore(Path::at(Rc::clone(start_node)), |path: &Path<Id, Data>| {
            let superseded = best
                .borrow()
                .get(path.end().id())
                .is_some_and(|&known| known < path.weight());
            (!superseded)
                .then(|| {
                    expanded += 1;
                    self.successors(path)
                })
                .into_iter()
                .flatten()
        })
        .filter_exploration(|path: &Path<Id, Data>| {
            let mut best = best.borrow_mut();
            match best.get(path.end().id()) {
                Some(&known) if known <= path.weight() => false,
                _ => {
                    best.insert(path.end().id().clone(), path.weight());
                    true
                }
            }
        })
        .minimizing(|path: &Path<Id, Data>| path.weight() + heuristic(path.end()))
        .into_iter()
        .find(|path| path.end().id() == end);

        Ok((found, expanded))
    }

    /// Every path visiting each node exactly once, from every possible start.
    ///
    /// Enumeration is exponential in the node count; meant for small graphs
    /// where the caller then reduces by weight.
    pub fn all_paths_with_all_nodes(&self) -> Vec<Path<Id, Data>> {
        let mut paths: Vec<_> = self.nodes.iter().map(|node| Path::at(Rc::clone(node))).collect();

        for round in 1..self.nodes.len() {
            paths = paths
                .iter()
                .flat_map(|path| {
                    self.adjacent_to(path.end())
                        .filter(|(_, to)| !path.contains_id(to.id()))
                        .map(|(link, to)| path.then(Rc::clone(link), Rc::clone(to)))
                })
                .collect();
            debug!(round, paths = paths.len(), "extended hamiltonian candidates");
        }
        paths
    }

    /// Every walk from `start` that stops on its first arrival at `end`.
    ///
    /// A walk is only extended towards a node when `can_append(node, walk)` holds;
    /// the predicate is responsible for keeping the enumeration finite.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownNode`] if `start` or `end` is not in the graph.
    pub fn all_paths(
        &self,
        start: &Id,
        end: &Id,
        mut can_append: impl FnMut(&Node<Id, Data>, &Path<Id, Data>) -> bool,
    ) -> Result<Vec<Path<Id, Data>>, GraphError> {
        let start_node = self.require(start)?;
        self.require(end)?;

        let paths: Vec<_> = explore(Path::at(Rc::clone(start_node)), |path: &Path<Id, Data>| {
            if path.end().id() == end {
                return Vec::new();
            }
            self.adjacent_to(path.end())
                .filter(|(_, to)| can_append(to, path))
                .map(|(link, to)| path.then(Rc::clone(link), Rc::clone(to)))
                .collect()
        })
        .into_iter()
        .filter(|path| path.end().id() == end)
        .collect();

        debug!(?start, ?end, paths = paths.len(), "enumerated paths");
        Ok(paths)
    }

    /// Same topology, payloads transformed.
    pub fn map_values<R>(&self, mut f: impl FnMut(&Data) -> R) -> Graph<Id, R> {
        let nodes = self
            .nodes
            .iter()
            .map(|node| Rc::new(node.map_data(&mut f)))
            .collect();
        self.relink(nodes, self.index.clone())
    }

    /// Same topology, nodes transformed; ids may change but must stay unique.
    ///
    /// # Errors
    ///
    /// [`GraphError::DuplicateNode`] if two transformed nodes share an id.
    pub fn map_nodes<R>(
        &self,
        mut f: impl FnMut(&Node<Id, Data>) -> Node<Id, R>,
    ) -> Result<Graph<Id, R>, GraphError> {
        let nodes: Vec<_> = self.nodes.iter().map(|node| Rc::new(f(node))).collect();
        let index = index_nodes(&nodes)?;
        Ok(self.relink(nodes, index))
    }

    /// Rebuilds the links of this graph onto `nodes`, which must be position-aligned.
    fn relink<R>(&self, nodes: Vec<Rc<Node<Id, R>>>, index: HashMap<Id, usize>) -> Graph<Id, R> {
        let links = self
            .links
            .iter()
            .zip(&self.ends)
            .map(|(link, &(from, to))| Rc::new(link.rebind(Rc::clone(&nodes[from]), Rc::clone(&nodes[to]))))
            .collect();
        Graph {
            nodes,
            index,
            links,
            ends: self.ends.clone(),
            adjacency: self.adjacency.clone(),
        }
    }
}

impl<Id: fmt::Debug, Data> fmt::Debug for Graph<Id, Data> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes.iter().map(|n| n.id()).collect::<Vec<_>>())
            .field(
                "links",
                &self
                    .links
                    .iter()
                    .map(|l| (l.from().id(), l.to().id(), l.weight()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests;
