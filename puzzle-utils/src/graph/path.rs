use std::fmt;
use std::iter::successors;
use std::rc::Rc;

use super::{Link, Node, NodeId, Weight};
use crate::error::GraphError;

/// A persistent walk through a graph.
///
/// Appending never touches the original path: the new path shares every previous
/// step with it, so branching explorations can hold thousands of paths cheaply.
pub struct Path<Id, Data> {
    start: Rc<Node<Id, Data>>,
    last: Option<Rc<Step<Id, Data>>>,
    weight: Weight,
    len: usize,
}

/// One traversed link, pointing back to the step before it.
struct Step<Id, Data> {
    link: Rc<Link<Id, Data>>,
    reached: Rc<Node<Id, Data>>,
    previous: Option<Rc<Step<Id, Data>>>,
}

impl<Id, Data> Path<Id, Data> {
    /// An empty walk standing on `start`; its weight is the start node's weight.
    pub fn at(start: impl Into<Rc<Node<Id, Data>>>) -> Self {
        let start = start.into();
        Self {
            weight: start.weight(),
            start,
            last: None,
            len: 0,
        }
    }

    pub fn start(&self) -> &Rc<Node<Id, Data>> {
        &self.start
    }

    /// The node reached after the last link, or the start for an empty path.
    pub fn end(&self) -> &Rc<Node<Id, Data>> {
        self.last.as_ref().map_or(&self.start, |step| &step.reached)
    }

    /// Sum of every traversed link weight and every visited node weight.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Number of links traversed.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Links in walk order.
    pub fn links(&self) -> Vec<Rc<Link<Id, Data>>> {
        let mut links: Vec<_> = self.steps().map(|step| Rc::clone(&step.link)).collect();
        links.reverse();
        links
    }

    /// Visited nodes in walk order, the start included.
    pub fn nodes(&self) -> Vec<Rc<Node<Id, Data>>> {
        let mut nodes: Vec<_> = self.steps().map(|step| Rc::clone(&step.reached)).collect();
        nodes.push(Rc::clone(&self.start));
        nodes.reverse();
        nodes
    }

    /// Extends the walk through `link` to `reached`, which must be its far endpoint.
    pub(crate) fn then(&self, link: Rc<Link<Id, Data>>, reached: Rc<Node<Id, Data>>) -> Self {
        Self {
            start: Rc::clone(&self.start),
            weight: self.weight + link.weight() + reached.weight(),
            len: self.len + 1,
            last: Some(Rc::new(Step {
                link,
                reached,
                previous: self.last.clone(),
            })),
        }
    }

    fn steps(&self) -> impl Iterator<Item = &Step<Id, Data>> {
        successors(self.last.as_deref(), |step| step.previous.as_deref())
    }
}

impl<Id: NodeId, Data> Path<Id, Data> {
    /// A new path continuing through `link`.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidEndpoint`] if `link` does not touch the current end.
    pub fn append(&self, link: impl Into<Rc<Link<Id, Data>>>) -> Result<Self, GraphError> {
        let link = link.into();
        let reached = Rc::clone(link.edge_from(self.end())?);
        Ok(self.then(link, reached))
    }

    /// Whether the walk visits `node`, the start included.
    pub fn contains_node(&self, node: &Node<Id, Data>) -> bool {
        self.contains_id(node.id())
    }

    pub(crate) fn contains_id(&self, id: &Id) -> bool {
        self.start.id() == id || self.steps().any(|step| step.reached.id() == id)
    }

    /// Whether the walk traverses `link`, in either direction.
    pub fn contains_link(&self, link: &Link<Id, Data>) -> bool {
        self.steps().any(|step| step.link.as_ref() == link)
    }
}

impl<Id, Data> Clone for Path<Id, Data> {
    fn clone(&self) -> Self {
        Self {
            start: Rc::clone(&self.start),
            last: self.last.clone(),
            weight: self.weight,
            len: self.len,
        }
    }
}

impl<Id: fmt::Debug, Data> fmt::Debug for Path<Id, Data> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path")
            .field("weight", &self.weight)
            .field("nodes", &self.nodes().iter().map(|n| n.id()).collect::<Vec<_>>())
            .finish()
    }
}

impl<Id: fmt::Display, Data> fmt::Display for Path<Id, Data> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.weight, self.start)?;
        let mut steps: Vec<_> = self.steps().collect();
        steps.reverse();
        for step in steps {
            write!(f, " --[{}]--> {}", step.link.weight(), step.reached)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> (Vec<Rc<Node<u8, ()>>>, Vec<Rc<Link<u8, ()>>>) {
        let nodes: Vec<_> = (0..4u8)
            .map(|i| Rc::new(Node::with_weight(i, (), i64::from(i) * 10)))
            .collect();
        let links = nodes
            .windows(2)
            .map(|pair| Rc::new(Link::with_weight(Rc::clone(&pair[0]), Rc::clone(&pair[1]), 1)))
            .collect();
        (nodes, links)
    }

    #[test]
    fn test_single_node_path() {
        let (nodes, _) = line();
        let path = Path::at(Rc::clone(&nodes[2]));
        assert!(path.is_empty());
        assert_eq!(path.end().id(), &2);
        assert_eq!(path.weight(), 20);
        assert!(path.contains_node(&nodes[2]));
    }

    #[test]
    fn test_append_accumulates_weight_and_end() {
        let (nodes, links) = line();
        let path = Path::at(Rc::clone(&nodes[0]))
            .append(Rc::clone(&links[0]))
            .and_then(|p| p.append(Rc::clone(&links[1])))
            .unwrap();

        assert_eq!(path.len(), 2);
        assert_eq!(path.end().id(), &2);
        // 0 + (1 + 10) + (1 + 20)
        assert_eq!(path.weight(), 32);
        let ids: Vec<u8> = path.nodes().iter().map(|n| *n.id()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!(path.contains_link(&links[1]));
        assert!(!path.contains_link(&links[2]));
        assert_eq!(path.to_string(), "(32) 0 --[1]--> 1 --[1]--> 2");
    }

    #[test]
    fn test_append_walks_links_backwards() {
        let (nodes, links) = line();
        let path = Path::at(Rc::clone(&nodes[3]))
            .append(Rc::clone(&links[2]))
            .unwrap();
        assert_eq!(path.end().id(), &2);
    }

    #[test]
    fn test_append_rejects_disconnected_link() {
        let (nodes, links) = line();
        let result = Path::at(Rc::clone(&nodes[0])).append(Rc::clone(&links[2]));
        assert!(matches!(result, Err(GraphError::InvalidEndpoint { .. })));
    }

    #[test]
    fn test_branches_share_prefix_without_interference() {
        let (nodes, links) = line();
        let base = Path::at(Rc::clone(&nodes[1]));
        let left = base.append(Rc::clone(&links[0])).unwrap();
        let right = base.append(Rc::clone(&links[1])).unwrap();

        assert_eq!(base.len(), 0);
        assert_eq!(left.end().id(), &0);
        assert_eq!(right.end().id(), &2);
    }
}
