use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use super::{Node, NodeId, Weight};
use crate::error::GraphError;

/// An undirected edge between two nodes.
///
/// A link from A to B equals a link from B to A. The weight does not take part in
/// equality, so parallel links of different weights compare equal.
#[derive(Debug)]
pub struct Link<Id, Data> {
    from: Rc<Node<Id, Data>>,
    to: Rc<Node<Id, Data>>,
    weight: Weight,
}

impl<Id, Data> Link<Id, Data> {
    /// Creates a link of weight 1.
    pub fn new(from: impl Into<Rc<Node<Id, Data>>>, to: impl Into<Rc<Node<Id, Data>>>) -> Self {
        Self::with_weight(from, to, 1)
    }

    pub fn with_weight(
        from: impl Into<Rc<Node<Id, Data>>>,
        to: impl Into<Rc<Node<Id, Data>>>,
        weight: Weight,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    pub fn from(&self) -> &Rc<Node<Id, Data>> {
        &self.from
    }

    pub fn to(&self) -> &Rc<Node<Id, Data>> {
        &self.to
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Same weight, endpoints replaced.
    pub(crate) fn rebind<R>(&self, from: Rc<Node<Id, R>>, to: Rc<Node<Id, R>>) -> Link<Id, R> {
        Link {
            from,
            to,
            weight: self.weight,
        }
    }
}

impl<Id: NodeId, Data> Link<Id, Data> {
    /// Whether `node` is one of the two endpoints.
    pub fn contains(&self, node: &Node<Id, Data>) -> bool {
        self.from.id() == node.id() || self.to.id() == node.id()
    }

    /// The endpoint opposite to `node`.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidEndpoint`] if `node` is neither endpoint.
    pub fn edge_from(&self, node: &Node<Id, Data>) -> Result<&Rc<Node<Id, Data>>, GraphError> {
        if self.from.id() == node.id() {
            Ok(&self.to)
        } else if self.to.id() == node.id() {
            Ok(&self.from)
        } else {
            Err(GraphError::InvalidEndpoint {
                node: format!("{:?}", node.id()),
                link: self.describe(),
            })
        }
    }

    /// Where the link leads when entered from `node`; same as [`edge_from`](Self::edge_from).
    pub fn leads_to(&self, node: &Node<Id, Data>) -> Result<&Rc<Node<Id, Data>>, GraphError> {
        self.edge_from(node)
    }

    pub(crate) fn describe(&self) -> String {
        format!(
            "{:?} <-[{}]-> {:?}",
            self.from.id(),
            self.weight,
            self.to.id()
        )
    }
}

impl<Id, Data> Clone for Link<Id, Data> {
    fn clone(&self) -> Self {
        Self {
            from: Rc::clone(&self.from),
            to: Rc::clone(&self.to),
            weight: self.weight,
        }
    }
}

impl<Id: PartialEq, Data> PartialEq for Link<Id, Data> {
    fn eq(&self, other: &Self) -> bool {
        (self.from.id() == other.from.id() && self.to.id() == other.to.id())
            || (self.from.id() == other.to.id() && self.to.id() == other.from.id())
    }
}

impl<Id: Eq, Data> Eq for Link<Id, Data> {}

impl<Id: Hash, Data> Hash for Link<Id, Data> {
    // Order-independent combination so that `hash(A-B) == hash(B-A)`.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let from = id_hash(self.from.id());
        let to = id_hash(self.to.id());
        state.write_u64(from.wrapping_add(to));
    }
}

fn id_hash<Id: Hash>(id: &Id) -> u64 {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    hasher.finish()
}

impl<Id: fmt::Display, Data> fmt::Display for Link<Id, Data> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-[{}]-> {}", self.from, self.weight, self.to)
    }
}
