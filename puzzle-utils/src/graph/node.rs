use std::fmt;
use std::hash::{Hash, Hasher};

use super::Weight;

/// A graph vertex.
///
/// Equality and hashing only look at the id: two nodes with the same id are the
/// same vertex whatever their payload or weight.
#[derive(Debug, Clone)]
pub struct Node<Id, Data> {
    id: Id,
    data: Data,
    weight: Weight,
}

impl<Id, Data> Node<Id, Data> {
    /// Creates a node with weight 0.
    pub fn new(id: Id, data: Data) -> Self {
        Self::with_weight(id, data, 0)
    }

    /// Creates a node whose weight is added to every path visiting it.
    pub fn with_weight(id: Id, data: Data, weight: Weight) -> Self {
        Self { id, data, weight }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn data(&self) -> &Data {
        &self.data
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Splits the node back into its parts.
    pub fn into_parts(self) -> (Id, Data, Weight) {
        (self.id, self.data, self.weight)
    }

    /// Same id and weight, new payload.
    pub fn map_data<R>(&self, f: impl FnOnce(&Data) -> R) -> Node<Id, R>
    where
        Id: Clone,
    {
        Node::with_weight(self.id.clone(), f(&self.data), self.weight)
    }
}

impl<Id: PartialEq, Data> PartialEq for Node<Id, Data> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<Id: Eq, Data> Eq for Node<Id, Data> {}

impl<Id: Hash, Data> Hash for Node<Id, Data> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<Id: fmt::Display, Data> fmt::Display for Node<Id, Data> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
