// src/graph/node.rs
/// Stable index of a node inside its graph's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A labelled vertex and its outgoing neighbours in edge insertion order.
#[derive(Debug, Clone)]
pub struct Node {
    label: String,
    adjacency: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            adjacency: Vec::new(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Outgoing neighbours. May contain duplicates.
    #[must_use]
    pub fn adjacency(&self) -> &[NodeId] {
        &self.adjacency
    }

    pub(crate) fn push_neighbor(&mut self, to: NodeId) {
        self.adjacency.push(to);
    }
}
