// src/graph/weights.rs
use super::node::NodeId;
use std::collections::HashMap;

/// Edge weights keyed by `(source, destination)`. Last write wins.
#[derive(Debug, Clone, Default)]
pub struct WeightTable {
    weights: HashMap<(NodeId, NodeId), u64>,
}

impl WeightTable {
    /// Stores the weight, returning the one it replaced.
    pub fn insert(&mut self, from: NodeId, to: NodeId, weight: u64) -> Option<u64> {
        self.weights.insert((from, to), weight)
    }

    #[must_use]
    pub fn get(&self, from: NodeId, to: NodeId) -> Option<u64> {
        self.weights.get(&(from, to)).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
