// src/graph/builder.rs
//! Graph construction from edge records.

use super::{Graph, Node, NodeId};
use crate::input::EdgeRecord;

/// Accumulates edges into a [`Graph`], creating nodes on first sight.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `label`, creating the node if needed.
    pub fn ensure_node(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.graph.index.get(label) {
            return id;
        }
        let id = NodeId(self.graph.nodes.len());
        self.graph.nodes.push(Node::new(label));
        self.graph.index.insert(label.to_string(), id);
        id
    }

    /// Adds a directed edge. Duplicates append to the adjacency list again and
    /// overwrite the stored weight.
    pub fn add_edge(&mut self, record: &EdgeRecord) -> &mut Self {
        let from = self.ensure_node(&record.source);
        let to = self.ensure_node(&record.destination);

        if let Some(node) = self.graph.nodes.get_mut(from.0) {
            node.push_neighbor(to);
        }

        if let Some(previous) = self.graph.weights.insert(from, to, record.weight) {
            tracing::debug!(
                source = %record.source,
                destination = %record.destination,
                previous,
                weight = record.weight,
                "duplicate edge, weight overwritten"
            );
        }
        self
    }

    #[must_use]
    pub fn build(self) -> Graph {
        tracing::debug!(
            nodes = self.graph.len(),
            edges = self.graph.weights.len(),
            "graph built"
        );
        self.graph
    }
}
