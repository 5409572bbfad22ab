// src/graph/mod.rs
//! The directed, weighted graph: a node arena plus its weight table.

pub mod builder;
pub mod node;
pub mod weights;

pub use builder::GraphBuilder;
pub use node::{Node, NodeId};
pub use weights::WeightTable;

use crate::error::Result;
use crate::input::{self, EdgeRecord};
use crate::tokenize::DelimiterSet;
use std::collections::HashMap;

/// Owns every node. Adjacency lists and weights refer to nodes by [`NodeId`].
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) index: HashMap<String, NodeId>,
    pub(crate) weights: WeightTable,
}

impl Graph {
    /// Builds a graph from already-parsed records.
    #[must_use]
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a EdgeRecord>,
    {
        let mut builder = GraphBuilder::new();
        for record in records {
            builder.add_edge(record);
        }
        builder.build()
    }

    /// Parses and builds from one record per line.
    ///
    /// # Errors
    /// Returns `MalformedInput` on the first bad line; nothing is built.
    pub fn from_lines<'a, I>(lines: I, delimiters: &DelimiterSet) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let records = input::parse_lines(lines, delimiters)?;
        Ok(Self::from_records(&records))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    /// Returns the node behind an id handed out by this graph.
    #[must_use]
    #[allow(clippy::indexing_slicing)] // NodeIds are only minted by this graph's builder
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[must_use]
    pub fn label(&self, id: NodeId) -> &str {
        self.node(id).label()
    }

    /// Nodes in first-seen order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Outgoing `(neighbour, weight)` pairs. Duplicate adjacency entries all
    /// carry the final weight for that pair.
    pub fn edges(&self, from: NodeId) -> impl Iterator<Item = (NodeId, u64)> + '_ {
        self.node(from)
            .adjacency()
            .iter()
            .filter_map(move |&to| self.weights.get(from, to).map(|w| (to, w)))
    }

    #[must_use]
    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }
}
