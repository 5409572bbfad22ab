// src/engine/state.rs
//! Per-run search state, kept apart from the graph.

use super::distance::Distance;
use crate::graph::NodeId;

/// Relaxation state of a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodeState {
    pub distance: Distance,
    pub predecessor: Option<NodeId>,
    pub visited: bool,
}

/// Distances, predecessors and visited flags for one engine run.
///
/// Built fresh by every run, so repeated runs never see each other's state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    source: Option<NodeId>,
    nodes: Vec<NodeState>,
    settled: Vec<NodeId>,
}

impl SearchState {
    pub(crate) fn new(node_count: usize, source: NodeId) -> Self {
        let mut nodes = vec![NodeState::default(); node_count];
        if let Some(slot) = nodes.get_mut(source.index()) {
            slot.distance = Distance::ZERO;
        }
        Self {
            source: Some(source),
            nodes,
            settled: Vec::with_capacity(node_count),
        }
    }

    /// State for an empty graph: no source, no nodes.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn source(&self) -> Option<NodeId> {
        self.source
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// State of `id`; ids outside this run read as untouched.
    #[must_use]
    pub fn get(&self, id: NodeId) -> NodeState {
        self.nodes.get(id.index()).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn distance(&self, id: NodeId) -> Distance {
        self.get(id).distance
    }

    #[must_use]
    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).predecessor
    }

    #[must_use]
    pub fn is_visited(&self, id: NodeId) -> bool {
        self.get(id).visited
    }

    /// Nodes in the order the engine finalized them.
    #[must_use]
    pub fn settled(&self) -> &[NodeId] {
        &self.settled
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NodeState)> {
        self.nodes.iter().enumerate().map(|(i, s)| (NodeId(i), s))
    }

    pub(crate) fn mark_visited(&mut self, id: NodeId) {
        if let Some(slot) = self.nodes.get_mut(id.index()) {
            slot.visited = true;
            self.settled.push(id);
        }
    }

    /// Applies the relaxation rule for `from -> to`. Returns the new distance
    /// when it strictly improves; visited targets are never touched.
    pub(crate) fn relax(&mut self, from: NodeId, to: NodeId, weight: u64) -> Option<Distance> {
        let candidate = self.distance(from).saturating_add(weight);
        let slot = self.nodes.get_mut(to.index())?;
        if slot.visited || candidate >= slot.distance {
            return None;
        }
        slot.distance = candidate;
        slot.predecessor = Some(from);
        Some(candidate)
    }
}
