// src/engine/linear.rs
use super::{settle, Distance, SearchState};
use crate::graph::{Graph, NodeId};

pub(super) fn search(graph: &Graph, state: &mut SearchState) {
    while let Some(u) = closest_unvisited(state) {
        settle(graph, state, u, |_, _| {});
    }
}

/// Unvisited node with the smallest finite distance. `None` once the frontier
/// holds only unreachable nodes.
fn closest_unvisited(state: &SearchState) -> Option<NodeId> {
    let mut best: Option<(NodeId, Distance)> = None;
    for (id, node) in state.iter() {
        if node.visited || !node.distance.is_finite() {
            continue;
        }
        if best.map_or(true, |(_, d)| node.distance < d) {
            best = Some((id, node.distance));
        }
    }
    best.map(|(id, _)| id)
}
