// src/engine/queue.rs
use super::{settle, Distance, SearchState};
use crate::graph::{Graph, NodeId};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

pub(super) fn search(graph: &Graph, state: &mut SearchState, source: NodeId) {
    let mut heap: BinaryHeap<Reverse<(Distance, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((Distance::ZERO, source)));

    while let Some(Reverse((distance, u))) = heap.pop() {
        // A node can sit in the heap several times; only its freshest entry counts.
        if state.is_visited(u) || distance > state.distance(u) {
            tracing::trace!(node = graph.label(u), %distance, "skipped stale entry");
            continue;
        }
        settle(graph, state, u, |v, d| heap.push(Reverse((d, v))));
    }
}
