// src/engine/mod.rs
//! Dijkstra's algorithm over a built [`Graph`].
//!
//! Both strategies settle nodes in the same order (smallest distance first,
//! earliest-inserted node on ties), so they agree on every distance and
//! predecessor.

pub mod distance;
mod linear;
mod queue;
pub mod state;

pub use distance::{Distance, DEFAULT_UNREACHABLE};
pub use state::{NodeState, SearchState};

use crate::error::{Result, ShortpathError};
use crate::graph::{Graph, NodeId};
use serde::Deserialize;

/// How the next node to settle is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Scan every unvisited node for the minimum. O(V^2).
    #[default]
    #[serde(alias = "linear-scan")]
    Linear,
    /// Binary min-heap with lazily skipped stale entries.
    #[serde(alias = "priority-queue")]
    Queue,
}

/// Runs a single-source search from `source`.
///
/// An empty graph yields an empty state without looking up `source`.
///
/// # Errors
/// Returns `UnknownNode` if `source` is not in a non-empty graph.
pub fn run(graph: &Graph, source: &str, strategy: Strategy) -> Result<SearchState> {
    if graph.is_empty() {
        return Ok(SearchState::empty());
    }

    let source_id = graph
        .node_id(source)
        .ok_or_else(|| ShortpathError::UnknownNode(source.to_string()))?;

    let mut state = SearchState::new(graph.len(), source_id);
    match strategy {
        Strategy::Linear => linear::search(graph, &mut state),
        Strategy::Queue => queue::search(graph, &mut state, source_id),
    }

    tracing::debug!(
        source,
        ?strategy,
        settled = state.settled().len(),
        nodes = graph.len(),
        "search finished"
    );
    Ok(state)
}

/// Finalizes `u` and relaxes its outgoing edges, reporting each improvement.
fn settle<F>(graph: &Graph, state: &mut SearchState, u: NodeId, mut on_improve: F)
where
    F: FnMut(NodeId, Distance),
{
    state.mark_visited(u);
    tracing::debug!(node = graph.label(u), distance = %state.distance(u), "settled");

    for (v, weight) in graph.edges(u) {
        if let Some(improved) = state.relax(u, v, weight) {
            tracing::trace!(
                from = graph.label(u),
                to = graph.label(v),
                distance = %improved,
                "relaxed"
            );
            on_improve(v, improved);
        }
    }
}
