// src/solver.rs
//! Orchestrates graph construction, search and path reconstruction.

use crate::engine::{self, SearchState, Strategy};
use crate::error::{Result, ShortpathError};
use crate::graph::Graph;
use crate::input::{EdgeRecord, Query};
use crate::report::{self, Route};

/// Everything a single query produces.
#[derive(Debug, Clone)]
pub struct Solution {
    pub graph: Graph,
    pub state: SearchState,
    pub route: Route,
}

/// Builds the graph from `edges` and solves `source -> destination`.
///
/// Both endpoints are checked before the search starts.
///
/// # Errors
/// Returns `UnknownNode` if either endpoint is missing from the graph.
pub fn solve(
    edges: &[EdgeRecord],
    source: &str,
    destination: &str,
    strategy: Strategy,
) -> Result<Solution> {
    let graph = Graph::from_records(edges);
    for label in [source, destination] {
        if graph.node_id(label).is_none() {
            return Err(ShortpathError::UnknownNode(label.to_string()));
        }
    }

    let state = engine::run(&graph, source, strategy)?;
    let route = report::reconstruct(&graph, &state, destination)?;
    if !route.is_reachable() {
        tracing::info!(source, destination, "destination unreachable");
    }

    Ok(Solution { graph, state, route })
}

/// Solves a parsed query stream.
///
/// # Errors
/// See [`solve`].
pub fn solve_query(query: &Query, strategy: Strategy) -> Result<Solution> {
    solve(&query.edges, &query.source, &query.destination, strategy)
}
