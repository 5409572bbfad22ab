// src/report/mod.rs
//! Path reconstruction and text rendering of search results.

pub mod console;

use crate::engine::{Distance, SearchState, DEFAULT_UNREACHABLE};
use crate::error::{Result, ShortpathError};
use crate::graph::{Graph, NodeId};
use serde::Serialize;
use std::fmt;
use std::fmt::Write as _;

pub const DEFAULT_SEPARATOR: &str = "->";

/// A reconstructed path and its total distance.
///
/// An unreached destination still yields `[destination]`; check
/// [`Route::is_reachable`] rather than the path length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub nodes: Vec<String>,
    pub distance: Distance,
}

impl Route {
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }

    /// `a->b->c = 7`, with the given separator and unreachable sentinel.
    #[must_use]
    pub fn render(&self, options: &RenderOptions) -> String {
        format!(
            "{} = {}",
            self.nodes.join(&options.separator),
            self.distance.render(&options.unreachable)
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderOptions::default()))
    }
}

/// Text choices shared by every renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub separator: String,
    pub unreachable: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            unreachable: DEFAULT_UNREACHABLE.to_string(),
        }
    }
}

/// Walks predecessor links from `destination` back to the search source.
///
/// # Errors
/// Returns `UnknownNode` if `destination` is not in the graph.
pub fn reconstruct(graph: &Graph, state: &SearchState, destination: &str) -> Result<Route> {
    let target = graph
        .node_id(destination)
        .ok_or_else(|| ShortpathError::UnknownNode(destination.to_string()))?;

    let mut chain: Vec<NodeId> = vec![target];
    let mut current = target;
    // Predecessors form a tree, but never walk further than the graph is large.
    while let Some(pred) = state.predecessor(current) {
        if chain.len() > graph.len() {
            tracing::warn!(destination, "predecessor chain longer than graph, truncating");
            break;
        }
        chain.push(pred);
        current = pred;
    }
    chain.reverse();

    Ok(Route {
        nodes: chain.into_iter().map(|id| graph.label(id).to_string()).collect(),
        distance: state.distance(target),
    })
}

/// One line of the state dump, without the surrounding braces.
#[must_use]
pub fn render_node_line(
    graph: &Graph,
    state: &SearchState,
    id: NodeId,
    options: &RenderOptions,
) -> String {
    let node = graph.node(id);
    let s = state.get(id);
    let pred = s.predecessor.map_or("none", |p| graph.label(p));
    let adjacency: Vec<&str> = node.adjacency().iter().map(|&n| graph.label(n)).collect();

    format!(
        "(pred:{pred}, dist:{}, visited:{}) - ({})->[{}]",
        s.distance.render(&options.unreachable),
        s.visited,
        node.label(),
        adjacency.join(", ")
    )
}

/// Every node's label, adjacency and relaxation state, in insertion order.
#[must_use]
pub fn render_state(graph: &Graph, state: &SearchState, options: &RenderOptions) -> String {
    let mut out = String::from("{\n");
    for (id, _) in graph.nodes() {
        let _ = writeln!(out, "  {}", render_node_line(graph, state, id, options));
    }
    out.push('}');
    out
}

#[derive(Serialize)]
struct NodeDump<'a> {
    label: &'a str,
    adjacency: Vec<&'a str>,
    predecessor: Option<&'a str>,
    distance: Distance,
    visited: bool,
}

#[derive(Serialize)]
struct SolutionDump<'a> {
    state: Vec<NodeDump<'a>>,
    route: &'a Route,
}

fn node_dumps<'a>(graph: &'a Graph, state: &SearchState) -> Vec<NodeDump<'a>> {
    graph
        .nodes()
        .map(|(id, node)| {
            let s = state.get(id);
            NodeDump {
                label: node.label(),
                adjacency: node.adjacency().iter().map(|&n| graph.label(n)).collect(),
                predecessor: s.predecessor.map(|p| graph.label(p)),
                distance: s.distance,
                visited: s.visited,
            }
        })
        .collect()
}

/// JSON form of [`render_state`]. Unreachable distances are `null`.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render_state_json(graph: &Graph, state: &SearchState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&node_dumps(graph, state))
}

/// `{"state": [...], "route": {"nodes": [...], "distance": ...}}`.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render_solution_json(
    graph: &Graph,
    state: &SearchState,
    route: &Route,
) -> serde_json::Result<String> {
    let dump = SolutionDump {
        state: node_dumps(graph, state),
        route,
    };
    serde_json::to_string_pretty(&dump)
}
