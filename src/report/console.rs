// src/report/console.rs
//! Colored terminal output for routes and state dumps.

use super::{render_node_line, RenderOptions, Route};
use crate::engine::SearchState;
use crate::graph::Graph;
use colored::Colorize;

/// Prints the state dump, dimming nodes the search never reached.
pub fn print_state(graph: &Graph, state: &SearchState, options: &RenderOptions) {
    println!("{{");
    for (id, _) in graph.nodes() {
        let line = render_node_line(graph, state, id, options);
        if state.distance(id).is_finite() {
            println!("  {line}");
        } else {
            println!("  {}", line.dimmed());
        }
    }
    println!("}}");
}

pub fn print_route(route: &Route, options: &RenderOptions) {
    let line = route.render(options);
    if route.is_reachable() {
        println!("{}", line.green());
    } else {
        println!("{}", line.yellow());
    }
}
