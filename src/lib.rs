//! Single-source shortest paths over small directed, weighted graphs.
//!
//! Edge records are parsed into a [`graph::Graph`], searched with Dijkstra's
//! algorithm by [`engine::run`], and reported as a [`report::Route`] or a full
//! state dump.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod exit;
pub mod graph;
pub mod input;
pub mod report;
pub mod solver;
pub mod tokenize;

pub use engine::{Distance, SearchState, Strategy};
pub use error::{Result, ShortpathError};
pub use graph::{Graph, NodeId};
pub use report::Route;
