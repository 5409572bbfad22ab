// tests/unit_engine.rs
//! Tests for the Dijkstra engine under both selection strategies.

use shortpath_core::engine::{self, Distance, Strategy};
use shortpath_core::graph::Graph;
use shortpath_core::input::{self, EdgeRecord};
use shortpath_core::tokenize::DelimiterSet;
use shortpath_core::ShortpathError;

const STRATEGIES: [Strategy; 2] = [Strategy::Linear, Strategy::Queue];

fn graph_of(lines: &[&str]) -> Graph {
    Graph::from_lines(lines.iter().copied(), &DelimiterSet::whitespace()).unwrap()
}

fn dist(graph: &Graph, state: &engine::SearchState, label: &str) -> Distance {
    state.distance(graph.node_id(label).unwrap())
}

fn pred<'a>(graph: &'a Graph, state: &engine::SearchState, label: &str) -> Option<&'a str> {
    state
        .predecessor(graph.node_id(label).unwrap())
        .map(|p| graph.label(p))
}

#[test]
fn test_builtin_graph_distances() {
    let graph = Graph::from_records(&input::builtin_records().unwrap());
    for strategy in STRATEGIES {
        let state = engine::run(&graph, "node0", strategy).unwrap();
        let expected = [
            ("node0", 0, None),
            ("node1", 8, Some("node2")),
            ("node2", 5, Some("node0")),
            ("node3", 9, Some("node1")),
            ("node4", 7, Some("node2")),
            ("node5", 13, Some("node4")),
        ];
        for (label, d, p) in expected {
            assert_eq!(dist(&graph, &state, label), Distance::Finite(d), "{strategy:?} {label}");
            assert_eq!(pred(&graph, &state, label), p, "{strategy:?} {label}");
        }
        assert!(state.iter().all(|(_, s)| s.visited));
    }
}

#[test]
fn test_single_edge() {
    let graph = graph_of(&["a 5 b"]);
    for strategy in STRATEGIES {
        let state = engine::run(&graph, "a", strategy).unwrap();
        assert_eq!(dist(&graph, &state, "b"), Distance::Finite(5));
        assert_eq!(pred(&graph, &state, "b"), Some("a"));
    }
}

#[test]
fn test_unreachable_node_untouched() {
    // `c` only has an outgoing edge, so nothing reaches it from `a`.
    let graph = graph_of(&["a 5 b", "c 1 b"]);
    for strategy in STRATEGIES {
        let state = engine::run(&graph, "a", strategy).unwrap();
        let c = graph.node_id("c").unwrap();
        assert_eq!(state.distance(c), Distance::Infinite);
        assert_eq!(state.predecessor(c), None);
        assert!(!state.is_visited(c));
        assert_eq!(state.settled().len(), 2);
    }
}

#[test]
fn test_duplicate_edge_uses_final_weight() {
    let graph = graph_of(&["a 10 b", "a 3 b"]);
    for strategy in STRATEGIES {
        let state = engine::run(&graph, "a", strategy).unwrap();
        assert_eq!(dist(&graph, &state, "b"), Distance::Finite(3));
    }
}

#[test]
fn test_ties_keep_first_predecessor() {
    let graph = graph_of(&["s 1 a", "s 1 b", "a 1 c", "b 1 c"]);
    for strategy in STRATEGIES {
        let state = engine::run(&graph, "s", strategy).unwrap();
        assert_eq!(dist(&graph, &state, "c"), Distance::Finite(2));
        assert_eq!(pred(&graph, &state, "c"), Some("a"), "{strategy:?}");
    }
}

#[test]
fn test_stale_queue_entries_are_ignored() {
    // `t` is improved four times before it is settled.
    let graph = graph_of(&[
        "s 100 t", "s 1 a", "a 50 t", "a 1 b", "b 10 t", "b 1 c", "c 2 t",
    ]);
    let queued = engine::run(&graph, "s", Strategy::Queue).unwrap();
    let linear = engine::run(&graph, "s", Strategy::Linear).unwrap();

    assert_eq!(dist(&graph, &queued, "t"), Distance::Finite(5));
    assert_eq!(pred(&graph, &queued, "t"), Some("c"));
    assert_eq!(queued, linear);

    let mut settled = queued.settled().to_vec();
    settled.sort();
    settled.dedup();
    assert_eq!(settled.len(), queued.settled().len(), "no node settles twice");
}

#[test]
fn test_zero_weight_edges() {
    let graph = graph_of(&["a 0 b", "b 0 c", "a 1 c"]);
    for strategy in STRATEGIES {
        let state = engine::run(&graph, "a", strategy).unwrap();
        assert_eq!(dist(&graph, &state, "c"), Distance::Finite(0));
        assert_eq!(pred(&graph, &state, "c"), Some("b"));
    }
}

#[test]
fn test_self_loop_ignored_by_search() {
    let graph = graph_of(&["a 1 a", "a 2 b"]);
    let state = engine::run(&graph, "a", Strategy::Queue).unwrap();
    assert_eq!(dist(&graph, &state, "a"), Distance::ZERO);
    assert_eq!(pred(&graph, &state, "a"), None);
}

#[test]
fn test_unknown_source() {
    let graph = graph_of(&["a 1 b"]);
    let err = engine::run(&graph, "zzz", Strategy::Linear).unwrap_err();
    assert!(matches!(err, ShortpathError::UnknownNode(ref n) if n == "zzz"));
}

#[test]
fn test_empty_graph_returns_empty_state() {
    let graph = Graph::from_records(&Vec::<EdgeRecord>::new());
    for strategy in STRATEGIES {
        let state = engine::run(&graph, "anything", strategy).unwrap();
        assert!(state.is_empty());
        assert_eq!(state.source(), None);
    }
}

#[test]
fn test_runs_are_independent() {
    let graph = Graph::from_records(&input::builtin_records().unwrap());
    let first = engine::run(&graph, "node0", Strategy::Linear).unwrap();
    let other = engine::run(&graph, "node2", Strategy::Linear).unwrap();
    let again = engine::run(&graph, "node0", Strategy::Linear).unwrap();
    assert_eq!(first, again);
    assert_ne!(first, other);
}
