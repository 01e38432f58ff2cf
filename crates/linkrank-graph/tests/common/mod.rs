//! Shared fixtures for linkrank-graph integration tests.

use linkrank_graph::{GraphData, GraphSpec, RankState};

/// Tolerance for floating-point comparisons.
pub const EPS: f64 = 1e-9;

/// Builds a graph from a JSON definition, panicking on invalid input.
pub fn graph_from_json(json: &str) -> GraphData {
    let spec = GraphSpec::from_json(json).expect("fixture JSON should parse");
    linkrank_graph::GraphBuilder::from_spec(spec)
        .build()
        .expect("fixture graph should be valid")
        .0
}

/// Sum of all scores.
pub fn total(state: &RankState) -> f64 {
    state.values().sum()
}

/// Sum of squared scores.
pub fn sum_of_squares(state: &RankState) -> f64 {
    state.values().map(|v| v * v).sum()
}

/// Node IDs ordered by descending score.
pub fn order(graph: &GraphData, state: &RankState) -> Vec<String> {
    linkrank_graph::ranked(graph, state)
        .into_iter()
        .map(|row| row.id)
        .collect()
}

/// A small site with one page nothing links out of.
pub const DANGLING_SITE: &str = r#"{
    "nodes": [
        {"id": "home", "name": "Home"},
        {"id": "docs", "name": "Docs"},
        {"id": "pdf", "name": "Manual (PDF)"}
    ],
    "edges": [
        {"source": "home", "target": "docs"},
        {"source": "docs", "target": "home"},
        {"source": "docs", "target": "pdf", "weight": 2.0}
    ]
}"#;
