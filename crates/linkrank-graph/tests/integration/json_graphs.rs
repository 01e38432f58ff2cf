//! Graphs loaded from JSON definitions, including invalid ones.

use linkrank_core::Error;
use linkrank_graph::{GraphBuilder, HitsConfig, PageRankConfig, hits, load_graph, pagerank, ranked};

use crate::common::{DANGLING_SITE, EPS, graph_from_json, total};

#[test]
fn test_unknown_edge_target_is_rejected_before_ranking() {
    let json = r#"{
        "nodes": [{"id": "A", "name": "A"}, {"id": "B", "name": "B"}],
        "edges": [{"source": "A", "target": "B"}, {"source": "B", "target": "Z"}]
    }"#;
    let err = GraphBuilder::from_json(json).unwrap().build().unwrap_err();

    match err {
        Error::InvalidEdge { from, to, .. } => {
            assert_eq!(from, "B");
            assert_eq!(to, "Z");
        }
        other => panic!("expected InvalidEdge, got {other:?}"),
    }
}

#[test]
fn test_empty_graph_is_rejected_by_both_algorithms() {
    let graph = graph_from_json(r#"{"nodes": [], "edges": []}"#);

    assert!(matches!(
        pagerank(&graph, &PageRankConfig::default()),
        Err(Error::EmptyGraph)
    ));
    assert!(matches!(
        hits(&graph, &HitsConfig::default()),
        Err(Error::EmptyGraph)
    ));
}

#[test]
fn test_self_loop_only_graph_converges_to_one() {
    let graph = graph_from_json(
        r#"{"nodes": [{"id": "solo", "name": "Solo"}], "edges": [{"source": "solo", "target": "solo"}]}"#,
    );
    let result = pagerank(&graph, &PageRankConfig::default()).unwrap();

    assert!(result.converged);
    assert!((result.scores["solo"] - 1.0).abs() < EPS);
}

#[test]
fn test_file_round_trip_through_ranking() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("site.json");
    std::fs::write(&path, DANGLING_SITE).unwrap();

    let graph = load_graph(&path).unwrap();
    let result = pagerank(&graph, &PageRankConfig::default()).unwrap();
    let rows = ranked(&graph, &result.scores);

    assert_eq!(rows.len(), 3);
    assert!((total(&result.scores) - 1.0).abs() < EPS);
    assert!(rows.windows(2).all(|w| w[0].score >= w[1].score));
    assert_eq!(rows.iter().find(|r| r.id == "pdf").unwrap().name, "Manual (PDF)");
}

#[test]
fn test_out_weight_overflow_is_rejected_at_build() {
    let json = r#"{
        "nodes": [{"id": "hub", "name": "Hub"}, {"id": "a", "name": "A"}, {"id": "b", "name": "B"}],
        "edges": [
            {"source": "hub", "target": "a", "weight": 1e308},
            {"source": "hub", "target": "b", "weight": 1e308}
        ]
    }"#;
    let err = GraphBuilder::from_json(json).unwrap().build().unwrap_err();

    assert!(matches!(err, Error::InvalidEdge { ref from, .. } if from == "hub"));
    assert!(err.is_validation());
}
