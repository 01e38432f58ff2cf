//! Switching graphs between ranking runs.

use linkrank_graph::{GraphSource, GraphStore, PageRankConfig, Preset, pagerank};

use crate::common::DANGLING_SITE;

#[test]
fn test_results_follow_the_selected_graph() {
    let mut store = GraphStore::from_preset(Preset::Simple).unwrap();
    let config = PageRankConfig::default();

    let simple = pagerank(&store.current(), &config).unwrap();
    assert_eq!(simple.scores.len(), 3);

    store.select_preset(Preset::Complex).unwrap();
    let complex = pagerank(&store.current(), &config).unwrap();
    assert_eq!(complex.scores.len(), 7);

    // The earlier result is a value of its own and is untouched.
    assert_eq!(simple.scores.len(), 3);
}

#[test]
fn test_snapshot_survives_reload() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("site.json");
    std::fs::write(&path, DANGLING_SITE).unwrap();

    let mut store = GraphStore::from_preset(Preset::Medium).unwrap();
    let snapshot = store.current();
    store.load_file(&path).unwrap();

    assert_eq!(snapshot.node_count(), 5);
    assert_eq!(store.current().node_count(), 3);
    assert!(matches!(store.source(), GraphSource::File(_)));
}
