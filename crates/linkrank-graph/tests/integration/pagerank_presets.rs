//! PageRank over the preset graphs and hand-written fixtures.

use linkrank_graph::{PageRankConfig, Preset, pagerank};

use crate::common::{DANGLING_SITE, EPS, graph_from_json, order, total};

#[test]
fn test_simple_preset_final_scores() {
    let graph = Preset::Simple.graph().unwrap();
    let config = PageRankConfig::default().with_max_iterations(100);
    let result = pagerank(&graph, &config).unwrap();

    assert!(result.converged);
    assert!((total(&result.scores) - 1.0).abs() < EPS);

    // Fixed point of the damped walk: A ≈ 0.3532, B ≈ 0.2902, C ≈ 0.3567.
    assert!((result.scores["A"] - 0.3532).abs() < 1e-3);
    assert!((result.scores["B"] - 0.2902).abs() < 1e-3);
    assert!((result.scores["C"] - 0.3567).abs() < 1e-3);
    assert!(result.scores["A"] > result.scores["B"]);
}

#[test]
fn test_simple_preset_default_run_exhausts_iterations() {
    let graph = Preset::Simple.graph().unwrap();
    let result = pagerank(&graph, &PageRankConfig::default()).unwrap();

    assert!(!result.converged);
    assert_eq!(result.deltas.len(), 20);
    assert_eq!(result.history.len(), 21);
    assert!((total(&result.scores) - 1.0).abs() < EPS);
    assert!(result.scores["A"] > result.scores["B"]);
}

#[test]
fn test_medium_preset_ranking() {
    let graph = Preset::Medium.graph().unwrap();
    let config = PageRankConfig::default().with_max_iterations(200);
    let result = pagerank(&graph, &config).unwrap();

    assert!(result.converged);
    assert_eq!(order(&graph, &result.scores), vec!["E", "A", "C", "D", "B"]);
}

#[test]
fn test_complex_preset_ranking() {
    let graph = Preset::Complex.graph().unwrap();
    let config = PageRankConfig::default().with_max_iterations(200);
    let result = pagerank(&graph, &config).unwrap();

    assert!(result.converged);
    assert_eq!(
        order(&graph, &result.scores),
        vec!["G", "A", "C", "E", "F", "D", "B"]
    );
}

#[test]
fn test_history_series_track_every_iteration() {
    let graph = Preset::Medium.graph().unwrap();
    let result = pagerank(&graph, &PageRankConfig::default()).unwrap();

    for node in graph.node_ids() {
        let series = result.history.series(node).unwrap();
        assert_eq!(series.len(), result.iterations + 1);
        assert!((series[0] - 0.2).abs() < EPS);
        assert_eq!(*series.last().unwrap(), result.scores[node]);
    }
}

#[test]
fn test_dangling_page_passes_no_rank_forward() {
    let graph = graph_from_json(DANGLING_SITE);
    let result = pagerank(&graph, &PageRankConfig::default()).unwrap();
    let teleport = 0.15 / 3.0;

    for k in 1..result.history.len() {
        let prev = result.history.get(k - 1).unwrap();
        let curr = result.history.get(k).unwrap();

        // Raw scores before rescaling; "pdf" appears in neither inflow.
        let raw_home = teleport + 0.85 * prev["docs"] * (1.0 / 3.0);
        let raw_docs = teleport + 0.85 * prev["home"];
        assert!((curr["home"] / curr["docs"] - raw_home / raw_docs).abs() < 1e-9);
    }

    let pdf = result.history.series("pdf").unwrap();
    assert!((pdf[2] - pdf[1]).abs() > 1e-3, "dangling page still gains rank");
}

#[test]
fn test_repeated_runs_are_identical() {
    for preset in Preset::all() {
        let graph = preset.graph().unwrap();
        let config = PageRankConfig::default();
        let a = pagerank(&graph, &config).unwrap();
        let b = pagerank(&graph, &config).unwrap();
        assert_eq!(a, b, "{preset}");
    }
}
