//! Text and JSON rendering of ranking results.
//!
//! Everything here returns strings; the command layer decides where they go.

use linkrank_core::Result;
use linkrank_graph::{GraphData, HitsResult, PageRankResult, Preset, RankedNode, ranked};
use serde::Serialize;

/// Pretty-printed JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Convergence summary line for a PageRank run.
pub fn convergence_summary(result: &PageRankResult) -> String {
    let delta = result.final_delta().unwrap_or(0.0);
    if result.converged {
        format!(
            "Converged after {} iterations (final change {delta:.6})",
            result.iterations
        )
    } else {
        format!(
            "Did not converge within {} iterations (final change {delta:.6})",
            result.iterations
        )
    }
}

/// Ranking table with each score's share of the total as a percentage.
pub fn pagerank_table(graph: &GraphData, result: &PageRankResult) -> String {
    let rows = ranked(graph, &result.scores);
    let name_width = name_width(&rows);

    let mut lines = vec![format!(
        "{:>4}  {:<name_width$}  {:>8}  {:>7}",
        "Rank", "Page", "Score", "Share"
    )];
    lines.extend(rows.iter().map(|row| {
        format!(
            "{:>4}  {:<name_width$}  {:>8.6}  {:>6.2}%",
            row.rank,
            row.name,
            row.score,
            row.score * 100.0
        )
    }));
    lines.join("\n")
}

/// One row per iteration, one column per node in load order.
pub fn history_table(graph: &GraphData, result: &PageRankResult) -> String {
    let ids: Vec<&str> = graph.node_ids().collect();
    let width = ids.iter().map(|id| id.len()).max().unwrap_or(0).max(8);

    let mut header = format!("{:>4}", "Iter");
    for id in &ids {
        header.push_str(&format!("  {id:>width$}"));
    }

    let mut lines = vec![header];
    for (i, state) in result.history.iter().enumerate() {
        let mut line = format!("{i:>4}");
        for id in &ids {
            let score = state.get(*id).copied().unwrap_or(0.0);
            line.push_str(&format!("  {score:>width$.6}"));
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Nodes ordered by authority, with hub scores alongside.
pub fn hits_table(graph: &GraphData, result: &HitsResult) -> String {
    let rows = ranked(graph, &result.authority_scores);
    let name_width = name_width(&rows);

    let mut lines = vec![format!(
        "{:>4}  {:<name_width$}  {:>9}  {:>8}",
        "Rank", "Page", "Authority", "Hub"
    )];
    lines.extend(rows.iter().map(|row| {
        let hub = result.hub_scores.get(&row.id).copied().unwrap_or(0.0);
        format!(
            "{:>4}  {:<name_width$}  {:>9.6}  {:>8.6}",
            row.rank, row.name, row.score, hub
        )
    }));
    lines.join("\n")
}

/// Built-in graphs with their sizes.
pub fn presets_table() -> Result<String> {
    let mut lines = Vec::new();
    for preset in Preset::all() {
        let graph = preset.graph()?;
        lines.push(format!(
            "{:<8}  {} nodes  {:>2} edges",
            preset.name(),
            graph.node_count(),
            graph.edge_count()
        ));
    }
    Ok(lines.join("\n"))
}

fn name_width(rows: &[RankedNode]) -> usize {
    rows.iter()
        .map(|row| row.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Page".len())
}
