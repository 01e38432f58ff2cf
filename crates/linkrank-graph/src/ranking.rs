//! Ranked views of score maps.

use crate::{GraphData, RankState};
use serde::{Deserialize, Serialize};

/// One row of a ranking table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedNode {
    /// 1-based position.
    pub rank: usize,
    /// Node ID.
    pub id: String,
    /// Node display name.
    pub name: String,
    /// The node's score.
    pub score: f64,
}

/// Orders the graph's nodes by score, highest first.
///
/// Ties keep the graph's load order. Nodes missing from `scores` are skipped.
pub fn ranked(graph: &GraphData, scores: &RankState) -> Vec<RankedNode> {
    let mut rows: Vec<(&str, &str, f64)> = graph
        .iter_nodes()
        .filter_map(|node| {
            scores
                .get(&node.id)
                .map(|&score| (node.id.as_str(), node.name.as_str(), score))
        })
        .collect();

    rows.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));

    rows.into_iter()
        .enumerate()
        .map(|(i, (id, name, score))| RankedNode {
            rank: i + 1,
            id: id.to_string(),
            name: name.to_string(),
            score,
        })
        .collect()
}

/// The highest-scoring node, if any.
pub fn top(graph: &GraphData, scores: &RankState) -> Option<RankedNode> {
    ranked(graph, scores).into_iter().next()
}
