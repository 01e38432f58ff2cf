//! HITS hub and authority scores.
//!
//! Runs a fixed number of rounds with no convergence check. Each round first
//! recomputes authorities from the current hubs, then hubs from the new
//! authorities, L2-normalizing each vector. Edge weights are ignored here,
//! unlike [`pagerank`](crate::pagerank::pagerank); parallel edges still count
//! once each.

use crate::adjacency::Adjacency;
use crate::{GraphData, RankState};
use linkrank_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Parameters for [`hits`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitsConfig {
    /// Exact number of rounds to run; at least 1.
    pub iterations: usize,
}

impl Default for HitsConfig {
    fn default() -> Self {
        Self { iterations: 10 }
    }
}

impl HitsConfig {
    /// Sets the number of rounds.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Checks every parameter against its valid range.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::invalid_parameter("iterations", "must be at least 1"));
        }
        Ok(())
    }
}

/// Output of [`hits`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HitsResult {
    /// Hub score per node.
    pub hub_scores: RankState,
    /// Authority score per node.
    pub authority_scores: RankState,
    /// Number of rounds run.
    pub iterations: usize,
}

/// Computes HITS hub and authority scores over `graph`.
pub fn hits(graph: &GraphData, config: &HitsConfig) -> Result<HitsResult> {
    if graph.is_empty() {
        return Err(Error::EmptyGraph);
    }
    config.validate()?;

    let n = graph.node_count();
    let adjacency = Adjacency::new(graph);

    log::debug!(
        "HITS over {n} nodes / {} edges ({} iterations)",
        graph.edge_count(),
        config.iterations
    );

    let mut hubs = vec![1.0; n];
    let mut authorities = vec![1.0; n];

    for _ in 0..config.iterations {
        let raw_authorities: Vec<f64> = adjacency
            .incoming
            .iter()
            .map(|sources| sources.iter().map(|&(u, _)| hubs[u]).sum())
            .collect();
        authorities = l2_normalized(raw_authorities);

        let raw_hubs: Vec<f64> = adjacency
            .outgoing
            .iter()
            .map(|targets| targets.iter().map(|&w| authorities[w]).sum())
            .collect();
        hubs = l2_normalized(raw_hubs);
    }

    Ok(HitsResult {
        hub_scores: graph.rank_state(&hubs),
        authority_scores: graph.rank_state(&authorities),
        iterations: config.iterations,
    })
}

/// Scales `values` to unit L2 norm. An all-zero vector stays all zeros.
fn l2_normalized(mut values: Vec<f64>) -> Vec<f64> {
    let norm = values.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm == 0.0 {
        values.fill(0.0);
        return values;
    }
    for value in &mut values {
        *value /= norm;
    }
    values
}

// ============================================================================
// Tests
// ============================================================================
