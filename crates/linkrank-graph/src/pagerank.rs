//! Weighted PageRank with convergence tracking.
//!
//! Each iteration computes
//!
//! ```text
//! new[v] = (1 - d) / N + d * Σ_{u → v} score[u] * w(u, v) / out_weight(u)
//! ```
//!
//! from the previous iteration's scores only, records the largest per-node
//! change, then rescales `new` to sum to 1.
//!
//! Nodes without outgoing edges use an out-weight of 1.0 and pass no rank
//! forward; their mass is not spread over the graph. The final rescaling
//! absorbs the lost mass instead.

use crate::adjacency::Adjacency;
use crate::history::IterationHistory;
use crate::{GraphData, RankState};
use linkrank_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Parameters for [`pagerank`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRankConfig {
    /// Probability of following a link rather than jumping; in (0, 1).
    pub damping_factor: f64,
    /// Upper bound on iterations; at least 1.
    pub max_iterations: usize,
    /// Stop once the largest per-node change drops below this.
    pub tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            max_iterations: 20,
            tolerance: 1e-4,
        }
    }
}

impl PageRankConfig {
    /// Sets the damping factor.
    pub fn with_damping_factor(mut self, damping_factor: f64) -> Self {
        self.damping_factor = damping_factor;
        self
    }

    /// Sets the iteration limit.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Checks every parameter against its valid range.
    pub fn validate(&self) -> Result<()> {
        if !(self.damping_factor > 0.0 && self.damping_factor < 1.0) {
            return Err(Error::invalid_parameter(
                "damping_factor",
                format!("must be in (0, 1), got {}", self.damping_factor),
            ));
        }
        if self.max_iterations == 0 {
            return Err(Error::invalid_parameter(
                "max_iterations",
                "must be at least 1",
            ));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(Error::invalid_parameter(
                "tolerance",
                format!("must be a positive finite number, got {}", self.tolerance),
            ));
        }
        Ok(())
    }
}

/// Output of [`pagerank`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageRankResult {
    /// Final scores; they sum to 1.
    pub scores: RankState,
    /// Initial state followed by one snapshot per iteration.
    pub history: IterationHistory,
    /// Whether the tolerance was met before the iteration limit.
    pub converged: bool,
    /// Largest per-node change of each iteration, measured before rescaling.
    pub deltas: Vec<f64>,
    /// Number of iterations actually run.
    pub iterations: usize,
}

impl PageRankResult {
    /// The largest per-node change of the final iteration.
    pub fn final_delta(&self) -> Option<f64> {
        self.deltas.last().copied()
    }
}

/// Computes PageRank over `graph`.
///
/// Validates the graph and parameters before iterating: an empty graph
/// yields [`Error::EmptyGraph`] and out-of-range parameters yield
/// [`Error::InvalidParameter`].
pub fn pagerank(graph: &GraphData, config: &PageRankConfig) -> Result<PageRankResult> {
    if graph.is_empty() {
        return Err(Error::EmptyGraph);
    }
    config.validate()?;

    let n = graph.node_count();
    let nf = n as f64;
    let d = config.damping_factor;
    let adjacency = Adjacency::new(graph);

    log::debug!(
        "PageRank over {n} nodes / {} edges, {} dangling (d={d}, max_iterations={}, tolerance={})",
        graph.edge_count(),
        adjacency.dangling().count(),
        config.max_iterations,
        config.tolerance
    );

    let mut scores = vec![1.0 / nf; n];
    let mut history = IterationHistory::with_initial(graph.rank_state(&scores));
    let mut deltas = Vec::new();
    let mut converged = false;

    for iteration in 1..=config.max_iterations {
        let mut next = vec![0.0; n];
        let mut max_diff: f64 = 0.0;

        for (v, incoming) in adjacency.incoming.iter().enumerate() {
            let inflow: f64 = incoming
                .iter()
                .map(|&(u, weight)| scores[u] * weight / adjacency.out_weight[u])
                .sum();
            next[v] = (1.0 - d) / nf + d * inflow;
            max_diff = max_diff.max((next[v] - scores[v]).abs());
        }

        let total: f64 = next.iter().sum();
        for score in &mut next {
            *score /= total;
        }

        scores = next;
        history.record(graph.rank_state(&scores));
        deltas.push(max_diff);

        if max_diff < config.tolerance {
            log::debug!("PageRank converged after {iteration} iterations (max_diff={max_diff:e})");
            converged = true;
            break;
        }
    }

    if !converged {
        log::debug!(
            "PageRank stopped at the iteration limit ({}) without converging",
            config.max_iterations
        );
    }

    let iterations = deltas.len();
    Ok(PageRankResult {
        scores: graph.rank_state(&scores),
        history,
        converged,
        deltas,
        iterations,
    })
}

// ============================================================================
// Tests
// ============================================================================
