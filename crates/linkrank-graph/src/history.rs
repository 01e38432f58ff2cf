//! Recorded score snapshots, one per completed iteration.

use crate::RankState;
use serde::{Deserialize, Serialize};

/// Ordered score snapshots of an iterative computation.
///
/// Entry 0 is the initial state; entry `i` is the state after iteration `i`.
/// Serializes as a plain JSON array of `{ id: score }` objects.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IterationHistory {
    states: Vec<RankState>,
}

impl IterationHistory {
    pub(crate) fn with_initial(initial: RankState) -> Self {
        Self {
            states: vec![initial],
        }
    }

    pub(crate) fn record(&mut self, state: RankState) {
        self.states.push(state);
    }

    /// Number of recorded snapshots (iterations run + 1).
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Snapshot at position `i`.
    pub fn get(&self, i: usize) -> Option<&RankState> {
        self.states.get(i)
    }

    /// The initial state.
    pub fn initial(&self) -> Option<&RankState> {
        self.states.first()
    }

    /// The most recent state.
    pub fn last(&self) -> Option<&RankState> {
        self.states.last()
    }

    /// Iterates over snapshots in order.
    pub fn iter(&self) -> impl Iterator<Item = &RankState> {
        self.states.iter()
    }

    /// One node's score at every recorded iteration, for convergence charts.
    ///
    /// Returns `None` if the node is unknown.
    pub fn series(&self, node_id: &str) -> Option<Vec<f64>> {
        self.states
            .iter()
            .map(|state| state.get(node_id).copied())
            .collect()
    }
}

impl<'a> IntoIterator for &'a IterationHistory {
    type Item = &'a RankState;
    type IntoIter = std::slice::Iter<'a, RankState>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
