//! PageRank algorithms
//!
//! This module provides the power-iteration PageRank used to rank the nodes
//! of a co-occurrence graph.

pub mod standard;

use std::cmp::Ordering;

/// Resolution at which scores are compared; closer scores are tied.
pub const SCORE_EPSILON: f64 = 1e-10;

/// Result of a PageRank computation
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// All nodes ordered by descending score
    ///
    /// Scores are compared at [`SCORE_EPSILON`] resolution, and ties fall back to node ID
    /// (insertion order), so the ordering is total and reproducible.
    pub fn ranked(&self) -> Vec<(u32, f64)> {
        let mut indexed: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as u32, s))
            .collect();
        indexed.sort_by(|a, b| stable_cmp(*a, *b));
        indexed
    }

    /// Get top N nodes by score
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }
}

/// Score descending, then node ID ascending
///
/// Scores are bucketed to multiples of [`SCORE_EPSILON`] before comparing,
/// which keeps the ordering total.
fn stable_cmp(a: (u32, f64), b: (u32, f64)) -> Ordering {
    score_bucket(b.1)
        .cmp(&score_bucket(a.1))
        .then_with(|| a.0.cmp(&b.0))
}

fn score_bucket(score: f64) -> i64 {
    (score / SCORE_EPSILON).round() as i64
}
