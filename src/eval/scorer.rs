//! Precision, recall and F1 against a gold keyword set
//!
//! Matching is exact string equality on normalized tokens. Every zero
//! denominator is defined as a score of 0.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Precision, recall and F1 of one keyword set
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl Performance {
    /// Create a record from its three values
    pub fn new(precision: f64, recall: f64, f1: f64) -> Self {
        Self {
            precision,
            recall,
            f1,
        }
    }
}

/// Score `candidates` against `gold`
///
/// Both inputs are treated as sets; duplicates count once.
pub fn score<C, G>(candidates: &[C], gold: &[G]) -> Performance
where
    C: AsRef<str>,
    G: AsRef<str>,
{
    let candidates: FxHashSet<&str> = candidates.iter().map(AsRef::as_ref).collect();
    let gold: FxHashSet<&str> = gold.iter().map(AsRef::as_ref).collect();

    let hits = candidates.intersection(&gold).count() as f64;

    let precision = if candidates.is_empty() {
        0.0
    } else {
        hits / candidates.len() as f64
    };
    let recall = if gold.is_empty() {
        0.0
    } else {
        hits / gold.len() as f64
    };
    let f1 = if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    };

    Performance::new(precision, recall, f1)
}
