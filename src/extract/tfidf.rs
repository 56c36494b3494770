//! TF-IDF keyword selection
//!
//! Per document row: keep the nonzero weights, rank them by descending
//! weight and retain the top `floor(retain_fraction * nonzero_count)`.

use crate::tfidf::TfidfMatrix;
use crate::types::retain_count;

/// Top-weighted terms of one matrix row, highest weight first
///
/// The sort is stable, so equal weights keep column (vocabulary) order.
/// Rows outside the matrix yield an empty result.
pub fn select_top_terms(matrix: &TfidfMatrix, row: usize, retain_fraction: f64) -> Vec<String> {
    let Some(weights) = matrix.rows.get(row) else {
        return Vec::new();
    };

    let mut nonzero: Vec<(u32, f64)> = weights.iter().copied().filter(|(_, w)| *w != 0.0).collect();
    nonzero.sort_by(|a, b| b.1.total_cmp(&a.1));

    let keep = retain_count(retain_fraction, nonzero.len());
    nonzero
        .into_iter()
        .take(keep)
        .map(|(col, _)| matrix.term(col).to_string())
        .collect()
}
