//! Corpus-level macro averages
//!
//! Each document's [`Performance`] counts equally: the aggregate is the
//! arithmetic mean of per-document values, not a pooled count.

use super::scorer::Performance;
use crate::types::Method;
use serde::{Deserialize, Serialize};

/// Mean of per-document performance records
pub fn macro_average(records: &[Performance]) -> Performance {
    if records.is_empty() {
        return Performance::default();
    }

    let n = records.len() as f64;
    let (p, r, f) = records.iter().fold((0.0, 0.0, 0.0), |(p, r, f), rec| {
        (p + rec.precision, r + rec.recall, f + rec.f1)
    });
    Performance::new(p / n, r / n, f / n)
}

/// Round a fraction to a percentage with two decimals
pub fn to_percent(value: f64) -> f64 {
    (value * 100.0 * 100.0).round() / 100.0
}

/// Macro-averaged scores of one method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodSummary {
    pub method: Method,
    /// Number of documents averaged
    pub documents: usize,
    /// Macro-averaged fractions in [0, 1]
    pub average: Performance,
}

impl MethodSummary {
    /// Average `records` for `method`
    pub fn from_records(method: Method, records: &[Performance]) -> Self {
        Self {
            method,
            documents: records.len(),
            average: macro_average(records),
        }
    }

    /// The average as percentages rounded to two decimals
    pub fn percentages(&self) -> Performance {
        Performance::new(
            to_percent(self.average.precision),
            to_percent(self.average.recall),
            to_percent(self.average.f1),
        )
    }
}

/// Render summaries as a fixed-width comparison table
pub fn render_table(summaries: &[MethodSummary]) -> String {
    let mut out = format!(
        "{:<10} {:>10} {:>10} {:>10} {:>6}\n",
        "method", "precision", "recall", "F-1", "docs"
    );
    for summary in summaries {
        let pct = summary.percentages();
        out.push_str(&format!(
            "{:<10} {:>10.2} {:>10.2} {:>10.2} {:>6}\n",
            summary.method.as_str(),
            pct.precision,
            pct.recall,
            pct.f1,
            summary.documents
        ));
    }
    out
}
