//! TF-IDF vectorizer
//!
//! Fits a vocabulary over a collection of documents and produces one
//! L2-normalized sparse TF-IDF row per document.
//!
//! - Analyzer: lowercase, word-character runs of at least two characters
//!   (so hyphenated tokens split), stopwords removed.
//! - Vocabulary: sorted lexicographically; the sort defines column order.
//! - Weight: raw count × smoothed IDF `ln((1 + n) / (1 + df)) + 1`.

use crate::nlp::stopwords::StopwordFilter;
use rustc_hash::{FxHashMap, FxHashSet};

/// A fitted document-term matrix
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TfidfMatrix {
    /// Vocabulary, in column order
    pub terms: Vec<String>,
    /// One sparse row per document: `(column, weight)` sorted by column
    pub rows: Vec<Vec<(u32, f64)>>,
}

impl TfidfMatrix {
    /// Number of documents
    pub fn num_documents(&self) -> usize {
        self.rows.len()
    }

    /// Term for a column
    pub fn term(&self, column: u32) -> &str {
        &self.terms[column as usize]
    }

    /// Weight of `term` in document `row` (zero when absent)
    pub fn weight(&self, row: usize, term: &str) -> f64 {
        let Ok(column) = self.terms.binary_search_by(|t| t.as_str().cmp(term)) else {
            return 0.0;
        };
        self.rows
            .get(row)
            .and_then(|r| r.iter().find(|(c, _)| *c as usize == column))
            .map_or(0.0, |(_, w)| *w)
    }
}

/// TF-IDF vectorizer configured with a stopword list
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    stopwords: StopwordFilter,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new(StopwordFilter::empty())
    }
}

impl TfidfVectorizer {
    /// Create a vectorizer that drops the given stopwords
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// Split a document into analyzed terms
    pub fn analyze(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|piece| piece.chars().count() >= 2)
            .map(|piece| piece.to_lowercase())
            .filter(|term| !self.stopwords.is_stopword(term))
            .collect()
    }

    /// Fit the vocabulary on `documents` and transform them
    pub fn fit_transform<S: AsRef<str>>(&self, documents: &[S]) -> TfidfMatrix {
        let analyzed: Vec<Vec<String>> = documents.iter().map(|d| self.analyze(d.as_ref())).collect();

        let mut doc_frequency: FxHashMap<&str, usize> = FxHashMap::default();
        for terms in &analyzed {
            let unique: FxHashSet<&str> = terms.iter().map(String::as_str).collect();
            for term in unique {
                *doc_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let mut terms: Vec<String> = doc_frequency.keys().map(|t| t.to_string()).collect();
        terms.sort_unstable();
        let column_of: FxHashMap<&str, u32> = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i as u32))
            .collect();

        let n = documents.len() as f64;
        let idf: Vec<f64> = terms
            .iter()
            .map(|t| ((1.0 + n) / (1.0 + doc_frequency[t.as_str()] as f64)).ln() + 1.0)
            .collect();

        let rows = analyzed
            .iter()
            .map(|doc_terms| {
                let mut counts: FxHashMap<u32, usize> = FxHashMap::default();
                for term in doc_terms {
                    *counts.entry(column_of[term.as_str()]).or_insert(0) += 1;
                }

                let mut row: Vec<(u32, f64)> = counts
                    .into_iter()
                    .map(|(col, count)| (col, count as f64 * idf[col as usize]))
                    .collect();
                row.sort_by_key(|(col, _)| *col);

                let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for (_, w) in &mut row {
                        *w /= norm;
                    }
                }
                row
            })
            .collect();

        TfidfMatrix { terms, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_splits_and_filters() {
        let vectorizer = TfidfVectorizer::new(StopwordFilter::from_list(&["the"]));
        assert_eq!(
            vectorizer.analyze("the real-time x graph  Graph"),
            vec!["real", "time", "graph", "graph"]
        );
    }

    #[test]
    fn test_vocabulary_sorted() {
        let matrix = TfidfVectorizer::default().fit_transform(&["zeta alpha", "mid alpha"]);
        assert_eq!(matrix.terms, vec!["alpha", "mid", "zeta"]);
        assert_eq!(matrix.num_documents(), 2);
    }

    #[test]
    fn test_rows_are_unit_length() {
        let matrix =
            TfidfVectorizer::default().fit_transform(&["graph graph theori", "graph algorithm"]);
        for row in &matrix.rows {
            let norm: f64 = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rare_terms_outweigh_common_ones() {
        let matrix = TfidfVectorizer::default().fit_transform(&["graph theori", "graph algorithm"]);
        // "graph" appears everywhere, "theori" only in the first document
        assert!(matrix.weight(0, "theori") > matrix.weight(0, "graph"));
        assert_eq!(matrix.weight(0, "algorithm"), 0.0);
    }

    #[test]
    fn test_smoothed_idf_values() {
        let matrix = TfidfVectorizer::default().fit_transform(&["a1 b1", "a1"]);
        // idf(a1) = ln(3/3) + 1 = 1, idf(b1) = ln(3/2) + 1
        let idf_b = (1.5f64).ln() + 1.0;
        let norm = (1.0 + idf_b * idf_b).sqrt();
        assert!((matrix.weight(0, "a1") - 1.0 / norm).abs() < 1e-12);
        assert!((matrix.weight(0, "b1") - idf_b / norm).abs() < 1e-12);
        assert!((matrix.weight(1, "a1") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_documents() {
        let matrix = TfidfVectorizer::default().fit_transform(&["", "x"]);
        assert!(matrix.terms.is_empty());
        assert_eq!(matrix.rows, vec![Vec::new(), Vec::new()]);
    }
}
