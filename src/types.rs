//! Core types for graph_of_words
//!
//! This module defines the extraction configuration, the set of keyword
//! extraction methods and the per-document input record.

use crate::errors::{KeywordError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Method
// ============================================================================

/// Keyword extraction methods compared by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Main core of the co-occurrence graph
    KCore,
    /// Top fraction of nodes by PageRank score
    PageRank,
    /// Top fraction of terms by TF-IDF weight
    TfIdf,
}

impl Method {
    /// Default comparison order (k-core, tfidf, PageRank)
    pub const ALL: [Method; 3] = [Method::KCore, Method::TfIdf, Method::PageRank];

    /// Display label used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::KCore => "k-core",
            Method::PageRank => "PageRank",
            Method::TfIdf => "tfidf",
        }
    }

    /// Whether the method reads the co-occurrence graph
    pub fn uses_graph(&self) -> bool {
        matches!(self, Method::KCore | Method::PageRank)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "kcore" | "k-core" | "k_core" | "core" => Some(Method::KCore),
            "pagerank" | "page_rank" | "pr" => Some(Method::PageRank),
            "tfidf" | "tf-idf" | "tf_idf" => Some(Method::TfIdf),
            _ => None,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Method {
    type Err = KeywordError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Method::parse(value)
            .ok_or_else(|| KeywordError::invalid_config(format!("unknown method \"{value}\"")))
    }
}

// ============================================================================
// Document
// ============================================================================

/// A cleaned document ready for extraction and scoring
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier (usually the source file stem)
    pub id: String,
    /// Normalized tokens in document order; duplicates allowed
    pub tokens: Vec<String>,
    /// Gold standard keywords, already normalized the same way as `tokens`
    pub gold: Vec<String>,
}

impl Document {
    /// Create a new document
    pub fn new(id: impl Into<String>, tokens: Vec<String>, gold: Vec<String>) -> Self {
        Self {
            id: id.into(),
            tokens,
            gold,
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for keyword extraction and evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Sliding window size for the co-occurrence graph
    pub window_size: usize,
    /// Fraction of ranked candidates retained by PageRank and TF-IDF
    pub retain_fraction: f64,
    /// Damping factor for PageRank
    pub damping: f64,
    /// Maximum iterations for PageRank convergence
    pub max_iterations: usize,
    /// Convergence threshold (stop when L1 delta <= threshold)
    pub convergence_threshold: f64,
    /// Use co-occurrence counts as PageRank transition weights
    pub use_edge_weights: bool,
    /// Language code for stopwords (e.g., "en", "de", "fr")
    pub language: String,
    /// Additional stopwords (extends the built-in list)
    pub stopwords: Vec<String>,
    /// Process documents on the rayon thread pool
    pub parallel: bool,
    /// Maximum graph nodes per document before the document is rejected
    pub max_nodes: Option<usize>,
    /// Maximum graph edges per document before the document is rejected
    pub max_edges: Option<usize>,
    /// Fields not recognized by the schema, kept so validation can report them
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_json::Value>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            window_size: 4,
            retain_fraction: 0.33,
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-6,
            use_edge_weights: false,
            language: "en".to_string(),
            stopwords: Vec::new(),
            parallel: false,
            max_nodes: None,
            max_edges: None,
            unknown_fields: BTreeMap::new(),
        }
    }
}

/// A configuration value outside its allowed range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigViolation {
    /// Name of the offending field
    pub field: &'static str,
    pub message: String,
}

impl ExtractionConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Every out-of-range value, in field order
    ///
    /// Window >= 2, retain fraction in (0, 1], damping in (0, 1), positive
    /// iteration cap and threshold, graph limits > 0 when set.
    pub fn violations(&self) -> Vec<ConfigViolation> {
        let mut out = Vec::new();
        let mut push = |field: &'static str, message: String| {
            out.push(ConfigViolation { field, message });
        };

        if self.window_size < 2 {
            push(
                "window_size",
                format!("window_size must be >= 2, got {}", self.window_size),
            );
        }
        if !(self.retain_fraction > 0.0 && self.retain_fraction <= 1.0) {
            push(
                "retain_fraction",
                format!("retain_fraction must be in (0, 1], got {}", self.retain_fraction),
            );
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            push(
                "damping",
                format!("damping must be in (0, 1), got {}", self.damping),
            );
        }
        if self.max_iterations == 0 {
            push("max_iterations", "max_iterations must be greater than 0".into());
        }
        if !(self.convergence_threshold > 0.0) {
            push(
                "convergence_threshold",
                "convergence_threshold must be greater than 0".into(),
            );
        }
        if self.max_nodes == Some(0) {
            push("max_nodes", "max_nodes must be greater than 0".into());
        }
        if self.max_edges == Some(0) {
            push("max_edges", "max_edges must be greater than 0".into());
        }
        out
    }

    /// Validate the configuration, failing on the first violation
    pub fn validate(&self) -> Result<()> {
        match self.violations().into_iter().next() {
            Some(violation) => Err(KeywordError::InvalidConfig(violation.message)),
            None => Ok(()),
        }
    }

    /// Number of items retained out of `count` ranked candidates
    ///
    /// Truncates toward zero, so small documents may retain nothing.
    pub fn retain_count(&self, count: usize) -> usize {
        retain_count(self.retain_fraction, count)
    }

    /// Builder method: set window size
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Builder method: set retain fraction
    pub fn with_retain_fraction(mut self, retain_fraction: f64) -> Self {
        self.retain_fraction = retain_fraction;
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: weight PageRank transitions by co-occurrence counts
    pub fn with_edge_weights(mut self, use_edge_weights: bool) -> Self {
        self.use_edge_weights = use_edge_weights;
        self
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: enable parallel document processing
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builder method: set maximum graph nodes limit
    pub fn with_max_nodes(mut self, max: usize) -> Self {
        self.max_nodes = Some(max);
        self
    }

    /// Builder method: set maximum graph edges limit
    pub fn with_max_edges(mut self, max: usize) -> Self {
        self.max_edges = Some(max);
        self
    }
}

/// `floor(fraction * count)`, clamped to `count`
pub fn retain_count(fraction: f64, count: usize) -> usize {
    let n = (fraction * count as f64).floor();
    if n <= 0.0 {
        0
    } else {
        (n as usize).min(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = ExtractionConfig::default();
        assert!(config.validate().is_ok());

        assert!(ExtractionConfig::default()
            .with_window_size(1)
            .validate()
            .is_err());
        assert!(ExtractionConfig::default()
            .with_retain_fraction(0.0)
            .validate()
            .is_err());
        assert!(ExtractionConfig::default()
            .with_retain_fraction(1.5)
            .validate()
            .is_err());
        assert!(ExtractionConfig::default()
            .with_retain_fraction(1.0)
            .validate()
            .is_ok());
        assert!(ExtractionConfig::default()
            .with_damping(1.0)
            .validate()
            .is_err());
        assert!(ExtractionConfig::default()
            .with_max_iterations(0)
            .validate()
            .is_err());
        assert!(ExtractionConfig::default()
            .with_convergence_threshold(f64::NAN)
            .validate()
            .is_err());
        assert!(ExtractionConfig::default()
            .with_max_nodes(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_violations_collects_every_field() {
        let config = ExtractionConfig::default()
            .with_window_size(1)
            .with_damping(0.0)
            .with_max_edges(0);
        let fields: Vec<&str> = config.violations().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["window_size", "damping", "max_edges"]);

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("window_size must be >= 2"));
        assert!(ExtractionConfig::default().violations().is_empty());
    }

    #[test]
    fn test_config_keeps_unknown_fields() {
        let cfg: ExtractionConfig =
            serde_json::from_str(r#"{ "windw_size": 9, "damping": 0.5 }"#).unwrap();
        assert_eq!(cfg.window_size, 4);
        assert!((cfg.damping - 0.5).abs() < 1e-12);
        assert!(cfg.unknown_fields.contains_key("windw_size"));
    }

    #[test]
    fn test_retain_count_truncates() {
        assert_eq!(retain_count(0.33, 10), 3);
        assert_eq!(retain_count(0.33, 4), 1);
        assert_eq!(retain_count(0.33, 3), 0);
        assert_eq!(retain_count(0.33, 0), 0);
        assert_eq!(retain_count(1.0, 7), 7);
    }

    #[test]
    fn test_method_parse_and_display() {
        assert_eq!("k-core".parse::<Method>().unwrap(), Method::KCore);
        assert_eq!("PageRank".parse::<Method>().unwrap(), Method::PageRank);
        assert_eq!("tf-idf".parse::<Method>().unwrap(), Method::TfIdf);
        assert!("bm25".parse::<Method>().is_err());
        assert_eq!(Method::TfIdf.to_string(), "tfidf");
        assert!(Method::KCore.uses_graph());
        assert!(!Method::TfIdf.uses_graph());
    }

    #[test]
    fn test_config_serde_defaults() {
        let cfg: ExtractionConfig = serde_json::from_str(r#"{ "window_size": 6 }"#).unwrap();
        assert_eq!(cfg.window_size, 6);
        assert!((cfg.retain_fraction - 0.33).abs() < 1e-12);
        assert!((cfg.damping - 0.85).abs() < 1e-12);
        assert!(!cfg.use_edge_weights);
    }

    #[test]
    fn test_method_serde_snake_case() {
        let json = serde_json::to_string(&Method::PageRank).unwrap();
        assert_eq!(json, r#""page_rank""#);
        let back: Method = serde_json::from_str(r#""k_core""#).unwrap();
        assert_eq!(back, Method::KCore);
    }
}
