//! Error types for graph_of_words
//!
//! Empty documents, empty keyword sets and zero denominators are ordinary
//! values in this crate. The variants below cover the cases that genuinely
//! cannot produce a result: bad configuration, unreadable corpora and
//! per-document resource limits.

use std::path::PathBuf;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, KeywordError>;

/// Errors raised while configuring or running an evaluation
#[derive(Debug, thiserror::Error)]
pub enum KeywordError {
    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A document's graph exceeded a configured size limit
    #[error("graph has {actual} {what}, exceeding the limit of {limit}")]
    GraphLimit {
        what: &'static str,
        limit: usize,
        actual: usize,
    },

    /// Abstract and gold keyword directories do not line up
    #[error("corpus mismatch: {abstracts} abstract files but {keywords} keyword files")]
    CorpusMismatch { abstracts: usize, keywords: usize },

    /// Filesystem access failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A run specification failed validation
    #[error("invalid run specification: {0}")]
    Spec(String),

    /// A run specification could not be parsed
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl KeywordError {
    /// Build an [`KeywordError::InvalidConfig`]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Build an [`KeywordError::Io`] for `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error only concerns a single document
    ///
    /// Document-scoped errors are recorded and skipped by the evaluation
    /// runner; everything else aborts the run before any document is touched.
    pub fn is_document_scoped(&self) -> bool {
        matches!(self, Self::GraphLimit { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message() {
        let err = KeywordError::invalid_config("window_size must be >= 2");
        assert_eq!(
            err.to_string(),
            "invalid configuration: window_size must be >= 2"
        );
        assert!(!err.is_document_scoped());
    }

    #[test]
    fn test_graph_limit_is_document_scoped() {
        let err = KeywordError::GraphLimit {
            what: "nodes",
            limit: 10,
            actual: 12,
        };
        assert!(err.is_document_scoped());
        assert_eq!(
            err.to_string(),
            "graph has 12 nodes, exceeding the limit of 10"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: KeywordError = parse.unwrap_err().into();
        assert!(matches!(err, KeywordError::Json(_)));
    }
}
