//! Run specification types.
//!
//! A [`RunSpec`] describes which extraction methods to compare and the
//! extraction settings to use. It is the input to the
//! [`super::validation::ValidationEngine`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "methods": ["k_core", "tf_idf", "page_rank"],
//!   "config": { "window_size": 4, "retain_fraction": 0.33 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{KeywordError, Result};
use crate::types::{ExtractionConfig, Method};

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

/// Top-level run specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Methods to evaluate, in report order. Empty means all methods.
    #[serde(default)]
    pub methods: Vec<Method>,

    /// Extraction settings. Omitted fields take their defaults.
    #[serde(default)]
    pub config: ExtractionConfig,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for RunSpec {
    fn default() -> Self {
        Self {
            v: SPEC_VERSION,
            methods: Vec::new(),
            config: ExtractionConfig::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl RunSpec {
    /// Parse a spec from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a spec file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| KeywordError::io(path, e))?;
        Self::from_json(&text)
    }

    /// Methods to run, falling back to all methods in default order.
    pub fn effective_methods(&self) -> Vec<Method> {
        if self.methods.is_empty() {
            return Method::ALL.to_vec();
        }
        let mut out: Vec<Method> = Vec::with_capacity(self.methods.len());
        for &m in &self.methods {
            if !out.contains(&m) {
                out.push(m);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_spec() {
        let spec = RunSpec::from_json(r#"{ "v": 1 }"#).unwrap();
        assert_eq!(spec.v, 1);
        assert!(spec.methods.is_empty());
        assert_eq!(spec.config, ExtractionConfig::default());
        assert!(!spec.strict);
        assert_eq!(spec.effective_methods(), Method::ALL.to_vec());
    }

    #[test]
    fn test_deserialize_full_spec() {
        let spec = RunSpec::from_json(
            r#"{
                "v": 1,
                "methods": ["page_rank", "k_core"],
                "config": { "window_size": 6, "retain_fraction": 0.5, "use_edge_weights": true },
                "strict": true
            }"#,
        )
        .unwrap();
        assert_eq!(spec.effective_methods(), vec![Method::PageRank, Method::KCore]);
        assert_eq!(spec.config.window_size, 6);
        assert!((spec.config.retain_fraction - 0.5).abs() < 1e-12);
        assert!(spec.config.use_edge_weights);
        assert!(spec.strict);
    }

    #[test]
    fn test_unknown_fields_captured() {
        let spec = RunSpec::from_json(r#"{ "v": 1, "bogus": 42 }"#).unwrap();
        assert!(spec.unknown_fields.contains_key("bogus"));
    }

    #[test]
    fn test_duplicate_methods_collapse() {
        let spec = RunSpec::from_json(r#"{ "v": 1, "methods": ["tf_idf", "tf_idf"] }"#).unwrap();
        assert_eq!(spec.effective_methods(), vec![Method::TfIdf]);
    }

    #[test]
    fn test_unknown_method_is_parse_error() {
        let err = RunSpec::from_json(r#"{ "v": 1, "methods": ["bm25"] }"#).unwrap_err();
        assert!(matches!(err, KeywordError::Json(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let err = RunSpec::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, KeywordError::Io { .. }));
    }
}
