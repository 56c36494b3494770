//! Validation engine for run specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`RunSpec`] and collects every diagnostic into a [`ValidationReport`].
//! It never short-circuits on the first error, so users see all problems
//! at once.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use graph_of_words::pipeline::validation::ValidationEngine;
//!
//! let report = ValidationEngine::with_defaults().validate(&spec);
//! if report.has_errors() {
//!     for err in report.errors() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use std::fmt;

use serde::Serialize;

use super::spec::{RunSpec, SPEC_VERSION};
use crate::errors::{KeywordError, Result};

// ─── Issue ──────────────────────────────────────────────────────────────────

/// Stable machine-readable category of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    UnsupportedVersion,
    OutOfRange,
    LimitExceeded,
    UnknownField,
}

/// A single problem found in a spec, addressed by JSON pointer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecIssue {
    pub code: IssueCode,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl SpecIssue {
    pub fn new(code: IssueCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for SpecIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding with its severity.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub issue: SpecIssue,
}

impl ValidationDiagnostic {
    pub fn error(issue: SpecIssue) -> Self {
        Self {
            severity: Severity::Error,
            issue,
        }
    }

    pub fn warning(issue: SpecIssue) -> Self {
        Self {
            severity: Severity::Warning,
            issue,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &SpecIssue> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.issue)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &SpecIssue> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.issue)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Total number of diagnostics (errors + warnings).
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if there are no diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Convert into a `Result`, joining all error messages.
    pub fn into_result(self) -> Result<()> {
        if self.is_valid() {
            return Ok(());
        }
        let joined = self
            .errors()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(KeywordError::Spec(joined))
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`RunSpec`] and returns zero or
/// more diagnostics.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"window_size"`).
    fn name(&self) -> &str;

    /// Inspect `spec` and return any findings.
    fn validate(&self, spec: &RunSpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against a [`RunSpec`] and collects all
/// diagnostics into a [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(ConfigRangeRule));
        engine.add_rule(Box::new(DuplicateMethodsRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in execution order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules against `spec` and return the collected report.
    pub fn validate(&self, spec: &RunSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Supported version ───────────────────────────────────────────────────

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &RunSpec) -> Vec<ValidationDiagnostic> {
        if spec.v == SPEC_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecIssue::new(
                IssueCode::UnsupportedVersion,
                "/v",
                format!("unsupported spec version {}", spec.v),
            )
            .with_hint(format!("Set \"v\": {SPEC_VERSION}")),
        )]
    }
}

// ─── 2. Extraction settings in range ───────────────────────────────────────

struct ConfigRangeRule;

impl ConfigRangeRule {
    fn hint(field: &str) -> Option<String> {
        match field {
            "window_size" => Some("A window of 2 links adjacent tokens only".into()),
            "retain_fraction" => Some("0.33 keeps the top third of candidates".into()),
            "damping" => Some("The conventional value is 0.85".into()),
            "max_nodes" | "max_edges" => Some(format!(
                "Remove {field} to disable the limit, or set it to a positive value"
            )),
            _ => None,
        }
    }
}

impl ValidationRule for ConfigRangeRule {
    fn name(&self) -> &str {
        "config_range"
    }

    fn validate(&self, spec: &RunSpec) -> Vec<ValidationDiagnostic> {
        spec.config
            .violations()
            .into_iter()
            .map(|violation| {
                let code = match violation.field {
                    "max_nodes" | "max_edges" => IssueCode::LimitExceeded,
                    _ => IssueCode::OutOfRange,
                };
                let mut issue = SpecIssue::new(
                    code,
                    format!("/config/{}", violation.field),
                    violation.message,
                );
                issue.hint = Self::hint(violation.field);
                ValidationDiagnostic::error(issue)
            })
            .collect()
    }
}

// ─── 3. Methods listed twice ────────────────────────────────────────────────

struct DuplicateMethodsRule;

impl ValidationRule for DuplicateMethodsRule {
    fn name(&self) -> &str {
        "duplicate_methods"
    }

    fn validate(&self, spec: &RunSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();
        for (i, method) in spec.methods.iter().enumerate() {
            if spec.methods[..i].contains(method) {
                out.push(ValidationDiagnostic::warning(
                    SpecIssue::new(
                        IssueCode::OutOfRange,
                        format!("/methods/{i}"),
                        format!("method {} is listed more than once", method.as_str()),
                    )
                    .with_hint("Duplicates are ignored"),
                ));
            }
        }
        out
    }
}

// ─── 4. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &RunSpec) -> Vec<ValidationDiagnostic> {
        let mut top_level: Vec<&String> = spec.unknown_fields.keys().collect();
        top_level.sort();

        let fields = top_level
            .into_iter()
            .map(|key| (format!("/{key}"), key))
            .chain(
                spec.config
                    .unknown_fields
                    .keys()
                    .map(|key| (format!("/config/{key}"), key)),
            );

        fields
            .map(|(path, key)| {
                let diag_fn = if spec.strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    SpecIssue::new(
                        IssueCode::UnknownField,
                        path,
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(json: &str) -> RunSpec {
        serde_json::from_str(json).unwrap()
    }

    fn engine() -> ValidationEngine {
        ValidationEngine::with_defaults()
    }

    #[test]
    fn test_minimal_spec_is_valid() {
        let report = engine().validate(&spec(r#"{ "v": 1 }"#));
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn test_wrong_version_is_error() {
        let report = engine().validate(&spec(r#"{ "v": 2 }"#));
        assert!(report.has_errors());
        assert_eq!(report.errors().next().unwrap().code, IssueCode::UnsupportedVersion);
    }

    #[test]
    fn test_collects_all_errors() {
        let report = engine().validate(&spec(
            r#"{
                "v": 1,
                "config": { "window_size": 1, "retain_fraction": 0.0, "damping": 1.0 }
            }"#,
        ));
        let paths: Vec<&str> = report.errors().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["/config/window_size", "/config/retain_fraction", "/config/damping"]
        );
    }

    #[test]
    fn test_convergence_and_limits() {
        let report = engine().validate(&spec(
            r#"{
                "v": 1,
                "config": { "max_iterations": 0, "max_nodes": 0, "max_edges": 10 }
            }"#,
        ));
        let paths: Vec<&str> = report.errors().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/config/max_iterations", "/config/max_nodes"]);
    }

    #[test]
    fn test_duplicate_methods_warn() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "methods": ["k_core", "page_rank", "k_core"] }"#,
        ));
        assert!(report.is_valid());
        let warning = report.warnings().next().unwrap();
        assert_eq!(warning.path, "/methods/2");
    }

    #[test]
    fn test_unknown_fields_warn_when_lenient() {
        let report = engine().validate(&spec(r#"{ "v": 1, "windw": 3 }"#));
        assert!(report.is_valid());
        assert_eq!(report.warnings().count(), 1);
    }

    #[test]
    fn test_unknown_fields_error_when_strict() {
        let report = engine().validate(&spec(r#"{ "v": 1, "windw": 3, "strict": true }"#));
        assert!(report.has_errors());
        let err = report.errors().next().unwrap();
        assert_eq!(err.code, IssueCode::UnknownField);
        assert_eq!(err.path, "/windw");
    }

    #[test]
    fn test_misspelled_config_key_warns_when_lenient() {
        let report = engine().validate(&spec(r#"{ "v": 1, "config": { "windw_size": 9 } }"#));
        assert!(report.is_valid());
        let warning = report.warnings().next().unwrap();
        assert_eq!(warning.path, "/config/windw_size");
    }

    #[test]
    fn test_misspelled_config_key_error_when_strict() {
        let report = engine().validate(&spec(
            r#"{
                "v": 1,
                "strict": true,
                "config": { "windw_size": 9, "retain_fracton": 0.9 }
            }"#,
        ));
        let paths: Vec<&str> = report.errors().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/config/retain_fracton", "/config/windw_size"]);
        assert!(report
            .errors()
            .all(|e| e.code == IssueCode::UnknownField));
    }

    #[test]
    fn test_range_errors_carry_hints() {
        let report = engine().validate(&spec(r#"{ "v": 1, "config": { "max_edges": 0 } }"#));
        let err = report.errors().next().unwrap();
        assert_eq!(err.code, IssueCode::LimitExceeded);
        assert!(err.hint.as_deref().unwrap().contains("max_edges"));
    }

    #[test]
    fn test_into_result_joins_messages() {
        let report = engine().validate(&spec(r#"{ "v": 1, "config": { "window_size": 0 } }"#));
        let err = report.into_result().unwrap_err();
        assert!(err.to_string().contains("window_size must be >= 2"));
    }

    #[test]
    fn test_issue_display_with_hint() {
        let issue = SpecIssue::new(IssueCode::OutOfRange, "/config/damping", "bad").with_hint("fix");
        assert_eq!(issue.to_string(), "/config/damping: bad (hint: fix)");
    }

    #[test]
    fn test_custom_rule() {
        struct RequireTfIdf;
        impl ValidationRule for RequireTfIdf {
            fn name(&self) -> &str {
                "require_tfidf"
            }
            fn validate(&self, spec: &RunSpec) -> Vec<ValidationDiagnostic> {
                if spec.effective_methods().contains(&crate::types::Method::TfIdf) {
                    vec![]
                } else {
                    vec![ValidationDiagnostic::error(SpecIssue::new(
                        IssueCode::OutOfRange,
                        "/methods",
                        "tfidf baseline required",
                    ))]
                }
            }
        }

        let mut engine = ValidationEngine::new();
        engine.add_rule(Box::new(RequireTfIdf));
        assert_eq!(engine.rule_names(), vec!["require_tfidf"]);
        assert!(engine.validate(&spec(r#"{ "v": 1, "methods": ["k_core"] }"#)).has_errors());
        assert!(engine.validate(&spec(r#"{ "v": 1 }"#)).is_valid());
    }
}
