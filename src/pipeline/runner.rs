//! Evaluation runner: extracts keywords per document and scores them.
//!
//! The [`Evaluator`] holds an [`ExtractionConfig`] and the list of methods
//! to compare. Calling [`Evaluator::run`] validates the configuration, fits
//! the corpus-level TF-IDF matrix, processes every document (optionally on
//! the rayon pool) and macro-averages each method's scores.
//!
//! # Failure isolation
//!
//! A document whose graph exceeds `max_nodes` / `max_edges` is recorded as
//! a [`DocumentFailure`] and left out of the averages. Configuration errors
//! abort the run before any document is touched.

use rayon::prelude::*;
use serde::Serialize;

use crate::errors::{KeywordError, Result};
use crate::eval::{score, MethodSummary, Performance};
use crate::extract::{select_top_terms, GraphExtractor, KCoreExtractor, PageRankExtractor};
use crate::graph::{build_graph, csr::CsrGraph};
use crate::nlp::stopwords::StopwordFilter;
use crate::pipeline::observer::ProgressObserver;
use crate::pipeline::spec::RunSpec;
use crate::pipeline::validation::ValidationEngine;
use crate::tfidf::{TfidfMatrix, TfidfVectorizer};
use crate::types::{Document, ExtractionConfig, Method};

/// Enter a tracing span for one evaluation stage.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::debug_span!("evaluation_stage", stage = $name).entered();
    };
}

// ============================================================================
// Report types
// ============================================================================

/// Keywords and score of one method on one document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodResult {
    pub method: Method,
    pub keywords: Vec<String>,
    pub performance: Performance,
}

/// Results of every enabled method on one document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentOutcome {
    /// Position of the document in the input
    pub index: usize,
    pub id: String,
    /// One entry per enabled method, in method order
    pub results: Vec<MethodResult>,
}

impl DocumentOutcome {
    /// Result for `method`, if it was enabled
    pub fn result(&self, method: Method) -> Option<&MethodResult> {
        self.results.iter().find(|r| r.method == method)
    }
}

/// A document skipped because of a per-document error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentFailure {
    pub index: usize,
    pub id: String,
    pub error: String,
}

/// Outcome of a full evaluation run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvaluationReport {
    /// Macro averages, one per method in method order
    pub summaries: Vec<MethodSummary>,
    /// Successful documents, in input order
    pub documents: Vec<DocumentOutcome>,
    /// Skipped documents, in input order
    pub failures: Vec<DocumentFailure>,
}

impl EvaluationReport {
    /// Summary for `method`, if it was evaluated
    pub fn summary(&self, method: Method) -> Option<&MethodSummary> {
        self.summaries.iter().find(|s| s.method == method)
    }

    /// The method with the highest average F1 (first one wins ties)
    pub fn best_method(&self) -> Option<&MethodSummary> {
        self.summaries.iter().fold(None, |best, s| match best {
            Some(b) if b.average.f1 >= s.average.f1 => Some(b),
            _ => Some(s),
        })
    }

    /// Comparison table in percentages
    pub fn render_table(&self) -> String {
        crate::eval::render_table(&self.summaries)
    }

    /// Serialize the report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// Evaluator
// ============================================================================

/// Runs the keyword extractors over a corpus and scores them
#[derive(Debug, Clone)]
pub struct Evaluator {
    config: ExtractionConfig,
    methods: Vec<Method>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}

impl Evaluator {
    /// Create an evaluator comparing all methods
    pub fn new(config: ExtractionConfig) -> Self {
        Self {
            config,
            methods: Method::ALL.to_vec(),
        }
    }

    /// Create an evaluator from a run specification
    ///
    /// Every validation rule runs; warnings are logged and errors are
    /// joined into a single [`KeywordError::Spec`].
    pub fn from_spec(spec: &RunSpec) -> Result<Self> {
        let report = ValidationEngine::with_defaults().validate(spec);
        for warning in report.warnings() {
            tracing::warn!(%warning, "run specification warning");
        }
        report.into_result()?;
        Ok(Self::new(spec.config.clone()).with_methods(&spec.effective_methods()))
    }

    /// Restrict the compared methods; duplicates are ignored and an empty
    /// list means all methods.
    pub fn with_methods(mut self, methods: &[Method]) -> Self {
        let spec = RunSpec {
            methods: methods.to_vec(),
            ..RunSpec::default()
        };
        self.methods = spec.effective_methods();
        self
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Evaluate every document and aggregate per method
    pub fn run<O>(&self, documents: &[Document], observer: &mut O) -> Result<EvaluationReport>
    where
        O: ProgressObserver + ?Sized,
    {
        self.config.validate()?;

        let total = documents.len();
        tracing::info!(
            documents = total,
            methods = ?self.methods,
            parallel = self.config.parallel,
            "running evaluation"
        );
        observer.on_start(total);

        let tfidf = if self.methods.contains(&Method::TfIdf) {
            trace_stage!("tfidf_fit");
            Some(self.fit_tfidf(documents))
        } else {
            None
        };
        let tfidf = tfidf.as_ref();

        let mut report = EvaluationReport::default();
        let mut record = |index: usize, outcome: Result<DocumentOutcome>| -> Result<()> {
            match outcome {
                Ok(doc) => {
                    observer.on_document(index, total);
                    report.documents.push(doc);
                }
                Err(err) if err.is_document_scoped() => {
                    let id = documents[index].id.clone();
                    let error = err.to_string();
                    observer.on_failure(index, &id, &error);
                    report.failures.push(DocumentFailure { index, id, error });
                }
                Err(err) => return Err(err),
            }
            Ok(())
        };

        if self.config.parallel {
            let outcomes: Vec<Result<DocumentOutcome>> = documents
                .par_iter()
                .enumerate()
                .map(|(index, doc)| self.evaluate_document(index, doc, tfidf))
                .collect();
            for (index, outcome) in outcomes.into_iter().enumerate() {
                record(index, outcome)?;
            }
        } else {
            for (index, doc) in documents.iter().enumerate() {
                record(index, self.evaluate_document(index, doc, tfidf))?;
            }
        }

        trace_stage!("aggregate");
        for &method in &self.methods {
            let records: Vec<Performance> = report
                .documents
                .iter()
                .filter_map(|d| d.result(method))
                .map(|r| r.performance)
                .collect();
            let summary = MethodSummary::from_records(method, &records);
            observer.on_method_complete(method, summary.documents);
            report.summaries.push(summary);
        }

        tracing::info!(
            succeeded = report.documents.len(),
            failed = report.failures.len(),
            "evaluation finished"
        );
        Ok(report)
    }

    /// Run every enabled method on one document
    ///
    /// `tfidf` must hold a row for `index` when TF-IDF is enabled; a missing
    /// matrix yields an empty TF-IDF keyword set.
    pub fn evaluate_document(
        &self,
        index: usize,
        doc: &Document,
        tfidf: Option<&TfidfMatrix>,
    ) -> Result<DocumentOutcome> {
        let graph = if self.methods.iter().any(Method::uses_graph) {
            trace_stage!("graph");
            let graph = build_graph(&doc.tokens, self.config.window_size);
            self.check_limits(&graph)?;
            Some(graph)
        } else {
            None
        };

        let mut results = Vec::with_capacity(self.methods.len());
        for &method in &self.methods {
            trace_stage!(method.as_str());
            let keywords = match (method, graph.as_ref()) {
                (Method::KCore, Some(graph)) => KCoreExtractor.extract(graph),
                (Method::PageRank, Some(graph)) => {
                    PageRankExtractor::from_config(&self.config).extract(graph)
                }
                (Method::TfIdf, _) => tfidf
                    .map(|m| select_top_terms(m, index, self.config.retain_fraction))
                    .unwrap_or_default(),
                _ => Vec::new(),
            };
            let performance = score(&keywords, &doc.gold);
            results.push(MethodResult {
                method,
                keywords,
                performance,
            });
        }

        tracing::debug!(
            index,
            id = %doc.id,
            tokens = doc.tokens.len(),
            "document evaluated"
        );
        Ok(DocumentOutcome {
            index,
            id: doc.id.clone(),
            results,
        })
    }

    fn fit_tfidf(&self, documents: &[Document]) -> TfidfMatrix {
        let stopwords =
            StopwordFilter::new(&self.config.language).with_extra(&self.config.stopwords);
        let texts: Vec<String> = documents.iter().map(|d| d.tokens.join(" ")).collect();
        TfidfVectorizer::new(stopwords).fit_transform(&texts)
    }

    fn check_limits(&self, graph: &CsrGraph) -> Result<()> {
        if let Some(limit) = self.config.max_nodes {
            if graph.num_nodes > limit {
                return Err(KeywordError::GraphLimit {
                    what: "nodes",
                    limit,
                    actual: graph.num_nodes,
                });
            }
        }
        if let Some(limit) = self.config.max_edges {
            let actual = graph.num_edges();
            if actual > limit {
                return Err(KeywordError::GraphLimit {
                    what: "edges",
                    limit,
                    actual,
                });
            }
        }
        Ok(())
    }
}
