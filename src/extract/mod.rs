//! Keyword extractors
//!
//! Graph-based extractors share the [`GraphExtractor`] trait and read a
//! frozen [`CsrGraph`]. TF-IDF works on a corpus-level matrix instead, so
//! it is a plain selection function over one matrix row.

pub mod kcore;
pub mod pagerank;
pub mod tfidf;

use crate::graph::csr::CsrGraph;
use crate::types::Method;

pub use kcore::KCoreExtractor;
pub use pagerank::PageRankExtractor;
pub use tfidf::select_top_terms;

/// A keyword extractor that reads one document's co-occurrence graph.
///
/// # Contract
///
/// - **Input**: the document's graph, never mutated.
/// - **Output**: unique node terms; order is meaningful only where the
///   extractor documents it.
/// - Graphs without edges produce an empty result, never an error.
pub trait GraphExtractor {
    /// The method this extractor implements.
    fn method(&self) -> Method;

    /// Extract keywords from `graph`.
    fn extract(&self, graph: &CsrGraph) -> Vec<String>;
}
