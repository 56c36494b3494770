//! Graph construction and representation
//!
//! This module provides graph building, the frozen CSR form shared by the
//! extractors, and k-core decomposition over it.

pub mod builder;
pub mod csr;
pub mod kcore;

use builder::GraphBuilder;
use csr::CsrGraph;

/// Build the co-occurrence graph of one document
///
/// Tokens are the normalized sequence of a single document; graphs never
/// share state across documents.
pub fn build_graph<S: AsRef<str>>(tokens: &[S], window_size: usize) -> CsrGraph {
    CsrGraph::from_builder(&GraphBuilder::from_tokens(tokens, window_size))
}
