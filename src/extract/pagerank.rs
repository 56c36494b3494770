//! PageRank keyword extraction
//!
//! Nodes are ranked by directed PageRank and the top
//! `floor(retain_fraction * node_count)` are kept, in rank order.

use super::GraphExtractor;
use crate::graph::csr::CsrGraph;
use crate::pagerank::standard::StandardPageRank;
use crate::pagerank::PageRankResult;
use crate::types::{retain_count, ExtractionConfig, Method};

/// Extracts the highest-ranked fraction of graph nodes
#[derive(Debug, Clone)]
pub struct PageRankExtractor {
    /// PageRank settings
    pub pagerank: StandardPageRank,
    /// Fraction of nodes to keep, in (0, 1]
    pub retain_fraction: f64,
    /// Use co-occurrence counts as transition weights
    pub use_edge_weights: bool,
}

impl PageRankExtractor {
    /// Create an extractor with default PageRank settings
    pub fn new(retain_fraction: f64) -> Self {
        Self {
            pagerank: StandardPageRank::default(),
            retain_fraction,
            use_edge_weights: false,
        }
    }

    /// Create from an extraction config
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            pagerank: StandardPageRank::from_config(config),
            retain_fraction: config.retain_fraction,
            use_edge_weights: config.use_edge_weights,
        }
    }

    /// Run PageRank on `graph` with this extractor's weighting
    pub fn rank(&self, graph: &CsrGraph) -> PageRankResult {
        if self.use_edge_weights {
            self.pagerank.run(graph)
        } else {
            self.pagerank.run_unweighted(graph)
        }
    }
}

impl GraphExtractor for PageRankExtractor {
    fn method(&self) -> Method {
        Method::PageRank
    }

    /// Top-ranked terms, highest score first
    fn extract(&self, graph: &CsrGraph) -> Vec<String> {
        if graph.num_edges() == 0 {
            return Vec::new();
        }

        let keep = retain_count(self.retain_fraction, graph.num_nodes);
        if keep == 0 {
            return Vec::new();
        }

        let result = self.rank(graph);
        if !result.converged {
            tracing::debug!(
                iterations = result.iterations,
                delta = result.delta,
                "pagerank stopped before convergence"
            );
        }

        result
            .top_n(keep)
            .into_iter()
            .map(|(node, _)| graph.term(node).to_string())
            .collect()
    }
}

/// Extract the top `retain_fraction` of nodes by PageRank with default settings
pub fn extract_pagerank(graph: &CsrGraph, retain_fraction: f64) -> Vec<String> {
    PageRankExtractor::new(retain_fraction).extract(graph)
}
