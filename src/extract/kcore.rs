//! Main-core keyword extraction
//!
//! Keywords are every node whose core number equals the graph's maximum.
//! The output size varies per document and is not configurable.

use super::GraphExtractor;
use crate::graph::csr::CsrGraph;
use crate::graph::kcore::{core_numbers, max_core};
use crate::types::Method;

/// Extracts the main core of a co-occurrence graph
#[derive(Debug, Clone, Copy, Default)]
pub struct KCoreExtractor;

impl GraphExtractor for KCoreExtractor {
    fn method(&self) -> Method {
        Method::KCore
    }

    /// Main-core terms in node insertion order
    fn extract(&self, graph: &CsrGraph) -> Vec<String> {
        if graph.num_edges() == 0 {
            return Vec::new();
        }

        let cores = core_numbers(graph);
        let Some(max) = max_core(&cores) else {
            return Vec::new();
        };

        cores
            .iter()
            .enumerate()
            .filter(|(_, &c)| c == max)
            .map(|(node, _)| graph.term(node as u32).to_string())
            .collect()
    }
}

/// Extract the main core of `graph`
pub fn extract_kcore(graph: &CsrGraph) -> Vec<String> {
    KCoreExtractor.extract(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_graph_returns_all_nodes() {
        let graph = CsrGraph::from_tokens(&["a", "b", "c", "d"], 4);
        assert_eq!(extract_kcore(&graph), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_path_graph_returns_all_nodes() {
        let graph = CsrGraph::from_tokens(&["a", "b", "c", "d"], 2);
        assert_eq!(extract_kcore(&graph), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_main_core_excludes_periphery() {
        // a,b,c,d repeat and form the 3-core; the x,y,z tail peels away.
        let mut tokens = vec!["a", "b", "c", "d", "a", "b", "c", "d"];
        tokens.extend(["x", "y", "z"]);
        let graph = CsrGraph::from_tokens(&tokens, 3);
        let keywords = extract_kcore(&graph);

        for kw in ["a", "b", "c", "d"] {
            assert!(keywords.contains(&kw.to_string()), "missing {kw}");
        }
        assert!(!keywords.contains(&"z".to_string()));
    }

    #[test]
    fn test_degenerate_graphs_are_empty() {
        assert!(extract_kcore(&CsrGraph::default()).is_empty());
        assert!(extract_kcore(&CsrGraph::from_tokens(&["solo", "solo"], 4)).is_empty());
    }
}
