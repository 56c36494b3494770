//! Standard PageRank algorithm
//!
//! Implements the classic directed PageRank with power iteration and
//! uniform redistribution of dangling-node mass.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;
use crate::types::ExtractionConfig;

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from the damping and convergence settings of a config
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            threshold: config.convergence_threshold,
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run PageRank with co-occurrence counts as transition weights
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        self.iterate(graph, true)
    }

    /// Run PageRank ignoring edge weights (every outgoing edge is equally likely)
    pub fn run_unweighted(&self, graph: &CsrGraph) -> PageRankResult {
        self.iterate(graph, false)
    }

    fn iterate(&self, graph: &CsrGraph, weighted: bool) -> PageRankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }

        // Initialize scores uniformly
        let initial_score = 1.0 / n as f64;
        let mut scores = vec![initial_score; n];
        let mut new_scores = vec![0.0; n];

        let dangling_nodes = graph.dangling_nodes();

        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            // Dangling nodes jump uniformly to every node
            let dangling_mass: f64 = dangling_nodes.iter().map(|&d| scores[d as usize]).sum();
            let dangling_contribution = self.damping * dangling_mass / n as f64;

            new_scores.fill(teleport + dangling_contribution);

            for (node, &node_score) in scores.iter().enumerate() {
                let node = node as u32;
                if weighted {
                    let total_weight = graph.node_total_weight(node);
                    if total_weight > 0.0 {
                        for (neighbor, weight) in graph.neighbors(node) {
                            new_scores[neighbor as usize] +=
                                self.damping * node_score * weight / total_weight;
                        }
                    }
                } else {
                    let degree = graph.degree(node);
                    if degree > 0 {
                        let contribution = self.damping * node_score / degree as f64;
                        for (neighbor, _) in graph.neighbors(node) {
                            new_scores[neighbor as usize] += contribution;
                        }
                    }
                }
            }

            // Calculate convergence delta (L1 norm)
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        // Normalize scores (they should already sum to ~1, but ensure numerical stability)
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        PageRankResult::new(scores, iterations, delta, delta <= self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;

    fn build_cycle_graph() -> CsrGraph {
        let mut builder = GraphBuilder::new();
        let a = builder.get_or_create_node("a");
        let b = builder.get_or_create_node("b");
        let c = builder.get_or_create_node("c");

        builder.increment_edge(a, b, 1.0);
        builder.increment_edge(b, c, 1.0);
        builder.increment_edge(c, a, 1.0);

        CsrGraph::from_builder(&builder)
    }

    fn build_inward_star_graph() -> CsrGraph {
        // Three spokes all pointing at the hub
        let mut builder = GraphBuilder::new();
        let hub = builder.get_or_create_node("hub");
        for spoke in ["s1", "s2", "s3"] {
            let id = builder.get_or_create_node(spoke);
            builder.increment_edge(id, hub, 1.0);
        }

        CsrGraph::from_builder(&builder)
    }

    #[test]
    fn test_cycle_graph_equal_scores() {
        let graph = build_cycle_graph();
        let result = StandardPageRank::new().run_unweighted(&graph);

        assert!(result.converged);
        let expected = 1.0 / 3.0;
        for score in &result.scores {
            assert!((score - expected).abs() < 0.01);
        }
    }

    #[test]
    fn test_star_graph_hub_highest() {
        let graph = build_inward_star_graph();
        let result = StandardPageRank::new().run_unweighted(&graph);

        assert!(result.converged);
        let hub_score = result.scores[0];
        for &score in &result.scores[1..] {
            assert!(hub_score > score);
        }
    }

    #[test]
    fn test_scores_sum_to_one_with_dangling_nodes() {
        // Path a -> b -> c -> d leaves d dangling
        let graph = CsrGraph::from_tokens(&["a", "b", "c", "d"], 2);
        let result = StandardPageRank::new().run_unweighted(&graph);

        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        // Mass flows downstream along the path
        assert!(result.scores[3] > result.scores[0]);
    }

    #[test]
    fn test_weights_change_ranking() {
        // a sends 3 units to b and 1 unit to c
        let mut builder = GraphBuilder::new();
        let a = builder.get_or_create_node("a");
        let b = builder.get_or_create_node("b");
        let c = builder.get_or_create_node("c");
        builder.increment_edge(a, b, 3.0);
        builder.increment_edge(a, c, 1.0);
        let graph = CsrGraph::from_builder(&builder);

        let weighted = StandardPageRank::new().run(&graph);
        let unweighted = StandardPageRank::new().run_unweighted(&graph);

        assert!(weighted.scores[1] > weighted.scores[2]);
        assert!((unweighted.scores[1] - unweighted.scores[2]).abs() < 1e-9);
    }

    #[test]
    fn test_empty_graph() {
        let graph = CsrGraph::default();
        let result = StandardPageRank::new().run(&graph);

        assert!(result.converged);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_max_iterations_returns_partial() {
        let graph = build_inward_star_graph();
        let pr = StandardPageRank::new()
            .with_max_iterations(1)
            .with_threshold(0.0); // Never converge

        let result = pr.run(&graph);

        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 4);
    }

    #[test]
    fn test_damping_factor() {
        let graph = build_inward_star_graph();

        // Lower damping = more teleportation = more uniform scores
        let result_low = StandardPageRank::new().with_damping(0.5).run(&graph);
        let result_high = StandardPageRank::new().with_damping(0.95).run(&graph);

        let hub_advantage_low = result_low.scores[0] - result_low.scores[1];
        let hub_advantage_high = result_high.scores[0] - result_high.scores[1];

        assert!(hub_advantage_high > hub_advantage_low);
    }

    #[test]
    fn test_deterministic_for_fixed_graph() {
        let graph = CsrGraph::from_tokens(&["graph", "theori", "applic", "graph", "algorithm"], 3);
        let first = StandardPageRank::new().run_unweighted(&graph);
        let second = StandardPageRank::new().run_unweighted(&graph);
        assert_eq!(first.scores, second.scores);
        assert_eq!(first.iterations, second.iterations);
    }

    #[test]
    fn test_from_config() {
        let cfg = ExtractionConfig::default().with_damping(0.7).with_max_iterations(5);
        let pr = StandardPageRank::from_config(&cfg);
        assert!((pr.damping - 0.7).abs() < 1e-12);
        assert_eq!(pr.max_iterations, 5);
    }
}
