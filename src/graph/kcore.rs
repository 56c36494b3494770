//! K-core decomposition
//!
//! Core numbers are computed on the undirected view of the co-occurrence
//! graph by repeatedly peeling the node of minimum remaining degree.

use super::csr::CsrGraph;
use std::collections::BTreeSet;

/// Core number of every node, indexed by node ID
///
/// A node's core number is the largest `k` such that it belongs to a
/// subgraph in which every node has degree at least `k`. Ties between
/// equal-degree nodes are peeled in node-ID order, which does not change
/// the result but keeps the traversal reproducible.
pub fn core_numbers(graph: &CsrGraph) -> Vec<u32> {
    let adjacency = graph.undirected_adjacency();
    let mut degree: Vec<u32> = adjacency.iter().map(|n| n.len() as u32).collect();
    let mut removed = vec![false; graph.num_nodes];
    let mut core = vec![0u32; graph.num_nodes];

    let mut queue: BTreeSet<(u32, u32)> = degree
        .iter()
        .enumerate()
        .map(|(node, &d)| (d, node as u32))
        .collect();

    let mut k = 0u32;
    while let Some((d, node)) = queue.pop_first() {
        // Core numbers never decrease along the peeling order.
        k = k.max(d);
        core[node as usize] = k;
        removed[node as usize] = true;

        for &neighbor in &adjacency[node as usize] {
            let n = neighbor as usize;
            if removed[n] {
                continue;
            }
            queue.remove(&(degree[n], neighbor));
            degree[n] -= 1;
            queue.insert((degree[n], neighbor));
        }
    }

    core
}

/// Largest core number in the graph, or `None` for an empty graph
pub fn max_core(cores: &[u32]) -> Option<u32> {
    cores.iter().copied().max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;

    fn graph(tokens: &[&str], window: usize) -> CsrGraph {
        CsrGraph::from_tokens(tokens, window)
    }

    #[test]
    fn test_path_graph_cores_are_one() {
        let g = graph(&["a", "b", "c", "d"], 2);
        assert_eq!(core_numbers(&g), vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_complete_graph_cores() {
        // Window covering the whole sequence yields K5
        let g = graph(&["a", "b", "c", "d", "e"], 5);
        assert_eq!(core_numbers(&g), vec![4; 5]);
    }

    #[test]
    fn test_reciprocal_edges_count_once() {
        // a -> b and b -> a: one undirected neighbor each
        let g = graph(&["a", "b", "a"], 2);
        assert_eq!(g.num_edges(), 2);
        assert_eq!(core_numbers(&g), vec![1, 1]);
    }

    #[test]
    fn test_triangle_with_tail() {
        let mut builder = GraphBuilder::new();
        let a = builder.get_or_create_node("a");
        let b = builder.get_or_create_node("b");
        let c = builder.get_or_create_node("c");
        let d = builder.get_or_create_node("d");
        builder.increment_edge(a, b, 1.0);
        builder.increment_edge(b, c, 1.0);
        builder.increment_edge(c, a, 1.0);
        builder.increment_edge(c, d, 1.0);
        let g = CsrGraph::from_builder(&builder);

        assert_eq!(core_numbers(&g), vec![2, 2, 2, 1]);
    }

    #[test]
    fn test_core_number_is_not_removal_degree() {
        // The last leaf is peeled after the hub, at remaining degree 0,
        // but still belongs to the 1-core.
        let mut builder = GraphBuilder::new();
        let hub = builder.get_or_create_node("hub");
        for leaf in ["x", "y", "z"] {
            let id = builder.get_or_create_node(leaf);
            builder.increment_edge(hub, id, 1.0);
        }
        let g = CsrGraph::from_builder(&builder);

        assert_eq!(core_numbers(&g), vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_empty_and_isolated() {
        let empty = CsrGraph::default();
        assert!(core_numbers(&empty).is_empty());
        assert_eq!(max_core(&[]), None);

        let single = graph(&["solo"], 4);
        assert_eq!(core_numbers(&single), vec![0]);
        assert_eq!(max_core(&core_numbers(&single)), Some(0));
    }
}
