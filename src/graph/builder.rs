//! Graph builder with efficient edge handling
//!
//! This module provides a mutable, directed co-occurrence graph builder that
//! uses FxHashMap for O(1) edge lookups during construction.

use rustc_hash::FxHashMap;

/// A node in the graph builder
#[derive(Debug, Clone)]
pub struct BuilderNode {
    /// The token for this node
    pub term: String,
    /// Outgoing adjacency: target node ID -> co-occurrence count
    pub edges: FxHashMap<u32, f64>,
}

impl BuilderNode {
    /// Create a new node
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            edges: FxHashMap::default(),
        }
    }
}

/// A mutable directed graph builder optimized for incremental construction
///
/// Node IDs are assigned in order of first occurrence, which is the only
/// iteration order used downstream.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    /// Maps term -> node ID
    term_to_id: FxHashMap<String, u32>,
    /// Node storage
    nodes: Vec<BuilderNode>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self {
            term_to_id: FxHashMap::default(),
            nodes: Vec::new(),
        }
    }

    /// Create a graph builder with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            term_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Get or create a node for the given term, returning its ID
    pub fn get_or_create_node(&mut self, term: &str) -> u32 {
        if let Some(&id) = self.term_to_id.get(term) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.term_to_id.insert(term.to_string(), id);
        self.nodes.push(BuilderNode::new(term));
        id
    }

    /// Increment the weight of the directed edge `from -> to`
    ///
    /// If the edge doesn't exist, it's created with the given weight.
    pub fn increment_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to {
            return; // No self-loops
        }

        if let Some(node) = self.nodes.get_mut(from as usize) {
            *node.edges.entry(to).or_insert(0.0) += weight;
        }
    }

    /// Build a graph from a token sequence using a sliding window
    ///
    /// Each position `j` is paired with the following `window_size - 1`
    /// positions (fewer near the end of the sequence), adding a directed
    /// edge from the earlier token to the later one. Every pair of positions
    /// is visited once, so the final weight of `a -> b` is the number of
    /// times `a` precedes `b` within the window.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S], window_size: usize) -> Self {
        let mut builder = Self::with_capacity(tokens.len() / 2);

        // Register nodes up front so IDs follow first occurrence even for
        // tokens that only ever appear as edge targets.
        let ids: Vec<u32> = tokens
            .iter()
            .map(|t| builder.get_or_create_node(t.as_ref()))
            .collect();

        for j in 0..ids.len() {
            for k in (j + 1)..std::cmp::min(j + window_size, ids.len()) {
                builder.increment_edge(ids[j], ids[k], 1.0);
            }
        }

        builder
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of distinct directed edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Get a node ID by term
    pub fn get_node_id(&self, term: &str) -> Option<u32> {
        self.term_to_id.get(term).copied()
    }

    /// Get the term for a node ID
    pub fn get_term(&self, id: u32) -> Option<&str> {
        self.nodes.get(id as usize).map(|n| n.term.as_str())
    }

    /// Weight of the directed edge `from -> to`, if present
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<f64> {
        let from = self.get_node_id(from)?;
        let to = self.get_node_id(to)?;
        self.nodes[from as usize].edges.get(&to).copied()
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// All edges as `(from, to, weight)` term triples, sorted by node IDs
    pub fn edges(&self) -> Vec<(&str, &str, f64)> {
        let mut out = Vec::with_capacity(self.edge_count());
        for (id, node) in self.nodes() {
            let mut targets: Vec<_> = node.edges.iter().map(|(&k, &v)| (k, v)).collect();
            targets.sort_by_key(|(k, _)| *k);
            for (target, weight) in targets {
                out.push((
                    self.nodes[id as usize].term.as_str(),
                    self.nodes[target as usize].term.as_str(),
                    weight,
                ));
            }
        }
        out
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
