/// Weighted graph container: node set plus edge list, nothing derived
use indexmap::IndexSet;
use std::hash::Hash;

/// A weighted edge record. Stored with a direction, treated as undirected.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<N> {
    pub from: N,
    pub to: N,
    pub weight: f64,
}

impl<N> Edge<N> {
    pub fn new(from: N, to: N, weight: f64) -> Self {
        Edge { from, to, weight }
    }
}

impl<N: PartialEq> Edge<N> {
    /// True if this edge joins `a` and `b` in either direction
    pub fn connects(&self, a: &N, b: &N) -> bool {
        (self.from == *a && self.to == *b) || (self.from == *b && self.to == *a)
    }
}

impl<N> From<(N, N, f64)> for Edge<N> {
    fn from((from, to, weight): (N, N, f64)) -> Self {
        Edge { from, to, weight }
    }
}

/// Graph with a deterministic (insertion-ordered) node set.
///
/// Edges are appended verbatim: endpoints are not checked against the node
/// set and parallel edges are kept. Unknown endpoints surface later, when a
/// spanning tree is computed.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    nodes: IndexSet<N>,
    edges: Vec<Edge<N>>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Graph {
            nodes: IndexSet::new(),
            edges: Vec::new(),
        }
    }
}

impl<N: Eq + Hash> Graph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from node labels and edge triples, in the given order
    pub fn from_parts<I, E>(nodes: I, edges: E) -> Self
    where
        I: IntoIterator<Item = N>,
        E: IntoIterator<Item = (N, N, f64)>,
    {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node);
        }
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Insert a node; adding an existing node changes nothing
    pub fn add_node(&mut self, node: N) {
        self.nodes.insert(node);
    }

    /// Append an edge record unconditionally
    pub fn add_edge(&mut self, from: N, to: N, weight: f64) {
        self.edges.push(Edge { from, to, weight });
    }

    /// Record one undirected edge. No reverse duplicate is needed since
    /// every edge is scanned as an unordered pair.
    pub fn add_undirected_edge(&mut self, a: N, b: N, weight: f64) {
        self.add_edge(a, b, weight);
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    /// Position of `node` in insertion order
    pub fn node_index(&self, node: &N) -> Option<usize> {
        self.nodes.get_index_of(node)
    }

    pub fn node_at(&self, index: usize) -> Option<&N> {
        self.nodes.get_index(index)
    }

    pub(crate) fn node_set(&self) -> &IndexSet<N> {
        &self.nodes
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.iter()
    }

    pub fn edges(&self) -> &[Edge<N>] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
