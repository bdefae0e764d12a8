//! Kruskal's algorithm for minimum and maximum spanning trees.
//!
//! Edges are sorted by weight (stable, so equal weights keep insertion order),
//! then scanned once. An edge is accepted when its endpoints have different
//! disjoint-set roots, otherwise it would close a cycle and is skipped. A
//! disconnected graph yields a spanning forest.

use log::debug;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::GraphError;
use crate::graph::{Edge, Graph};
use crate::union_find::UnionFind;

/// Which extreme of total weight to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanMode {
    Minimum,
    Maximum,
}

impl FromStr for SpanMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "min" | "minimum" => Ok(SpanMode::Minimum),
            "max" | "maximum" => Ok(SpanMode::Maximum),
            _ => Err(format!("Invalid spanning tree mode '{s}'. Use: min or max")),
        }
    }
}

impl fmt::Display for SpanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanMode::Minimum => write!(f, "minimum"),
            SpanMode::Maximum => write!(f, "maximum"),
        }
    }
}

/// Disjoint sets keyed by node label, valid for one spanning-tree computation.
///
/// Every node of the graph starts as its own root with rank 0. Labels that
/// are not in the graph's node set are rejected instead of being registered.
pub struct DisjointSet<'g, N> {
    graph: &'g Graph<N>,
    sets: UnionFind,
}

impl<'g, N: Eq + Hash + fmt::Debug> DisjointSet<'g, N> {
    pub fn new(graph: &'g Graph<N>) -> Self {
        DisjointSet {
            graph,
            sets: UnionFind::new(graph.node_count()),
        }
    }

    fn index_of(&self, node: &N) -> Result<usize, GraphError> {
        self.graph
            .node_index(node)
            .ok_or_else(|| GraphError::UnknownNode(format!("{node:?}")))
    }

    /// Representative of the set containing `node`, compressing the path to it
    pub fn find(&mut self, node: &N) -> Result<&'g N, GraphError> {
        let index = self.index_of(node)?;
        let root = self.sets.find(index);
        let graph: &'g Graph<N> = self.graph;
        Ok(&graph.node_set()[root])
    }

    /// Merge the sets of `x` and `y` by rank; on a tie the root of `x` wins.
    /// Returns the representative of the merged set.
    pub fn union(&mut self, x: &N, y: &N) -> Result<&'g N, GraphError> {
        let x = self.index_of(x)?;
        let y = self.index_of(y)?;
        let root = self.sets.union(x, y);
        let graph: &'g Graph<N> = self.graph;
        Ok(&graph.node_set()[root])
    }

    /// Rank of `node`'s entry (meaningful for roots)
    pub fn rank(&self, node: &N) -> Result<usize, GraphError> {
        Ok(self.sets.rank(self.index_of(node)?))
    }
}

/// Edges accepted by one Kruskal scan, in acceptance order
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<N> {
    mode: SpanMode,
    edges: Vec<Edge<N>>,
    positions: Vec<usize>,
}

impl<N> SpanningTree<N> {
    pub fn mode(&self) -> SpanMode {
        self.mode
    }

    pub fn edges(&self) -> &[Edge<N>] {
        &self.edges
    }

    /// Index of each accepted edge in the graph's edge list
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge<N>> {
        self.edges.iter()
    }

    pub fn into_edges(self) -> Vec<Edge<N>> {
        self.edges
    }
}

impl<'a, N> IntoIterator for &'a SpanningTree<N> {
    type Item = &'a Edge<N>;
    type IntoIter = std::slice::Iter<'a, Edge<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// Compute the minimum or maximum spanning tree (forest) of `graph`.
///
/// The graph is read-only; the disjoint-set scratch state lives only for this
/// call. The whole sorted edge list is scanned, so an edge naming a node that
/// was never added fails with [`GraphError::UnknownNode`] even when the tree is
/// already complete. A graph with no nodes and no edges gives an empty tree.
pub fn compute_spanning_tree<N>(
    graph: &Graph<N>,
    mode: SpanMode,
) -> Result<SpanningTree<N>, GraphError>
where
    N: Eq + Hash + Clone + fmt::Debug,
{
    let edges = graph.edges();
    let mut order = (0..edges.len()).collect::<Vec<_>>();
    match mode {
        SpanMode::Minimum => order.sort_by_key(|&i| OrderedFloat(edges[i].weight)),
        SpanMode::Maximum => order.sort_by_key(|&i| Reverse(OrderedFloat(edges[i].weight))),
    }

    let mut sets = DisjointSet::new(graph);
    let capacity = graph.node_count().saturating_sub(1).min(edges.len());
    let mut accepted = Vec::with_capacity(capacity);
    let mut positions = Vec::with_capacity(capacity);

    for i in order {
        let edge = &edges[i];
        let root_from = sets.find(&edge.from)?;
        let root_to = sets.find(&edge.to)?;
        if root_from != root_to {
            sets.union(root_from, root_to)?;
            accepted.push(edge.clone());
            positions.push(i);
        }
    }

    debug!(
        "[spantree] {} scan: {} nodes, {} edges, {} accepted, {} rejected",
        mode,
        graph.node_count(),
        edges.len(),
        accepted.len(),
        edges.len() - accepted.len()
    );

    Ok(SpanningTree {
        mode,
        edges: accepted,
        positions,
    })
}

/// Compute the minimum and maximum trees concurrently over the same graph
pub fn compute_both<N>(
    graph: &Graph<N>,
) -> Result<(SpanningTree<N>, SpanningTree<N>), GraphError>
where
    N: Eq + Hash + Clone + fmt::Debug + Send + Sync,
{
    let (minimum, maximum) = rayon::join(
        || compute_spanning_tree(graph, SpanMode::Minimum),
        || compute_spanning_tree(graph, SpanMode::Maximum),
    );
    Ok((minimum?, maximum?))
}

impl<N: Eq + Hash + Clone + fmt::Debug> Graph<N> {
    /// Method form of [`compute_spanning_tree`]
    pub fn spanning_tree(&self, mode: SpanMode) -> Result<SpanningTree<N>, GraphError> {
        compute_spanning_tree(self, mode)
    }
}
