// Library exports for spantree
pub mod edge_list;
pub mod error;
pub mod fixtures;
pub mod graph;
pub mod kruskal;
pub mod render;
pub mod union_find;

pub use error::GraphError;
pub use graph::{Edge, Graph};
pub use kruskal::{compute_both, compute_spanning_tree, DisjointSet, SpanMode, SpanningTree};
