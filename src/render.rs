/// Graphviz export of a graph with one spanning tree highlighted.
///
/// Every edge record is drawn with its weight as label: accepted records in
/// red at double width, the rest in black. Layout is left to Graphviz.
use anyhow::Result;
use std::collections::HashSet;
use std::fmt::Display;
use std::io::Write;

use crate::graph::Graph;
use crate::kruskal::SpanningTree;

const TREE_COLOR: &str = "red";
const EDGE_COLOR: &str = "black";

/// Quote a label for DOT, escaping embedded quotes and backslashes
fn quote<N: Display>(label: &N) -> String {
    let text = label.to_string().replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{text}\"")
}

pub fn write_dot<W, N>(writer: &mut W, graph: &Graph<N>, tree: &SpanningTree<N>) -> Result<()>
where
    W: Write,
    N: Display + Eq + std::hash::Hash,
{
    let accepted: HashSet<usize> = tree.positions().iter().copied().collect();

    writeln!(writer, "graph spanning_tree {{")?;
    writeln!(writer, "  label=\"{} spanning tree, total weight {}\";", tree.mode(), tree.total_weight())?;
    writeln!(writer, "  node [shape=circle, style=filled, fillcolor=skyblue];")?;
    for node in graph.nodes() {
        writeln!(writer, "  {};", quote(node))?;
    }
    for (i, edge) in graph.edges().iter().enumerate() {
        let (color, width) = if accepted.contains(&i) {
            (TREE_COLOR, 2)
        } else {
            (EDGE_COLOR, 1)
        };
        writeln!(
            writer,
            "  {} -- {} [label=\"{}\", color={}, penwidth={}];",
            quote(&edge.from),
            quote(&edge.to),
            edge.weight,
            color,
            width
        )?;
    }
    writeln!(writer, "}}")?;
    Ok(())
}
