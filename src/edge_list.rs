/// Plain-text edge lists: reading graphs in, writing spanning trees out
///
/// Input format, one record per line, whitespace separated:
///   `# ...`            comment
///   `<node>`           node declaration
///   `<from> <to> <w>`  weighted edge
use anyhow::{bail, Context, Result};
use flate2::read::MultiGzDecoder;
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::graph::Graph;
use crate::kruskal::SpanningTree;

/// Open a file, transparently decompressing `.gz` inputs
pub fn open_edge_list<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

    let is_compressed = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    if is_compressed {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Parse an edge list into a graph.
///
/// Unless `strict_nodes` is set, both endpoints of every edge are added as
/// nodes. In strict mode only declared nodes exist, and an undeclared
/// endpoint is reported when the spanning tree is computed.
pub fn read_edge_list<R: BufRead>(reader: R, strict_nodes: bool) -> Result<Graph<String>> {
    let mut graph = Graph::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        match fields.as_slice() {
            [node] => graph.add_node(node.to_string()),
            [from, to, weight] => {
                let weight = weight.parse::<f64>().with_context(|| {
                    format!("Line {}: invalid weight '{}'", line_no + 1, weight)
                })?;
                if !strict_nodes {
                    graph.add_node(from.to_string());
                    graph.add_node(to.to_string());
                }
                graph.add_edge(from.to_string(), to.to_string(), weight);
            }
            _ => bail!(
                "Line {}: expected 1 field (node) or 3 fields (from to weight), got {}: '{}'",
                line_no + 1,
                fields.len(),
                trimmed
            ),
        }
    }

    debug!(
        "[spantree] Read {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Read a graph from a path, or from stdin when the path is `-`
pub fn read_edge_list_path(path: &str, strict_nodes: bool) -> Result<Graph<String>> {
    if path == "-" {
        let stdin = io::stdin();
        return read_edge_list(stdin.lock(), strict_nodes);
    }
    let reader = open_edge_list(path)?;
    read_edge_list(reader, strict_nodes).with_context(|| format!("Failed to parse {path}"))
}

/// Write a spanning tree as a comment header plus tab-separated edges in
/// acceptance order
pub fn write_spanning_tree<W: Write>(writer: &mut W, tree: &SpanningTree<String>) -> Result<()> {
    writeln!(
        writer,
        "# {} spanning tree: {} edges, total weight {}",
        tree.mode(),
        tree.len(),
        tree.total_weight()
    )?;
    for edge in tree {
        writeln!(writer, "{}\t{}\t{}", edge.from, edge.to, edge.weight)?;
    }
    Ok(())
}

/// Write a graph back out in the input format: node lines, then edge lines
pub fn write_edge_list<W: Write>(writer: &mut W, graph: &Graph<String>) -> Result<()> {
    for node in graph.nodes() {
        writeln!(writer, "{node}")?;
    }
    for edge in graph.edges() {
        writeln!(writer, "{}\t{}\t{}", edge.from, edge.to, edge.weight)?;
    }
    Ok(())
}
