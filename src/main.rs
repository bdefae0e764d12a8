use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use spantree::edge_list::{read_edge_list, read_edge_list_path, write_spanning_tree};
use spantree::fixtures::Fixture;
use spantree::render::write_dot;
use spantree::{compute_both, compute_spanning_tree, Graph, SpanMode, SpanningTree};

/// Which trees to build: one mode, or both side by side
#[derive(Debug, Clone, Copy, PartialEq)]
enum ModeSelection {
    Single(SpanMode),
    Both,
}

fn parse_mode_selection(s: &str) -> Result<ModeSelection, String> {
    if s.eq_ignore_ascii_case("both") {
        return Ok(ModeSelection::Both);
    }
    SpanMode::from_str(s)
        .map(ModeSelection::Single)
        .map_err(|_| format!("Invalid mode '{s}'. Use: min, max or both"))
}

/// spantree - minimum and maximum spanning trees with Kruskal's algorithm
///
/// Reads a weighted graph as an edge list (or uses a built-in sample) and
/// prints the accepted edges of each tree in acceptance order
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Edge-list file, "-" for stdin. Lines: `node` or `from to weight`; .gz accepted
    #[clap(short = 'i', long = "input", conflicts_with = "graph")]
    input: Option<String>,

    /// Built-in graph: world, life or work
    #[clap(short = 'g', long = "graph", value_parser = Fixture::from_str)]
    graph: Option<Fixture>,

    /// Tree to build: min, max or both
    #[clap(short = 'm', long = "mode", default_value = "both", value_parser = parse_mode_selection)]
    mode: ModeSelection,

    /// Output file for the tree edges (stdout if not specified)
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Also write Graphviz DOT with tree edges highlighted (x.dot -> x.min.dot / x.max.dot with --mode both)
    #[clap(long = "dot")]
    dot: Option<String>,

    /// Only declared nodes exist; undeclared edge endpoints are an error
    #[clap(long = "strict-nodes")]
    strict_nodes: bool,

    /// Number of threads (both trees are built concurrently)
    #[clap(short = 't', long = "threads", default_value = "2")]
    threads: usize,

    /// Quiet mode (warnings and errors only)
    #[clap(long = "quiet", conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (debug logging)
    #[clap(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logging(args: &Args) {
    let default_level = if args.quiet {
        "warn"
    } else if args.verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn load_graph(args: &Args) -> Result<Graph<String>> {
    if let Some(fixture) = args.graph {
        info!("[spantree] Using built-in graph '{fixture}'");
        return Ok(fixture.graph());
    }

    match args.input {
        Some(ref path) => read_edge_list_path(path, args.strict_nodes),
        None => {
            let stdin = io::stdin();
            read_edge_list(stdin.lock(), args.strict_nodes).context("Failed to parse stdin")
        }
    }
}

/// `x.dot` -> `x.min.dot` when several trees share one DOT destination
fn dot_path(base: &str, mode: SpanMode, several: bool) -> PathBuf {
    if !several {
        return PathBuf::from(base);
    }
    let short = match mode {
        SpanMode::Minimum => "min",
        SpanMode::Maximum => "max",
    };
    Path::new(base).with_extension(format!("{short}.dot"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    // If no input specified and stdin is a terminal, print help
    if args.input.is_none() && args.graph.is_none() {
        use std::io::IsTerminal;
        if io::stdin().is_terminal() {
            use clap::CommandFactory;
            Args::command().print_help()?;
            std::process::exit(0);
        }
    }

    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()?;

    let graph = load_graph(&args)?;
    info!(
        "[spantree] Graph: {} nodes, {} edge records",
        graph.node_count(),
        graph.edge_count()
    );

    let trees: Vec<SpanningTree<String>> = match args.mode {
        ModeSelection::Single(mode) => vec![compute_spanning_tree(&graph, mode)
            .with_context(|| format!("Failed to compute {mode} spanning tree"))?],
        ModeSelection::Both => {
            let (minimum, maximum) =
                compute_both(&graph).context("Failed to compute spanning trees")?;
            vec![minimum, maximum]
        }
    };

    for tree in &trees {
        info!(
            "[spantree] {} spanning tree: {} edges, total weight {}",
            tree.mode(),
            tree.len(),
            tree.total_weight()
        );
    }

    let mut output: Box<dyn Write> = match args.output {
        Some(ref path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {path}"))?,
        )),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    for tree in &trees {
        write_spanning_tree(&mut output, tree)?;
    }
    output.flush()?;

    if let Some(ref dot) = args.dot {
        for tree in &trees {
            let path = dot_path(dot, tree.mode(), trees.len() > 1);
            let file = File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_dot(&mut writer, &graph, tree)?;
            writer.flush()?;
            info!("[spantree] Wrote {} tree drawing to {}", tree.mode(), path.display());
        }
    }

    Ok(())
}
