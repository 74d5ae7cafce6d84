use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use gitgraph::{GraphOptions, OUTPUT_DIR, run_main};
use gitgraph_dot::DEFAULT_NODES;
use gitgraph_error::Result;

const EXAMPLES: &str = "\
examples:
    git graph
    git graph -p demos/repo -n btc -f svg";

const NODES_HELP: &str = "\
node types to display in the graph (default is all).
'commits' and 'branches' will focus output on commits and branches respectively.
For further control, you can also pick the letters corresponding to your choice:
| Node type      | Letter |
| -------------- | ------ |
| blob           | b      |
| tree           | t      |
| commit         | c      |
| local branch   | l      |
| local head     | h      |
| remote branch  | r      |
| remote head    | d      |
| remote server  | s      |
| annotated tag  | a      |
| tag            | g      |
| upstream link  | u      |";

#[derive(Parser, Debug)]
#[command(
    name = "git graph",
    about = "Save and display your Git repositories inner content as a Directed Acyclic Graph (DAG)",
    version,
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Path to your git repository (default is here)
    #[arg(short = 'p', long = "path", value_name = "PATH", default_value = ".")]
    path: PathBuf,

    /// Node types to display: all, commits, branches or category letters
    #[arg(
        short = 'n',
        long = "nodes",
        value_name = "NODES",
        default_value = DEFAULT_NODES,
        long_help = NODES_HELP
    )]
    nodes: String,

    /// Format of graph output: pdf, svg, png... (default is pdf)
    #[arg(short = 'f', long = "format", value_name = "FORMAT", default_value = "pdf")]
    format: String,

    /// Conceal graph (activated by default)
    #[arg(short = 'c', long = "conceal", conflicts_with = "show")]
    conceal: bool,

    /// Show graph in the default viewer
    #[arg(short = 's', long = "show")]
    show: bool,

    /// Graphviz `dot` binary to render with (default: `dot` on PATH)
    #[arg(long = "dot", value_name = "PATH", env = "GIT_GRAPH_DOT")]
    dot: Option<PathBuf>,
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = GraphOptions::new()
        .with_path(args.path)
        .with_nodes(args.nodes)
        .with_format(args.format)
        .with_conceal(args.conceal || !args.show)
        .with_dot_binary(args.dot);

    match run_main(&opts) {
        Ok(artifact) => {
            println!("{} saved in {}", artifact.file_name, OUTPUT_DIR);
        }
        Err(e) => {
            tracing::error!(error = %e, "execution failed");
            return Err(e);
        }
    }

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    Ok(())
}

pub fn main() -> Result<()> {
    let args = Cli::parse();
    run(args)
}
