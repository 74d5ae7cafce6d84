//! git-graph command-line interface.
//!
//! One invocation is a single sequential pass: read the repository model,
//! resolve the node selection, project the graph, persist and render it.
pub mod options;
pub mod persist;
pub mod render;

use std::time::Instant;

use tracing::info;

use gitgraph_dot::{GitGraph, project, resolve};
use gitgraph_error::Result;

pub use options::{CURRENT_FOLDER, DEFAULT_FORMAT, GraphOptions};
pub use persist::{Artifact, OUTPUT_DIR, persist};
pub use render::{GraphvizRenderer, Renderer};

/// Read the repository and project it onto the selected categories.
pub fn build_graph(opts: &GraphOptions) -> Result<GitGraph> {
    let model = gitgraph_model::open(&opts.path)?;

    let project_start = Instant::now();
    let letters = resolve(&opts.nodes);
    let graph = project(&model, letters);
    info!(
        letters,
        nodes = graph.nodes().len(),
        edges = graph.edges().len(),
        "Graph projection: {:.2}s",
        project_start.elapsed().as_secs_f64()
    );
    Ok(graph)
}

/// Build, persist and render the graph with the given renderer.
pub fn run_with_renderer(opts: &GraphOptions, renderer: &dyn Renderer) -> Result<Artifact> {
    let graph = build_graph(opts)?;
    persist(&graph, &opts.path, &opts.format, opts.conceal, renderer)
}

/// Main entry point: build, persist and render through Graphviz.
pub fn run_main(opts: &GraphOptions) -> Result<Artifact> {
    let graph = build_graph(opts)?;
    let renderer = GraphvizRenderer::locate(opts.dot_binary.as_deref())?;
    persist(&graph, &opts.path, &opts.format, opts.conceal, &renderer)
}
