//! Options for a single git-graph invocation.
//!
//! The binary maps its command line onto [`GraphOptions`]; library callers
//! build one directly.

use std::path::PathBuf;

use gitgraph_dot::DEFAULT_NODES;

/// Default output format.
pub const DEFAULT_FORMAT: &str = "pdf";

/// Default repository path.
pub const CURRENT_FOLDER: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphOptions {
    /// Repository to draw
    pub path: PathBuf,
    /// Selection specifier: `all`, `commits`, `branches` or category letters
    pub nodes: String,
    /// Output format passed to the renderer (pdf, svg, png, ...)
    pub format: String,
    /// Render only; when false the artifact is also opened in a viewer
    pub conceal: bool,
    /// Explicit Graphviz binary, otherwise `dot` on `PATH`
    pub dot_binary: Option<PathBuf>,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(CURRENT_FOLDER),
            nodes: DEFAULT_NODES.to_string(),
            format: DEFAULT_FORMAT.to_string(),
            conceal: true,
            dot_binary: None,
        }
    }
}

impl GraphOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_nodes(mut self, nodes: impl Into<String>) -> Self {
        self.nodes = nodes.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_conceal(mut self, conceal: bool) -> Self {
        self.conceal = conceal;
        self
    }

    pub fn with_dot_binary(mut self, binary: Option<PathBuf>) -> Self {
        self.dot_binary = binary;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = GraphOptions::new();
        assert_eq!(opts.path, PathBuf::from("."));
        assert_eq!(opts.nodes, gitgraph_dot::ALL_NODES);
        assert_eq!(opts.format, "pdf");
        assert!(opts.conceal);
        assert!(opts.dot_binary.is_none());
    }

    #[test]
    fn test_builders() {
        let opts = GraphOptions::new()
            .with_path("/tmp/repo")
            .with_nodes("commits")
            .with_format("svg")
            .with_conceal(false);
        assert_eq!(opts.path, PathBuf::from("/tmp/repo"));
        assert_eq!(opts.nodes, "commits");
        assert_eq!(opts.format, "svg");
        assert!(!opts.conceal);
    }
}
