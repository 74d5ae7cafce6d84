//! Abstract graph description handed to the rendering engine.

use std::collections::BTreeSet;

use crate::category::Category;
use crate::dot::DotBuilder;

/// Graph name written into the DOT header.
pub const GRAPH_NAME: &str = "auto";

/// Graph-level attributes.
pub const GRAPH_ATTRS: [(&str, &str); 1] = [("bgcolor", "transparent")];

/// Node defaults: filled, fixed-size shapes.
pub const NODE_ATTRS: [(&str, &str); 3] = [("style", "filled"), ("fixedsize", "true"), ("width", "0.95")];

/// A drawn node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub fill_color: &'static str,
    pub category: Category,
}

/// A directed edge; `category` is the category that owns the relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub category: Category,
}

/// Nodes and edges projected from a repository model.
///
/// Built once by the projector, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct GitGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

impl GitGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_node(&mut self, node: GraphNode) {
        self.nodes.push(node);
    }

    pub(crate) fn add_edge(&mut self, edge: GraphEdge) {
        self.edges.push(edge);
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Node ids, order-independent.
    pub fn node_ids(&self) -> BTreeSet<&str> {
        self.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    /// `(from, to)` pairs, order-independent.
    pub fn edge_pairs(&self) -> BTreeSet<(&str, &str)> {
        self.edges
            .iter()
            .map(|e| (e.from.as_str(), e.to.as_str()))
            .collect()
    }

    pub fn find_node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Serialize to DOT source.
    pub fn to_dot(&self) -> String {
        let mut dot = DotBuilder::new(GRAPH_NAME);
        for (key, value) in GRAPH_ATTRS {
            dot.attr(key, value);
        }
        dot.node_style(&NODE_ATTRS).blank();

        for node in &self.nodes {
            dot.node(
                &node.id,
                &[("label", node.label.as_str()), ("fillcolor", node.fill_color)],
            );
        }
        if !self.edges.is_empty() {
            dot.blank();
        }
        for edge in &self.edges {
            dot.edge(&edge.from, &edge.to);
        }
        dot.build()
    }
}
