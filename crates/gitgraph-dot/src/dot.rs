//! DOT format utilities for graph rendering.

use std::fmt::Write;

/// Escape special characters for quoted DOT strings.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Quote a node identifier.
///
/// Branch and remote names carry `/`, `-` and `.`, so ids are always quoted
/// rather than sanitized: the id must stay equal to the model identity.
pub fn quote_id(input: &str) -> String {
    format!("\"{}\"", escape_label(input))
}

/// Write indentation to output.
pub fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

fn write_attrs(output: &mut String, attrs: &[(&str, &str)]) {
    for (i, (key, value)) in attrs.iter().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }
        let _ = write!(output, "{}=\"{}\"", key, escape_label(value));
    }
}

/// A DOT graph builder for constructing valid DOT output.
pub struct DotBuilder {
    output: String,
    indent: usize,
}

impl DotBuilder {
    /// Create a new DOT digraph with the given name.
    pub fn new(name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(output, "digraph {name} {{");
        Self { output, indent: 1 }
    }

    /// Add a graph attribute.
    pub fn attr(&mut self, key: &str, value: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{}=\"{}\";", key, escape_label(value));
        self
    }

    /// Add a node style default.
    pub fn node_style(&mut self, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        self.output.push_str("node [");
        write_attrs(&mut self.output, attrs);
        self.output.push_str("];\n");
        self
    }

    /// Add a blank line for readability.
    pub fn blank(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    /// Add a node with attributes.
    pub fn node(&mut self, id: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{}[", quote_id(id));
        write_attrs(&mut self.output, attrs);
        self.output.push_str("];\n");
        self
    }

    /// Add an edge.
    pub fn edge(&mut self, from: &str, to: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{} -> {};", quote_id(from), quote_id(to));
        self
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_label() {
        assert_eq!(escape_label(r#"a"b"#), r#"a\"b"#);
        assert_eq!(escape_label("a\\b"), "a\\\\b");
        assert_eq!(escape_label("a\nb"), "a\\nb");
    }

    #[test]
    fn test_quote_id_keeps_identity() {
        assert_eq!(quote_id("origin/feature-1.2"), "\"origin/feature-1.2\"");
    }

    #[test]
    fn test_builder_output() {
        let mut dot = DotBuilder::new("auto");
        dot.attr("bgcolor", "transparent")
            .node_style(&[("style", "filled"), ("width", "0.95")])
            .blank()
            .node("main", &[("label", "main"), ("fillcolor", "#9999ff")])
            .edge("main", "abc");

        assert_eq!(
            dot.build(),
            concat!(
                "digraph auto {\n",
                "  bgcolor=\"transparent\";\n",
                "  node [style=\"filled\", width=\"0.95\"];\n",
                "\n",
                "  \"main\"[label=\"main\", fillcolor=\"#9999ff\"];\n",
                "  \"main\" -> \"abc\";\n",
                "}\n",
            )
        );
    }
}
