//! Deterministic structural dump, one line per node.

use crate::host::HostDocument;
use crate::node::{NodeId, NodeKind};

use super::arena::Document;

impl Document {
    /// Dump the subtree at `id` as indented lines.
    ///
    /// Elements print as `<tag id="x" class="a b">`, text as a quoted,
    /// debug-escaped string. Two documents with equal outlines have the
    /// same structure and text.
    pub fn outline(&self, id: NodeId) -> Vec<String> {
        let mut lines = Vec::new();
        self.outline_into(id, 0, &mut lines);
        lines
    }

    /// Outline of the whole `<body>`.
    pub fn body_outline(&self) -> Vec<String> {
        self.outline(self.body())
    }

    fn outline_into(&self, id: NodeId, depth: usize, out: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        match self.kind(id) {
            NodeKind::Text(text) => out.push(format!("{indent}{text:?}")),
            NodeKind::Element(el) => {
                let mut line = format!("{indent}<{}", el.tag);
                if let Some(dom_id) = &el.dom_id {
                    line.push_str(&format!(" id=\"{dom_id}\""));
                }
                if !el.classes.is_empty() {
                    line.push_str(&format!(" class=\"{}\"", el.classes.join(" ")));
                }
                line.push('>');
                out.push(line);
                for &child in self.children(id) {
                    self.outline_into(child, depth + 1, out);
                }
            }
        }
    }
}
