//! Content scanner: eligible text segments in document order.

use pagesearch_dom::{HostDocument, NodeId, NodeKind};

/// Id of the element hosting the search panel. Text under it is never
/// matched.
pub const DEFAULT_UI_ROOT_ID: &str = "enhanced-page-search-host";

/// Parent tags whose text is never searchable.
pub const EXCLUDED_TAGS: &[&str] = &[
    "script", "style", "noscript", "iframe", "textarea", "input", "select",
];

/// A run of character data at one tree position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegment {
    pub node: NodeId,
    pub parent: NodeId,
    pub text: String,
}

/// Walks `<body>` depth-first, left to right, and yields the text nodes
/// that are safe and meaningful to highlight. Read-only; nothing is cached.
#[derive(Debug, Clone)]
pub struct ContentScanner {
    ui_root_id: String,
}

impl Default for ContentScanner {
    fn default() -> Self {
        Self::new(DEFAULT_UI_ROOT_ID)
    }
}

impl ContentScanner {
    pub fn new(ui_root_id: impl Into<String>) -> Self {
        Self {
            ui_root_id: ui_root_id.into(),
        }
    }

    pub fn ui_root_id(&self) -> &str {
        &self.ui_root_id
    }

    /// Collect every eligible segment under the document body.
    pub fn scan<D: HostDocument + ?Sized>(&self, doc: &D) -> Vec<TextSegment> {
        let mut segments = Vec::new();
        let mut stack = vec![doc.body()];

        while let Some(node) = stack.pop() {
            match doc.kind(node) {
                NodeKind::Text(text) => {
                    if let Some(parent) = self.eligible_parent(doc, node, text) {
                        segments.push(TextSegment {
                            node,
                            parent,
                            text: text.clone(),
                        });
                    }
                }
                NodeKind::Element(_) => {
                    stack.extend(doc.children(node).iter().rev().copied());
                }
            }
        }

        tracing::trace!(count = segments.len(), "scanned text segments");
        segments
    }

    /// The segment's parent if the text node passes every exclusion rule.
    fn eligible_parent<D: HostDocument + ?Sized>(
        &self,
        doc: &D,
        node: NodeId,
        text: &str,
    ) -> Option<NodeId> {
        if text.trim().is_empty() {
            return None;
        }

        let parent = doc.parent(node)?;

        if !doc.computed_style(parent).is_rendered() {
            return None;
        }

        let tag = doc.tag_name(parent)?;
        if EXCLUDED_TAGS.contains(&tag) {
            return None;
        }

        if doc.closest_with_id(parent, &self.ui_root_id).is_some() {
            return None;
        }

        Some(parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesearch_dom::{Display, Document, NodeSpec, Visibility};

    fn texts(doc: &Document) -> Vec<String> {
        ContentScanner::default()
            .scan(doc)
            .into_iter()
            .map(|s| s.text)
            .collect()
    }

    #[test]
    fn yields_segments_in_document_order() {
        let doc = Document::from_specs(&[
            NodeSpec::element(
                "div",
                vec![
                    NodeSpec::text("first"),
                    NodeSpec::element("span", vec![NodeSpec::text("second")]),
                    NodeSpec::text("third"),
                ],
            ),
            NodeSpec::element("p", vec![NodeSpec::text("fourth")]),
        ]);
        assert_eq!(texts(&doc), vec!["first", "second", "third", "fourth"]);
    }

    #[test]
    fn skips_whitespace_only_text() {
        let doc = Document::from_specs(&[NodeSpec::element(
            "div",
            vec![
                NodeSpec::text("  \n\t "),
                NodeSpec::element("p", vec![NodeSpec::text(" kept ")]),
            ],
        )]);
        assert_eq!(texts(&doc), vec![" kept "]);
    }

    #[test]
    fn skips_excluded_tags() {
        let children: Vec<NodeSpec> = EXCLUDED_TAGS
            .iter()
            .map(|tag| NodeSpec::element(*tag, vec![NodeSpec::text("secret")]))
            .chain(std::iter::once(NodeSpec::element(
                "p",
                vec![NodeSpec::text("visible")],
            )))
            .collect();
        let doc = Document::from_specs(&children);
        assert_eq!(texts(&doc), vec!["visible"]);
    }

    #[test]
    fn excluded_tag_match_is_case_insensitive() {
        let doc = Document::from_specs(&[NodeSpec::element(
            "SCRIPT",
            vec![NodeSpec::text("var x = 1;")],
        )]);
        assert!(texts(&doc).is_empty());
    }

    #[test]
    fn skips_hidden_content() {
        let doc = Document::from_specs(&[
            NodeSpec::element("div", vec![NodeSpec::text("gone")]).with_display(Display::None),
            NodeSpec::element("div", vec![NodeSpec::text("invisible")])
                .with_visibility(Visibility::Hidden),
            NodeSpec::element(
                "div",
                vec![NodeSpec::element("span", vec![NodeSpec::text("nested gone")])],
            )
            .with_display(Display::None),
            NodeSpec::element("div", vec![NodeSpec::text("shown")]),
        ]);
        assert_eq!(texts(&doc), vec!["shown"]);
    }

    #[test]
    fn skips_own_ui_root() {
        let doc = Document::from_specs(&[
            NodeSpec::element(
                "div",
                vec![NodeSpec::element("label", vec![NodeSpec::text("Describe a pattern")])],
            )
            .with_id(DEFAULT_UI_ROOT_ID),
            NodeSpec::element("p", vec![NodeSpec::text("page text")]),
        ]);
        assert_eq!(texts(&doc), vec!["page text"]);
    }

    #[test]
    fn custom_ui_root_id() {
        let doc = Document::from_specs(&[
            NodeSpec::element("div", vec![NodeSpec::text("panel")]).with_id("my-panel"),
            NodeSpec::element("div", vec![NodeSpec::text("default host")])
                .with_id(DEFAULT_UI_ROOT_ID),
        ]);
        let scanner = ContentScanner::new("my-panel");
        let found: Vec<String> = scanner.scan(&doc).into_iter().map(|s| s.text).collect();
        assert_eq!(found, vec!["default host"]);
    }

    #[test]
    fn text_directly_under_body_is_eligible() {
        let doc = Document::from_specs(&[NodeSpec::text("loose")]);
        let segments = ContentScanner::default().scan(&doc);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].parent, doc.body());
    }

    #[test]
    fn head_content_is_not_scanned() {
        let mut doc = Document::from_specs(&[NodeSpec::element("p", vec![NodeSpec::text("body")])]);
        let head = doc.head();
        let title = doc.append_element(head, "title");
        doc.append_text(title, "head title");
        assert_eq!(texts(&doc), vec!["body"]);
    }

    #[test]
    fn scanning_does_not_mutate() {
        let doc = Document::from_specs(&[NodeSpec::element("p", vec![NodeSpec::text("same")])]);
        let before = doc.body_outline();
        let _ = ContentScanner::default().scan(&doc);
        assert_eq!(doc.body_outline(), before);
    }
}
