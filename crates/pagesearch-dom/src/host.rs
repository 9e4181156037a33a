//! The `HostDocument` trait: the tree primitives the search engine needs.

use crate::node::{ComputedStyle, NodeId, NodeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    Auto,
    #[default]
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBlock {
    Start,
    #[default]
    Center,
    End,
    Nearest,
}

/// Options for a scroll-into-view request.
///
/// The default is what match navigation uses: smooth, vertically centered,
/// horizontally nearest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
    pub inline: ScrollBlock,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            behavior: ScrollBehavior::Smooth,
            block: ScrollBlock::Center,
            inline: ScrollBlock::Nearest,
        }
    }
}

/// A live, mutable document tree.
///
/// Implementations own every node; callers hold `NodeId`s. Structural
/// mutation goes through `append_child`, `replace_with`, `remove` and
/// `normalize` only, so an implementation can keep its parent/child links
/// consistent. `normalize` may discard the text nodes it merges away.
///
/// Lookups with an id the document does not hold must not panic: they
/// report a detached, empty node, and mutations through it do nothing.
pub trait HostDocument {
    /// Root of the rendered content (`<body>`).
    fn body(&self) -> NodeId;

    /// Container for injected style declarations (`<head>`).
    fn head(&self) -> NodeId;

    /// True if `id` names a live node of this document.
    fn contains(&self, id: NodeId) -> bool;

    fn kind(&self, id: NodeId) -> &NodeKind;

    fn parent(&self, id: NodeId) -> Option<NodeId>;

    fn children(&self, id: NodeId) -> &[NodeId];

    /// Resolved style of an element. Text nodes report their parent's style.
    fn computed_style(&self, id: NodeId) -> ComputedStyle;

    fn get_element_by_id(&self, dom_id: &str) -> Option<NodeId>;

    fn add_class(&mut self, id: NodeId, class: &str);

    fn remove_class(&mut self, id: NodeId, class: &str);

    fn set_element_id(&mut self, id: NodeId, dom_id: &str);

    fn create_text(&mut self, text: &str) -> NodeId;

    fn create_element(&mut self, tag: &str) -> NodeId;

    /// Replace all children of `id` with a single text node.
    fn set_text_content(&mut self, id: NodeId, text: &str);

    fn append_child(&mut self, parent: NodeId, child: NodeId);

    /// Splice `replacement` into `old`'s position and detach `old`.
    ///
    /// No-op when `old` has no parent.
    fn replace_with(&mut self, old: NodeId, replacement: &[NodeId]);

    /// Detach `id` and discard it together with its subtree. Its id, and
    /// those of its descendants, stop naming anything.
    ///
    /// The document's own root, head and body cannot be removed.
    fn remove(&mut self, id: NodeId);

    /// Merge adjacent text nodes and drop empty ones, throughout the subtree.
    fn normalize(&mut self, id: NodeId);

    fn scroll_into_view(&mut self, id: NodeId, options: ScrollOptions);

    fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.kind(id).as_element().map(|el| el.tag.as_str())
    }

    fn text(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Text(t) => Some(t.as_str()),
            NodeKind::Element(_) => None,
        }
    }

    fn element_id(&self, id: NodeId) -> Option<&str> {
        self.kind(id).as_element().and_then(|el| el.dom_id.as_deref())
    }

    fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.kind(id)
            .as_element()
            .is_some_and(|el| el.has_class(class))
    }

    /// Nearest self-or-ancestor element whose id attribute is `dom_id`.
    fn closest_with_id(&self, id: NodeId, dom_id: &str) -> Option<NodeId> {
        let mut cursor = Some(id);
        while let Some(node) = cursor {
            if self.element_id(node) == Some(dom_id) {
                return Some(node);
            }
            cursor = self.parent(node);
        }
        None
    }

    /// Concatenated character data of every descendant text node.
    fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            match self.kind(node) {
                NodeKind::Text(t) => out.push_str(t),
                NodeKind::Element(_) => {
                    stack.extend(self.children(node).iter().rev().copied());
                }
            }
        }
        out
    }
}
