//! Node storage and the `HostDocument` implementation.

use crate::host::{HostDocument, ScrollOptions};
use crate::node::{ComputedStyle, Display, ElementData, NodeId, NodeKind, Visibility};

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// One arena cell. `generation` bumps every time the slot is reused.
#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<NodeData>,
}

/// A scroll-into-view request recorded by [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub node: NodeId,
    pub options: ScrollOptions,
}

/// Scroll requests kept by a [`Document`]; older ones are dropped.
pub const SCROLL_HISTORY_LIMIT: usize = 64;

/// What `kind` reports for an id this document does not hold.
static MISSING: NodeKind = NodeKind::Text(String::new());

/// In-memory document: `<html>` with a `<head>` and a `<body>`.
///
/// Nodes live in a flat arena. Detaching a node only clears its parent
/// link; [`HostDocument::remove`] frees a subtree and its slots are reused
/// by later allocations. Ids that were never issued by this document, or
/// whose node has been removed, read as empty detached text and are
/// ignored by every mutator.
///
/// Scroll requests are recorded instead of performed.
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    scrolls: Vec<ScrollRequest>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let placeholder = NodeId::new(0, 0);
        let mut doc = Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: placeholder,
            head: placeholder,
            body: placeholder,
            scrolls: Vec::new(),
        };
        doc.root = doc.alloc(NodeKind::Element(ElementData::new("html")));
        doc.head = doc.alloc(NodeKind::Element(ElementData::new("head")));
        doc.body = doc.alloc(NodeKind::Element(ElementData::new("body")));
        doc.append_child(doc.root, doc.head);
        doc.append_child(doc.root, doc.body);
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Create an element and append it to `parent`.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = self.create_element(tag);
        self.append_child(parent, id);
        id
    }

    /// Create a text node and append it to `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let id = self.create_text(text);
        self.append_child(parent, id);
        id
    }

    pub fn set_display(&mut self, id: NodeId, display: Display) {
        if let Some(el) = self.element_mut(id) {
            el.display = Some(display);
        }
    }

    pub fn set_visibility(&mut self, id: NodeId, visibility: Visibility) {
        if let Some(el) = self.element_mut(id) {
            el.visibility = Some(visibility);
        }
    }

    /// The most recent scroll-into-view requests, oldest first, at most
    /// [`SCROLL_HISTORY_LIMIT`] of them.
    pub fn scroll_history(&self) -> &[ScrollRequest] {
        &self.scrolls
    }

    pub fn last_scroll(&self) -> Option<&ScrollRequest> {
        self.scrolls.last()
    }

    /// Number of live nodes, attached or not.
    pub fn node_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Number of arena slots ever allocated, live or free.
    pub fn arena_len(&self) -> usize {
        self.slots.len()
    }

    /// True if `id` is reachable from the document root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut cursor = self.node(id).map(|_| id);
        while let Some(node) = cursor {
            if node == self.root {
                return true;
            }
            cursor = self.node(node).and_then(|n| n.parent);
        }
        false
    }

    /// Elements with class `class` in document order.
    pub fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|&id| self.has_class(id, class))
            .collect()
    }

    /// `id` and all its descendants in depth-first, left-to-right order.
    /// Empty if `id` is not a live node.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            let Some(data) = self.node(node) else {
                continue;
            };
            out.push(node);
            stack.extend(data.children.iter().rev().copied());
        }
        out
    }

    fn node(&self, id: NodeId) -> Option<&NodeData> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    pub(crate) fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let data = NodeData {
            kind,
            parent: None,
            children: Vec::new(),
        };
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.generation = slot.generation.wrapping_add(1);
            slot.node = Some(data);
            return NodeId::new(index, slot.generation);
        }
        self.slots.push(Slot {
            generation: 0,
            node: Some(data),
        });
        NodeId::new(self.slots.len() - 1, 0)
    }

    /// Drop `id`'s subtree from the arena. The caller has already unlinked
    /// `id` from its parent.
    fn release(&mut self, id: NodeId) {
        for node in self.descendants(id) {
            if let Some(slot) = self.slots.get_mut(node.index) {
                slot.node = None;
                self.free.push(node.index);
            }
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::Element(el) => Some(el),
            NodeKind::Text(_) => None,
        }
    }

    fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>) {
        if let Some(node) = self.node_mut(id) {
            node.parent = parent;
        }
    }

    fn detach(&mut self, id: NodeId) {
        let parent = self.node_mut(id).and_then(|n| n.parent.take());
        if let Some(node) = parent.and_then(|p| self.node_mut(p)) {
            node.children.retain(|&c| c != id);
        }
    }

    /// True if `id` is `node` or one of its ancestors.
    fn is_ancestor_or_self(&self, id: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if current == id {
                return true;
            }
            cursor = self.node(current).and_then(|n| n.parent);
        }
        false
    }

    /// Merge runs of adjacent text children of `id`, freeing the ones that
    /// were merged away or were empty.
    fn normalize_children(&mut self, id: NodeId) {
        let Some(children) = self.node_mut(id).map(|n| std::mem::take(&mut n.children)) else {
            return;
        };
        let mut merged: Vec<NodeId> = Vec::with_capacity(children.len());
        let mut dropped: Vec<NodeId> = Vec::new();

        for child in children {
            let text = match self.node(child).map(|n| &n.kind) {
                Some(NodeKind::Text(t)) => Some(t.clone()),
                Some(NodeKind::Element(_)) => None,
                None => continue,
            };
            match text {
                Some(t) if t.is_empty() => dropped.push(child),
                Some(t) => {
                    let prev_text = merged
                        .last()
                        .filter(|&&prev| self.kind(prev).is_text())
                        .copied();
                    match prev_text {
                        Some(prev) => {
                            if let Some(NodeKind::Text(existing)) =
                                self.node_mut(prev).map(|n| &mut n.kind)
                            {
                                existing.push_str(&t);
                            }
                            dropped.push(child);
                        }
                        None => merged.push(child),
                    }
                }
                None => merged.push(child),
            }
        }

        if let Some(node) = self.node_mut(id) {
            node.children = merged;
        }
        for child in dropped {
            self.set_parent(child, None);
            self.release(child);
        }
    }
}

impl HostDocument for Document {
    fn body(&self) -> NodeId {
        self.body
    }

    fn head(&self) -> NodeId {
        self.head
    }

    fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    fn kind(&self, id: NodeId) -> &NodeKind {
        self.node(id).map_or(&MISSING, |n| &n.kind)
    }

    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    fn computed_style(&self, id: NodeId) -> ComputedStyle {
        // display:none anywhere up the chain hides the subtree; visibility
        // inherits from the nearest element that sets it.
        let mut style = ComputedStyle::default();
        let mut visibility: Option<Visibility> = None;
        let mut own_display: Option<Display> = None;
        let mut first = true;
        let mut cursor = Some(id);

        while let Some(node) = cursor {
            let Some(data) = self.node(node) else {
                break;
            };
            if let NodeKind::Element(el) = &data.kind {
                if el.display == Some(Display::None) {
                    style.display = Display::None;
                }
                if first {
                    own_display = el.display;
                    first = false;
                }
                if visibility.is_none() {
                    visibility = el.visibility;
                }
            }
            cursor = data.parent;
        }

        if style.display != Display::None {
            style.display = own_display.unwrap_or_default();
        }
        style.visibility = visibility.unwrap_or_default();
        style
    }

    fn get_element_by_id(&self, dom_id: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|&id| self.element_id(id) == Some(dom_id))
    }

    fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(el) = self.element_mut(id) {
            if !el.has_class(class) {
                el.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(el) = self.element_mut(id) {
            el.classes.retain(|c| c != class);
        }
    }

    fn set_element_id(&mut self, id: NodeId, dom_id: &str) {
        if let Some(el) = self.element_mut(id) {
            el.dom_id = Some(dom_id.to_string());
        }
    }

    fn create_text(&mut self, text: &str) -> NodeId {
        self.alloc(NodeKind::Text(text.to_string()))
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(NodeKind::Element(ElementData::new(tag)))
    }

    fn set_text_content(&mut self, id: NodeId, text: &str) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        if node.kind.is_text() {
            node.kind = NodeKind::Text(text.to_string());
            return;
        }
        for child in std::mem::take(&mut node.children) {
            self.set_parent(child, None);
        }
        if !text.is_empty() {
            let t = self.create_text(text);
            self.append_child(id, t);
        }
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.contains(parent) || !self.contains(child) {
            tracing::debug!(%parent, %child, "append_child with unknown node ignored");
            return;
        }
        if self.is_ancestor_or_self(child, parent) {
            tracing::debug!(%parent, %child, "append_child would create a cycle, ignored");
            return;
        }
        self.detach(child);
        self.set_parent(child, Some(parent));
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
    }

    fn replace_with(&mut self, old: NodeId, replacement: &[NodeId]) {
        let Some(parent) = self.parent(old) else {
            tracing::debug!(node = %old, "replace_with on detached node ignored");
            return;
        };
        let replacement: Vec<NodeId> = replacement
            .iter()
            .copied()
            .filter(|&node| self.contains(node) && !self.is_ancestor_or_self(node, parent))
            .collect();
        for &node in &replacement {
            self.detach(node);
        }
        let Some(children) = self.node_mut(parent).map(|n| &mut n.children) else {
            return;
        };
        let Some(pos) = children.iter().position(|&c| c == old) else {
            return;
        };
        children.remove(pos);
        for (offset, &node) in replacement.iter().enumerate() {
            children.insert(pos + offset, node);
        }
        for &node in &replacement {
            self.set_parent(node, Some(parent));
        }
        self.set_parent(old, None);
    }

    fn remove(&mut self, id: NodeId) {
        if [self.root, self.head, self.body].contains(&id) {
            tracing::debug!(node = %id, "remove of a document root ignored");
            return;
        }
        if !self.contains(id) {
            return;
        }
        self.detach(id);
        self.release(id);
    }

    fn normalize(&mut self, id: NodeId) {
        for node in self.descendants(id) {
            // Nodes merged away by an earlier pass are already gone.
            if self.node(node).is_some_and(|n| !n.kind.is_text()) {
                self.normalize_children(node);
            }
        }
    }

    fn scroll_into_view(&mut self, id: NodeId, options: ScrollOptions) {
        if self.scrolls.len() == SCROLL_HISTORY_LIMIT {
            self.scrolls.remove(0);
        }
        self.scrolls.push(ScrollRequest { node: id, options });
    }
}
