//! Node identity, node kinds, and style values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to a node in a document arena.
///
/// Ids stay valid after a node is detached; a detached node simply has
/// no parent. Once a node is removed its slot may be reused, and the
/// generation tells the old handle apart from the new occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl NodeId {
    pub(crate) fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Arena slot of this node.
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.generation == 0 {
            write!(f, "node-{}", self.index)
        } else {
            write!(f, "node-{}.{}", self.index, self.generation)
        }
    }
}

/// `display` as far as the scanner cares: either rendered or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    #[default]
    Inline,
    Block,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
    Collapse,
}

/// Resolved style of an element after inheritance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComputedStyle {
    pub display: Display,
    pub visibility: Visibility,
}

impl ComputedStyle {
    pub fn is_rendered(&self) -> bool {
        self.display != Display::None && self.visibility != Visibility::Hidden
    }
}

/// Element payload: tag, id attribute, classes and inline style.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementData {
    pub tag: String,
    pub dom_id: Option<String>,
    pub classes: Vec<String>,
    pub display: Option<Display>,
    pub visibility: Option<Visibility>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Element(ElementData),
    Text(String),
}

impl NodeKind {
    pub fn is_text(&self) -> bool {
        matches!(self, NodeKind::Text(_))
    }

    pub fn as_element(&self) -> Option<&ElementData> {
        match self {
            NodeKind::Element(el) => Some(el),
            NodeKind::Text(_) => None,
        }
    }
}
