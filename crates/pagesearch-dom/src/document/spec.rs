//! Declarative node trees and the JSON / plain-text loaders built on them.

use pagesearch_common::PageSearchError;
use serde::{Deserialize, Serialize};

use crate::host::HostDocument;
use crate::node::{Display, NodeId, Visibility};

use super::arena::Document;

/// A node description: either bare text or an element with children.
///
/// Serialized form:
/// `{"tag": "p", "id": "x", "class": ["a"], "style": {"display": "none"}, "children": ["text", {...}]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeSpec {
    Text(String),
    Element(ElementSpec),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSpec {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class: Vec<String>,
    #[serde(default)]
    pub style: StyleSpec,
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSpec {
    pub display: Option<Display>,
    pub visibility: Option<Visibility>,
}

impl NodeSpec {
    pub fn text(text: impl Into<String>) -> Self {
        NodeSpec::Text(text.into())
    }

    pub fn element(tag: impl Into<String>, children: Vec<NodeSpec>) -> Self {
        NodeSpec::Element(ElementSpec {
            tag: tag.into(),
            id: None,
            class: Vec::new(),
            style: StyleSpec::default(),
            children,
        })
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        if let NodeSpec::Element(el) = &mut self {
            el.id = Some(id.into());
        }
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        if let NodeSpec::Element(el) = &mut self {
            el.class.push(class.into());
        }
        self
    }

    pub fn with_display(mut self, display: Display) -> Self {
        if let NodeSpec::Element(el) = &mut self {
            el.style.display = Some(display);
        }
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        if let NodeSpec::Element(el) = &mut self {
            el.style.visibility = Some(visibility);
        }
        self
    }
}

impl Document {
    /// Build a document whose `<body>` holds `children`.
    pub fn from_specs(children: &[NodeSpec]) -> Self {
        let mut doc = Document::new();
        let body = doc.body();
        for spec in children {
            doc.insert_spec(body, spec);
        }
        doc
    }

    /// Materialize `spec` as the last child of `parent`.
    pub fn insert_spec(&mut self, parent: NodeId, spec: &NodeSpec) -> NodeId {
        match spec {
            NodeSpec::Text(text) => self.append_text(parent, text),
            NodeSpec::Element(el) => {
                let id = self.append_element(parent, &el.tag);
                self.apply_element_spec(id, el);
                for child in &el.children {
                    self.insert_spec(id, child);
                }
                id
            }
        }
    }

    /// Parse a JSON document.
    ///
    /// Accepts a `body` element (its attributes apply to the document body),
    /// any other single node (appended to the body), or an array of nodes.
    pub fn from_json(json: &str) -> Result<Self, PageSearchError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| PageSearchError::Document(format!("invalid JSON: {e}")))?;

        let specs: Vec<NodeSpec> = if value.is_array() {
            serde_json::from_value(value)
                .map_err(|e| PageSearchError::Document(format!("invalid node list: {e}")))?
        } else {
            let spec: NodeSpec = serde_json::from_value(value)
                .map_err(|e| PageSearchError::Document(format!("invalid node: {e}")))?;
            match spec {
                NodeSpec::Element(el) if el.tag.eq_ignore_ascii_case("body") => {
                    let mut doc = Document::new();
                    let body = doc.body();
                    doc.apply_element_spec(body, &el);
                    for child in &el.children {
                        doc.insert_spec(body, child);
                    }
                    return Ok(doc);
                }
                other => vec![other],
            }
        };

        Ok(Self::from_specs(&specs))
    }

    /// Build a document from plain text: each blank-line separated
    /// paragraph becomes a `<p>`.
    pub fn from_plain_text(text: &str) -> Self {
        let mut doc = Document::new();
        let body = doc.body();
        let mut paragraph: Vec<&str> = Vec::new();

        for line in text.lines() {
            if line.trim().is_empty() {
                doc.flush_paragraph(body, &mut paragraph);
            } else {
                paragraph.push(line);
            }
        }
        doc.flush_paragraph(body, &mut paragraph);
        doc
    }

    fn flush_paragraph(&mut self, body: NodeId, lines: &mut Vec<&str>) {
        if lines.is_empty() {
            return;
        }
        let p = self.append_element(body, "p");
        self.append_text(p, &lines.join("\n"));
        lines.clear();
    }

    fn apply_element_spec(&mut self, id: NodeId, el: &ElementSpec) {
        if let Some(dom_id) = &el.id {
            self.set_element_id(id, dom_id);
        }
        for class in &el.class {
            self.add_class(id, class);
        }
        if let Some(display) = el.style.display {
            self.set_display(id, display);
        }
        if let Some(visibility) = el.style.visibility {
            self.set_visibility(id, visibility);
        }
    }
}
