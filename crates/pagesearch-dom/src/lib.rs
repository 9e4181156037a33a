//! Host document environment for pagesearch.
//!
//! The search engine never touches a concrete document directly. It talks
//! to a [`HostDocument`], a narrow interface exposing exactly the tree
//! primitives it needs:
//! - traversal (parent, children, node kind)
//! - computed style queries (display, visibility)
//! - node creation, splicing and text normalization
//! - class toggling and scroll-into-view requests
//!
//! [`Document`] is the in-memory, arena-backed implementation used by the
//! CLI and by tests.

pub mod document;
pub mod host;
pub mod node;

pub use document::{Document, NodeSpec, ScrollRequest, SCROLL_HISTORY_LIMIT};
pub use host::{HostDocument, ScrollBehavior, ScrollBlock, ScrollOptions};
pub use node::{ComputedStyle, Display, ElementData, NodeId, NodeKind, Visibility};
