//! Match-highlight engine.
//!
//! Owns every `<mark>` it splices into the document. The match list is
//! filled by a single left-to-right walk over the scanner's segments, and
//! a single left-to-right scan within each segment, so it is always in
//! document order. The cursor is unset after every rebuild or clear.

mod apply;
mod navigation;
mod restore;
mod styles;


pub use apply::compile_pattern;
pub use styles::{CURRENT_CLASS, HIGHLIGHT_CLASS, HIGHLIGHT_CSS, STYLE_ELEMENT_ID};

use pagesearch_dom::NodeId;

use crate::scanner::ContentScanner;

/// One match rendered in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchHandle {
    /// The `<mark>` element the engine created.
    pub node: NodeId,
    /// The exact matched substring.
    pub text: String,
}

/// Fragments that replaced one original text segment, in order.
#[derive(Debug, Clone)]
pub(crate) struct SplicedRun {
    pub(crate) parent: NodeId,
    /// The detached text node the fragments replaced.
    pub(crate) original_node: NodeId,
    pub(crate) original: String,
    pub(crate) fragments: Vec<NodeId>,
}

/// Applies patterns to one document and restores it afterwards.
///
/// A highlighter holds ids into the document it last touched, so every
/// call after an `apply` must pass that same document until `clear` has
/// run. Handing it a different one does not panic, but leaves the first
/// document's highlights in place.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    scanner: ContentScanner,
    matches: Vec<MatchHandle>,
    runs: Vec<SplicedRun>,
    cursor: Option<usize>,
    style_node: Option<NodeId>,
}

impl Highlighter {
    pub fn new(scanner: ContentScanner) -> Self {
        Self {
            scanner,
            matches: Vec::new(),
            runs: Vec::new(),
            cursor: None,
            style_node: None,
        }
    }

    /// Recorded matches in document order.
    pub fn matches(&self) -> &[MatchHandle] {
        &self.matches
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Zero-based index of the current match, if navigation has happened.
    pub fn current_index(&self) -> Option<usize> {
        self.cursor
    }

    pub fn current_match(&self) -> Option<&MatchHandle> {
        self.cursor.and_then(|idx| self.matches.get(idx))
    }

    pub fn scanner(&self) -> &ContentScanner {
        &self.scanner
    }
}
