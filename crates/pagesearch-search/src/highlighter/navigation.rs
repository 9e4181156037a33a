//! Cyclic next/previous navigation over recorded matches.

use pagesearch_common::MatchPosition;
use pagesearch_dom::{HostDocument, ScrollOptions};

use super::styles::CURRENT_CLASS;
use super::Highlighter;

impl Highlighter {
    /// Move to the next match, wrapping from last to first.
    ///
    /// Starts at the first match when no match is current. Returns `None`
    /// when there are no matches.
    pub fn next<D: HostDocument + ?Sized>(&mut self, doc: &mut D) -> Option<MatchPosition> {
        let total = self.matches.len();
        if total == 0 {
            return None;
        }
        let index = match self.cursor {
            Some(idx) => (idx + 1) % total,
            None => 0,
        };
        self.focus(doc, index)
    }

    /// Move to the previous match, wrapping from first to last.
    ///
    /// Starts at the last match when no match is current.
    pub fn previous<D: HostDocument + ?Sized>(&mut self, doc: &mut D) -> Option<MatchPosition> {
        let total = self.matches.len();
        if total == 0 {
            return None;
        }
        let index = match self.cursor {
            Some(idx) => (idx + total - 1) % total,
            None => total - 1,
        };
        self.focus(doc, index)
    }

    /// Make `index` the current match: move the current flag, scroll it
    /// into view, report its 1-based position.
    fn focus<D: HostDocument + ?Sized>(
        &mut self,
        doc: &mut D,
        index: usize,
    ) -> Option<MatchPosition> {
        let target = self.matches.get(index)?.node;

        if let Some(previous) = self.current_match() {
            doc.remove_class(previous.node, CURRENT_CLASS);
        }

        self.cursor = Some(index);
        doc.add_class(target, CURRENT_CLASS);
        doc.scroll_into_view(target, ScrollOptions::default());

        Some(MatchPosition {
            current: index + 1,
            total: self.matches.len(),
        })
    }
}
