//! Pattern application: compile, scan, splice marks.

use pagesearch_common::SearchError;
use pagesearch_dom::HostDocument;
use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

use super::styles::{HIGHLIGHT_CLASS, HIGHLIGHT_CSS, STYLE_ELEMENT_ID};
use super::{Highlighter, MatchHandle, SplicedRun};
use crate::scanner::TextSegment;

/// Compile `pattern` the way the engine applies it: case-insensitive,
/// every non-overlapping occurrence.
pub fn compile_pattern(pattern: &str) -> Result<Regex, SearchError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| SearchError::InvalidPattern(e.to_string()))
}

impl Highlighter {
    /// Highlight every match of `pattern` and return how many were found.
    ///
    /// Invalid patterns count as zero matches and leave the document at
    /// baseline. Use [`Highlighter::try_apply`] to tell the two apart.
    pub fn apply<D: HostDocument + ?Sized>(&mut self, doc: &mut D, pattern: &str) -> usize {
        match self.try_apply(doc, pattern) {
            Ok(count) => count,
            Err(e) => {
                warn!(error = %e, "pattern rejected");
                0
            }
        }
    }

    /// Like [`Highlighter::apply`], but reports an uncompilable pattern as
    /// `SearchError::InvalidPattern`.
    ///
    /// Prior highlighting is always cleared first, even on error.
    pub fn try_apply<D: HostDocument + ?Sized>(
        &mut self,
        doc: &mut D,
        pattern: &str,
    ) -> Result<usize, SearchError> {
        self.clear(doc);
        self.ensure_styles(doc);

        if pattern.is_empty() {
            return Ok(0);
        }

        let regex = compile_pattern(pattern)?;
        let segments = self.scanner.scan(doc);

        // Find everything before touching the tree.
        let pending: Vec<(TextSegment, Vec<(usize, usize)>)> = segments
            .into_iter()
            .filter_map(|segment| {
                let ranges: Vec<(usize, usize)> = regex
                    .find_iter(&segment.text)
                    .map(|m| (m.start(), m.end()))
                    .collect();
                (!ranges.is_empty()).then_some((segment, ranges))
            })
            .collect();

        for (segment, ranges) in pending {
            self.splice_segment(doc, segment, &ranges);
        }

        debug!(pattern, count = self.matches.len(), "pattern applied");
        Ok(self.matches.len())
    }

    /// Replace one text segment with alternating plain and marked fragments.
    fn splice_segment<D: HostDocument + ?Sized>(
        &mut self,
        doc: &mut D,
        segment: TextSegment,
        ranges: &[(usize, usize)],
    ) {
        let text = segment.text.as_str();
        let mut fragments = Vec::with_capacity(ranges.len() * 2 + 1);
        let mut last = 0;

        for &(start, end) in ranges {
            if start > last {
                fragments.push(doc.create_text(&text[last..start]));
            }

            let mark = doc.create_element("mark");
            doc.add_class(mark, HIGHLIGHT_CLASS);
            doc.set_text_content(mark, &text[start..end]);
            fragments.push(mark);
            self.matches.push(MatchHandle {
                node: mark,
                text: text[start..end].to_string(),
            });

            last = end;
        }

        if last < text.len() {
            fragments.push(doc.create_text(&text[last..]));
        }

        doc.replace_with(segment.node, &fragments);
        self.runs.push(SplicedRun {
            parent: segment.parent,
            original_node: segment.node,
            original: segment.text,
            fragments,
        });
    }

    /// Inject the highlight stylesheet once. An existing element with the
    /// stylesheet id is reused rather than duplicated.
    pub(crate) fn ensure_styles<D: HostDocument + ?Sized>(&mut self, doc: &mut D) {
        if let Some(id) = self.style_node {
            if doc.get_element_by_id(STYLE_ELEMENT_ID) == Some(id) {
                return;
            }
        }

        if let Some(existing) = doc.get_element_by_id(STYLE_ELEMENT_ID) {
            self.style_node = Some(existing);
            return;
        }

        let style = doc.create_element("style");
        doc.set_element_id(style, STYLE_ELEMENT_ID);
        doc.set_text_content(style, HIGHLIGHT_CSS);
        let head = doc.head();
        doc.append_child(head, style);
        self.style_node = Some(style);
        debug!("highlight styles injected");
    }
}
