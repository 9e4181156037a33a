//! Match-and-navigate engine.
//!
//! - [`ContentScanner`] enumerates the visible, searchable text segments of
//!   a [`HostDocument`](pagesearch_dom::HostDocument) in document order.
//! - [`Highlighter`] applies a case-insensitive pattern to those segments,
//!   splices `<mark>` fragments in place, and provides cyclic next/previous
//!   navigation plus exact restoration of the original text.

pub mod highlighter;
pub mod scanner;

pub use highlighter::{
    compile_pattern, Highlighter, MatchHandle, CURRENT_CLASS, HIGHLIGHT_CLASS, STYLE_ELEMENT_ID,
};
pub use scanner::{ContentScanner, TextSegment, DEFAULT_UI_ROOT_ID, EXCLUDED_TAGS};
