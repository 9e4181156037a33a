//! Presentational markup for highlighted matches.

/// Class carried by every `<mark>` the engine creates.
pub const HIGHLIGHT_CLASS: &str = "eps-highlight";

/// Extra class on the current match.
pub const CURRENT_CLASS: &str = "eps-highlight-current";

/// Id of the injected `<style>` element.
pub const STYLE_ELEMENT_ID: &str = "eps-highlight-styles";

pub const HIGHLIGHT_CSS: &str = r#"
mark.eps-highlight {
  background-color: #fff3cd !important;
  color: inherit !important;
  padding: 0 2px !important;
  margin: 0 !important;
  border-radius: 2px !important;
  box-decoration-break: clone !important;
}

mark.eps-highlight.eps-highlight-current {
  background-color: #ffc107 !important;
  outline: 2px solid #ffc107 !important;
  outline-offset: 0px !important;
}

@media (prefers-color-scheme: dark) {
  mark.eps-highlight {
    background-color: #4a3f00 !important;
  }
  mark.eps-highlight.eps-highlight-current {
    background-color: #b38600 !important;
    outline-color: #b38600 !important;
  }
}
"#;
