//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# pagesearch configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[search]
# debounce_ms = 300                           # 0-5000, live input quiet period
# ui_root_id = "enhanced-page-search-host"    # subtree never searched
# auto_focus_first = true                     # jump to match 1 after a search

[generation]
# base_url = "https://ai-gateway.vercel.sh/v1"
# max_tokens = 200      # 1-4096
# temperature = 0.1     # 0.0-2.0
# timeout_secs = 30     # 1-300

[logging]
# level = "info"        # trace, debug, info, warn, error
"##
}
