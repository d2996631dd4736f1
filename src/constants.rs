//! Module for shared constants used across the codebase

/// Emphasis markers for each output type
pub mod markers {
    pub const HTML_OPEN: &str = "<b>";
    pub const HTML_CLOSE: &str = "</b>";
    pub const MARKDOWN_OPEN: &str = "**";
    pub const MARKDOWN_CLOSE: &str = "**";
}

pub mod defaults {
    /// Every word is a candidate for emphasis
    pub const FREQUENCY: u64 = 1;

    /// Half of each selected word is emphasized
    pub const BOLD_PERCENTAGE: f64 = 0.5;

    /// Output type used when none is configured
    pub const OUTPUT_TYPE: &str = "html";

    /// Name of the main configuration file
    pub const CONFIG_FILE: &str = "notbr.toml";
}
