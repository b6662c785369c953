//! Summary option models

/// Template applied when `--summary-format` is not given
pub const DEFAULT_TEMPLATE: &str = "USERNAME(LINK_KARMA, COMMENT_KARMA)\n";

/// strftime pattern applied when `--summary-time-format` is not given
pub const DEFAULT_TIME_FORMAT: &str = "%F %R";

/// Options for rendering a karma summary line
#[derive(Debug, Clone)]
pub struct SummaryOptions {
    /// Template with `USERNAME`, `LINK_KARMA`, `COMMENT_KARMA`, `UNIXTIME`
    /// and `DATETIME` tokens
    pub template: String,
    /// strftime pattern for the `DATETIME` token
    pub time_format: String,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}
