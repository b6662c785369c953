//! Trend log records

/// One timestamped karma reading for an account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendRecord {
    /// Wall-clock epoch seconds at fetch time
    pub timestamp: i64,
    /// Submission (link) karma
    pub link_karma: i64,
    /// Comment karma
    pub comment_karma: i64,
}
