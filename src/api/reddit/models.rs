use serde::Deserialize;
use thiserror::Error;

/// Envelope returned by the about.json endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct AboutResponse {
    pub data: AboutData,
}

/// Karma counters nested under the response `data` object
#[derive(Debug, Clone, Deserialize)]
pub struct AboutData {
    pub link_karma: i64,
    pub comment_karma: i64,
}

/// Errors from fetching a user's profile data
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network/request error
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Non-success HTTP status
    #[error("unexpected HTTP status {0}")]
    Http(reqwest::StatusCode),
    /// Response was not valid JSON or lacked the karma fields
    #[error("failed to parse response: {0}")]
    Deserialization(String),
}
