use reqwest::blocking::Client as HttpClient;
use reqwest::header::USER_AGENT;
use tracing::debug;

use super::models::{AboutData, AboutResponse, FetchError};

/// Client for reddit's public user profile endpoint
pub struct RedditClient {
    http_client: HttpClient,
    base_url: String,
}

impl RedditClient {
    const DEFAULT_BASE_URL: &'static str = "https://www.reddit.com";
    const USER_AGENT: &'static str =
        concat!("karma-trends/", env!("CARGO_PKG_VERSION"), " (karma trending tool)");

    /// Create a client against the live reddit endpoint
    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL.to_string())
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }

    fn about_url(&self, user: &str) -> String {
        format!("{}/user/{}/about.json", self.base_url, user)
    }

    /// GET /user/{name}/about.json
    ///
    /// Retrieves the current link and comment karma for a reddit user.
    /// Blocks until the request completes; no retry on failure.
    pub fn about(&self, user: &str) -> Result<AboutData, FetchError> {
        let response = self
            .http_client
            .get(self.about_url(user))
            // Reddit rejects the default library user agent
            .header(USER_AGENT, Self::USER_AGENT)
            .send()?;

        if !response.status().is_success() {
            return Err(FetchError::Http(response.status()));
        }

        let body: AboutResponse = response
            .json()
            .map_err(|e| FetchError::Deserialization(e.to_string()))?;
        debug!("retrieved data for {}: {:?}", user, body.data);

        Ok(body.data)
    }
}

impl Default for RedditClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_url_substitutes_user() {
        let client = RedditClient::new();
        assert_eq!(
            client.about_url("alice"),
            "https://www.reddit.com/user/alice/about.json"
        );
    }

    #[test]
    fn test_about_url_honours_base_override() {
        let client = RedditClient::with_base_url("http://localhost:8080".to_string());
        assert_eq!(
            client.about_url("bob"),
            "http://localhost:8080/user/bob/about.json"
        );
    }
}
