use tracing::error;

use crate::api::reddit::RedditClient;
use crate::services::karma_service;
use crate::store::TrendStore;

/// Fetch and record karma for each user; one failure does not stop
/// the batch
pub fn execute(store: &TrendStore, users: &[String]) {
    let client = RedditClient::new();
    for user in users {
        if let Err(e) = karma_service::fetch_and_record(&client, store, user) {
            error!("failed to fetch karma for {}: {}", user, e);
        }
    }
}
