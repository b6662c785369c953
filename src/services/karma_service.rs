use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::debug;

use crate::api::reddit::{FetchError, RedditClient};
use crate::models::record::TrendRecord;
use crate::store::{StoreError, TrendStore};

/// Errors from one fetch-and-record step
#[derive(Debug, Error)]
pub enum KarmaError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Fetch a user's current karma and append it to their trend log
pub fn fetch_and_record(
    client: &RedditClient,
    store: &TrendStore,
    account: &str,
) -> Result<TrendRecord, KarmaError> {
    // Reject bad account names before spending a network call
    store.log_path(account)?;

    let data = client.about(account)?;
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64;
    let record = TrendRecord {
        timestamp,
        link_karma: data.link_karma,
        comment_karma: data.comment_karma,
    };
    store.append(account, &record)?;
    debug!(
        "recorded karma for {}: link {}, comment {}",
        account, record.link_karma, record.comment_karma
    );

    Ok(record)
}
