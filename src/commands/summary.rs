use tracing::error;

use crate::models::summary::SummaryOptions;
use crate::services::summary_service;
use crate::store::TrendStore;

/// Print the latest-record summary for each user. Users without trend
/// data are skipped; templates carry their own separators, so only a
/// missing final newline is patched up.
pub fn execute(store: &TrendStore, users: &[String], options: &SummaryOptions) {
    let mut last = None;
    for user in users {
        match summary_service::format_summary(store, user, options) {
            Ok(Some(summary)) => {
                print!("{}", summary);
                last = Some(summary);
            }
            Ok(None) => {}
            Err(e) => error!("failed to summarize {}: {}", user, e),
        }
    }

    if let Some(summary) = last {
        if !summary.ends_with('\n') {
            println!();
        }
    }
}
