use tracing::error;

use crate::store::TrendStore;

/// Delete each user's trend data; one failure does not stop the batch
pub fn execute(store: &TrendStore, users: &[String]) {
    for user in users {
        if let Err(e) = store.delete(user) {
            error!("failed to delete trend data for {}: {}", user, e);
        }
    }
}
