use tracing::debug;

use crate::store::{StoreError, TrendStore};

/// Print every trended user on one space-joined line
pub fn execute(store: &TrendStore) -> Result<(), StoreError> {
    debug!(
        "searching in {:?} for saved karma trend data",
        store.dir()
    );
    let users = store.list_accounts()?;
    debug!("found {} users", users.len());
    println!("{}", users.join(" "));
    Ok(())
}
