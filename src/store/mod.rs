use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::models::record::TrendRecord;

/// Trend storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("base directory lookup failed: {0}")]
    BaseDirs(#[from] xdg::BaseDirectoriesError),
    #[error("invalid account name {0:?}")]
    InvalidAccount(String),
    #[error("no trending data found for user {0:?}")]
    NoTrendData(String),
    #[error("malformed trend line for user {account:?}: {line:?}")]
    Malformed { account: String, line: String },
}

/// Append-only per-account karma log over a directory of flat files.
///
/// Each account owns one file named after it; every line is
/// `timestamp\tlink_karma\tcomment_karma`. Lines are only ever appended,
/// never rewritten.
pub struct TrendStore {
    dir: PathBuf,
}

impl TrendStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory holding the per-account trend files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of an account's trend file, after validating the name
    pub fn log_path(&self, account: &str) -> Result<PathBuf, StoreError> {
        if !is_valid_account(account) {
            return Err(StoreError::InvalidAccount(account.to_string()));
        }
        Ok(self.dir.join(account))
    }

    /// Append one reading to an account's log, creating it on first use
    pub fn append(&self, account: &str, record: &TrendRecord) -> Result<(), StoreError> {
        let path = self.log_path(account)?;
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        // One write_all per record keeps each line a single atomic append
        file.write_all(record_line(record).as_bytes())?;
        Ok(())
    }

    /// Return the most recent reading for an account
    pub fn latest(&self, account: &str) -> Result<TrendRecord, StoreError> {
        let path = self.log_path(account)?;
        if !path.is_file() {
            return Err(StoreError::NoTrendData(account.to_string()));
        }
        let contents = fs::read_to_string(path)?;
        let line = contents
            .lines()
            .last()
            .ok_or_else(|| StoreError::NoTrendData(account.to_string()))?;
        parse_line(line).ok_or_else(|| StoreError::Malformed {
            account: account.to_string(),
            line: line.to_string(),
        })
    }

    /// List every account with trend data, sorted, skipping hidden files
    pub fn list_accounts(&self) -> Result<Vec<String>, StoreError> {
        let mut accounts = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with('.') {
                continue;
            }
            accounts.push(name);
        }
        accounts.sort();
        Ok(accounts)
    }

    /// Remove an account's trend file; missing data is a logged no-op
    pub fn delete(&self, account: &str) -> Result<(), StoreError> {
        let path = self.log_path(account)?;
        if path.is_file() {
            debug!("deleting trend data for {:?}", account);
            fs::remove_file(path)?;
        } else {
            debug!("unable to find trend data for user {:?}", account);
        }
        Ok(())
    }

    /// Whether any trend file exists for this account
    pub fn exists(&self, account: &str) -> bool {
        self.log_path(account)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }
}

/// Account names become file names, so reject anything that would
/// escape the trend directory or hide itself from `list_accounts`
fn is_valid_account(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\', '\0'])
}

fn record_line(record: &TrendRecord) -> String {
    format!(
        "{}\t{}\t{}\n",
        record.timestamp, record.link_karma, record.comment_karma
    )
}

fn parse_line(line: &str) -> Option<TrendRecord> {
    let mut fields = line.trim_end().split('\t');
    let timestamp = fields.next()?.parse().ok()?;
    let link_karma = fields.next()?.parse().ok()?;
    let comment_karma = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(TrendRecord {
        timestamp,
        link_karma,
        comment_karma,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store() -> (tempfile::TempDir, TrendStore) {
        let dir = tempdir().expect("tempdir");
        let store = TrendStore::open(dir.path().join("karma-trends")).expect("open store");
        (dir, store)
    }

    fn record(timestamp: i64, link: i64, comment: i64) -> TrendRecord {
        TrendRecord {
            timestamp,
            link_karma: link,
            comment_karma: comment,
        }
    }

    #[test]
    fn test_append_then_latest_round_trip() {
        let (_dir, store) = store();
        store.append("alice", &record(100, 1, 2)).expect("append");
        store.append("alice", &record(200, 42, 7)).expect("append");

        let latest = store.latest("alice").expect("latest");
        assert_eq!(latest, record(200, 42, 7));
    }

    #[test]
    fn test_latest_without_data_is_not_found() {
        let (_dir, store) = store();
        assert!(matches!(
            store.latest("nobody"),
            Err(StoreError::NoTrendData(user)) if user == "nobody"
        ));
    }

    #[test]
    fn test_latest_on_empty_file_is_not_found() {
        let (_dir, store) = store();
        fs::write(store.log_path("alice").unwrap(), "").unwrap();
        assert!(matches!(
            store.latest("alice"),
            Err(StoreError::NoTrendData(_))
        ));
    }

    #[test]
    fn test_latest_reports_malformed_line() {
        let (_dir, store) = store();
        fs::write(store.log_path("alice").unwrap(), "100\toops\n").unwrap();
        assert!(matches!(
            store.latest("alice"),
            Err(StoreError::Malformed { account, .. }) if account == "alice"
        ));
    }

    #[test]
    fn test_delete_then_exists_is_false() {
        let (_dir, store) = store();
        store.append("alice", &record(100, 1, 2)).expect("append");
        assert!(store.exists("alice"));

        store.delete("alice").expect("delete");
        assert!(!store.exists("alice"));

        // Deleting again is a no-op, not an error
        store.delete("alice").expect("repeat delete");
    }

    #[test]
    fn test_list_accounts_sorted_without_hidden_files() {
        let (_dir, store) = store();
        store.append("bob", &record(100, 1, 2)).expect("append");
        store.append("alice", &record(100, 3, 4)).expect("append");
        fs::write(store.dir().join(".hidden"), "100\t1\t2\n").unwrap();

        let accounts = store.list_accounts().expect("list");
        assert_eq!(accounts, vec!["alice".to_string(), "bob".to_string()]);
    }

    #[test]
    fn test_list_accounts_empty_store() {
        let (_dir, store) = store();
        assert!(store.list_accounts().expect("list").is_empty());
    }

    #[test]
    fn test_rejects_unsafe_account_names() {
        let (_dir, store) = store();
        for name in ["", ".", "..", ".alice", "a/b", "a\\b", "a\0b"] {
            assert!(
                matches!(store.log_path(name), Err(StoreError::InvalidAccount(_))),
                "accepted {:?}",
                name
            );
            assert!(!store.exists(name));
        }
    }
}
