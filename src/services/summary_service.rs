use chrono::format::{Item, StrftimeItems};
use chrono::DateTime;
use tracing::{debug, warn};

use crate::models::summary::{SummaryOptions, DEFAULT_TIME_FORMAT};
use crate::store::{StoreError, TrendStore};

/// Render the latest trend record for an account through the summary
/// template. Returns `Ok(None)` when the account has no trend data.
pub fn format_summary(
    store: &TrendStore,
    account: &str,
    options: &SummaryOptions,
) -> Result<Option<String>, StoreError> {
    let record = match store.latest(account) {
        Ok(record) => record,
        Err(StoreError::NoTrendData(_)) => {
            debug!("no trend data exists for user {:?}", account);
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    let tokens = [
        ("USERNAME", account.to_string()),
        ("LINK_KARMA", record.link_karma.to_string()),
        ("COMMENT_KARMA", record.comment_karma.to_string()),
        ("UNIXTIME", record.timestamp.to_string()),
        (
            "DATETIME",
            format_datetime(record.timestamp, &options.time_format),
        ),
    ];

    Ok(Some(substitute(&options.template, &tokens)))
}

/// Turn the escaped `\t` and `\n` sequences clap hands us into real
/// tab and newline characters
pub fn unescape_template(template: &str) -> String {
    template.replace("\\t", "\t").replace("\\n", "\n")
}

fn format_datetime(timestamp: i64, pattern: &str) -> String {
    let datetime = DateTime::from_timestamp(timestamp, 0).unwrap_or_default();
    // chrono's Display panics on unparseable patterns, so fall back first
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        warn!("invalid time format {:?}, using default", pattern);
        return datetime.format(DEFAULT_TIME_FORMAT).to_string();
    }
    datetime.format(pattern).to_string()
}

/// Replace every recognized token in one left-to-right pass, longest
/// token first at each position. Replacement text is never rescanned,
/// so a value containing another token's name passes through verbatim.
fn substitute(template: &str, tokens: &[(&str, String)]) -> String {
    let mut order: Vec<usize> = (0..tokens.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(tokens[i].0.len()));

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    'scan: while !rest.is_empty() {
        for &i in &order {
            let (token, value) = &tokens[i];
            if rest.starts_with(token) {
                out.push_str(value);
                rest = &rest[token.len()..];
                continue 'scan;
            }
        }
        match rest.chars().next() {
            Some(ch) => {
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
            None => break,
        }
    }
    out
}
