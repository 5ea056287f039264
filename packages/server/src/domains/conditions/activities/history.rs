//! History view - the most recent windows of one location, oldest first.

use anyhow::{Context, Result};

use crate::common::{label_to_slug, normalize_window_end, sort_newest_first};
use crate::domains::conditions::models::HistoryEntry;
use crate::kernel::ServerDeps;

/// Number of windows returned when `limit` is absent or unusable.
pub const DEFAULT_HISTORY_LIMIT: usize = 12;

/// Parse the `limit` query parameter.
///
/// Reads a leading integer the way `parseInt` does (leading whitespace and an
/// optional sign, then digits; anything after the digits is ignored). Absent,
/// non-numeric, zero and negative values fall back to the default.
pub fn parse_history_limit(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_HISTORY_LIMIT;
    };

    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let digits = &rest[..digits_len];
    if negative || digits.is_empty() {
        return DEFAULT_HISTORY_LIMIT;
    }

    match digits.parse::<usize>() {
        Ok(0) => DEFAULT_HISTORY_LIMIT,
        Ok(n) => n,
        // Only overflow can fail here
        Err(_) => usize::MAX,
    }
}

/// The `limit` most recent windows for `label`, in ascending time order.
///
/// Unknown labels are queried verbatim and usually come back empty.
pub async fn history_for_location(
    label: &str,
    limit: usize,
    deps: &ServerDeps,
) -> Result<Vec<HistoryEntry>> {
    let slug = label_to_slug(label);
    let mut records = deps
        .store
        .query_by_location(slug)
        .await
        .with_context(|| format!("Failed to query history for {}", label))?;

    normalize_window_end(&mut records);
    sort_newest_first(&mut records);
    records.truncate(limit);
    records.reverse();

    tracing::debug!(label, slug, limit, returned = records.len(), "Built history view");

    Ok(records
        .into_iter()
        .map(|record| HistoryEntry::from_record(label, record))
        .collect())
}
