//! All view - every record in the store, newest first.

use anyhow::{Context, Result};

use crate::common::{normalize_window_end, sort_newest_first};
use crate::domains::conditions::models::AllRecords;
use crate::kernel::ServerDeps;

pub async fn all_records(deps: &ServerDeps) -> Result<AllRecords> {
    let mut records = deps
        .store
        .query_all()
        .await
        .context("Failed to query all records")?;

    normalize_window_end(&mut records);
    sort_newest_first(&mut records);

    Ok(AllRecords {
        count: records.len(),
        data: records,
    })
}
