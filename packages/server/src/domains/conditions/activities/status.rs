//! Status view - latest safety status per location plus an overall roll-up.

use anyhow::{Context, Result};
use serde_json::Value;

use crate::common::{label_to_slug, normalize_window_end, sort_newest_first, LOCATIONS};
use crate::domains::conditions::models::{LocationStatus, OverallStatus, StatusSummary};
use crate::kernel::ServerDeps;

pub async fn status_summary(deps: &ServerDeps) -> Result<StatusSummary> {
    let mut locations = Vec::with_capacity(LOCATIONS.len());

    for location in LOCATIONS.iter() {
        let slug = label_to_slug(location.label);
        let mut records = deps
            .store
            .query_status_by_location(slug)
            .await
            .with_context(|| format!("Failed to query status for {}", location.label))?;

        normalize_window_end(&mut records);
        sort_newest_first(&mut records);

        if let Some(latest) = records.into_iter().next() {
            locations.push(LocationStatus {
                location: location.label.to_string(),
                safety_status: latest.safety_status,
                window_end_time: latest.window_end_time,
            });
        }
    }

    let overall_status =
        OverallStatus::from_statuses(
        locations
            .iter()
            .map(|l| l.safety_status.as_ref().and_then(Value::as_str)),
    );

    tracing::debug!(
        overall = ?overall_status,
        reporting = locations.len(),
        "Built status view"
    );

    Ok(StatusSummary {
        overall_status,
        locations,
    })
}
