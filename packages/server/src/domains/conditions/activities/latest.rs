//! Latest view - the most recent window for every monitored location.

use anyhow::{Context, Result};

use crate::common::{label_to_slug, normalize_window_end, sort_newest_first, LOCATIONS};
use crate::domains::conditions::models::LatestEntry;
use crate::kernel::ServerDeps;

/// Latest window per location, in registry order.
///
/// Locations without any records are left out. A store failure for any
/// location fails the whole view.
pub async fn latest_conditions(deps: &ServerDeps) -> Result<Vec<LatestEntry>> {
    let mut entries = Vec::with_capacity(LOCATIONS.len());

    for location in LOCATIONS.iter() {
        let slug = label_to_slug(location.label);
        let mut records = deps
            .store
            .query_by_location(slug)
            .await
            .with_context(|| format!("Failed to query latest window for {}", location.label))?;

        normalize_window_end(&mut records);
        sort_newest_first(&mut records);

        if let Some(latest) = records.into_iter().next() {
            entries.push(LatestEntry::from_record(location.label, latest));
        }
    }

    tracing::debug!(locations = entries.len(), "Built latest view");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::SensorWindowRecord;
    use crate::kernel::{FailingDocumentStore, InMemoryDocumentStore, StoreCall};
    use serde_json::json;
    use std::sync::Arc;

    fn window(slug: &str, end: &str, status: &str, ice: f64) -> SensorWindowRecord {
        SensorWindowRecord {
            location: Some(json!(slug)),
            window_end_time: Some(json!(end)),
            safety_status: Some(json!(status)),
            avg_ice_thickness_cm: Some(json!(ice)),
            reading_count: Some(json!(30)),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn picks_newest_window_per_location() {
        let deps = InMemoryDocumentStore::new()
            .with_records(vec![
                window("nac", "2025-01-15T12:00:00Z", "Safe", 30.0),
                window("nac", "2025-01-15T12:10:00Z", "Caution", 28.0),
                window("dows-lake", "2025-01-15T12:05:00Z", "Safe", 35.0),
                window("nac", "2025-01-15T12:05:00Z", "Safe", 29.0),
            ])
            .into_deps();

        let entries = latest_conditions(&deps).await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].location, "Dow's Lake");
        assert_eq!(entries[0].avg_ice_thickness, Some(json!(35.0)));
        assert_eq!(entries[1].location, "NAC");
        assert_eq!(entries[1].safety_status, Some(json!("Caution")));
        assert_eq!(entries[1].window_end_time, Some(json!("2025-01-15T12:10:00Z")));
    }

    #[tokio::test]
    async fn omits_locations_without_records() {
        let deps = InMemoryDocumentStore::new().into_deps();
        assert!(latest_conditions(&deps).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn never_duplicates_a_location() {
        let records = (0..5)
            .flat_map(|i| {
                let end = format!("2025-01-15T12:0{}:00Z", i);
                vec![
                    window("dows-lake", &end, "Safe", 30.0),
                    window("fifth-avenue", &end, "Safe", 30.0),
                    window("nac", &end, "Safe", 30.0),
                ]
            })
            .collect();
        let deps = InMemoryDocumentStore::new().with_records(records).into_deps();

        let labels: Vec<_> = latest_conditions(&deps)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.location)
            .collect();

        assert_eq!(labels, vec!["Dow's Lake", "Fifth Avenue", "NAC"]);
    }

    #[tokio::test]
    async fn uses_legacy_window_end_for_ordering() {
        let legacy = SensorWindowRecord {
            location: Some(json!("nac")),
            window_end: Some(json!("2025-01-15T13:00:00Z")),
            safety_status: Some(json!("Unsafe")),
            ..Default::default()
        };
        let deps = InMemoryDocumentStore::new()
            .with_records(vec![window("nac", "2025-01-15T12:00:00Z", "Safe", 30.0), legacy])
            .into_deps();

        let entries = latest_conditions(&deps).await.unwrap();

        assert_eq!(entries[0].safety_status, Some(json!("Unsafe")));
        assert_eq!(entries[0].window_end_time, Some(json!("2025-01-15T13:00:00Z")));
    }

    #[tokio::test]
    async fn queries_every_location_by_slug_in_order() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let deps = ServerDeps::new(store.clone());

        latest_conditions(&deps).await.unwrap();

        assert_eq!(
            store.calls(),
            vec![
                StoreCall::ByLocation("dows-lake".to_string()),
                StoreCall::ByLocation("fifth-avenue".to_string()),
                StoreCall::ByLocation("nac".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn one_failing_location_fails_the_view() {
        let fallback = InMemoryDocumentStore::new()
            .with_records(vec![window("dows-lake", "2025-01-15T12:00:00Z", "Safe", 30.0)]);
        let deps = ServerDeps::new(Arc::new(FailingDocumentStore::for_slug(
            "fifth-avenue",
            fallback,
        )));

        let err = latest_conditions(&deps).await.unwrap_err();
        assert!(err.to_string().contains("Fifth Avenue"));
    }
}
