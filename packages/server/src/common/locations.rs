//! Registry of monitored skateway locations.
//!
//! Display labels are what clients send and receive; slugs are what the
//! document store keys records by.

/// A monitored site: the label shown on the dashboard and its storage slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitoredLocation {
    pub label: &'static str,
    pub slug: &'static str,
}

/// Every monitored location, in dashboard order.
pub const LOCATIONS: [MonitoredLocation; 3] = [
    MonitoredLocation {
        label: "Dow's Lake",
        slug: "dows-lake",
    },
    MonitoredLocation {
        label: "Fifth Avenue",
        slug: "fifth-avenue",
    },
    MonitoredLocation {
        label: "NAC",
        slug: "nac",
    },
];

/// Map a display label to its storage slug.
///
/// Unrecognized labels are returned unchanged and get queried as if they were
/// slugs.
pub fn label_to_slug(label: &str) -> &str {
    LOCATIONS
        .iter()
        .find(|location| location.label == label)
        .map(|location| location.slug)
        .unwrap_or(label)
}
