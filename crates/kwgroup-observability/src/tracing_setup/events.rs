//! Structured log events for a grouping run.
//!
//! Each function emits a `tracing` event with structured fields.

use kwgroup_core::intent::Intent;

/// Log the outcome of clustering one intent bucket.
pub fn bucket_clustered(intent: Option<Intent>, records: usize, clusters: usize, groups: usize) {
    let bucket = intent.map(|i| i.label()).unwrap_or("all");
    tracing::debug!(
        event = "bucket_clustered",
        bucket = %bucket,
        records = records,
        clusters = clusters,
        groups = groups,
        "bucket clustered"
    );
}

/// Log groups dissolved by the group cap.
pub fn groups_dissolved(dissolved: usize, keywords: usize, max_groups: usize) {
    tracing::info!(
        event = "groups_dissolved",
        dissolved = dissolved,
        keywords = keywords,
        max_groups = max_groups,
        "groups over cap dissolved into ungrouped"
    );
}

/// Log a grouping completion event.
pub fn grouping_completed(
    total_keywords: usize,
    total_groups: usize,
    grouped_keywords: usize,
    ungrouped: usize,
) {
    tracing::info!(
        event = "grouping_completed",
        total_keywords = total_keywords,
        total_groups = total_groups,
        grouped_keywords = grouped_keywords,
        ungrouped = ungrouped,
        "keyword grouping completed"
    );
}

/// Log an option that was clamped into range.
pub fn options_clamped(field: &str, requested: f64, applied: f64) {
    tracing::warn!(
        event = "options_clamped",
        field = %field,
        requested = requested,
        applied = applied,
        "grouping option out of range, clamped"
    );
}
