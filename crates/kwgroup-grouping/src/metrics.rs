//! Per-group metric aggregation.

use kwgroup_core::models::{GroupMetrics, KeywordRecord};

/// Sum clicks and impressions, derive CTR (percent, 2 decimals) and mean
/// position (1 decimal).
pub fn aggregate<'a, I>(records: I) -> GroupMetrics
where
    I: IntoIterator<Item = &'a KeywordRecord>,
{
    let mut total_clicks = 0u64;
    let mut total_impressions = 0u64;
    let mut position_sum = 0.0f64;
    let mut keyword_count = 0usize;

    for record in records {
        total_clicks = total_clicks.saturating_add(record.clicks);
        total_impressions = total_impressions.saturating_add(record.impressions);
        position_sum += finite_or_zero(record.position);
        keyword_count += 1;
    }

    let avg_ctr = if total_impressions > 0 {
        round_to(total_clicks as f64 / total_impressions as f64 * 100.0, 2)
    } else {
        0.0
    };
    let avg_position = if keyword_count > 0 {
        round_to(position_sum / keyword_count as f64, 1)
    } else {
        0.0
    };

    GroupMetrics {
        total_clicks,
        total_impressions,
        avg_ctr,
        avg_position,
        keyword_count,
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
