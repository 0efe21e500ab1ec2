//! Phase 4: Ranking. Order groups by clicks and enforce the group cap.

use kwgroup_core::models::Group;

/// Stable sort by total clicks, descending. Equal-click groups keep their
/// formation order.
pub fn rank(groups: &mut [Group]) {
    groups.sort_by(|a, b| b.metrics.total_clicks.cmp(&a.metrics.total_clicks));
}

/// Split ranked groups at `max_groups`, returning `(kept, dissolved)`.
pub fn cap(mut groups: Vec<Group>, max_groups: usize) -> (Vec<Group>, Vec<Group>) {
    if groups.len() <= max_groups {
        return (groups, Vec::new());
    }
    let dissolved = groups.split_off(max_groups);
    (groups, dissolved)
}
