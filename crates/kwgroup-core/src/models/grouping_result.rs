use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::group::Group;
use super::keyword_record::KeywordRecord;

/// Output of one grouping run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GroupingResult {
    /// Sorted by `metrics.total_clicks` descending.
    pub groups: Vec<Group>,
    pub ungrouped: Vec<KeywordRecord>,
    pub total_groups: usize,
    pub total_keywords: usize,
    pub grouped_keywords: usize,
}

impl GroupingResult {
    pub fn empty() -> Self {
        Self {
            groups: Vec::new(),
            ungrouped: Vec::new(),
            total_groups: 0,
            total_keywords: 0,
            grouped_keywords: 0,
        }
    }

    /// Build a result from final groups and leftovers, deriving the counters.
    pub fn from_parts(groups: Vec<Group>, ungrouped: Vec<KeywordRecord>) -> Self {
        let grouped_keywords: usize = groups.iter().map(|g| g.size).sum();
        Self {
            total_groups: groups.len(),
            total_keywords: grouped_keywords + ungrouped.len(),
            grouped_keywords,
            groups,
            ungrouped,
        }
    }

    /// Whether the counters agree with the contents.
    pub fn is_consistent(&self) -> bool {
        let sized = self
            .groups
            .iter()
            .all(|g| g.size == g.keywords.len() && g.metrics.keyword_count == g.size);
        let grouped: usize = self.groups.iter().map(|g| g.size).sum();
        sized
            && self.total_groups == self.groups.len()
            && self.grouped_keywords == grouped
            && self.grouped_keywords + self.ungrouped.len() == self.total_keywords
    }
}
