use crate::config::GroupingOptions;
use crate::models::{GroupingResult, KeywordRecord};

/// Groups keyword records into topic clusters. Never fails.
pub trait IKeywordGrouper: Send + Sync {
    fn group_keywords(&self, records: &[KeywordRecord], options: &GroupingOptions)
        -> GroupingResult;
}
