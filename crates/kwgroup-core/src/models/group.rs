use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::keyword_record::KeywordRecord;
use crate::intent::Intent;

/// Aggregated performance of one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GroupMetrics {
    #[ts(type = "number")]
    pub total_clicks: u64,
    #[ts(type = "number")]
    pub total_impressions: u64,
    /// Click-through rate as a percentage, 2 decimals.
    #[serde(rename = "avgCTR")]
    pub avg_ctr: f64,
    /// Mean position, 1 decimal.
    pub avg_position: f64,
    pub keyword_count: usize,
}

/// A topic cluster of related queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub topic: String,
    pub intent: Intent,
    /// Members in cluster-formation order.
    pub keywords: Vec<KeywordRecord>,
    pub metrics: GroupMetrics,
    pub size: usize,
}
