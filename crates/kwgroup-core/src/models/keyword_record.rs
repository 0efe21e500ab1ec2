use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use super::coerce;
use crate::errors::InputError;

/// One search query with its performance numbers.
///
/// Decoding never fails on a single record: missing or non-numeric fields
/// become 0 and a missing query becomes the empty string. `ctr` is not
/// clamped to [0, 1]; finite out-of-range values are kept as-is, since group
/// CTR is derived from clicks and impressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct KeywordRecord {
    #[serde(default, deserialize_with = "coerce::lenient_string")]
    pub query: String,
    #[serde(default, deserialize_with = "coerce::lenient_u64")]
    #[ts(type = "number")]
    pub clicks: u64,
    #[serde(default, deserialize_with = "coerce::lenient_u64")]
    #[ts(type = "number")]
    pub impressions: u64,
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub ctr: f64,
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub position: f64,
}

impl KeywordRecord {
    pub fn new(
        query: impl Into<String>,
        clicks: u64,
        impressions: u64,
        ctr: f64,
        position: f64,
    ) -> Self {
        Self {
            query: query.into(),
            clicks,
            impressions,
            ctr: sanitize_float(ctr),
            position: sanitize_float(position),
        }
    }

    /// A record carrying only a query string; all numbers are 0.
    pub fn from_query(query: impl Into<String>) -> Self {
        Self::new(query, 0, 0, 0.0, 0.0)
    }

    /// Decode a JSON array of records.
    ///
    /// Non-object entries decode as empty records rather than failing, so the
    /// output always has one record per array element.
    pub fn parse_batch(json: &str) -> Result<Vec<Self>, InputError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| InputError::MalformedBatch {
                reason: e.to_string(),
            })?;
        let Value::Array(items) = value else {
            return Err(InputError::MalformedBatch {
                reason: "expected a JSON array of keyword records".to_string(),
            });
        };
        Ok(items.into_iter().map(Self::from_value).collect())
    }

    fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_else(|_| Self::from_query(""))
    }
}

fn sanitize_float(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
