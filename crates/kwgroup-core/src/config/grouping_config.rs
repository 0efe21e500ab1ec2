use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::defaults;
use crate::models::coerce;

/// Options for a single grouping run. This is the only knob surface the engine accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct GroupingOptions {
    /// Minimum single-linkage similarity for two clusters to merge.
    #[serde(alias = "similarityThreshold")]
    pub similarity_threshold: f64,
    /// Clusters smaller than this are returned as ungrouped keywords.
    #[serde(alias = "minGroupSize", deserialize_with = "coerce::lenient_usize")]
    pub min_group_size: usize,
    /// Cap on the number of returned groups.
    #[serde(alias = "maxGroups", deserialize_with = "coerce::lenient_usize")]
    pub max_groups: usize,
    /// Partition records by classified intent before clustering.
    #[serde(alias = "groupByIntent")]
    pub group_by_intent: bool,
}

impl Default for GroupingOptions {
    fn default() -> Self {
        Self {
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            min_group_size: defaults::DEFAULT_MIN_GROUP_SIZE,
            max_groups: defaults::DEFAULT_MAX_GROUPS,
            group_by_intent: defaults::DEFAULT_GROUP_BY_INTENT,
        }
    }
}

/// A single out-of-range option that was corrected by [`GroupingOptions::sanitize`].
#[derive(Debug, Clone, PartialEq)]
pub struct OptionCorrection {
    pub field: &'static str,
    pub requested: f64,
    pub applied: f64,
}

impl GroupingOptions {
    /// Clamp every option into its valid range.
    ///
    /// `similarity_threshold` goes to [0, 1] (NaN falls back to the default),
    /// `min_group_size` and `max_groups` to at least 1. Returns the corrected
    /// options plus one [`OptionCorrection`] per field that changed.
    pub fn sanitize(&self) -> (Self, Vec<OptionCorrection>) {
        let mut corrections = Vec::new();
        let mut fixed = self.clone();

        let threshold = if self.similarity_threshold.is_nan() {
            defaults::DEFAULT_SIMILARITY_THRESHOLD
        } else {
            self.similarity_threshold.clamp(0.0, 1.0)
        };
        if threshold.to_bits() != self.similarity_threshold.to_bits() {
            corrections.push(OptionCorrection {
                field: "similarity_threshold",
                requested: self.similarity_threshold,
                applied: threshold,
            });
            fixed.similarity_threshold = threshold;
        }

        if self.min_group_size < defaults::MIN_ALLOWED_GROUP_SIZE {
            corrections.push(OptionCorrection {
                field: "min_group_size",
                requested: self.min_group_size as f64,
                applied: defaults::MIN_ALLOWED_GROUP_SIZE as f64,
            });
            fixed.min_group_size = defaults::MIN_ALLOWED_GROUP_SIZE;
        }

        if self.max_groups < defaults::MIN_ALLOWED_MAX_GROUPS {
            corrections.push(OptionCorrection {
                field: "max_groups",
                requested: self.max_groups as f64,
                applied: defaults::MIN_ALLOWED_MAX_GROUPS as f64,
            });
            fixed.max_groups = defaults::MIN_ALLOWED_MAX_GROUPS;
        }

        (fixed, corrections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_need_no_correction() {
        let (fixed, corrections) = GroupingOptions::default().sanitize();
        assert!(corrections.is_empty());
        assert_eq!(fixed, GroupingOptions::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let opts = GroupingOptions {
            similarity_threshold: 1.7,
            min_group_size: 0,
            max_groups: 0,
            group_by_intent: false,
        };
        let (fixed, corrections) = opts.sanitize();
        assert_eq!(fixed.similarity_threshold, 1.0);
        assert_eq!(fixed.min_group_size, 1);
        assert_eq!(fixed.max_groups, 1);
        assert!(!fixed.group_by_intent);
        assert_eq!(corrections.len(), 3);
    }

    #[test]
    fn nan_threshold_falls_back_to_default() {
        let opts = GroupingOptions {
            similarity_threshold: f64::NAN,
            ..Default::default()
        };
        let (fixed, corrections) = opts.sanitize();
        assert_eq!(fixed.similarity_threshold, 0.5);
        assert_eq!(corrections[0].field, "similarity_threshold");
    }

    #[test]
    fn negative_threshold_clamps_to_zero() {
        let opts = GroupingOptions {
            similarity_threshold: -0.2,
            ..Default::default()
        };
        assert_eq!(opts.sanitize().0.similarity_threshold, 0.0);
    }

    #[test]
    fn camel_case_json_is_accepted() {
        let opts: GroupingOptions = serde_json::from_str(
            r#"{"similarityThreshold": 0.4, "minGroupSize": 3, "maxGroups": -5, "groupByIntent": false}"#,
        )
        .unwrap();
        assert_eq!(opts.similarity_threshold, 0.4);
        assert_eq!(opts.min_group_size, 3);
        assert_eq!(opts.max_groups, 0);
        assert!(!opts.group_by_intent);
        assert_eq!(opts.sanitize().0.max_groups, 1);
    }
}
