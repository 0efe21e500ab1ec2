//! GroupingEngine: the default [`IKeywordGrouper`], wiring a scorer and a
//! classifier into the pipeline.

use kwgroup_core::config::GroupingOptions;
use kwgroup_core::models::{GroupingResult, KeywordRecord};
use kwgroup_core::traits::{IIntentClassifier, IKeywordGrouper, ISimilarityScorer};
use kwgroup_similarity::SimilarityEngine;

use crate::classifier::RuleIntentClassifier;
use crate::pipeline;

/// Keyword grouping engine.
///
/// Holds no per-run state, so one engine can serve concurrent callers.
pub struct GroupingEngine {
    scorer: Box<dyn ISimilarityScorer>,
    classifier: Box<dyn IIntentClassifier>,
}

impl GroupingEngine {
    /// Engine with the multi-signal scorer and the rule classifier.
    pub fn new() -> Self {
        Self::with_components(Box::new(SimilarityEngine), Box::new(RuleIntentClassifier))
    }

    /// Engine with caller-supplied scoring and classification.
    pub fn with_components(
        scorer: Box<dyn ISimilarityScorer>,
        classifier: Box<dyn IIntentClassifier>,
    ) -> Self {
        Self { scorer, classifier }
    }

    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }
}

impl Default for GroupingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IKeywordGrouper for GroupingEngine {
    fn group_keywords(
        &self,
        records: &[KeywordRecord],
        options: &GroupingOptions,
    ) -> GroupingResult {
        pipeline::run_pipeline(
            records,
            options,
            self.scorer.as_ref(),
            self.classifier.as_ref(),
        )
    }
}

/// Group records with the default engine.
pub fn group_keywords(records: &[KeywordRecord], options: &GroupingOptions) -> GroupingResult {
    pipeline::run_pipeline(records, options, &SimilarityEngine, &RuleIntentClassifier)
}
