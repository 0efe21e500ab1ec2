//! 4-phase grouping pipeline orchestrator.
//!
//! Phase 1: Bucketing → Phase 2: Clustering → Phase 3: Materialization →
//! Phase 4: Ranking

pub mod phase1_bucketing;
pub mod phase2_clustering;
pub mod phase3_materialization;
pub mod phase4_ranking;

use kwgroup_core::config::GroupingOptions;
use kwgroup_core::models::{GroupingResult, KeywordRecord};
use kwgroup_core::traits::{IIntentClassifier, ISimilarityScorer};
use kwgroup_observability::tracing_setup::events;
use rayon::prelude::*;
use tracing::debug;

use phase3_materialization::Materialized;

/// Run the full grouping pipeline.
///
/// Out-of-range options are clamped (and logged) before anything else runs.
/// Every input record ends up in exactly one group or in `ungrouped`.
pub fn run_pipeline(
    records: &[KeywordRecord],
    options: &GroupingOptions,
    scorer: &dyn ISimilarityScorer,
    classifier: &dyn IIntentClassifier,
) -> GroupingResult {
    let (options, corrections) = options.sanitize();
    for correction in &corrections {
        events::options_clamped(correction.field, correction.requested, correction.applied);
    }

    if records.is_empty() {
        events::grouping_completed(0, 0, 0, 0);
        return GroupingResult::empty();
    }

    // Phase 1: Bucketing.
    let buckets = phase1_bucketing::partition(records, options.group_by_intent, classifier);
    debug!(
        buckets = buckets.len(),
        records = records.len(),
        "Phase 1: bucketing complete"
    );

    // Phases 2-3 per bucket. Buckets are disjoint, so they run in parallel;
    // `collect` keeps bucket order.
    let per_bucket: Vec<Materialized> = buckets
        .par_iter()
        .map(|bucket| {
            let clustered = phase2_clustering::cluster_bucket(
                bucket,
                records,
                scorer,
                options.similarity_threshold,
            );
            let cluster_count = clustered.clusters.len();
            let materialized = phase3_materialization::materialize(
                clustered,
                records,
                options.min_group_size,
                classifier,
            );
            events::bucket_clustered(
                bucket.intent,
                bucket.len(),
                cluster_count,
                materialized.groups.len(),
            );
            materialized
        })
        .collect();

    let mut groups = Vec::new();
    let mut leftover: Vec<usize> = Vec::new();
    for bucket in per_bucket {
        groups.extend(bucket.groups);
        leftover.extend(bucket.ungrouped);
    }
    debug!(
        groups = groups.len(),
        ungrouped = leftover.len(),
        "Phase 3: materialization complete"
    );

    // Phase 4: Ranking.
    phase4_ranking::rank(&mut groups);
    let (groups, dissolved) = phase4_ranking::cap(groups, options.max_groups);

    let mut ungrouped: Vec<KeywordRecord> =
        leftover.into_iter().map(|i| records[i].clone()).collect();
    if !dissolved.is_empty() {
        let dissolved_keywords: usize = dissolved.iter().map(|g| g.size).sum();
        events::groups_dissolved(dissolved.len(), dissolved_keywords, options.max_groups);
        ungrouped.extend(dissolved.into_iter().flat_map(|g| g.keywords));
    }

    let result = GroupingResult::from_parts(groups, ungrouped);
    events::grouping_completed(
        result.total_keywords,
        result.total_groups,
        result.grouped_keywords,
        result.ungrouped.len(),
    );
    result
}
