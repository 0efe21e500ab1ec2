//! Phase 2: Clustering. Single-linkage agglomeration inside one bucket.

use kwgroup_core::intent::Intent;
use kwgroup_core::models::KeywordRecord;
use kwgroup_core::traits::ISimilarityScorer;
use kwgroup_similarity::SimilarityMatrix;

use super::phase1_bucketing::Bucket;
use crate::clustering;

/// Buckets smaller than this skip clustering entirely.
pub const MIN_BUCKET_SIZE: usize = 2;

/// Clusters found in one bucket, as input record indices.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketClusters {
    pub intent: Option<Intent>,
    /// Each cluster lists record indices in formation order.
    pub clusters: Vec<Vec<usize>>,
    /// Records that bypassed clustering because the bucket was too small.
    pub passthrough: Vec<usize>,
}

/// Build the bucket's similarity matrix and agglomerate it.
pub fn cluster_bucket(
    bucket: &Bucket,
    records: &[KeywordRecord],
    scorer: &dyn ISimilarityScorer,
    threshold: f64,
) -> BucketClusters {
    if bucket.len() < MIN_BUCKET_SIZE {
        return BucketClusters {
            intent: bucket.intent,
            clusters: Vec::new(),
            passthrough: bucket.members.clone(),
        };
    }

    let queries: Vec<&str> = bucket
        .members
        .iter()
        .map(|&i| records[i].query.as_str())
        .collect();
    let matrix = SimilarityMatrix::build(&queries, scorer);

    // Matrix rows are bucket-local; map back through `members`.
    let clusters = clustering::cluster(&matrix, threshold)
        .into_iter()
        .map(|local| local.into_iter().map(|row| bucket.members[row]).collect())
        .collect();

    BucketClusters {
        intent: bucket.intent,
        clusters,
        passthrough: Vec::new(),
    }
}
