//! Phase 3: Materialization. Turn big-enough clusters into groups.

use kwgroup_core::intent::Intent;
use kwgroup_core::models::{Group, KeywordRecord};
use kwgroup_core::traits::IIntentClassifier;

use super::phase2_clustering::BucketClusters;
use crate::{metrics, topic};

/// Groups built from one bucket plus the records left over.
#[derive(Debug, Clone, Default)]
pub struct Materialized {
    pub groups: Vec<Group>,
    /// Record indices that did not make it into a group.
    pub ungrouped: Vec<usize>,
}

/// Clusters with at least `min_group_size` members become groups; the rest,
/// and any passthrough records, are returned as ungrouped.
///
/// A group takes its bucket's intent. Only when intent grouping is off (the
/// bucket has no intent) is each member classified, with [`dominant_intent`]
/// picking the group's intent.
pub fn materialize(
    bucket: BucketClusters,
    records: &[KeywordRecord],
    min_group_size: usize,
    classifier: &dyn IIntentClassifier,
) -> Materialized {
    let mut out = Materialized {
        groups: Vec::new(),
        ungrouped: bucket.passthrough,
    };

    for members in bucket.clusters {
        if members.len() < min_group_size {
            out.ungrouped.extend(members);
            continue;
        }
        let keywords: Vec<KeywordRecord> = members.iter().map(|&i| records[i].clone()).collect();
        let intent = bucket
            .intent
            .unwrap_or_else(|| dominant_intent(&keywords, classifier));
        out.groups.push(build_group(keywords, intent));
    }
    out
}

/// Assemble a group: topic, metrics, stable id.
pub fn build_group(keywords: Vec<KeywordRecord>, intent: Intent) -> Group {
    let queries: Vec<&str> = keywords.iter().map(|k| k.query.as_str()).collect();
    let topic = topic::extract_topic(&queries);
    let id = group_id(intent, &queries);
    let metrics = metrics::aggregate(&keywords);
    Group {
        id,
        topic,
        intent,
        size: keywords.len(),
        keywords,
        metrics,
    }
}

/// `grp-` plus 12 hex chars of a blake3 digest over intent and member queries.
pub fn group_id(intent: Intent, queries: &[&str]) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(intent.label().as_bytes());
    for query in queries {
        hasher.update(b"\n");
        hasher.update(query.as_bytes());
    }
    let hex = hasher.finalize().to_hex();
    format!("grp-{}", &hex[..12])
}

/// Most common intent among members; ties go to declaration order.
pub fn dominant_intent(keywords: &[KeywordRecord], classifier: &dyn IIntentClassifier) -> Intent {
    let mut counts = [0usize; Intent::COUNT];
    for keyword in keywords {
        counts[classifier.classify(&keyword.query).ordinal()] += 1;
    }
    let mut best = Intent::ALL[0];
    for intent in Intent::ALL.iter().skip(1) {
        if counts[intent.ordinal()] > counts[best.ordinal()] {
            best = *intent;
        }
    }
    best
}
