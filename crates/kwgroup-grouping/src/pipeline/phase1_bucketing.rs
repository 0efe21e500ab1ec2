//! Phase 1: Bucketing. Partition records by intent, or keep one bucket.

use kwgroup_core::intent::Intent;
use kwgroup_core::models::KeywordRecord;
use kwgroup_core::traits::IIntentClassifier;
use rayon::prelude::*;

/// A disjoint slice of the input, by record index.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    /// `None` when intent grouping is off.
    pub intent: Option<Intent>,
    /// Indices into the input slice, in input order.
    pub members: Vec<usize>,
}

impl Bucket {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Split records into buckets. With intent grouping, buckets come out in
/// intent declaration order and empty ones are dropped.
pub fn partition(
    records: &[KeywordRecord],
    group_by_intent: bool,
    classifier: &dyn IIntentClassifier,
) -> Vec<Bucket> {
    if records.is_empty() {
        return Vec::new();
    }
    if !group_by_intent {
        return vec![Bucket {
            intent: None,
            members: (0..records.len()).collect(),
        }];
    }

    let intents: Vec<Intent> = records
        .par_iter()
        .map(|r| classifier.classify(&r.query))
        .collect();

    let mut buckets: Vec<Bucket> = Intent::ALL
        .iter()
        .map(|&intent| Bucket {
            intent: Some(intent),
            members: Vec::new(),
        })
        .collect();
    for (index, intent) in intents.into_iter().enumerate() {
        buckets[intent.ordinal()].members.push(index);
    }
    buckets.retain(|b| !b.is_empty());
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::RuleIntentClassifier;

    fn records(queries: &[&str]) -> Vec<KeywordRecord> {
        queries.iter().map(|q| KeywordRecord::from_query(*q)).collect()
    }

    #[test]
    fn single_bucket_when_intent_grouping_is_off() {
        let recs = records(&["buy shoes", "how to tie shoes"]);
        let buckets = partition(&recs, false, &RuleIntentClassifier);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].intent, None);
        assert_eq!(buckets[0].members, vec![0, 1]);
    }

    #[test]
    fn buckets_follow_intent_order_and_keep_input_order() {
        let recs = records(&[
            "buy shoes",
            "how to tie shoes",
            "best shoes",
            "what is a shoe",
            "buy socks",
        ]);
        let buckets = partition(&recs, true, &RuleIntentClassifier);
        let summary: Vec<(Option<Intent>, Vec<usize>)> =
            buckets.into_iter().map(|b| (b.intent, b.members)).collect();
        assert_eq!(
            summary,
            vec![
                (Some(Intent::Informational), vec![1, 3]),
                (Some(Intent::Commercial), vec![2]),
                (Some(Intent::Transactional), vec![0, 4]),
            ]
        );
    }

    #[test]
    fn empty_input_has_no_buckets() {
        assert!(partition(&[], true, &RuleIntentClassifier).is_empty());
        assert!(partition(&[], false, &RuleIntentClassifier).is_empty());
    }
}
