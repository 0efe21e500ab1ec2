//! Token and character-trigram frequency fallback.

use std::collections::HashMap;

use kwgroup_similarity::tokenizer::{contains_cjk, split_tokens};

/// At most this many terms go into a frequency label.
pub const MAX_TERMS: usize = 3;
/// Fraction of cluster size a term's count must exceed.
pub const MIN_SHARE: f64 = 0.3;
/// Absolute count a term must exceed.
pub const MIN_COUNT: f64 = 2.0;

/// Label built from the most frequent terms, or `None` if nothing is frequent enough.
///
/// Terms are word tokens longer than one character plus the character
/// trigrams of every query with whitespace removed. A token and an equal
/// trigram count as the same term. A term is kept when its raw count exceeds
/// `max(2, 0.3 * cluster_size)`. Kept terms sort by count, then length, then
/// first appearance. CJK clusters join with no separator.
pub fn label(lowered: &[String]) -> Option<String> {
    let cjk = lowered.iter().any(|q| contains_cjk(q));
    let threshold = MIN_COUNT.max(MIN_SHARE * lowered.len() as f64);

    // term -> (count, first-seen order)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    let mut next_order = 0usize;
    let mut bump = |term: String| {
        let entry = counts.entry(term).or_insert_with(|| {
            next_order += 1;
            (0, next_order)
        });
        entry.0 += 1;
    };

    for query in lowered {
        for token in split_tokens(query) {
            if token.chars().count() > 1 {
                bump(token);
            }
        }
        for gram in char_trigrams(query) {
            bump(gram);
        }
    }

    let mut frequent: Vec<(String, usize, usize)> = counts
        .into_iter()
        .filter(|(_, (count, _))| *count as f64 > threshold)
        .map(|(term, (count, order))| (term, count, order))
        .collect();
    if frequent.is_empty() {
        return None;
    }

    frequent.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| b.0.chars().count().cmp(&a.0.chars().count()))
            .then_with(|| a.2.cmp(&b.2))
    });

    let separator = if cjk { "" } else { " + " };
    Some(
        frequent
            .into_iter()
            .take(MAX_TERMS)
            .map(|(term, _, _)| term)
            .collect::<Vec<_>>()
            .join(separator),
    )
}

/// Character trigrams of the query with whitespace removed.
fn char_trigrams(query: &str) -> Vec<String> {
    let chars: Vec<char> = query.chars().filter(|c| !c.is_whitespace()).collect();
    chars.windows(3).map(|w| w.iter().collect()).collect()
}
