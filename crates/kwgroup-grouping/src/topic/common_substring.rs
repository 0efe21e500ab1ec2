//! Longest substring shared by every query in a cluster.

use kwgroup_similarity::tokenizer::is_separator;

/// Longest candidate length considered.
pub const MAX_TOPIC_LEN: usize = 20;
/// Shortest candidate length considered.
pub const MIN_TOPIC_LEN: usize = 3;

/// Find the best substring common to all `lowered` queries.
///
/// Lengths are scanned from `min(20, shortest)` down to 3 over every offset of
/// the first query; the first length with any qualifying candidate decides.
/// Within it, whole-word matches beat partial ones, then longer trimmed text
/// wins, then earlier offset.
pub fn find(lowered: &[String]) -> Option<String> {
    let first: Vec<char> = lowered.first()?.chars().collect();
    let shortest = lowered.iter().map(|q| q.chars().count()).min()?;
    let upper = shortest.min(MAX_TOPIC_LEN);
    if upper < MIN_TOPIC_LEN {
        return None;
    }

    for len in (MIN_TOPIC_LEN..=upper).rev() {
        let mut candidates: Vec<String> = Vec::new();
        for window in first.windows(len) {
            let raw: String = window.iter().collect();
            if is_trivial(&raw) || !lowered.iter().all(|q| q.contains(&raw)) {
                continue;
            }
            let trimmed = raw.trim().to_string();
            // A padded window can trim below the minimum; it is not a candidate.
            if trimmed.chars().count() < MIN_TOPIC_LEN {
                continue;
            }
            if !candidates.contains(&trimmed) {
                candidates.push(trimmed);
            }
        }
        if candidates.is_empty() {
            continue;
        }

        let best = candidates
            .into_iter()
            .enumerate()
            .map(|(order, text)| {
                let whole_word = lowered.iter().any(|q| matches_whole_word(q, &text));
                (whole_word, text.chars().count(), order, text)
            })
            .max_by(|a, b| {
                a.0.cmp(&b.0)
                    .then(a.1.cmp(&b.1))
                    .then(b.2.cmp(&a.2))
            })
            .map(|(_, _, _, text)| text);
        if best.is_some() {
            return best;
        }
    }
    None
}

/// Only digits, whitespace, or separators.
fn is_trivial(candidate: &str) -> bool {
    candidate
        .chars()
        .all(|c| c.is_numeric() || is_separator(c))
}

/// Whether `needle` occurs in `haystack` with no alphanumeric character on either side.
///
/// CJK letters count as alphanumeric, so a CJK run glued to more CJK text is
/// not a whole word; only whitespace, punctuation or the string edges delimit it.
pub fn matches_whole_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.match_indices(needle).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + needle.len()..].chars().next();
        before.map_or(true, |c| !c.is_alphanumeric()) && after.map_or(true, |c| !c.is_alphanumeric())
    })
}
