//! Topic labels for finished clusters.
//!
//! Three strategies, first hit wins:
//! 1. Longest substring common to every query.
//! 2. Most frequent tokens and character trigrams.
//! 3. The shortest query, truncated.

pub mod common_substring;
pub mod frequency;

/// Queries longer than this are truncated in the shortest-query fallback.
pub const MAX_FALLBACK_CHARS: usize = 30;
/// Characters kept before the ellipsis.
pub const TRUNCATED_CHARS: usize = 27;

/// Derive a short label for a cluster's queries. Order matters: the first
/// query drives the common-substring scan.
pub fn extract_topic<S: AsRef<str>>(queries: &[S]) -> String {
    let lowered: Vec<String> = queries.iter().map(|q| q.as_ref().to_lowercase()).collect();

    if let Some(topic) = common_substring::find(&lowered) {
        return topic;
    }
    if let Some(topic) = frequency::label(&lowered) {
        return topic;
    }
    shortest_query(queries)
}

/// The shortest query (first on ties), cut to 27 chars + "..." past 30.
fn shortest_query<S: AsRef<str>>(queries: &[S]) -> String {
    let Some(shortest) = queries
        .iter()
        .map(AsRef::as_ref)
        .min_by_key(|q| q.chars().count())
    else {
        return String::new();
    };

    if shortest.chars().count() > MAX_FALLBACK_CHARS {
        let head: String = shortest.chars().take(TRUNCATED_CHARS).collect();
        format!("{head}...")
    } else {
        shortest.to_string()
    }
}
