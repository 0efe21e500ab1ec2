//! Padded character n-grams and set Jaccard.

use std::collections::HashSet;
use std::hash::Hash;

/// Boundary marker added to both ends before n-gram extraction.
pub const PAD: char = '#';

/// Distinct character n-grams of `"#" + lowercase(text) + "#"`.
/// Empty when the padded string is shorter than `n`.
pub fn padded_ngrams(text: &str, n: usize) -> HashSet<String> {
    let mut chars: Vec<char> = Vec::with_capacity(text.len() + 2);
    chars.push(PAD);
    chars.extend(text.to_lowercase().chars());
    chars.push(PAD);

    if n == 0 || chars.len() < n {
        return HashSet::new();
    }
    chars.windows(n).map(|w| w.iter().collect()).collect()
}

/// `|A ∩ B| / |A ∪ B|`, or 0.0 when both sets are empty.
pub fn jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
