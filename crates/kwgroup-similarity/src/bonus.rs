//! Small additive bonuses: shared prefix/suffix and long common substrings.

use crate::edit_distance::longest_common_substring;

/// Bonus when one query starts the other.
pub const PREFIX_BONUS: f64 = 0.15;
/// Bonus when one query ends the other.
pub const SUFFIX_BONUS: f64 = 0.10;
/// Common substrings shorter than this earn nothing.
pub const MIN_LCS_LEN: usize = 4;
/// Scale applied to `lcs_len / max_len`.
pub const LCS_SCALE: f64 = 0.2;

/// Prefix and suffix bonuses, both may apply. Inputs are lowercased already.
/// Empty strings earn nothing.
pub fn affix_bonus(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let mut bonus = 0.0;
    if a.starts_with(b) || b.starts_with(a) {
        bonus += PREFIX_BONUS;
    }
    if a.ends_with(b) || b.ends_with(a) {
        bonus += SUFFIX_BONUS;
    }
    bonus
}

/// `(lcs_len / max_len) * 0.2` once the shared run reaches four characters.
pub fn common_substring_bonus(a: &[char], b: &[char]) -> f64 {
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 0.0;
    }
    let lcs = longest_common_substring(a, b);
    if lcs < MIN_LCS_LEN {
        return 0.0;
    }
    (lcs as f64 / max_len as f64) * LCS_SCALE
}
