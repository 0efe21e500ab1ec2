//! Weighted combination of the five similarity signals.
//!
//! Signals and weights:
//! - Character bigram Jaccard: 0.25
//! - Character trigram Jaccard: 0.20
//! - Token Jaccard: 0.20
//! - Normalized edit distance: 0.25
//! - Affix bonus: 0.05
//! - Common substring bonus: 0.05

use std::collections::HashSet;

use kwgroup_core::traits::ISimilarityScorer;

use crate::bonus::{affix_bonus, common_substring_bonus};
use crate::edit_distance::normalized_similarity;
use crate::ngram::{jaccard, padded_ngrams};
use crate::tokenizer::tokenize;

/// Signal weights.
pub const W_BIGRAM: f64 = 0.25;
pub const W_TRIGRAM: f64 = 0.20;
pub const W_TOKEN: f64 = 0.20;
pub const W_EDIT: f64 = 0.25;
pub const W_AFFIX: f64 = 0.05;
pub const W_SUBSTRING: f64 = 0.05;

/// Raw per-signal values before weighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalScores {
    pub bigram: f64,
    pub trigram: f64,
    pub token: f64,
    pub edit: f64,
    pub affix: f64,
    pub substring: f64,
}

impl SignalScores {
    /// Compute every signal for two queries. Comparison is case-insensitive.
    pub fn compute(a: &str, b: &str) -> Self {
        let a_lower = a.to_lowercase();
        let b_lower = b.to_lowercase();
        let a_chars: Vec<char> = a_lower.chars().collect();
        let b_chars: Vec<char> = b_lower.chars().collect();

        let a_tokens: HashSet<String> = tokenize(&a_lower).into_iter().collect();
        let b_tokens: HashSet<String> = tokenize(&b_lower).into_iter().collect();

        Self {
            bigram: jaccard(&padded_ngrams(&a_lower, 2), &padded_ngrams(&b_lower, 2)),
            trigram: jaccard(&padded_ngrams(&a_lower, 3), &padded_ngrams(&b_lower, 3)),
            token: jaccard(&a_tokens, &b_tokens),
            edit: normalized_similarity(&a_chars, &b_chars),
            affix: affix_bonus(&a_lower, &b_lower),
            substring: common_substring_bonus(&a_chars, &b_chars),
        }
    }

    /// Weighted sum clipped to [0, 1].
    pub fn combined(&self) -> f64 {
        let score = self.bigram * W_BIGRAM
            + self.trigram * W_TRIGRAM
            + self.token * W_TOKEN
            + self.edit * W_EDIT
            + self.affix * W_AFFIX
            + self.substring * W_SUBSTRING;
        score.clamp(0.0, 1.0)
    }
}

/// Similarity of two queries in [0, 1]. Case-insensitive equality is 1.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.to_lowercase() == b.to_lowercase() {
        return 1.0;
    }
    SignalScores::compute(a, b).combined()
}

/// The default [`ISimilarityScorer`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SimilarityEngine;

impl SimilarityEngine {
    pub fn new() -> Self {
        Self
    }
}

impl ISimilarityScorer for SimilarityEngine {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        similarity(a, b)
    }

    fn name(&self) -> &str {
        "multi-signal"
    }
}
