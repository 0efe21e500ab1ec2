//! # kwgroup-similarity
//!
//! Bounded [0, 1] similarity between two query strings from five signals:
//! character bigrams, character trigrams, tokens, normalized edit distance,
//! and small affix / common-substring bonuses. Also builds the symmetric
//! pairwise matrix the clustering stage consumes.

pub mod bonus;
pub mod edit_distance;
pub mod matrix;
pub mod ngram;
pub mod scorer;
pub mod tokenizer;

pub use matrix::SimilarityMatrix;
pub use scorer::{similarity, SignalScores, SimilarityEngine};
