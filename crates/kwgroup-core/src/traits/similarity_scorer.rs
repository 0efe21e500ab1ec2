/// Pairwise query similarity.
pub trait ISimilarityScorer: Send + Sync {
    /// Similarity in [0, 1]. Must be symmetric, and 1.0 for equal inputs.
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Human-readable scorer name.
    fn name(&self) -> &str;
}
