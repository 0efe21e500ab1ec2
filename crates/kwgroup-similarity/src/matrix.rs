//! Symmetric pairwise similarity matrix.

use kwgroup_core::traits::ISimilarityScorer;
use rayon::prelude::*;

/// Square, symmetric matrix of pairwise similarities with a unit diagonal.
///
/// Row `i` corresponds to the `i`-th query passed to [`SimilarityMatrix::build`].
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Score every unordered pair once and mirror into both triangles.
    ///
    /// Rows are computed in parallel; each cell is independent so the result
    /// does not depend on scheduling.
    pub fn build<S: AsRef<str> + Sync>(queries: &[S], scorer: &dyn ISimilarityScorer) -> Self {
        let size = queries.len();
        let upper: Vec<Vec<f64>> = (0..size)
            .into_par_iter()
            .map(|i| {
                ((i + 1)..size)
                    .map(|j| scorer.similarity(queries[i].as_ref(), queries[j].as_ref()))
                    .collect()
            })
            .collect();

        let mut values = vec![0.0; size * size];
        for (i, row) in upper.iter().enumerate() {
            values[i * size + i] = 1.0;
            for (offset, &score) in row.iter().enumerate() {
                let j = i + 1 + offset;
                values[i * size + j] = score;
                values[j * size + i] = score;
            }
        }
        Self { size, values }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Similarity between rows `i` and `j`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.size && j < self.size, "index out of bounds");
        self.values[i * self.size + j]
    }

    /// One row of the matrix.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }
}
