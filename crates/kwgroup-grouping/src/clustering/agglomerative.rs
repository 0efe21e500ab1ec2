//! Single-linkage agglomeration with a deterministic tie-break.
//!
//! Every row of the matrix starts as its own cluster. Each round merges the
//! pair with the highest linkage (max member-to-member similarity) until the
//! best remaining linkage falls below the threshold. Among equal linkages the
//! first pair met in ascending `(i, j)` order wins; the merged cluster takes
//! slot `i` and slot `j` is removed, shifting later clusters down.
//!
//! Each round rescans all cluster pairs, so a bucket of `k` records costs
//! `O(k^3)` in the worst case. Callers should keep buckets to a few thousand.

use kwgroup_similarity::SimilarityMatrix;
use tracing::trace;

/// Member row indices, in formation order.
pub type Cluster = Vec<usize>;

/// Cluster the rows of `matrix`, merging while linkage >= `threshold`.
///
/// The returned clusters partition `0..matrix.size()`.
pub fn cluster(matrix: &SimilarityMatrix, threshold: f64) -> Vec<Cluster> {
    let n = matrix.size();
    let mut clusters: Vec<Cluster> = (0..n).map(|i| vec![i]).collect();
    // Linkage between current clusters. Single linkage updates by max, which
    // equals the max over all member pairs.
    let mut linkage: Vec<Vec<f64>> = (0..n).map(|i| matrix.row(i).to_vec()).collect();

    while clusters.len() > 1 {
        let Some((i, j, best)) = best_pair(&linkage) else {
            break;
        };
        if best < threshold {
            break;
        }
        trace!(i, j, linkage = best, "merging clusters");

        let absorbed = clusters.remove(j);
        clusters[i].extend(absorbed);

        let mut absorbed_row = linkage.remove(j);
        absorbed_row.remove(j);
        for row in linkage.iter_mut() {
            row.remove(j);
        }
        for (k, &other) in absorbed_row.iter().enumerate() {
            if k == i {
                continue;
            }
            let merged = linkage[i][k].max(other);
            linkage[i][k] = merged;
            linkage[k][i] = merged;
        }
    }

    clusters
}

/// Highest off-diagonal cell, first in ascending `(i, j)` order on ties.
fn best_pair(linkage: &[Vec<f64>]) -> Option<(usize, usize, f64)> {
    let mut best: Option<(usize, usize, f64)> = None;
    for (i, row) in linkage.iter().enumerate() {
        for (j, &value) in row.iter().enumerate().skip(i + 1) {
            match best {
                Some((_, _, current)) if value <= current => {}
                _ => best = Some((i, j, value)),
            }
        }
    }
    best
}
