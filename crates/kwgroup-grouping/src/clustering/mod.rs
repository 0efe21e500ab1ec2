//! Hierarchical agglomerative clustering over a similarity matrix.

pub mod agglomerative;

pub use agglomerative::{cluster, Cluster};
