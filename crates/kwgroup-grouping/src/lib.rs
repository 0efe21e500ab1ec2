//! # kwgroup-grouping
//!
//! Groups search queries into topic clusters: intent classification,
//! single-linkage clustering over a multi-signal similarity matrix,
//! topic labels, and per-group metrics.

pub mod classifier;
pub mod clustering;
pub mod engine;
pub mod metrics;
pub mod pipeline;
pub mod topic;

pub use classifier::{classify, RuleIntentClassifier};
pub use engine::{group_keywords, GroupingEngine};
pub use topic::extract_topic;
