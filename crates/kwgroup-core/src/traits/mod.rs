//! Trait seams between the core model and the engine crates.

mod intent_classifier;
mod keyword_grouper;
mod similarity_scorer;

pub use intent_classifier::IIntentClassifier;
pub use keyword_grouper::IKeywordGrouper;
pub use similarity_scorer::ISimilarityScorer;
