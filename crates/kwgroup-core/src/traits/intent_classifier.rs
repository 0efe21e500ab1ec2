use crate::intent::Intent;

/// Assigns a search intent to a single query.
pub trait IIntentClassifier: Send + Sync {
    fn classify(&self, query: &str) -> Intent;
}
