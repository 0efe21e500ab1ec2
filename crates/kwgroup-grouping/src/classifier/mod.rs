//! Rule-based search intent classification.

pub mod rules;

use kwgroup_core::intent::{weights, Intent};
use kwgroup_core::traits::IIntentClassifier;

use rules::INTENT_RULES;

/// Classify one query: the highest-weighted matching category wins,
/// ties go to the category declared first, no match is `Informational`.
pub fn classify(query: &str) -> Intent {
    let lowered = query.to_lowercase();
    weights::resolve(
        INTENT_RULES
            .iter()
            .filter(|rule| rule.matches(&lowered))
            .map(|rule| (rule.intent, rule.weight)),
    )
}

/// The default [`IIntentClassifier`], backed by the static rule table.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleIntentClassifier;

impl RuleIntentClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl IIntentClassifier for RuleIntentClassifier {
    fn classify(&self, query: &str) -> Intent {
        classify(query)
    }
}
