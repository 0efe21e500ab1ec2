use super::taxonomy::Intent;

/// Rule weight for each intent category. Among matching categories the
/// highest weight wins.
pub fn default_weight(intent: Intent) -> f64 {
    match intent {
        Intent::Informational => 0.80,
        Intent::Commercial => 0.90,
        Intent::Navigational => 0.70,
        Intent::Transactional => 0.85,
    }
}

/// Pick the winning intent from a set of matched categories.
///
/// Highest weight wins; equal weights resolve to the category declared first.
/// Returns `Informational` when nothing matched.
pub fn resolve<I>(matched: I) -> Intent
where
    I: IntoIterator<Item = (Intent, f64)>,
{
    let mut best: Option<(Intent, f64)> = None;
    for (intent, weight) in matched {
        best = match best {
            None => Some((intent, weight)),
            Some((current, current_weight)) => {
                if weight > current_weight
                    || (weight == current_weight && intent.ordinal() < current.ordinal())
                {
                    Some((intent, weight))
                } else {
                    Some((current, current_weight))
                }
            }
        };
    }
    best.map(|(intent, _)| intent).unwrap_or_default()
}
