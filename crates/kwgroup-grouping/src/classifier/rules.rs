//! Declarative intent rule table, compiled once on first use.

use std::sync::LazyLock;

use kwgroup_core::intent::weights::default_weight;
use kwgroup_core::intent::Intent;
use regex::Regex;

/// Pattern sources per intent, in declaration order. Matched against the
/// lowercased query.
pub const INTENT_PATTERNS: &[(Intent, &[&str])] = &[
    (
        Intent::Informational,
        &[
            r"^(how|what|why|when|where|who|which)\b",
            r"\b(how to|what is|guide|tutorial|tips|learn|meaning|definition|explained|examples?|ideas)\b",
            r"(とは|方法|やり方|意味|使い方)",
        ],
    ),
    (
        Intent::Commercial,
        &[
            r"\b(best|top|reviews?|vs|versus|compare|comparison|cheap|cheapest|affordable|prices?|pricing|cost|deals?|discount|alternatives?)\b",
            r"(おすすめ|比較|ランキング|口コミ|評判|価格|料金|安い)",
        ],
    ),
    (
        Intent::Navigational,
        &[
            r"\b(login|log in|sign in|website|official|homepage|app|download|contact|near me)\b",
            r"\.(com|net|org|io)\b",
            r"(ログイン|公式|サイト)",
        ],
    ),
    (
        Intent::Transactional,
        &[
            r"\b(buy|order|purchase|shop|coupon|promo|subscribe|booking|book|hire|for sale|free trial)\b",
            r"(購入|通販|申し込み|予約|注文)",
        ],
    ),
];

/// One compiled category.
pub struct IntentRule {
    pub intent: Intent,
    pub weight: f64,
    pub patterns: Vec<Regex>,
}

impl IntentRule {
    /// Whether any pattern matches the (already lowercased) query.
    pub fn matches(&self, query: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(query))
    }
}

/// Rules in declaration order. A pattern that fails to compile is skipped.
pub static INTENT_RULES: LazyLock<Vec<IntentRule>> = LazyLock::new(|| {
    INTENT_PATTERNS
        .iter()
        .map(|&(intent, sources)| IntentRule {
            intent,
            weight: default_weight(intent),
            patterns: sources.iter().filter_map(|src| Regex::new(src).ok()).collect(),
        })
        .collect()
});
