use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Coarse search intent of a query.
///
/// Variant order is the declaration order used for tie-breaks: when two
/// matching categories carry the same weight, the earlier one wins.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    #[default]
    Informational,
    Commercial,
    Navigational,
    Transactional,
}

impl Intent {
    /// Total number of intent types.
    pub const COUNT: usize = 4;

    /// All variants in declaration order.
    pub const ALL: [Intent; 4] = [
        Self::Informational,
        Self::Commercial,
        Self::Navigational,
        Self::Transactional,
    ];

    /// Position in declaration order.
    pub fn ordinal(&self) -> usize {
        match self {
            Self::Informational => 0,
            Self::Commercial => 1,
            Self::Navigational => 2,
            Self::Transactional => 3,
        }
    }

    /// Lowercase label, as serialized.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Informational => "informational",
            Self::Commercial => "commercial",
            Self::Navigational => "navigational",
            Self::Transactional => "transactional",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
