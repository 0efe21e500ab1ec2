//! # kwgroup-core
//!
//! Foundation crate for the keyword grouping engine.
//! Defines the record and group models, the intent taxonomy, options/config,
//! errors, and the trait seams the other crates implement.

pub mod config;
pub mod errors;
pub mod intent;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{GroupingOptions, KwGroupConfig};
pub use errors::{KwGroupError, KwGroupResult};
pub use intent::Intent;
pub use models::{Group, GroupMetrics, GroupingResult, KeywordRecord};
