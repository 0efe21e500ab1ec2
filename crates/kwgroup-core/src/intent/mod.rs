//! Search intent taxonomy and category weights.

pub mod taxonomy;
pub mod weights;

pub use taxonomy::Intent;
