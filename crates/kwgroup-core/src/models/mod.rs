//! Input records and grouping output.

pub mod coerce;
pub mod group;
pub mod grouping_result;
pub mod keyword_record;

pub use group::{Group, GroupMetrics};
pub use grouping_result::GroupingResult;
pub use keyword_record::KeywordRecord;
