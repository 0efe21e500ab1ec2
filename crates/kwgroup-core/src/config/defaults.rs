// Single source of truth for all default values.

// --- Grouping ---
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.5;
pub const DEFAULT_MIN_GROUP_SIZE: usize = 2;
pub const DEFAULT_MAX_GROUPS: usize = 20;
pub const DEFAULT_GROUP_BY_INTENT: bool = true;

// --- Clamping floors ---
pub const MIN_ALLOWED_GROUP_SIZE: usize = 1;
pub const MIN_ALLOWED_MAX_GROUPS: usize = 1;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_FILTER_ENV: &str = "KWGROUP_LOG";
