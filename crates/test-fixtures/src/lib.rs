//! Golden grouping scenarios and a typed loader for them.
//!
//! Each file under `golden/` holds grouping options, an input batch, and the
//! expected outcome. Loaders panic on missing or malformed files; this crate
//! is only used from tests and benches.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Directory holding the scenario files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
}

/// One golden scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub description: String,
    /// Raw options object, decoded by the caller.
    pub options: serde_json::Value,
    /// Raw record array, decoded by the caller.
    pub input: serde_json::Value,
    pub expected: ExpectedOutcome,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedOutcome {
    pub total_groups: usize,
    pub total_keywords: usize,
    /// In output order.
    pub groups: Vec<ExpectedGroup>,
    /// Queries, in output order.
    pub ungrouped: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedGroup {
    pub topic: String,
    pub intent: String,
    /// Member queries in formation order.
    pub queries: Vec<String>,
    pub total_clicks: u64,
    #[serde(default)]
    pub total_impressions: Option<u64>,
    #[serde(default, rename = "avgCTR")]
    pub avg_ctr: Option<f64>,
    #[serde(default)]
    pub avg_position: Option<f64>,
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a scenario by file name, e.g. `"running_shoes.json"`.
pub fn load_scenario(name: &str) -> GoldenScenario {
    load_fixture(name)
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// All scenario files, sorted by name.
pub fn list_scenarios() -> Vec<PathBuf> {
    let dir = fixtures_root();
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// File names of all scenarios, sorted.
pub fn scenario_names() -> Vec<String> {
    list_scenarios()
        .iter()
        .filter_map(|p| p.file_name()?.to_str().map(str::to_string))
        .collect()
}
