//! Test fixture loader for golden similarity scenarios.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use std::path::PathBuf;

use neuronet_core::models::{AnalysisReport, ContentRecord, MetricBreakdown, Recommendation};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
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

/// Load a similarity scenario from `similarity/<name>.json`.
pub fn load_scenario(name: &str) -> SimilarityScenario {
    load_fixture(&format!("similarity/{name}.json"))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by path.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
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

/// Stored listings plus candidates to check against them.
#[derive(Debug, Clone, Deserialize)]
pub struct SimilarityScenario {
    pub description: String,
    pub records: Vec<ContentRecord>,
    pub cases: Vec<ScenarioCase>,
}

impl SimilarityScenario {
    pub fn case(&self, name: &str) -> &ScenarioCase {
        self.cases
            .iter()
            .find(|c| c.name == name)
            .unwrap_or_else(|| panic!("No case named {name}"))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioCase {
    pub name: String,
    pub candidate: String,
    pub item_type: String,
    pub expected: ExpectedVerdict,
}

/// Expected outcome. Percentages are unrounded unless named `display_*`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedVerdict {
    pub similarity_percentage: f64,
    pub display_percentage: f64,
    pub recommendation: Recommendation,
    pub matched_id: Option<u64>,
    /// Blended score of the candidate against each record of the case's type.
    #[serde(default)]
    pub record_scores: Vec<RecordScore>,
    /// Sub-scores against the matched record.
    #[serde(default)]
    pub breakdown: Option<MetricBreakdown>,
    #[serde(default)]
    pub analysis: Option<AnalysisReport>,
    #[serde(default)]
    pub reasoning: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RecordScore {
    pub id: u64,
    pub score: f64,
}
