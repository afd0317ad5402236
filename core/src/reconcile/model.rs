use crate::error::CoreResult;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CSV_COLUMN: &str = "File_Content";
pub const DEFAULT_JSON_KEY: &str = "currentUser";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReconcileConfig {
    pub csv_column: String,
    pub json_key: String,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            csv_column: DEFAULT_CSV_COLUMN.to_string(),
            json_key: DEFAULT_JSON_KEY.to_string(),
        }
    }
}

/// One uploaded JSON file: its display name and raw text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonDocument {
    pub name: String,
    pub text: String,
}

impl JsonDocument {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Identifier -> names of the documents that carried it, in first-seen order.
pub type MissingGroups = IndexMap<String, Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    pub match_count: usize,
    pub missing: MissingGroups,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MissingUser {
    pub current_user: String,
    pub files: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub total_json_files: usize,
    pub matching_users: usize,
    pub missing_users: Vec<MissingUser>,
    pub csv_count: usize,
}

impl ComparisonResult {
    pub fn to_json_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
