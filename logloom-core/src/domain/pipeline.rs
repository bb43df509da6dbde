//! Pipeline domain types
//!
//! A pipeline record is one named, ordered configuration unit describing
//! how matching log data should be filtered and processed. The record list
//! is owned by the caller; the editor only computes replacement lists.

use serde::{Deserialize, Serialize};

/// One configured processing pipeline.
///
/// `id`, `created_at` and `created_by` are set once at creation and never
/// change afterwards. `alias` is derived from `name` at creation time only
/// and is deliberately not recomputed when `name` is later edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineRecord {
    pub id: String,
    /// Position assigned as list-length + 1 at creation. Not re-normalized
    /// on deletion, so gaps and duplicates can occur over time.
    pub order_id: u32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Creator display name; empty string when unknown.
    pub created_by: String,
    pub name: String,
    /// `name` with every whitespace character removed.
    pub alias: String,
    pub description: String,
    pub filter: String,
    /// Processor steps, populated by a separate processor editor. The
    /// pipeline editor creates this empty and carries it through edits
    /// untouched.
    pub config: Vec<ProcessorStep>,
    pub enabled: bool,
}

impl PipelineRecord {
    /// Locate a record in a list by id.
    pub fn position_of(records: &[PipelineRecord], id: &str) -> Option<usize> {
        records.iter().position(|record| record.id == id)
    }
}

/// One processor step inside a pipeline's `config` sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessorStep {
    pub id: String,
    pub order_id: u32,
    #[serde(rename = "type")]
    pub processor_type: String,
    pub name: String,
    pub enabled: bool,
}

/// Derive a pipeline alias from its display name by stripping every
/// whitespace character.
pub fn alias_from_name(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}
