//! Pipeline list storage
//!
//! The record list round-trips through a plain JSON array on disk. A
//! missing file reads as an empty list.

use std::path::Path;

use anyhow::{Context, Result};
use logloom_core::domain::pipeline::PipelineRecord;

/// Load the pipeline list from `path`.
pub fn load(path: &Path) -> Result<Vec<PipelineRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read pipeline list: {}", path.display()))?;

    serde_json::from_str(&raw)
        .with_context(|| format!("pipeline list is not valid JSON: {}", path.display()))
}

/// Write the pipeline list back to `path`, replacing it wholesale.
pub fn save(path: &Path, records: &[PipelineRecord]) -> Result<()> {
    let raw = serde_json::to_string_pretty(records).context("failed to encode pipeline list")?;

    std::fs::write(path, raw)
        .with_context(|| format!("failed to write pipeline list: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use logloom_core::domain::pipeline::alias_from_name;

    #[test]
    fn test_missing_file_reads_as_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipelines.json");

        assert_eq!(load(&path).unwrap(), vec![]);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipelines.json");

        let records = vec![PipelineRecord {
            id: "a".to_string(),
            order_id: 1,
            created_at: chrono_now_rounded(),
            created_by: "ops".to_string(),
            name: "P1".to_string(),
            alias: alias_from_name("P1"),
            description: "first".to_string(),
            filter: "severity = ERROR".to_string(),
            config: vec![],
            enabled: true,
        }];

        save(&path, &records).unwrap();
        assert_eq!(load(&path).unwrap(), records);
    }

    // Timestamps comparable after a JSON round trip.
    fn chrono_now_rounded() -> chrono::DateTime<chrono::Utc> {
        use chrono::TimeZone;
        chrono::Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap()
    }
}
