//! Translated label catalog
//!
//! The editor renders a fixed set of labels. Rather than reaching into an
//! ambient localization service, the resolved strings are injected as a
//! plain value, so the editor stays testable without a translation layer.

use serde::{Deserialize, Serialize};

/// Resolved display labels for the pipeline editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub edit_pipeline: String,
    pub create_pipeline: String,
    pub update: String,
    pub create: String,
    pub cancel: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            edit_pipeline: "Edit Pipeline".to_string(),
            create_pipeline: "Create New Pipeline".to_string(),
            update: "Update".to_string(),
            create: "Create".to_string(),
            cancel: "Cancel".to_string(),
        }
    }
}
