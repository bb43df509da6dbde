//! Configuration module
//!
//! Handles CLI configuration including the pipeline list location and the
//! acting user.

use std::path::PathBuf;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file holding the pipeline list
    pub file: PathBuf,
    /// Current-user display name recorded on created records
    pub user: Option<String>,
}
