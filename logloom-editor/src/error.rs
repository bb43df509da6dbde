//! Error types for the pipeline editor

use thiserror::Error;

/// Result type alias for editor operations
pub type Result<T> = std::result::Result<T, EditorError>;

/// Errors that can occur while operating the pipeline editor
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    /// The record selected for editing is no longer present in the list,
    /// e.g. it was deleted while the editor was open. The list is left
    /// untouched.
    #[error("pipeline {id} selected for editing no longer exists")]
    EditTargetMissing {
        /// Id of the missing record
        id: String,
    },

    /// Edit mode was entered without a selected record. A caller bug.
    #[error("edit mode requires a selected pipeline record")]
    NoSelection,
}
