//! Logloom Editor
//!
//! Editing logic for log-pipeline configuration, kept free of any
//! rendering framework so it can run and be tested headless.
//!
//! This crate contains:
//! - The pipeline editor: an open/submit/cancel state machine that turns
//!   form input into new or updated records in a caller-owned list
//! - The alert-rule scope: provider-owned shared state with fail-fast
//!   access once the provider is gone
//! - The collaborator seams the editor is constructed with (identifier
//!   source, current-user identity, label catalog)
//!
//! # Example
//!
//! ```
//! use logloom_editor::{ActionMode, PipelineEditor};
//!
//! let mut editor = PipelineEditor::new(Some("jane"));
//! let mut records = Vec::new();
//!
//! editor.set_action(Some(ActionMode::AddPipeline), None);
//! editor.form.name = "Drop debug logs".to_string();
//! editor.form.filter = "severity = DEBUG".to_string();
//!
//! let outcome = editor.submit(&mut records).unwrap();
//! assert_eq!(records.len(), 1);
//! assert!(!editor.is_open());
//! # let _ = outcome;
//! ```

pub mod catalog;
pub mod context;
pub mod editor;
pub mod error;
pub mod ident;

// Re-export commonly used types
pub use catalog::Catalog;
pub use context::{AlertRuleError, AlertRuleHandle, AlertRuleProvider, AlertRuleState};
pub use editor::{ActionMode, PipelineEditor, PipelineForm, Submission};
pub use error::{EditorError, Result};
pub use ident::{IdSource, UuidSource};
