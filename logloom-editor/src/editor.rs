//! Pipeline editor
//!
//! State machine behind the create/edit pipeline dialog. The editor is
//! opened with an action signal, collects form input, and on submission
//! writes a new or updated record into a caller-owned ordered list. It
//! holds no copy of that list; the caller passes it in at submission time
//! and keeps ownership throughout.

use logloom_core::domain::pipeline::{PipelineRecord, alias_from_name};
use logloom_core::dto::pipeline::PipelinePatch;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{EditorError, Result};
use crate::ident::{IdSource, UuidSource};

/// Action signal selecting the editor's behavior.
///
/// The closed state is represented as `Option::<ActionMode>::None`; any
/// unrecognized discriminator string also maps to closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionMode {
    AddPipeline,
    EditPipeline,
}

impl ActionMode {
    /// Parse an action discriminator. Unknown values mean "closed".
    pub fn parse(signal: &str) -> Option<Self> {
        match signal {
            "add-pipeline" => Some(ActionMode::AddPipeline),
            "edit-pipeline" => Some(ActionMode::EditPipeline),
            _ => None,
        }
    }
}

/// The editable form fields, mirroring [`PipelinePatch`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineForm {
    pub name: String,
    pub description: String,
    pub filter: String,
}

impl PipelineForm {
    /// Clear every field, as happens when the editor opens in add mode.
    pub fn reset(&mut self) {
        *self = PipelineForm::default();
    }

    /// Pre-fill the form from a record's editable fields. A shallow copy:
    /// editing the form never touches the record until submission.
    pub fn prefill(&mut self, record: &PipelineRecord) {
        self.name = record.name.clone();
        self.description = record.description.clone();
        self.filter = record.filter.clone();
    }

    fn as_patch(&self) -> PipelinePatch {
        PipelinePatch {
            name: self.name.clone(),
            description: self.description.clone(),
            filter: self.filter.clone(),
        }
    }
}

/// What a successful submission did to the record list.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// A fresh record was appended to the list.
    Added(PipelineRecord),
    /// An existing record was replaced in place.
    Updated(PipelineRecord),
    /// The editor was not open; the list was left untouched.
    Closed,
}

/// Create/edit dialog logic for pipeline records.
pub struct PipelineEditor {
    /// Live form content, bound to whatever input surface drives this
    /// editor.
    pub form: PipelineForm,
    action: Option<ActionMode>,
    selected: Option<PipelineRecord>,
    created_by: String,
    catalog: Catalog,
    ids: Box<dyn IdSource>,
}

impl PipelineEditor {
    /// Create an editor for the given current user (display name; `None`
    /// when unknown), with the default label catalog and UUID ids.
    pub fn new(current_user: Option<&str>) -> Self {
        Self::with_seams(current_user, Catalog::default(), Box::new(UuidSource))
    }

    /// Create an editor with explicit collaborator seams: the resolved
    /// label catalog and the identifier source.
    pub fn with_seams(
        current_user: Option<&str>,
        catalog: Catalog,
        ids: Box<dyn IdSource>,
    ) -> Self {
        Self {
            form: PipelineForm::default(),
            action: None,
            selected: None,
            created_by: current_user.unwrap_or_default().to_string(),
            catalog,
            ids,
        }
    }

    /// Apply an action signal, re-synchronizing the form so it never shows
    /// stale content from a previous session: entering edit mode pre-fills
    /// from the selected record, entering add mode resets to blank.
    pub fn set_action(&mut self, action: Option<ActionMode>, selected: Option<PipelineRecord>) {
        self.action = action;
        self.selected = selected;

        match self.action {
            Some(ActionMode::EditPipeline) => {
                if let Some(record) = &self.selected {
                    self.form.prefill(record);
                }
            }
            Some(ActionMode::AddPipeline) => self.form.reset(),
            None => {}
        }
    }

    pub fn action(&self) -> Option<ActionMode> {
        self.action
    }

    /// The dialog is open exactly when an add or edit action is active.
    pub fn is_open(&self) -> bool {
        self.action.is_some()
    }

    pub fn selected(&self) -> Option<&PipelineRecord> {
        self.selected.as_ref()
    }

    /// Dialog title: `"{edit_pipeline} : {name}"` in edit mode, else the
    /// create label.
    pub fn title(&self) -> String {
        match self.action {
            Some(ActionMode::EditPipeline) => {
                let name = self.selected.as_ref().map(|r| r.name.as_str()).unwrap_or("");
                format!("{} : {}", self.catalog.edit_pipeline, name)
            }
            _ => self.catalog.create_pipeline.clone(),
        }
    }

    /// Label for the confirm button: update in edit mode, create otherwise.
    pub fn submit_label(&self) -> &str {
        match self.action {
            Some(ActionMode::EditPipeline) => &self.catalog.update,
            _ => &self.catalog.create,
        }
    }

    pub fn cancel_label(&self) -> &str {
        &self.catalog.cancel
    }

    /// Submit the form against the caller-owned record list.
    ///
    /// In add mode a fresh record is appended: new id, `order_id` of
    /// list-length + 1, creation timestamp and user, alias derived from
    /// the name, empty config, enabled. In edit mode the form fields are
    /// merged over the record matching the selection's id, in place; every
    /// unsubmitted field survives from the prior version.
    ///
    /// The record is fully computed before the list changes, and the list
    /// change happens before the editor closes. The editor closes on every
    /// path, including the rejected ones.
    ///
    /// # Errors
    ///
    /// [`EditorError::EditTargetMissing`] when the selected record is no
    /// longer in the list (the list stays untouched), and
    /// [`EditorError::NoSelection`] when edit mode was entered without a
    /// selected record.
    pub fn submit(&mut self, records: &mut Vec<PipelineRecord>) -> Result<Submission> {
        let outcome = self.apply(records);
        self.action = None;
        outcome
    }

    /// Close the dialog without touching the record list.
    pub fn cancel(&mut self) {
        self.action = None;
    }

    fn apply(&mut self, records: &mut Vec<PipelineRecord>) -> Result<Submission> {
        match self.action {
            Some(ActionMode::EditPipeline) => {
                let selected = self.selected.as_ref().ok_or(EditorError::NoSelection)?;
                let Some(index) = PipelineRecord::position_of(records, &selected.id) else {
                    tracing::warn!(id = %selected.id, "edit target no longer in pipeline list");
                    return Err(EditorError::EditTargetMissing {
                        id: selected.id.clone(),
                    });
                };

                let updated = self.form.as_patch().apply_to(&records[index]);
                records[index] = updated.clone();
                tracing::info!(id = %updated.id, name = %updated.name, "pipeline updated");
                Ok(Submission::Updated(updated))
            }
            Some(ActionMode::AddPipeline) => {
                let record = self.candidate(records.len());
                records.push(record.clone());
                tracing::info!(id = %record.id, name = %record.name, "pipeline created");
                Ok(Submission::Added(record))
            }
            None => Ok(Submission::Closed),
        }
    }

    fn candidate(&self, list_len: usize) -> PipelineRecord {
        PipelineRecord {
            id: self.ids.next_id(),
            order_id: list_len as u32 + 1,
            created_at: chrono::Utc::now(),
            created_by: self.created_by.clone(),
            name: self.form.name.clone(),
            alias: alias_from_name(&self.form.name),
            description: self.form.description.clone(),
            filter: self.form.filter.clone(),
            config: vec![],
            enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Deterministic id source for assertions on freshly minted records.
    struct SeqIds(Cell<u32>);

    impl SeqIds {
        fn new() -> Self {
            SeqIds(Cell::new(0))
        }
    }

    impl IdSource for SeqIds {
        fn next_id(&self) -> String {
            let n = self.0.get() + 1;
            self.0.set(n);
            format!("id-{n}")
        }
    }

    fn editor() -> PipelineEditor {
        PipelineEditor::with_seams(Some("jane"), Catalog::default(), Box::new(SeqIds::new()))
    }

    fn seeded() -> Vec<PipelineRecord> {
        vec![PipelineRecord {
            id: "a".to_string(),
            order_id: 1,
            created_at: chrono::Utc::now(),
            created_by: "ops".to_string(),
            name: "P1".to_string(),
            alias: "P1".to_string(),
            description: "first".to_string(),
            filter: "severity = ERROR".to_string(),
            config: vec![],
            enabled: true,
        }]
    }

    #[test]
    fn test_add_appends_candidate_record() {
        let mut editor = editor();
        let mut records = seeded();

        editor.set_action(Some(ActionMode::AddPipeline), None);
        editor.form.name = "New One".to_string();
        editor.form.description = "d".to_string();
        editor.form.filter = "f".to_string();

        let outcome = editor.submit(&mut records).unwrap();

        assert_eq!(records.len(), 2);
        let added = &records[1];
        assert_eq!(added.id, "id-1");
        assert_eq!(added.order_id, 2);
        assert_eq!(added.alias, "NewOne");
        assert_eq!(added.created_by, "jane");
        assert!(added.config.is_empty());
        assert!(added.enabled);
        assert_eq!(outcome, Submission::Added(added.clone()));
        assert!(!editor.is_open());
    }

    #[test]
    fn test_add_to_empty_list_starts_at_order_one() {
        let mut editor = editor();
        let mut records = Vec::new();

        editor.set_action(Some(ActionMode::AddPipeline), None);
        editor.form.name = "Only".to_string();

        editor.submit(&mut records).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].order_id, 1);
    }

    #[test]
    fn test_edit_merges_form_over_prior_record() {
        let mut editor = editor();
        let mut records = seeded();
        let prior = records[0].clone();

        editor.set_action(Some(ActionMode::EditPipeline), Some(prior.clone()));
        editor.form.name = "Renamed".to_string();

        let outcome = editor.submit(&mut records).unwrap();

        assert_eq!(records.len(), 1);
        let updated = &records[0];
        assert_eq!(updated.id, "a");
        assert_eq!(updated.name, "Renamed");
        // Alias is derived at creation only, never recomputed on edit.
        assert_eq!(updated.alias, "P1");
        assert_eq!(updated.order_id, 1);
        assert_eq!(updated.created_at, prior.created_at);
        assert_eq!(updated.created_by, "ops");
        assert_eq!(outcome, Submission::Updated(updated.clone()));
        assert!(!editor.is_open());
    }

    #[test]
    fn test_edit_leaves_other_positions_untouched() {
        let mut editor = editor();
        let mut records = seeded();
        records.push(PipelineRecord {
            id: "b".to_string(),
            order_id: 2,
            name: "P2".to_string(),
            alias: "P2".to_string(),
            ..records[0].clone()
        });
        let second = records[1].clone();

        editor.set_action(Some(ActionMode::EditPipeline), Some(records[0].clone()));
        editor.form.description = "changed".to_string();
        editor.submit(&mut records).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1], second);
    }

    #[test]
    fn test_edit_target_missing_leaves_list_untouched() {
        let mut editor = editor();
        let mut records = seeded();
        let mut ghost = records[0].clone();
        ghost.id = "gone".to_string();

        editor.set_action(Some(ActionMode::EditPipeline), Some(ghost));
        let before = records.clone();

        let err = editor.submit(&mut records).unwrap_err();

        assert_eq!(
            err,
            EditorError::EditTargetMissing {
                id: "gone".to_string()
            }
        );
        assert_eq!(records, before);
        // The dialog still closes.
        assert!(!editor.is_open());
    }

    #[test]
    fn test_edit_without_selection_is_a_caller_bug() {
        let mut editor = editor();
        let mut records = seeded();

        editor.set_action(Some(ActionMode::EditPipeline), None);
        let err = editor.submit(&mut records).unwrap_err();

        assert_eq!(err, EditorError::NoSelection);
        assert_eq!(records.len(), 1);
        assert!(!editor.is_open());
    }

    #[test]
    fn test_closed_submit_is_noop() {
        let mut editor = editor();
        let mut records = seeded();

        let outcome = editor.submit(&mut records).unwrap();

        assert_eq!(outcome, Submission::Closed);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_cancel_clears_action_without_touching_list() {
        let mut editor = editor();
        let records = seeded();

        editor.set_action(Some(ActionMode::AddPipeline), None);
        assert!(editor.is_open());

        editor.cancel();

        assert!(!editor.is_open());
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_entering_edit_prefills_and_entering_add_resets() {
        let mut editor = editor();
        let records = seeded();

        editor.set_action(Some(ActionMode::EditPipeline), Some(records[0].clone()));
        assert_eq!(editor.form.name, "P1");
        assert_eq!(editor.form.description, "first");
        assert_eq!(editor.form.filter, "severity = ERROR");

        editor.set_action(Some(ActionMode::AddPipeline), None);
        assert_eq!(editor.form, PipelineForm::default());
    }

    #[test]
    fn test_title_follows_mode() {
        let mut editor = editor();
        let records = seeded();

        editor.set_action(Some(ActionMode::EditPipeline), Some(records[0].clone()));
        assert_eq!(editor.title(), "Edit Pipeline : P1");
        assert_eq!(editor.submit_label(), "Update");

        editor.set_action(Some(ActionMode::AddPipeline), None);
        assert_eq!(editor.title(), "Create New Pipeline");
        assert_eq!(editor.submit_label(), "Create");
        assert_eq!(editor.cancel_label(), "Cancel");
    }

    #[test]
    fn test_action_parse_ignores_unknown_signals() {
        assert_eq!(ActionMode::parse("add-pipeline"), Some(ActionMode::AddPipeline));
        assert_eq!(ActionMode::parse("edit-pipeline"), Some(ActionMode::EditPipeline));
        assert_eq!(ActionMode::parse("view-pipeline"), None);
        assert_eq!(ActionMode::parse(""), None);
    }

    #[test]
    fn test_missing_user_records_empty_creator() {
        let mut editor =
            PipelineEditor::with_seams(None, Catalog::default(), Box::new(SeqIds::new()));
        let mut records = Vec::new();

        editor.set_action(Some(ActionMode::AddPipeline), None);
        editor.form.name = "Anon".to_string();
        editor.submit(&mut records).unwrap();

        assert_eq!(records[0].created_by, "");
    }
}
