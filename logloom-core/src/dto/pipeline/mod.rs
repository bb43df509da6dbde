//! Pipeline update DTOs

use serde::{Deserialize, Serialize};

use crate::domain::pipeline::PipelineRecord;

/// The fields of a pipeline record that an edit may change.
///
/// Applying a patch is the only way an existing record is modified: every
/// field the patch does not carry (`id`, `order_id`, `created_at`,
/// `created_by`, `alias`, `config`, `enabled`) survives from the prior
/// version unchanged. In particular `alias` is not recomputed from the
/// patched `name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelinePatch {
    pub name: String,
    pub description: String,
    pub filter: String,
}

impl PipelinePatch {
    /// Merge this patch over a prior record, returning the updated record.
    pub fn apply_to(&self, prior: &PipelineRecord) -> PipelineRecord {
        PipelineRecord {
            name: self.name.clone(),
            description: self.description.clone(),
            filter: self.filter.clone(),
            ..prior.clone()
        }
    }
}
