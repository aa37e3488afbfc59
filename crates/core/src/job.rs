//! Job record: identifier, description, and owned payload.

use serde::{Deserialize, Serialize};

use crate::data::JobData;
use crate::error::{JobError, JobResult};
use crate::language::Language;

/// A unit of work description.
///
/// The `id` is the caller-supplied store key; uniqueness is not enforced and
/// storing a second job under the same id overwrites the first. Jobs are not
/// mutated in place — an update is a replace-by-store.
///
/// Persisted shape (top-level key order is part of the record format):
/// `{"id": ..., "description": ..., "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    id: String,
    description: String,
    data: JobData,
}

impl Job {
    /// Create a job, taking ownership of its payload.
    pub fn new(id: impl Into<String>, description: impl Into<String>, data: JobData) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            data,
        }
    }

    /// Shorthand for a literal-command job (no interpreter).
    pub fn command(
        id: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self::new(id, description, JobData::new(content, true, Language::None))
    }

    /// Shorthand for a script job run by `lang`.
    pub fn script(
        id: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
        lang: Language,
    ) -> Self {
        Self::new(id, description, JobData::new(content, false, lang))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn data(&self) -> &JobData {
        &self.data
    }

    /// Parse a job from its canonical JSON text.
    ///
    /// Every top-level and nested field is checked for presence and shape;
    /// on failure a [`JobError`] is returned and no partial job escapes.
    pub fn parse(text: &str) -> JobResult<Self> {
        let job: Job =
            serde_json::from_str(text).map_err(|e| JobError::malformed(e.to_string()))?;
        if job.data.content().is_empty() {
            return Err(JobError::invalid_field("content", "must not be empty"));
        }
        Ok(job)
    }

    /// Serialize to a JSON node, payload nested under `data`.
    pub fn to_value(&self) -> JobResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| JobError::malformed(e.to_string()))
    }

    /// Serialize to canonical JSON text with stable key order
    /// (`id`, `description`, `data`). This is the persisted record format.
    pub fn to_text(&self) -> JobResult<String> {
        serde_json::to_string(self).map_err(|e| JobError::malformed(e.to_string()))
    }
}
