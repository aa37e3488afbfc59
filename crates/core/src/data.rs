//! Job payload: a literal command or a script body plus its language.

use serde::{Deserialize, Serialize};

use crate::error::{JobError, JobResult};
use crate::language::Language;

/// Payload of a job.
///
/// Immutable after construction. Every `JobData` is exclusively owned by the
/// `Job` that wraps it; `Clone` produces an independent copy, never an alias.
///
/// Persisted shape (field order is part of the record format):
/// `{"content": <string>, "is_command": 0|1, "lang": <code>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobData {
    content: String,
    #[serde(with = "int_bool")]
    is_command: bool,
    lang: Language,
}

impl JobData {
    /// Create a payload.
    ///
    /// `content` must not be empty; passing an empty string is a caller
    /// contract violation and panics.
    pub fn new(content: impl Into<String>, is_command: bool, lang: Language) -> Self {
        let content = content.into();
        assert!(!content.is_empty(), "job content must not be empty");
        Self {
            content,
            is_command,
            lang,
        }
    }

    /// The command line or script body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// True when `content` is a literal command; false when it is a script
    /// body for the interpreter named by [`lang`](Self::lang).
    pub fn is_command(&self) -> bool {
        self.is_command
    }

    /// Interpreter for script content. Ignored for command jobs but still
    /// persisted.
    pub fn lang(&self) -> Language {
        self.lang
    }

    /// Serialize to a JSON node. Lossless.
    pub fn to_value(&self) -> JobResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| JobError::malformed(e.to_string()))
    }

    /// Rebuild a payload from a JSON node.
    ///
    /// Fails if any field is absent, of the wrong shape, or out of range;
    /// never defaults a missing field.
    pub fn from_value(value: serde_json::Value) -> JobResult<Self> {
        let data: JobData =
            serde_json::from_value(value).map_err(|e| JobError::malformed(e.to_string()))?;
        if data.content.is_empty() {
            return Err(JobError::invalid_field("content", "must not be empty"));
        }
        Ok(data)
    }
}

/// Encodes `is_command` as the integers 0/1 the record format requires.
mod int_bool {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*flag))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(serde::de::Error::custom(format!(
                "is_command must be 0 or 1, got {other}"
            ))),
        }
    }
}
