//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type JobResult<T> = Result<T, JobError>;

/// Job record (de)serialization error.
///
/// Keep this focused on the record format itself (missing fields, wrong
/// shapes, out-of-range codes). Store/transport concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JobError {
    /// The record text is not a well-formed job object.
    #[error("malformed job record: {0}")]
    Malformed(String),

    /// A field was present but failed validation.
    #[error("invalid field `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl JobError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
