//! Job store abstraction, key namespacing, and error taxonomy.

use std::sync::Arc;

use jobvault_core::{Job, JobError};

use crate::status::{Status, code};

/// Namespace prefix prepended to every job key, so job records never collide
/// with other record kinds sharing the same store. Process-wide constant.
pub const JOB_KEY_PREFIX: &str = "job";

/// Build the store key for a job id: `job:<id>`.
pub fn job_key(id: &str) -> String {
    format!("{JOB_KEY_PREFIX}:{id}")
}

/// Job store abstraction.
///
/// Implementations must be safe to share across threads; the Redis-backed
/// store serializes operations on one connection, the in-memory double uses
/// a lock around its map.
pub trait JobStore: Send + Sync {
    /// Persist `job` under `job:<id>`, overwriting any existing record.
    fn store(&self, job: &Job) -> Result<Status, StoreError>;

    /// Read back the job stored under `job:<id>`.
    ///
    /// An absent key is [`StoreError::NotFound`], never a default job.
    fn retrieve(&self, id: &str) -> Result<Job, StoreError>;

    /// Delete the record under `job:<id>`.
    ///
    /// Removing an id that was never stored (or already removed) is
    /// [`StoreError::NotFound`].
    fn remove(&self, id: &str) -> Result<Status, StoreError>;
}

/// Store operation failure.
///
/// Recoverable failures only; invoking an operation in the wrong connection
/// state is a caller bug and panics instead.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// Network/socket failure. The caller may re-invoke `connect`.
    #[error("connection error: {0}")]
    Connection(String),

    /// Malformed or unexpected reply from the store. The operation is
    /// aborted; the connection is left open.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The target key is absent.
    #[error("job not found: {0}")]
    NotFound(String),

    /// The stored record text failed to parse (or the job failed to
    /// serialize). No partial job is returned.
    #[error("serialization error: {0}")]
    Serialization(#[from] JobError),
}

impl StoreError {
    /// Numeric failure code, for callers that report codes rather than
    /// matching variants.
    pub fn code(&self) -> u16 {
        match self {
            StoreError::Connection(_) => code::CONNECTION,
            StoreError::Protocol(_) => code::PROTOCOL,
            StoreError::NotFound(_) => code::NOT_FOUND,
            StoreError::Serialization(_) => code::SERIALIZATION,
        }
    }
}

impl<S: JobStore> JobStore for Arc<S> {
    fn store(&self, job: &Job) -> Result<Status, StoreError> {
        (**self).store(job)
    }

    fn retrieve(&self, id: &str) -> Result<Job, StoreError> {
        (**self).retrieve(id)
    }

    fn remove(&self, id: &str) -> Result<Status, StoreError> {
        (**self).remove(id)
    }
}
