//! In-memory job store for tests/dev.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use jobvault_core::Job;

use crate::status::Status;
use crate::store::{JobStore, StoreError, job_key};

/// In-memory double for the Redis-backed store.
///
/// Keeps the serialized record text under the same namespaced keys, so the
/// persisted format and key discipline are exercised exactly as with the
/// real store. Always "connected"; there is no lifecycle to manage.
#[derive(Debug, Default)]
pub struct InMemoryJobStore {
    records: RwLock<HashMap<String, String>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Raw read of a namespaced key, bypassing parsing. Test hook for
    /// asserting on the exact persisted text.
    pub fn raw_get(&self, key: &str) -> Option<String> {
        self.records.read().unwrap().get(key).cloned()
    }
}

impl JobStore for InMemoryJobStore {
    fn store(&self, job: &Job) -> Result<Status, StoreError> {
        let text = job.to_text()?;
        self.records
            .write()
            .unwrap()
            .insert(job_key(job.id()), text);
        Ok(Status::ok("OK"))
    }

    fn retrieve(&self, id: &str) -> Result<Job, StoreError> {
        let records = self.records.read().unwrap();
        match records.get(&job_key(id)) {
            Some(text) => Ok(Job::parse(text)?),
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    fn remove(&self, id: &str) -> Result<Status, StoreError> {
        match self.records.write().unwrap().remove(&job_key(id)) {
            Some(_) => Ok(Status::ok("removed 1 record(s)")),
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }
}
