//! Integration tests for the repository layer.
//!
//! Exercised against the in-memory double, which shares the key discipline
//! and record format with the Redis-backed store.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use jobvault_core::{Job, JobData, Language};

    use crate::in_memory::InMemoryJobStore;
    use crate::status::code;
    use crate::store::{JobStore, StoreError, job_key};

    fn setup() -> Arc<InMemoryJobStore> {
        jobvault_observability::init();
        InMemoryJobStore::arc()
    }

    #[test]
    fn stored_record_lands_under_namespaced_key() {
        let store = setup();
        let job = Job::command("job-1", "demo", "echo hi");

        let status = store.store(&job).unwrap();
        assert_eq!(status.code, code::OK);

        // The raw value under job:<id> is exactly the canonical text.
        let raw = store.raw_get(&job_key("job-1")).unwrap();
        assert_eq!(raw, job.to_text().unwrap());
        assert!(store.raw_get("job-1").is_none());
    }

    #[test]
    fn retrieve_reconstructs_the_stored_job() {
        let store = setup();
        let job = Job::script("job-2", "cleanup", "rm('/tmp/x')", Language::Lua);

        store.store(&job).unwrap();
        let back = store.retrieve("job-2").unwrap();
        assert_eq!(back, job);
    }

    #[test]
    fn storing_same_id_overwrites() {
        let store = setup();
        let first = Job::command("job-1", "first", "echo one");
        let second = Job::new(
            "job-1",
            "second",
            JobData::new("print('two')", false, Language::Python),
        );

        store.store(&first).unwrap();
        store.store(&second).unwrap();

        let back = store.retrieve("job-1").unwrap();
        assert_eq!(back, second);
    }

    #[test]
    fn retrieve_of_missing_id_is_not_found() {
        let store = setup();
        let err = store.retrieve("missing-id").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(ref id) if id.as_str() == "missing-id"));
        assert_eq!(err.code(), code::NOT_FOUND);
    }

    #[test]
    fn remove_then_retrieve_is_not_found() {
        let store = setup();
        let job = Job::command("job-3", "demo", "true");

        store.store(&job).unwrap();
        store.remove("job-3").unwrap();

        assert!(matches!(
            store.retrieve("job-3"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn remove_of_absent_id_is_not_found() {
        let store = setup();
        assert!(matches!(
            store.remove("never-stored"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn works_through_the_trait_object_seam() {
        let store = setup();
        let dyn_store: &dyn JobStore = store.as_ref();

        let job = Job::command("job-4", "via trait", "echo hi");
        dyn_store.store(&job).unwrap();
        assert_eq!(dyn_store.retrieve("job-4").unwrap(), job);
    }
}
