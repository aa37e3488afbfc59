//! `jobvault-store` — Redis-backed persistence for job records.
//!
//! ## Design
//!
//! - `JobStore`: repository trait, the seam for injecting test doubles
//! - `RedisJobStore`: one mutex-guarded connection with an explicit
//!   Disconnected → Connected → Disconnected lifecycle
//! - `InMemoryJobStore`: test double with the same key discipline
//! - `Status`/`StoreError`: distinct success and failure results, each
//!   carrying a numeric code and a message
//!
//! No operation retries automatically; after a connection failure the caller
//! decides whether to `connect` again.

pub mod in_memory;
pub mod redis_store;
pub mod status;
pub mod store;

#[cfg(test)]
mod integration_tests;

pub use in_memory::InMemoryJobStore;
pub use redis_store::RedisJobStore;
pub use status::Status;
pub use store::{JobStore, StoreError, JOB_KEY_PREFIX, job_key};
