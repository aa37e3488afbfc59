//! `jobvault-core` — job record domain model.
//!
//! This crate contains **pure domain** types (no infrastructure concerns):
//! the job payload, its language tag, and lossless JSON (de)serialization.

pub mod data;
pub mod error;
pub mod job;
pub mod language;

pub use data::JobData;
pub use error::{JobError, JobResult};
pub use job::Job;
pub use language::Language;
