//! Redis-backed job store.
//!
//! Records are written with `SET job:<id> <text>`, read with `GET`, and
//! deleted with `DEL`; the value is the job's canonical JSON text.
//!
//! Concurrency discipline: one exclusively-owned connection behind a mutex.
//! Every operation locks the connection for its duration, so concurrent
//! callers are serialized. All calls are blocking, bounded by the connect
//! timeout.

use std::sync::Mutex;
use std::time::Duration;

use tracing::{debug, instrument};

use jobvault_core::Job;

use crate::status::Status;
use crate::store::{JobStore, StoreError, job_key};

/// Connect timeout for TCP and local-socket connections.
const CONNECT_TIMEOUT: Duration = Duration::from_millis(1500);

/// Job repository backed by a Redis instance.
///
/// Lifecycle is an explicit state machine: Disconnected → Connected →
/// Disconnected. Only [`connect`](Self::connect) enters the connected state
/// and only [`disconnect`](Self::disconnect) leaves it. Calling `connect`
/// while connected, `disconnect` while disconnected, or any data operation
/// while disconnected is a caller bug and panics.
#[derive(Default)]
pub struct RedisJobStore {
    conn: Mutex<Option<redis::Connection>>,
}

impl std::fmt::Debug for RedisJobStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisJobStore")
            .field("connected", &self.is_connected())
            .finish()
    }
}

impl RedisJobStore {
    /// Create a store in the disconnected state.
    pub fn new() -> Self {
        Self {
            conn: Mutex::new(None),
        }
    }

    /// Establish the connection.
    ///
    /// `host` is a hostname for TCP connections, or a socket path when
    /// `use_local_socket` is set (`port` is then ignored). On failure the
    /// store stays disconnected and a [`StoreError::Connection`] carrying
    /// the underlying error is returned.
    ///
    /// # Panics
    ///
    /// Panics if already connected.
    #[instrument(skip(self))]
    pub fn connect(
        &self,
        host: &str,
        port: u16,
        use_local_socket: bool,
    ) -> Result<Status, StoreError> {
        let mut guard = self.conn.lock().unwrap();
        assert!(guard.is_none(), "connect called while already connected");

        let url = if use_local_socket {
            format!("redis+unix://{host}")
        } else {
            format!("redis://{host}:{port}")
        };
        let client =
            redis::Client::open(url.as_str()).map_err(|e| StoreError::Connection(e.to_string()))?;
        let conn = client
            .get_connection_with_timeout(CONNECT_TIMEOUT)
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        *guard = Some(conn);
        debug!("connected to job store");
        Ok(Status::ok("connected"))
    }

    /// Release the connection and return to the disconnected state.
    ///
    /// # Panics
    ///
    /// Panics if not connected.
    pub fn disconnect(&self) -> Status {
        let mut guard = self.conn.lock().unwrap();
        assert!(guard.is_some(), "disconnect called while not connected");
        *guard = None;
        Status::ok("connection closed")
    }

    pub fn is_connected(&self) -> bool {
        self.conn.lock().unwrap().is_some()
    }
}

impl JobStore for RedisJobStore {
    #[instrument(skip(self, job), fields(job_id = %job.id()), err)]
    fn store(&self, job: &Job) -> Result<Status, StoreError> {
        let text = job.to_text()?;

        let mut guard = self.conn.lock().unwrap();
        let conn = guard.as_mut().expect("store called while not connected");

        let reply: String = redis::cmd("SET")
            .arg(job_key(job.id()))
            .arg(&text)
            .query(conn)
            .map_err(command_error)?;

        debug!(reply = %reply, "stored job");
        Ok(Status::ok(reply))
    }

    #[instrument(skip(self), err)]
    fn retrieve(&self, id: &str) -> Result<Job, StoreError> {
        let mut guard = self.conn.lock().unwrap();
        let conn = guard.as_mut().expect("retrieve called while not connected");

        let value: Option<String> = redis::cmd("GET")
            .arg(job_key(id))
            .query(conn)
            .map_err(command_error)?;

        match value {
            Some(text) => Ok(Job::parse(&text)?),
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    #[instrument(skip(self), err)]
    fn remove(&self, id: &str) -> Result<Status, StoreError> {
        let mut guard = self.conn.lock().unwrap();
        let conn = guard.as_mut().expect("remove called while not connected");

        let removed: i64 = redis::cmd("DEL")
            .arg(job_key(id))
            .query(conn)
            .map_err(command_error)?;

        if removed == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        debug!(removed, "removed job");
        Ok(Status::ok(format!("removed {removed} record(s)")))
    }
}

/// Classify a failed command. A dropped connection is recoverable by a fresh
/// `connect`; anything else is an unexpected reply and the connection is
/// left open for the caller to decide.
fn command_error(e: redis::RedisError) -> StoreError {
    if e.is_io_error() || e.is_connection_dropped() {
        StoreError::Connection(e.to_string())
    } else {
        StoreError::Protocol(e.to_string())
    }
}
