//! Status results returned by store operations.

/// Numeric status codes carried by results on both the success and failure
/// paths. Failure variants map to these via [`StoreError::code`].
///
/// [`StoreError::code`]: crate::store::StoreError::code
pub mod code {
    pub const OK: u16 = 0;
    pub const CONNECTION: u16 = 1;
    pub const PROTOCOL: u16 = 2;
    pub const NOT_FOUND: u16 = 3;
    pub const SERIALIZATION: u16 = 4;
}

/// Successful outcome of a store operation: a success code plus a
/// human-readable message (often echoing the server reply, e.g. `OK`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub code: u16,
    pub message: String,
}

impl Status {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            code: code::OK,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_status_carries_success_code() {
        let status = Status::ok("OK");
        assert_eq!(status.code, code::OK);
        assert_eq!(status.message, "OK");
    }
}
