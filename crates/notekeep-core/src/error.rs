//! Shared error type across notekeep crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request.
    BadRequest,
    /// Requested record does not exist.
    NotFound,
    /// Backing store is not initialized or unreachable.
    StoreUnavailable,
    /// Store query executed and failed.
    BadQuery,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::StoreUnavailable => "STORE_UNAVAILABLE",
            ClientCode::BadQuery => "BAD_QUERY",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }

    /// Whether the failure is the caller's to correct.
    ///
    /// Query failures count as client faults: the service has always answered
    /// them with a request-level status, and clients depend on that.
    pub fn is_client_fault(self) -> bool {
        matches!(
            self,
            ClientCode::BadRequest | ClientCode::NotFound | ClientCode::BadQuery
        )
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, NotekeepError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum NotekeepError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    StoreUnavailable(String),
    #[error("query failed: {0}")]
    BadQuery(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl NotekeepError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            NotekeepError::BadRequest(_) => ClientCode::BadRequest,
            NotekeepError::NotFound => ClientCode::NotFound,
            NotekeepError::StoreUnavailable(_) => ClientCode::StoreUnavailable,
            NotekeepError::BadQuery(_) => ClientCode::BadQuery,
            NotekeepError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            NotekeepError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Store handle missing (never connected, or already closed).
    pub fn store_not_initialized() -> Self {
        NotekeepError::StoreUnavailable("db not initialized".into())
    }
}
