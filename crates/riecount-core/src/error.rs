//! Shared error type across riecount crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request.
    BadRequest,
    /// Counter file exists but could not be read or parsed.
    StorageRead,
    /// Counter file could not be written.
    StorageWrite,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::StorageRead => "STORAGE_READ",
            ClientCode::StorageWrite => "STORAGE_WRITE",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, RiecountError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum RiecountError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("storage read failed: {0}")]
    StorageRead(String),
    #[error("storage write failed: {0}")]
    StorageWrite(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl RiecountError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            RiecountError::BadRequest(_) => ClientCode::BadRequest,
            RiecountError::StorageRead(_) => ClientCode::StorageRead,
            RiecountError::StorageWrite(_) => ClientCode::StorageWrite,
            RiecountError::Internal(_) => ClientCode::Internal,
        }
    }

    /// True for failures of the persisted counter file.
    pub fn is_storage(&self) -> bool {
        matches!(self, RiecountError::StorageRead(_) | RiecountError::StorageWrite(_))
    }
}
