//! Error types for the remote todo service client

use thiserror::Error;

/// Errors that can occur when talking to the remote todo service
///
/// Transport failures and non-success HTTP statuses are folded into this
/// single taxonomy at the client boundary. The type is `Clone` and
/// `PartialEq` so a failure can be kept in shared state and carried inside
/// actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Network-level failure (unreachable host, closed connection, timeout)
    #[error("request failed: {0}")]
    Transport(String),

    /// Service answered with a non-success status
    #[error("service returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, verbatim
        body: String,
    },

    /// Response body could not be decoded
    #[error("response decoding failed: {0}")]
    Decode(String),

    /// Client-side configuration problem, reported at construction
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl ServiceError {
    /// HTTP status code, if this failure carries one
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
