//! # API Error Types
//!
//! Failures crossing the network or the token file.
//!
//! ## Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      API Error Categories                               │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │ NetworkFailure  │  │ ValidationFail. │  │     Local               │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Network        │  │  Rejected       │  │  Config                 │ │
//! │  │  Timeout        │  │  (server sent   │  │  Storage                │ │
//! │  │  InvalidResponse│  │   a message)    │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  Operations translate these into the owning store's `error` field;     │
//! │  they are never rendered raw and never thrown past a store.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures from the remote API client and the token store.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, TLS, connection reset.
    #[error("request failed: {0}")]
    Network(String),

    /// The request or connect timeout elapsed.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-success status.
    ///
    /// `message` carries the server's own `{message}` payload when one was
    /// sent (e.g. "Invalid credentials"), otherwise the HTTP status text.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// A 2xx response whose body did not match the expected shape.
    #[error("malformed response: {0}")]
    InvalidResponse(String),

    /// Client-side configuration problem (bad base URL).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Token file could not be read or written.
    #[error("token storage failed: {0}")]
    Storage(#[from] std::io::Error),
}

impl ApiError {
    /// The server-provided message, when the server rejected the request
    /// with one. Transport failures have no server message; callers fall
    /// back to a generic string for display.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::InvalidResponse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_exposes_server_message() {
        let err = ApiError::Rejected {
            status: 400,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.server_message(), Some("Invalid credentials"));
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_transport_errors_have_no_server_message() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.server_message(), None);

        let err = ApiError::Timeout;
        assert_eq!(err.server_message(), None);
        assert_eq!(err.to_string(), "request timed out");
    }
}
