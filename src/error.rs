//! Error types for dlproxy
//!
//! This module provides the error handling shared by both clients, including:
//! - Transport errors (connection failures, non-success HTTP statuses)
//! - Malformed response bodies
//! - Remote rejections carrying the service's numeric error code
//! - Classification of every error into a coarse [`ErrorKind`]

use thiserror::Error;

/// Result type alias for dlproxy operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for dlproxy
///
/// Each variant carries enough context to produce a useful log line. The
/// Download Station client never surfaces these to callers of its boolean
/// operations; they are logged and folded into `false`.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "host")
        key: Option<String>,
    },

    /// Network error (connection refused, timeout, TLS failure)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status
    #[error("HTTP {status} from {url}")]
    Http {
        /// HTTP status code returned by the server
        status: u16,
        /// The request URL
        url: String,
    },

    /// Response body could not be interpreted as JSON
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// REST resource request failed with an error status
    #[error("unable to fetch record (HTTP {status}): {message}")]
    Remote {
        /// HTTP status code returned by the server
        status: u16,
        /// Service-specific error code from the response body, if any
        code: Option<i64>,
        /// Error message from the response body, or a generic description
        message: String,
    },

    /// Download Station answered with `success: false`
    #[error("{method} rejected with code {code:?}: {message}")]
    Rejected {
        /// API method the request targeted (e.g., "create", "login")
        method: String,
        /// Numeric error code from the envelope, if present
        code: Option<i64>,
        /// Message looked up in the error table
        message: String,
    },

    /// Login did not succeed
    #[error("authentication failed")]
    AuthenticationFailed,

    /// A URL could not be parsed or joined
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of errors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connection failure or non-success HTTP status
    Transport,
    /// Body was not parseable
    MalformedResponse,
    /// Well-formed failure reported by the remote service
    RemoteRejection,
    /// Invalid local configuration or input
    Configuration,
}

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Network(_) | Error::Http { .. } | Error::Io(_) => ErrorKind::Transport,
            Error::MalformedResponse(_) | Error::Serialization(_) => ErrorKind::MalformedResponse,
            Error::Remote { .. } | Error::Rejected { .. } | Error::AuthenticationFailed => {
                ErrorKind::RemoteRejection
            }
            Error::Config { .. } | Error::InvalidUrl(_) => ErrorKind::Configuration,
        }
    }

    /// Remote numeric error code, when the service supplied one
    pub fn remote_code(&self) -> Option<i64> {
        match self {
            Error::Remote { code, .. } | Error::Rejected { code, .. } => *code,
            _ => None,
        }
    }

    pub(crate) fn config(message: impl Into<String>, key: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.into()),
        }
    }
}
