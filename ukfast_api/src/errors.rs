//! Error types for the API client.

use std::fmt;

use crate::types::ResponseError;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A caller-supplied identifier or setting failed a local precondition.
    /// Raised before any request is sent.
    #[error("Validation failed: {0}")]
    Validation(String),
    /// The API reported that the resource does not exist, or returned no content.
    #[error("Resource not found")]
    NotFound { errors: Vec<ResponseError> },
    /// The API returned a non-success status other than 404.
    #[error("Request failed with status {status}")]
    Api {
        status: u16,
        errors: Vec<ResponseError>,
    },
    /// The transport could not complete the request.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The response body could not be decoded into the expected type.
    #[error("Failed to decode response: {0}")]
    Deserialization(String),
}

impl Error {
    /// Structured errors reported by the API, if any.
    pub fn response_errors(&self) -> &[ResponseError] {
        match self {
            Self::NotFound { errors } | Self::Api { errors, .. } => errors,
            _ => &[],
        }
    }
}

/// Coarse classification of transport failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// The request did not complete within the configured timeout.
    Timeout,
    /// The connection could not be established.
    Connect,
    /// The request was cancelled before a response arrived.
    Cancelled,
    /// Any other transport failure (TLS, malformed URL, body read, ...).
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Timeout => "timeout",
            Self::Connect => "connect",
            Self::Cancelled => "cancelled",
            Self::Other => "transport",
        };
        write!(f, "{}", s)
    }
}

/// A failure reported by a [`Transport`](crate::Transport) implementation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Transport error ({kind}): {message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Timeout, message)
    }

    pub fn cancelled(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Cancelled, message)
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        let kind = if e.is_timeout() {
            TransportErrorKind::Timeout
        } else if e.is_connect() {
            TransportErrorKind::Connect
        } else {
            TransportErrorKind::Other
        };
        Self::new(kind, e.to_string())
    }
}
