//! Error types for the QMK API client.
//!
//! Every operation reports failure through [`ClientError`]. Nothing is
//! retried or logged-and-swallowed inside the crate: the caller decides.

use std::fmt;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// How a response body failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The body is not well-formed JSON.
    Syntax,
    /// The body ended before the JSON value was complete.
    Eof,
    /// The body is valid JSON but does not match the expected type.
    Shape,
    /// The body is not valid UTF-8 text.
    Encoding,
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "malformed JSON"),
            Self::Eof => write!(f, "truncated JSON"),
            Self::Shape => write!(f, "unexpected JSON shape"),
            Self::Encoding => write!(f, "invalid UTF-8"),
        }
    }
}

/// Errors that can occur during QMK API client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced an HTTP response (connect failure, timeout, ...).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A successful response carried a body that could not be decoded.
    #[error("Decode error ({kind}){}: {message}{}",
        .offset.map(|o| format!(" at byte {o}")).unwrap_or_default(),
        .context.as_ref().map(|c| format!(" near `{c}`")).unwrap_or_default())]
    Decode {
        kind: DecodeErrorKind,
        message: String,
        offset: Option<usize>,
        context: Option<String>,
    },

    /// The service answered with a status outside 2xx.
    #[error("API error ({status}) at {url}{}", .message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
    Api {
        status: u16,
        url: String,
        message: Option<String>,
    },

    /// The requested readme does not exist.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Input rejected locally, before any request was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request body could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if this error is a request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// HTTP status carried by the error, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
