/// Errors from the GitHub REST layer.
use thiserror::Error;

/// Typed errors from talking to the API host.
///
/// Transport, HTTP status, and decoding failures are kept apart so callers
/// can tell a down network from a 404 from a schema mismatch.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed (bad base URL, bad token header).
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /// Connection, DNS, TLS, or timeout failure before a response was read.
    #[error("failed to reach {url}: {source}")]
    Transport {
        /// Request URL.
        url: String,
        /// Underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("HTTP {status_code}: {message} ({url})")]
    Http {
        /// Response status code.
        status_code: u16,
        /// The `message` field of a JSON error body, or the status reason.
        message: String,
        /// Raw response body.
        body: String,
        /// Final request URL.
        url: String,
    },

    /// The body was not JSON or not the expected shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        /// Request URL.
        url: String,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// HTTP status code, for `Http` errors only.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}
