//! Client error taxonomy.

use thiserror::Error;

/// Errors returned by the index and bridge clients.
///
/// Clone-able so it can travel inside application events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The index has no package with this name.
    ///
    /// An expected outcome, not a failure of the index itself.
    #[error("package '{name}' not found")]
    NotFound {
        /// Name that was looked up.
        name: String,
    },

    /// The bridge service refused the access token, or none was configured.
    #[error("not authorized: access token missing or rejected by the bridge service")]
    Auth,

    /// Network failure, timeout or unexpected response.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Transport-level failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Unexpected HTTP status with nothing useful in the body.
    #[error("unexpected HTTP status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The service answered with an error status. The body is kept verbatim.
    #[error("service responded {status}: {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, unmodified.
        body: String,
    },

    /// No response within the request timeout.
    #[error("request timed out")]
    Timeout,

    /// Connection could not be established or was interrupted.
    #[error("connection failed: {0}")]
    Connection(String),

    /// Response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// A configured URL cannot be used to build requests.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Connection(err.to_string())
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.into())
    }
}
