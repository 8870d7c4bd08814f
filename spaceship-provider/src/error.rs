use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a single call to the Spaceship API.
///
/// Every gateway operation reports failures through this type and nothing else.
/// The variant tells apart a request the registrar answered with an error status
/// from one that never produced a usable answer.
///
/// `Display` renders the message alone so callers can surface it verbatim.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum UpstreamError {
    /// The API answered with a non-success HTTP status.
    #[error("{message}")]
    Rejected {
        /// HTTP status code returned by the API.
        status: u16,
        /// Diagnostic supplied by the API, or `HTTP <status>` when it sent none.
        message: String,
    },

    /// The request never completed (DNS, connect, TLS, timeout, truncated body).
    #[error("{message}")]
    Transport {
        /// Message produced by the HTTP client.
        message: String,
    },

    /// The API answered successfully but the body did not match the expected shape.
    #[error("{message}")]
    Decode {
        /// Decoder error details.
        message: String,
    },
}

impl UpstreamError {
    /// HTTP status of a rejected request.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }

    /// Whether the API reported that the addressed entity does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Whether the failure happened below HTTP (no response was obtained).
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Whether the upstream made a decision about the request, used for log levels.
    ///
    /// Returns `true` when `warn` is appropriate and `false` when `error` is.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Convenience type alias for `Result<T, UpstreamError>`.
pub type Result<T> = std::result::Result<T, UpstreamError>;
