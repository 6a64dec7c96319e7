//! Transport-boundary failure types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Terminal rejection produced by the transport dispatcher.
///
/// Two variants reject with fixed strings the request builder must
/// special-case; [`TransportError::Failure`] is the shaped
/// status/response-text pair the builder translates into a [`ParseError`].
///
/// [`ParseError`]: crate::error::ParseError
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportError {
    /// The server answered 2xx but the body was not a structured JSON
    /// value. The display string is contractual.
    #[error("Response is not a valid JSON")]
    InvalidResponse,

    /// Every attempt ended in a connection-level failure (status 0). The
    /// display string is contractual.
    #[error("Unable to connect to the Parse API")]
    ConnectionFailed,

    /// The server answered with a terminal HTTP failure.
    #[error("[Transport] HTTP failure: status {status} - {response_text}")]
    Failure {
        /// HTTP status code of the final attempt.
        status: u16,
        /// Response body, JSON-encoded when the server sent a structured
        /// value, verbatim otherwise.
        response_text: String,
    },
}

impl TransportError {
    /// Returns true for the shaped status/response-text variant.
    #[must_use]
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Returns the HTTP status of a shaped failure.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Failure { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the response text of a shaped failure.
    #[must_use]
    pub fn response_text(&self) -> Option<&str> {
        match self {
            Self::Failure { response_text, .. } => Some(response_text),
            _ => None,
        }
    }
}
