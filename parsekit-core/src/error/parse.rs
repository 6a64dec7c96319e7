//! Domain error type for the Parse API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned to callers of the REST transport.
///
/// Carries the numeric error code and human-readable message of the Parse
/// API error contract. Codes received from the server pass through
/// untouched; locally produced errors use the associated constants.
///
/// # Examples
///
/// ```
/// use parsekit_core::error::ParseError;
///
/// let error = ParseError::new(-1, "Something bad");
/// assert_eq!(error.code, -1);
/// assert!(error.to_string().contains("Something bad"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("[Parse] error {code}: {message}")]
pub struct ParseError {
    /// Numeric error code.
    pub code: i32,

    /// Human-readable error message.
    pub message: String,
}

impl ParseError {
    /// Catch-all code for errors with no server-assigned code.
    pub const OTHER_CAUSE: i32 = -1;

    /// The connection to the Parse API failed or produced no usable
    /// response.
    pub const CONNECTION_FAILED: i32 = 100;

    /// The server answered an error with a body that was not valid JSON.
    pub const INVALID_JSON: i32 = 107;

    /// Creates an error with the given code and message.
    #[must_use]
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Creates the error for a request that never produced a shaped
    /// failure: connection loss, or a success response that was not JSON.
    ///
    /// `failure` is the raw rejection value; it is embedded JSON-encoded,
    /// so a plain string arrives quoted.
    #[must_use]
    pub fn connection_failed(failure: &str) -> Self {
        let encoded = serde_json::Value::String(failure.to_string());
        Self::new(
            Self::CONNECTION_FAILED,
            format!("XMLHttpRequest failed: {encoded}"),
        )
    }

    /// Creates the error for a shaped failure whose response text could not
    /// be parsed as a Parse error body.
    #[must_use]
    pub fn invalid_json(response_text: &str) -> Self {
        Self::new(
            Self::INVALID_JSON,
            format!("Received an error with invalid JSON from Parse: {response_text}"),
        )
    }

    /// Creates the error for a request demanding the master key when none
    /// is configured.
    #[must_use]
    pub fn master_key_missing() -> Self {
        Self::new(
            Self::OTHER_CAUSE,
            "Cannot use the Master Key, it has not been provided.",
        )
    }
}
