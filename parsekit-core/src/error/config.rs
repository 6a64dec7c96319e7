//! Configuration error types.

use thiserror::Error;

/// Error raised for invalid or incomplete transport configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required configuration field is missing or empty.
    #[error("[Config] Missing required field: {field}")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// A configuration value is present but unusable.
    #[error("[Config] Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Name of the offending field.
        field: &'static str,
        /// Reason the value was rejected.
        reason: String,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("[Config] Failed to build HTTP client: {reason}")]
    ClientBuild {
        /// Reason reported by the HTTP library.
        reason: String,
    },
}
