//! Error types and handling framework.
//!
//! The error system mirrors the two boundaries of the transport:
//! - [`TransportError`] - produced by the dispatcher when a physical HTTP
//!   exchange terminally fails. Never surfaced to callers of `request`.
//! - [`ParseError`] - the domain error callers observe, carrying the
//!   numeric code and message of the Parse API error contract.
//! - [`ConfigError`] - invalid or incomplete transport configuration.

mod config;
mod parse;
mod transport;

pub use config::ConfigError;
pub use parse::ParseError;
pub use transport::TransportError;
