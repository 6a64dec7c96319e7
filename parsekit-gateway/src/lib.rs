//! # Parsekit Gateway
//!
//! REST transport implementation for the Parse API.
//!
//! This crate provides:
//! - A transport dispatcher with exponential-backoff retry on transient
//!   failures
//! - A request builder assembling the signed Parse payload
//!   (`_ApplicationId`, `_SessionToken`, method override, and friends)
//! - A reqwest-backed HTTP client and a Tokio-backed retry scheduler
//! - A uuid-backed installation-identity controller
//!
//! # Architecture
//!
//! The gateway is organized into:
//! - `rest` - the dispatcher and the request-building controller
//! - `http` - production implementations of the HTTP and timer capabilities
//! - `identity` - the default installation sub-controller
//!
//! # Example
//!
//! ```ignore
//! use parsekit_core::prelude::*;
//! use parsekit_gateway::rest::RestController;
//!
//! let config = ConfigHandle::new(
//!     ParseConfig::builder()
//!         .server_url("https://api.parse.com/1")
//!         .application_id("APP_ID")
//!         .javascript_key("JS_KEY")
//!         .build()?,
//! );
//!
//! let controller = RestController::builder().config(config).build()?;
//! let response = controller
//!     .request(HttpMethod::Get, "classes/MyObject", serde_json::json!({}), &RequestOptions::default())
//!     .await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::missing_errors_doc)]

/// Dispatcher and request-building controller
pub mod rest;

/// Production HTTP client and scheduler implementations
pub mod http;

/// Default installation sub-controller
pub mod identity;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::http::{ReqwestHttpClient, TokioScheduler};
    pub use crate::identity::CachedInstallationController;
    pub use crate::rest::{Dispatcher, RestController, RestControllerBuilder};
}
