//! REST transport infrastructure.
//!
//! This module provides the two layers of the transport:
//! - [`Dispatcher`] - issues one logical HTTP call, retrying transient
//!   failures (5xx and connection loss) with jittered exponential backoff
//! - [`RestController`] - assembles the signed Parse payload, resolves
//!   device and session identity, and translates transport failures into
//!   domain errors
//!
//! # Example
//!
//! ```ignore
//! use parsekit_core::prelude::*;
//! use parsekit_gateway::rest::RestController;
//!
//! let controller = RestController::builder().config(config).build()?;
//! let response = controller
//!     .request(HttpMethod::Get, "classes/MyObject", serde_json::json!({}), &RequestOptions::default())
//!     .await?;
//! ```

mod controller;
mod dispatcher;

pub use controller::{RestController, RestControllerBuilder};
pub use dispatcher::Dispatcher;
