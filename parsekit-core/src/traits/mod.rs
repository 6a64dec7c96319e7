//! Capability trait definitions.
//!
//! These traits model the collaborators the host SDK supplies to the
//! transport: the HTTP client that moves bytes, the scheduler that delays
//! retries, and the installation/user sub-controllers that supply device
//! and session identity for request signing. The transport itself is
//! exposed back to the host through [`RestTransport`].

mod controllers;
mod http;
mod scheduler;
mod transport;

pub use controllers::{InstallationController, User, UserController};
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use scheduler::RetryScheduler;
pub use transport::{RequestOptions, RestResponse, RestTransport};
