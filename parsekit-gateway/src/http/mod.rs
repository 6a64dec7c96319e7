//! Production implementations of the transport capabilities.

mod client;
mod scheduler;

pub use client::ReqwestHttpClient;
pub use scheduler::TokioScheduler;
