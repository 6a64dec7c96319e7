//! The transport seam the host registry installs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ParseError, TransportError};
use crate::traits::http::HttpMethod;

/// Successful outcome of a dispatched request: the parsed body together
/// with the HTTP status it arrived with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestResponse {
    /// Parsed response body.
    pub data: Value,
    /// HTTP status code.
    pub status: u16,
}

/// Per-request options for [`RestTransport::request`].
///
/// Unset fields fall back to the configuration or the host sub-controllers.
///
/// # Examples
///
/// ```
/// use parsekit_core::traits::RequestOptions;
///
/// let options = RequestOptions::default()
///     .with_session_token("1234")
///     .with_master_key(false);
/// assert_eq!(options.session_token.as_deref(), Some("1234"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Overrides the configured master-key policy for this request.
    pub use_master_key: Option<bool>,

    /// Session token to attach, bypassing the user sub-controller.
    pub session_token: Option<String>,

    /// Installation id to attach, bypassing the installation
    /// sub-controller. Empty strings are ignored.
    pub installation_id: Option<String>,
}

impl RequestOptions {
    /// Sets whether this request uses the master key.
    #[must_use]
    pub fn with_master_key(mut self, use_master_key: bool) -> Self {
        self.use_master_key = Some(use_master_key);
        self
    }

    /// Sets an explicit session token.
    #[must_use]
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Sets an explicit installation id.
    #[must_use]
    pub fn with_installation_id(mut self, id: impl Into<String>) -> Self {
        self.installation_id = Some(id.into());
        self
    }
}

/// REST transport installed as the host SDK's active controller.
///
/// `ajax` is the raw dispatcher: one logical HTTP call with retry on
/// transient failures. `request` layers the signed-payload protocol on top
/// and translates every failure into a [`ParseError`].
#[async_trait]
pub trait RestTransport: Send + Sync {
    /// Dispatches a single logical HTTP call.
    async fn ajax(
        &self,
        method: HttpMethod,
        url: &str,
        body: String,
        headers: Vec<(String, String)>,
    ) -> Result<RestResponse, TransportError>;

    /// Issues a signed API request against the configured server.
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        data: Value,
        options: &RequestOptions,
    ) -> Result<RestResponse, ParseError>;
}
