//! Request-building REST controller.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use parsekit_core::config::ConfigHandle;
use parsekit_core::error::{ConfigError, ParseError, TransportError};
use parsekit_core::traits::{
    HttpClient, HttpMethod, InstallationController, RequestOptions, RestResponse, RestTransport,
    RetryScheduler, UserController,
};

use crate::http::{ReqwestHttpClient, TokioScheduler};
use crate::identity::CachedInstallationController;
use crate::rest::Dispatcher;

/// REST controller implementing the Parse request protocol.
///
/// Assembles the signed payload (application id, keys, client version,
/// installation id, session token, method override), dispatches it through
/// the retrying [`Dispatcher`], and translates every transport failure into
/// a [`ParseError`].
///
/// # Example
///
/// ```ignore
/// use parsekit_core::prelude::*;
/// use parsekit_gateway::rest::RestController;
///
/// let controller = RestController::builder().config(config).build()?;
/// let response = controller
///     .request(HttpMethod::Get, "classes/MyObject", serde_json::json!({}), &RequestOptions::default())
///     .await?;
/// ```
pub struct RestController {
    config: ConfigHandle,
    dispatcher: Dispatcher,
    installation: Arc<dyn InstallationController>,
    user: Option<Arc<dyn UserController>>,
}

impl RestController {
    /// Creates a new builder for `RestController`.
    #[must_use]
    pub fn builder() -> RestControllerBuilder {
        RestControllerBuilder::default()
    }

    /// Dispatches a raw HTTP call with retry on transient failures.
    ///
    /// See [`Dispatcher::dispatch`]; no payload construction or failure
    /// translation happens here.
    pub async fn ajax(
        &self,
        method: HttpMethod,
        url: &str,
        body: String,
        headers: Vec<(String, String)>,
    ) -> Result<RestResponse, TransportError> {
        self.dispatcher.dispatch(method, url, body, headers).await
    }

    /// Issues a signed API request against the configured server.
    ///
    /// `data` is shallow-copied into the payload when it is a JSON object;
    /// reserved fields always win over caller data. Non-POST methods travel
    /// as POST with the logical verb carried in `_method` (the Parse API's
    /// formal-JSON convention).
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        data: Value,
        options: &RequestOptions,
    ) -> Result<RestResponse, ParseError> {
        let config = self.config.snapshot();
        debug!(method = %method, path, "building request");

        let url = format!(
            "{}/{}",
            config.server_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        let mut payload = match data {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        let mut outgoing = method;
        if method != HttpMethod::Post {
            payload.insert("_method".to_string(), Value::String(method.as_str().to_string()));
            outgoing = HttpMethod::Post;
        }

        payload.insert(
            "_ApplicationId".to_string(),
            Value::String(config.application_id),
        );
        if let Some(javascript_key) = config.javascript_key {
            payload.insert("_JavaScriptKey".to_string(), Value::String(javascript_key));
        }
        payload.insert(
            "_ClientVersion".to_string(),
            Value::String(config.client_version),
        );

        let use_master_key = options.use_master_key.unwrap_or(config.use_master_key);
        if use_master_key {
            // Must fail before the first suspension point, untranslated.
            let Some(master_key) = config.master_key else {
                return Err(ParseError::master_key_missing());
            };
            payload.remove("_JavaScriptKey");
            payload.insert("_MasterKey".to_string(), Value::String(master_key));
        }

        if config.force_revocable_session {
            payload.insert(
                "_RevocableSession".to_string(),
                Value::String("1".to_string()),
            );
        }

        let installation_id = match options.installation_id.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => self.installation.current_installation_id().await,
        };
        payload.insert("_InstallationId".to_string(), Value::String(installation_id));

        let token = match &options.session_token {
            Some(token) => Some(token.clone()),
            None => match &self.user {
                Some(user_controller) => user_controller
                    .current_user()
                    .await
                    .and_then(|user| user.session_token().map(str::to_string)),
                None => None,
            },
        };
        if let Some(token) = token.filter(|token| !token.is_empty()) {
            payload.insert("_SessionToken".to_string(), Value::String(token));
        }

        let body = Value::Object(payload).to_string();

        self.dispatcher
            .dispatch(outgoing, &url, body, Vec::new())
            .await
            .map_err(|failure| {
                let error = translate_failure(&failure);
                warn!(code = error.code, path, "request failed");
                error
            })
    }
}

#[async_trait]
impl RestTransport for RestController {
    async fn ajax(
        &self,
        method: HttpMethod,
        url: &str,
        body: String,
        headers: Vec<(String, String)>,
    ) -> Result<RestResponse, TransportError> {
        RestController::ajax(self, method, url, body, headers).await
    }

    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        data: Value,
        options: &RequestOptions,
    ) -> Result<RestResponse, ParseError> {
        RestController::request(self, method, path, data, options).await
    }
}

impl std::fmt::Debug for RestController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestController")
            .field("has_user_controller", &self.user.is_some())
            .finish_non_exhaustive()
    }
}

/// Error body of the Parse API: `{"code": ..., "error": ...}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: i32,
    error: String,
}

/// Translates a terminal transport failure into the domain error callers
/// observe. Shaped failures carry the server's error body; everything else
/// (connection loss, malformed 2xx responses) becomes a code-100 error
/// embedding the raw failure.
fn translate_failure(failure: &TransportError) -> ParseError {
    match failure.response_text() {
        Some(text) => match serde_json::from_str::<ErrorBody>(text) {
            Ok(body) => ParseError::new(body.code, body.error),
            Err(_) => ParseError::invalid_json(text),
        },
        None => ParseError::connection_failed(&failure.to_string()),
    }
}

/// Builder for `RestController`.
///
/// Only the configuration is mandatory. The HTTP client defaults to a
/// reqwest-backed one built from the configuration, the scheduler to the
/// Tokio clock, and the installation controller to the uuid-backed cache.
#[derive(Default)]
pub struct RestControllerBuilder {
    config: Option<ConfigHandle>,
    http: Option<Arc<dyn HttpClient>>,
    scheduler: Option<Arc<dyn RetryScheduler>>,
    installation: Option<Arc<dyn InstallationController>>,
    user: Option<Arc<dyn UserController>>,
}

impl RestControllerBuilder {
    /// Sets the configuration handle.
    #[must_use]
    pub fn config(mut self, config: ConfigHandle) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the HTTP client capability.
    #[must_use]
    pub fn http_client(mut self, http: Arc<dyn HttpClient>) -> Self {
        self.http = Some(http);
        self
    }

    /// Sets the retry scheduler capability.
    #[must_use]
    pub fn scheduler(mut self, scheduler: Arc<dyn RetryScheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Sets the installation sub-controller.
    #[must_use]
    pub fn installation_controller(
        mut self,
        installation: Arc<dyn InstallationController>,
    ) -> Self {
        self.installation = Some(installation);
        self
    }

    /// Sets the user sub-controller.
    #[must_use]
    pub fn user_controller(mut self, user: Arc<dyn UserController>) -> Self {
        self.user = Some(user);
        self
    }

    /// Builds the `RestController`.
    pub fn build(self) -> Result<RestController, ConfigError> {
        let config = self.config.ok_or(ConfigError::MissingField { field: "config" })?;

        let http = match self.http {
            Some(http) => http,
            None => Arc::new(ReqwestHttpClient::from_config(&config.snapshot())?),
        };
        let scheduler = self
            .scheduler
            .unwrap_or_else(|| Arc::new(TokioScheduler::new()));
        let installation = self
            .installation
            .unwrap_or_else(|| Arc::new(CachedInstallationController::new()));

        Ok(RestController {
            dispatcher: Dispatcher::new(config.clone(), http, scheduler),
            config,
            installation,
            user: self.user,
        })
    }
}

impl std::fmt::Debug for RestControllerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestControllerBuilder")
            .field("has_config", &self.config.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_server_error_body() {
        let failure = TransportError::Failure {
            status: 400,
            response_text: "{\"code\":-1,\"error\":\"Something bad\"}".to_string(),
        };
        let error = translate_failure(&failure);
        assert_eq!(error.code, -1);
        assert_eq!(error.message, "Something bad");
    }

    #[test]
    fn test_translate_unparseable_error_body() {
        let failure = TransportError::Failure {
            status: 400,
            response_text: "{".to_string(),
        };
        let error = translate_failure(&failure);
        assert_eq!(error.code, ParseError::INVALID_JSON);
        assert_eq!(
            error.message,
            "Received an error with invalid JSON from Parse: {"
        );
    }

    #[test]
    fn test_translate_invalid_response() {
        let error = translate_failure(&TransportError::InvalidResponse);
        assert_eq!(error.code, ParseError::CONNECTION_FAILED);
        assert_eq!(
            error.message,
            "XMLHttpRequest failed: \"Response is not a valid JSON\""
        );
    }

    #[test]
    fn test_translate_connection_failure() {
        let error = translate_failure(&TransportError::ConnectionFailed);
        assert_eq!(error.code, ParseError::CONNECTION_FAILED);
        assert_eq!(
            error.message,
            "XMLHttpRequest failed: \"Unable to connect to the Parse API\""
        );
    }

    #[test]
    fn test_builder_requires_config() {
        let error = RestController::builder().build().unwrap_err();
        assert!(error.to_string().contains("config"));
    }
}
