//! Transport configuration.
//!
//! [`ParseConfig`] carries the values the original SDK keeps in its global
//! key/value store: the server URL, application credentials, and the retry
//! policy. [`ConfigHandle`] is the shared, cheap-to-clone handle the
//! transport reads through; the host may swap the configuration at any time
//! and in-flight requests observe the new values at their next read.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for the REST transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Base URL for API requests, e.g. `https://api.parse.com/1`.
    pub server_url: String,

    /// Application identifier sent as `_ApplicationId` in every payload.
    pub application_id: String,

    /// JavaScript key sent as `_JavaScriptKey`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub javascript_key: Option<String>,

    /// Master key sent as `_MasterKey` when master-key use is requested.
    /// This field is not serialized for security.
    #[serde(skip_serializing, skip_deserializing)]
    pub master_key: Option<String>,

    /// Client version string sent as `_ClientVersion`.
    #[serde(default)]
    pub client_version: String,

    /// Whether requests use the master key when the caller does not say.
    #[serde(default)]
    pub use_master_key: bool,

    /// Whether every request demands a revocable session
    /// (`_RevocableSession = "1"`).
    #[serde(default)]
    pub force_revocable_session: bool,

    /// Total attempts a logical request may consume before giving up on
    /// transient failures.
    #[serde(default = "default_request_attempt_limit")]
    pub request_attempt_limit: u32,

    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_request_attempt_limit() -> u32 {
    5
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_user_agent() -> String {
    format!("Parsekit/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            application_id: String::new(),
            javascript_key: None,
            master_key: None,
            client_version: String::new(),
            use_master_key: false,
            force_revocable_session: false,
            request_attempt_limit: default_request_attempt_limit(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl ParseConfig {
    /// Creates a new builder for `ParseConfig`.
    #[must_use]
    pub fn builder() -> ParseConfigBuilder {
        ParseConfigBuilder::default()
    }

    /// Returns the request timeout as a Duration.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Returns whether a master key is configured.
    #[must_use]
    pub fn has_master_key(&self) -> bool {
        self.master_key.is_some()
    }
}

/// Builder for `ParseConfig`.
#[derive(Debug, Default)]
pub struct ParseConfigBuilder {
    server_url: Option<String>,
    application_id: Option<String>,
    javascript_key: Option<String>,
    master_key: Option<String>,
    client_version: Option<String>,
    use_master_key: Option<bool>,
    force_revocable_session: Option<bool>,
    request_attempt_limit: Option<u32>,
    timeout_ms: Option<u64>,
    user_agent: Option<String>,
}

impl ParseConfigBuilder {
    /// Sets the server base URL.
    #[must_use]
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Sets the application identifier.
    #[must_use]
    pub fn application_id(mut self, id: impl Into<String>) -> Self {
        self.application_id = Some(id.into());
        self
    }

    /// Sets the JavaScript key.
    #[must_use]
    pub fn javascript_key(mut self, key: impl Into<String>) -> Self {
        self.javascript_key = Some(key.into());
        self
    }

    /// Sets the master key.
    #[must_use]
    pub fn master_key(mut self, key: impl Into<String>) -> Self {
        self.master_key = Some(key.into());
        self
    }

    /// Sets the client version string.
    #[must_use]
    pub fn client_version(mut self, version: impl Into<String>) -> Self {
        self.client_version = Some(version.into());
        self
    }

    /// Sets whether requests default to master-key use.
    #[must_use]
    pub fn use_master_key(mut self, use_master_key: bool) -> Self {
        self.use_master_key = Some(use_master_key);
        self
    }

    /// Sets whether every request demands a revocable session.
    #[must_use]
    pub fn force_revocable_session(mut self, force: bool) -> Self {
        self.force_revocable_session = Some(force);
        self
    }

    /// Sets the attempt limit for transient failures.
    #[must_use]
    pub fn request_attempt_limit(mut self, limit: u32) -> Self {
        self.request_attempt_limit = Some(limit);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(timeout.as_millis() as u64);
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the `ParseConfig`, validating required fields.
    pub fn build(self) -> Result<ParseConfig, ConfigError> {
        let server_url = self
            .server_url
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingField { field: "server_url" })?;
        let application_id = self
            .application_id
            .filter(|id| !id.is_empty())
            .ok_or(ConfigError::MissingField {
                field: "application_id",
            })?;

        Ok(ParseConfig {
            server_url,
            application_id,
            javascript_key: self.javascript_key,
            master_key: self.master_key,
            client_version: self.client_version.unwrap_or_default(),
            use_master_key: self.use_master_key.unwrap_or(false),
            force_revocable_session: self.force_revocable_session.unwrap_or(false),
            request_attempt_limit: self
                .request_attempt_limit
                .unwrap_or_else(default_request_attempt_limit),
            timeout_ms: self.timeout_ms.unwrap_or_else(default_timeout_ms),
            user_agent: self.user_agent.unwrap_or_else(default_user_agent),
        })
    }
}

/// Shared handle to the active configuration.
///
/// The transport never caches values across suspension points: the request
/// builder snapshots the configuration when payload construction starts and
/// the dispatcher re-reads the attempt limit at every retry decision, so a
/// configuration swap is observed by the next read.
#[derive(Debug, Clone, Default)]
pub struct ConfigHandle {
    inner: Arc<RwLock<ParseConfig>>,
}

impl ConfigHandle {
    /// Creates a handle owning the given configuration.
    #[must_use]
    pub fn new(config: ParseConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Returns a point-in-time copy of the configuration.
    #[must_use]
    pub fn snapshot(&self) -> ParseConfig {
        self.inner.read().clone()
    }

    /// Replaces the configuration; subsequent reads observe the new values.
    pub fn replace(&self, config: ParseConfig) {
        *self.inner.write() = config;
    }

    /// Applies an in-place edit to the configuration.
    pub fn update(&self, f: impl FnOnce(&mut ParseConfig)) {
        f(&mut self.inner.write());
    }

    /// Reads the current attempt limit without cloning the whole config.
    #[must_use]
    pub fn attempt_limit(&self) -> u32 {
        self.inner.read().request_attempt_limit
    }
}
