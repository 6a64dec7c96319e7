//! Reqwest-backed HTTP client capability.

use async_trait::async_trait;
use reqwest::{header, Client, Method};
use serde_json::Value;
use tracing::debug;

use parsekit_core::config::ParseConfig;
use parsekit_core::error::ConfigError;
use parsekit_core::traits::{HttpClient, HttpMethod, HttpRequest, HttpResponse};

/// HTTP client implementation on top of [`reqwest::Client`].
///
/// Maps the library's behavior onto the capability contract: 2xx resolves,
/// every other status rejects with the same shape, and connection-level
/// failures (connect errors, timeouts) reject with status 0. Header values
/// marked as unset are simply never sent; the client sets no `Accept` or
/// `Content-Type` of its own.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Builds a client from the transport configuration (timeout and user
    /// agent).
    pub fn from_config(config: &ParseConfig) -> Result<Self, ConfigError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            config
                .user_agent
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    field: "user_agent",
                    reason: "not a valid header value".to_string(),
                })?,
        );

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| ConfigError::ClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpResponse> {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            // Unset headers are never sent; reqwest adds no default for them.
            if let Some(value) = value {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                debug!(url = %request.url, error = %e, "connection-level failure");
                return Err(HttpResponse {
                    status: e.status().map_or(0, |s| s.as_u16()),
                    data: Value::Null,
                });
            }
        };

        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        let data = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(_) => Value::String(text),
        };

        let response = HttpResponse { status, data };
        if (200..300).contains(&status) {
            Ok(response)
        } else {
            Err(response)
        }
    }
}

impl std::fmt::Debug for ReqwestHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestHttpClient").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let config = ParseConfig::builder()
            .server_url("https://api.parse.com/1")
            .application_id("A")
            .build()
            .unwrap();
        assert!(ReqwestHttpClient::from_config(&config).is_ok());
    }

    #[test]
    fn test_rejects_unusable_user_agent() {
        let mut config = ParseConfig::builder()
            .server_url("https://api.parse.com/1")
            .application_id("A")
            .build()
            .unwrap();
        config.user_agent = "bad\nagent".to_string();

        let error = ReqwestHttpClient::from_config(&config).unwrap_err();
        assert!(matches!(
            error,
            ConfigError::InvalidValue {
                field: "user_agent",
                ..
            }
        ));
    }
}
