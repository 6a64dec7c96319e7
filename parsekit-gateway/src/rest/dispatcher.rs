//! Transport dispatcher with retry on transient failures.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use serde_json::Value;
use tracing::{debug, warn};

use parsekit_core::config::ConfigHandle;
use parsekit_core::error::TransportError;
use parsekit_core::traits::{HttpClient, HttpMethod, HttpRequest, RestResponse, RetryScheduler};

/// Issues a single logical HTTP call, retrying transient failures.
///
/// A failure is transient when the server answered 5xx or the connection
/// itself failed (status 0). Each retry waits a jittered, exponentially
/// growing delay on the injected scheduler; the attempt limit is re-read
/// from the configuration at every retry decision, so a configuration swap
/// mid-flight is observed by the remaining attempts.
///
/// The request descriptor is built once per logical call and reused
/// unchanged across every attempt.
pub struct Dispatcher {
    config: ConfigHandle,
    http: Arc<dyn HttpClient>,
    scheduler: Arc<dyn RetryScheduler>,
}

impl Dispatcher {
    /// Creates a dispatcher over the given capabilities.
    #[must_use]
    pub fn new(
        config: ConfigHandle,
        http: Arc<dyn HttpClient>,
        scheduler: Arc<dyn RetryScheduler>,
    ) -> Self {
        Self {
            config,
            http,
            scheduler,
        }
    }

    /// Dispatches one logical HTTP call.
    ///
    /// `Accept` and `Content-Type` are explicitly unset whatever the caller
    /// passed; the HTTP client infers neither. Resolves with the parsed
    /// body and status for a structured 2xx response; every other outcome
    /// rejects with a [`TransportError`].
    pub async fn dispatch(
        &self,
        method: HttpMethod,
        url: &str,
        body: String,
        headers: Vec<(String, String)>,
    ) -> Result<RestResponse, TransportError> {
        let request = build_descriptor(method, url, body, headers);
        let mut attempts: u32 = 0;

        loop {
            debug!(method = %request.method, url = %request.url, attempt = attempts, "dispatching request");

            let failure = match self.http.send(&request).await {
                Ok(response) => {
                    if is_structured(&response.data) {
                        return Ok(RestResponse {
                            data: response.data,
                            status: response.status,
                        });
                    }
                    return Err(TransportError::InvalidResponse);
                }
                Err(failure) => failure,
            };

            let status = failure.status;
            if status >= 500 || status == 0 {
                attempts += 1;
                if attempts < self.config.attempt_limit() {
                    let delay = retry_delay(attempts);
                    warn!(
                        status,
                        attempt = attempts,
                        delay_ms = delay.as_millis() as u64,
                        "transient failure, retrying"
                    );
                    self.scheduler.delay(delay).await;
                    continue;
                }
                warn!(status, attempts, "transient failure, attempt limit reached");
                return Err(if status == 0 {
                    TransportError::ConnectionFailed
                } else {
                    TransportError::Failure {
                        status,
                        response_text: stringify_or_empty_object(&failure.data),
                    }
                });
            }

            return Err(TransportError::Failure {
                status,
                response_text: terminal_response_text(&failure.data),
            });
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}

/// Builds the immutable request descriptor for one logical call.
///
/// Caller-supplied `Accept` and `Content-Type` entries are dropped and both
/// names are re-added as explicitly unset.
fn build_descriptor(
    method: HttpMethod,
    url: &str,
    body: String,
    headers: Vec<(String, String)>,
) -> HttpRequest {
    let mut headers: Vec<(String, Option<String>)> = headers
        .into_iter()
        .filter(|(name, _)| !is_inferred_header(name))
        .map(|(name, value)| (name, Some(value)))
        .collect();
    headers.push(("Accept".to_string(), None));
    headers.push(("Content-Type".to_string(), None));

    HttpRequest {
        method,
        url: url.to_string(),
        body: Some(body),
        headers,
    }
}

fn is_inferred_header(name: &str) -> bool {
    name.eq_ignore_ascii_case("Accept") || name.eq_ignore_ascii_case("Content-Type")
}

/// A response body counts as structured when it is a JSON object or array;
/// scalars and strings do not.
fn is_structured(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Serializes a 5xx body for the structured failure, collapsing empty
/// bodies (`null`, `false`, `0`, `""`) to an empty object.
fn stringify_or_empty_object(data: &Value) -> String {
    match data {
        Value::Null | Value::Bool(false) => "{}".to_string(),
        Value::Number(n) if n.as_f64() == Some(0.0) => "{}".to_string(),
        Value::String(s) if s.is_empty() => "{}".to_string(),
        other => other.to_string(),
    }
}

/// Response text for a terminal (non-retried) failure: structured bodies
/// are JSON-encoded, raw strings pass through verbatim.
fn terminal_response_text(data: &Value) -> String {
    match data {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Randomized exponential retry delay: `round(random[0,1) * 125ms * 2^attempt)`.
///
/// The uniform factor spreads concurrent retries apart; growth is unbounded
/// because the attempt limit already bounds total work.
fn retry_delay(attempt: u32) -> Duration {
    let factor: f64 = rand::thread_rng().gen();
    let exponential = 125.0 * 2.0_f64.powi(attempt as i32);
    Duration::from_millis((factor * exponential).round() as u64)
}
