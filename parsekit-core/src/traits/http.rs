//! HTTP client capability and its request/response data types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// HTTP method of a logical or physical request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    /// GET request.
    Get,
    /// POST request.
    Post,
    /// PUT request.
    Put,
    /// DELETE request.
    Delete,
}

impl HttpMethod {
    /// Returns the method as its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// Built once per physical dispatch sequence and reused unchanged across
/// retries. A header value of `None` marks the header as explicitly unset:
/// the client must neither send it nor substitute a default of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequest {
    /// HTTP method on the wire.
    pub method: HttpMethod,
    /// Fully resolved URL.
    pub url: String,
    /// Request body, if any.
    pub body: Option<String>,
    /// Header name/value pairs; `None` values are explicitly unset.
    pub headers: Vec<(String, Option<String>)>,
}

/// An HTTP response (or failure) described as plain data.
///
/// `data` holds the body parsed as JSON when possible; bodies that are not
/// valid JSON arrive as `Value::String` verbatim. A `status` of 0 marks a
/// connection-level failure where no response was received at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpResponse {
    /// HTTP status code, or 0 when the connection itself failed.
    pub status: u16,
    /// Response body.
    pub data: Value,
}

impl HttpResponse {
    /// Returns true when no response was received at all.
    #[must_use]
    pub fn is_connection_failure(&self) -> bool {
        self.status == 0
    }
}

/// HTTP client capability supplied by the host.
///
/// Resolves with the response for 2xx statuses and rejects with the same
/// shape otherwise; connection-level failures reject with `status == 0`.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Executes one physical HTTP exchange.
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpResponse>;
}
