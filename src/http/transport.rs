//! Transport trait and reqwest implementation
//!
//! Provides the HTTP layer that handles:
//! - Parameter placement (query string or form body)
//! - Request headers (User-Agent and defaults)
//! - Response body decoding with a raw-text fallback
//! - Timeout classification

use crate::error::{Error, Result};
use crate::types::{JsonValue, Method, WireParams};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// A request handed to a [`Transport`]
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    /// Full API endpoint URL
    pub endpoint: String,
    /// Where the parameters go
    pub method: Method,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Wire-ready parameters
    pub params: WireParams,
}

/// What a [`Transport`] returns for a completed exchange
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Decoded JSON body, or `JsonValue::String` holding the raw text
    pub body: JsonValue,
}

impl TransportResponse {
    /// Create a response
    pub fn new(status: u16, body: JsonValue) -> Self {
        Self { status, body }
    }

    /// JSON view used for diagnostics
    pub fn to_json(&self) -> JsonValue {
        serde_json::json!({
            "status": self.status,
            "body": self.body,
        })
    }
}

/// Sends a prepared request and hands back the status and body
///
/// Implementations own HTTP, TLS, redirects and timeouts.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse>;
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for the HTTP transport
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
        }
    }
}

impl HttpTransportConfig {
    /// Create a new config builder
    pub fn builder() -> HttpTransportConfigBuilder {
        HttpTransportConfigBuilder::default()
    }
}

/// Builder for HTTP transport config
#[derive(Default)]
pub struct HttpTransportConfigBuilder {
    config: HttpTransportConfig,
}

impl HttpTransportConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Build the config
    pub fn build(self) -> HttpTransportConfig {
        self.config
    }
}

// ============================================================================
// reqwest Transport
// ============================================================================

/// Transport backed by a shared `reqwest::Client`
pub struct HttpTransport {
    client: Client,
    config: HttpTransportConfig,
}

impl HttpTransport {
    /// Create a transport with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpTransportConfig::default())
    }

    /// Create a transport with custom configuration
    pub fn with_config(config: HttpTransportConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Get the configuration
    pub fn config(&self) -> &HttpTransportConfig {
        &self.config
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        let mut req = self
            .client
            .request(request.method.into(), &request.endpoint);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        // Per-request headers (User-Agent) win over defaults
        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        req = match request.method {
            Method::GET => req.query(&request.params),
            Method::POST => req.form(&request.params),
        };

        let response = req.send().await.map_err(|e| self.classify(e))?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| self.classify(e))?;

        debug!(
            "{} {} -> {} ({} bytes)",
            request.method,
            request.endpoint,
            status,
            text.len()
        );

        Ok(TransportResponse {
            status,
            body: decode_body(text),
        })
    }
}

impl HttpTransport {
    fn classify(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout {
                timeout_ms: self.config.timeout.as_millis() as u64,
            }
        } else {
            Error::Http(e)
        }
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Decode a body as JSON, keeping the raw text when it is not JSON
pub(crate) fn decode_body(text: String) -> JsonValue {
    match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(_) => JsonValue::String(text),
    }
}
