//! Error types for mwapi
//!
//! This module defines the error hierarchy for the whole client.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Each variant maps to a short tag (see [`Error::tag`]) so callers can tell
//! library misuse apart from failures reported by the server.

use serde_json::{json, Value};
use thiserror::Error;

/// The main error type for mwapi
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Usage Errors
    // ============================================================================
    /// The caller passed a request shape this library does not support
    #[error("mwapi-usage: {message}")]
    Usage {
        /// What was wrong with the request
        message: String,
    },

    /// Invalid client configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong
        message: String,
    },

    /// The API URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Server Errors
    // ============================================================================
    /// The transport answered with something other than HTTP 200
    #[error("mwapi-status: unexpected HTTP status {status_code}")]
    Status {
        /// Status code actually received
        status_code: u16,
    },

    /// The response body carried an `error` field
    #[error("mwapi-error: {}", describe_api_error(.error))]
    Api {
        /// The server's `error` object
        error: Value,
    },

    /// The response body was not a JSON object
    #[error("mwapi-invalid-response: expected a JSON object, got {body}")]
    InvalidResponse {
        /// The body as received
        body: Value,
    },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    /// The HTTP exchange itself failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The transport gave up waiting
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout
        timeout_ms: u64,
    },

    // ============================================================================
    // Serialization Errors
    // ============================================================================
    /// JSON (de)serialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// YAML config could not be parsed
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Anything else
    #[error("{0}")]
    Other(String),

    /// Failure raised by caller code, e.g. a page callback
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a status error
    pub fn status(status_code: u16) -> Self {
        Self::Status { status_code }
    }

    /// Create an API error from the server's `error` field
    pub fn api(error: Value) -> Self {
        Self::Api { error }
    }

    /// Short machine-readable tag for this error
    pub fn tag(&self) -> &'static str {
        match self {
            Error::Usage { .. } => "mwapi-usage",
            Error::Status { .. } => "mwapi-status",
            Error::Api { .. } => "mwapi-error",
            Error::InvalidResponse { .. } => "mwapi-invalid-response",
            Error::Config { .. } | Error::InvalidUrl(_) | Error::YamlParse(_) => "mwapi-config",
            Error::Http(_) | Error::Timeout { .. } => "mwapi-transport",
            Error::JsonParse(_) => "mwapi-json",
            Error::Other(_) | Error::Anyhow(_) => "mwapi-other",
        }
    }

    /// Structured diagnostic data attached to the error, if any
    ///
    /// Status errors carry `{"statusCode": n}`; API errors carry the
    /// server's `error` object verbatim.
    pub fn metadata(&self) -> Option<Value> {
        match self {
            Error::Status { status_code } => Some(json!({ "statusCode": status_code })),
            Error::Api { error } => Some(error.clone()),
            Error::InvalidResponse { body } => Some(body.clone()),
            _ => None,
        }
    }

    /// The HTTP status for [`Error::Status`]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Status { status_code } => Some(*status_code),
            _ => None,
        }
    }

    /// The server's error code (`error.code`) for [`Error::Api`]
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Error::Api { error } => error.get("code").and_then(Value::as_str),
            _ => None,
        }
    }

    /// The server's human-readable description (`error.info`) for [`Error::Api`]
    pub fn api_info(&self) -> Option<&str> {
        match self {
            Error::Api { error } => error.get("info").and_then(Value::as_str),
            _ => None,
        }
    }

    /// Check if this error was raised before anything was sent
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage { .. })
    }
}

fn describe_api_error(error: &Value) -> String {
    match (
        error.get("code").and_then(Value::as_str),
        error.get("info").and_then(Value::as_str),
    ) {
        (Some(code), Some(info)) => format!("{code}: {info}"),
        (Some(code), None) => code.to_string(),
        _ => error.to_string(),
    }
}

/// Result type alias for mwapi
pub type Result<T> = std::result::Result<T, Error>;
