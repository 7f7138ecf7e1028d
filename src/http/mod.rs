//! HTTP transport module
//!
//! Defines the [`Transport`] seam the client sends requests through, and a
//! reqwest-backed implementation.
//!
//! # Features
//!
//! - **Query or form placement**: GET puts parameters in the query string,
//!   POST sends them form-encoded
//! - **Raw fallback**: bodies that are not JSON are surfaced as a JSON string
//! - **Timeouts**: enforced per request by the transport
//!
//! The transport does not retry, back off or rate limit.

mod transport;

pub use transport::{
    HttpTransport, HttpTransportConfig, HttpTransportConfigBuilder, Transport, TransportRequest,
    TransportResponse,
};
