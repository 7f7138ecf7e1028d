// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # mwapi
//!
//! A minimal client for the MediaWiki action API.
//!
//! ## Features
//!
//! - **Request normalization**: list parameters are `|`-joined and
//!   `format=json` / `formatversion=2` are sent unless overridden
//! - **Error mapping**: non-200 statuses and server `error` objects become
//!   typed [`Error`] values
//! - **Automatic continuation**: [`ApiClient::iterate`] follows the API's
//!   `continue` objects page by page until the callback or the server stops
//! - **Pluggable transport and diagnostics**: reqwest by default, any
//!   [`http::Transport`] for tests or custom stacks
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mwapi::{ApiClient, Request, RequestOptions, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ApiClient::new(
//!         "ExampleBot/1.0 (bot@example.org)",
//!         "https://en.wikipedia.org/w/api.php",
//!     )?;
//!
//!     // Single call
//!     let info = client
//!         .execute(
//!             &Request::new()
//!                 .param("action", "query")
//!                 .param("meta", "siteinfo"),
//!             RequestOptions::default(),
//!         )
//!         .await?;
//!     println!("{}", info["query"]["general"]["sitename"]);
//!
//!     // Every page of a list
//!     let request = Request::new()
//!         .param("action", "query")
//!         .param("list", "categorymembers")
//!         .param("cmtitle", "Category:Physics");
//!     client
//!         .iterate(&request, RequestOptions::default(), |page| async move {
//!             println!("{}", page["query"]["categorymembers"]);
//!             Ok(true)
//!         })
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        ApiClient                         │
//! │   execute(request, options) → body                       │
//! │   iterate(request, options, callback) → ()               │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────┬─────────────┴───┬──────────────┬──────────┐
//! │   Request    │   Pagination    │  Transport   │  Sink    │
//! ├──────────────┼─────────────────┼──────────────┼──────────┤
//! │ Normalize    │ Seed continue   │ reqwest      │ trace    │
//! │ List join    │ Merge continue  │ GET / POST   │ warning  │
//! │ Defaults     │ Stop signals    │ Timeout      │          │
//! └──────────────┴─────────────────┴──────────────┴──────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Request model and normalization
pub mod request;

/// HTTP transport
pub mod http;

/// `continue` pagination
pub mod pagination;

/// Diagnostic sink
pub mod diagnostics;

/// Client configuration
pub mod config;

/// The API client
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{ApiClient, ApiClientBuilder};
pub use config::ClientConfig;
pub use diagnostics::{DiagnosticLevel, DiagnosticSink, TracingSink};
pub use error::{Error, Result};
pub use pagination::ContinueSignal;
pub use request::{ParamValue, Request, RequestOptions};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
