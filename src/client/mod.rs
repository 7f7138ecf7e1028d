//! MediaWiki API client
//!
//! [`ApiClient`] is the entry point. It holds the endpoint and identity,
//! sends single calls with [`ApiClient::execute`], and walks multi-page
//! results with [`ApiClient::iterate`].
//!
//! # Example
//!
//! ```no_run
//! use mwapi::{ApiClient, Request, RequestOptions};
//!
//! # async fn example() -> mwapi::Result<()> {
//! let client = ApiClient::new(
//!     "ExampleBot/1.0 (bot@example.org)",
//!     "https://en.wikipedia.org/w/api.php",
//! )?;
//!
//! let request = Request::new()
//!     .param("action", "query")
//!     .param("list", "allpages")
//!     .param("aplimit", 50);
//!
//! let mut titles = Vec::new();
//! client
//!     .iterate_sync(&request, RequestOptions::default(), |page| {
//!         if let Some(pages) = page["query"]["allpages"].as_array() {
//!             titles.extend(pages.iter().filter_map(|p| p["title"].as_str().map(String::from)));
//!         }
//!         titles.len() < 500
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod api;

pub use api::{ApiClient, ApiClientBuilder, USER_AGENT_HEADER};
