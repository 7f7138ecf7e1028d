//! Request module
//!
//! Caller-facing request model and its wire normalization.
//!
//! # Overview
//!
//! A [`Request`] maps parameter names to scalar or list values. Before it is
//! sent, [`Request::normalize`] flattens it into [`WireParams`](crate::types::WireParams):
//! lists are joined with `|`, and the `format=json` / `formatversion=2`
//! defaults are filled in where the caller did not set them.
//!
//! Elements containing a literal `|` are not escaped, so such a list is
//! ambiguous on the wire.

mod types;

pub use types::{ParamValue, Request, RequestOptions, DEFAULT_FORMAT, DEFAULT_FORMAT_VERSION};
