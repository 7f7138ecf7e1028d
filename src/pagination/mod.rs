//! Pagination module
//!
//! Implements the MediaWiki `continue` convention.
//!
//! # Overview
//!
//! A query may answer with a partial result plus a `continue` object.
//! Re-sending the original request with that object overlaid fetches the
//! next page; a response without `continue` ends the sequence. The
//! [`Continuation`] here tracks the original request and produces each
//! follow-up, while [`ContinueSignal`] lets page callbacks say whether to go
//! on.

mod continuation;
mod types;

pub use continuation::{validate_iterable, Continuation, CONTINUE_KEY};
pub use types::ContinueSignal;
