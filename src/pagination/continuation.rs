//! Continuation tracking
//!
//! Holds the seed request for an iteration and derives each follow-up
//! request from a page's `continue` object.

use crate::error::{Error, Result};
use crate::request::{ParamValue, Request};
use crate::types::JsonValue;

/// Top-level response field carrying the continuation object
pub const CONTINUE_KEY: &str = "continue";

const RAW_CONTINUE_KEY: &str = "rawcontinue";
const FORMAT_VERSION_KEY: &str = "formatversion";

/// Reject requests that cannot be continued automatically
///
/// `rawcontinue` switches the server to the legacy continuation format and
/// `formatversion` below 2 changes the response shape, so both must go
/// through [`ApiClient::execute`](crate::ApiClient::execute) instead.
pub fn validate_iterable(request: &Request) -> Result<()> {
    if request.contains_key(RAW_CONTINUE_KEY) {
        return Err(unsupported(RAW_CONTINUE_KEY));
    }

    if let Some(version) = request.get(FORMAT_VERSION_KEY) {
        let supported = match version {
            ParamValue::Str(s) if s.trim() == "latest" => true,
            other => other.as_int().is_some_and(|v| v >= 2),
        };
        if !supported {
            return Err(unsupported(FORMAT_VERSION_KEY));
        }
    }

    Ok(())
}

fn unsupported(key: &str) -> Error {
    Error::usage(format!(
        "{key} is not supported with iterate(), use execute()"
    ))
}

/// The request state of one iteration run
#[derive(Debug, Clone)]
pub struct Continuation {
    seed: Request,
}

impl Continuation {
    /// Seed an iteration from the caller's request
    ///
    /// The seed starts from an empty `continue` parameter so the first call
    /// opts into the modern continuation format; any value the caller set
    /// wins.
    pub fn new(request: &Request) -> Self {
        let base = Request::new().param(CONTINUE_KEY, "");
        Self {
            seed: base.merged_with(request),
        }
    }

    /// The request for the first page
    pub fn seed(&self) -> &Request {
        &self.seed
    }

    /// The request for the page after `response`, if it has a `continue` object
    ///
    /// Every follow-up is the seed overlaid with that page's continuation
    /// only, so keys from earlier pages do not carry over.
    pub fn next_request(&self, response: &JsonValue) -> Option<Request> {
        response
            .get(CONTINUE_KEY)
            .and_then(JsonValue::as_object)
            .map(|continuation| self.seed.merge_continuation(continuation))
    }
}
