//! Request types
//!
//! Defines the request map, its parameter values and per-call options.

use crate::types::{JsonObject, JsonValue, Method, WireParams};
use std::collections::btree_map::{self, BTreeMap};

/// Default `format` parameter
pub const DEFAULT_FORMAT: &str = "json";

/// Default `formatversion` parameter
pub const DEFAULT_FORMAT_VERSION: i64 = 2;

/// Separator MediaWiki uses for multi-value parameters
const LIST_SEPARATOR: &str = "|";

// ============================================================================
// Parameter Values
// ============================================================================

/// A single request parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Plain string value
    Str(String),
    /// Integer value, sent in decimal
    Int(i64),
    /// Boolean flag: `true` is sent as `1`, `false` is left out entirely
    Bool(bool),
    /// Multi-value parameter, sent `|`-joined
    List(Vec<String>),
}

impl ParamValue {
    /// Render this value for the wire, or `None` if it should not be sent
    pub fn to_wire(&self) -> Option<String> {
        match self {
            ParamValue::Str(s) => Some(s.clone()),
            ParamValue::Int(n) => Some(n.to_string()),
            ParamValue::Bool(true) => Some("1".to_string()),
            ParamValue::Bool(false) => None,
            ParamValue::List(items) => Some(items.join(LIST_SEPARATOR)),
        }
    }

    /// Interpret the value as an integer, if it is one or parses as one
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(n) => Some(*n),
            ParamValue::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Convert a JSON value (e.g. from a `continue` object) into a parameter
    ///
    /// Returns `None` for `null`, which means "drop this parameter".
    pub fn from_json(value: &JsonValue) -> Option<Self> {
        match value {
            JsonValue::Null => None,
            JsonValue::Bool(b) => Some(ParamValue::Bool(*b)),
            JsonValue::Number(n) => Some(match n.as_i64() {
                Some(i) => ParamValue::Int(i),
                None => ParamValue::Str(n.to_string()),
            }),
            JsonValue::String(s) => Some(ParamValue::Str(s.clone())),
            JsonValue::Array(items) => Some(ParamValue::List(
                items.iter().map(json_scalar_to_string).collect(),
            )),
            JsonValue::Object(_) => Some(ParamValue::Str(value.to_string())),
        }
    }
}

fn json_scalar_to_string(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Str(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(value: $t) -> Self {
                    ParamValue::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::List(value)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(value: Vec<&str>) -> Self {
        ParamValue::List(value.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ParamValue {
    fn from(value: [&str; N]) -> Self {
        ParamValue::List(value.iter().map(|s| (*s).to_string()).collect())
    }
}

// ============================================================================
// Request
// ============================================================================

/// A MediaWiki API request: parameter name to value
///
/// # Example
///
/// ```
/// use mwapi::Request;
///
/// let request = Request::new()
///     .param("action", "query")
///     .param("prop", ["info", "revisions"])
///     .param("pageids", 42);
///
/// let wire = request.normalize();
/// assert_eq!(wire["prop"], "info|revisions");
/// assert_eq!(wire["format"], "json");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    params: BTreeMap<String, ParamValue>,
}

impl Request {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Insert a parameter, returning the previous value
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.params.insert(key.into(), value.into())
    }

    /// Remove a parameter
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.params.remove(key)
    }

    /// Get a parameter
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    /// Check if a parameter is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if there are no parameters
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over parameters in key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.params.iter()
    }

    /// Overlay `other` on top of this request; keys in `other` win
    #[must_use]
    pub fn merged_with(&self, other: &Request) -> Request {
        let mut params = self.params.clone();
        params.extend(other.params.iter().map(|(k, v)| (k.clone(), v.clone())));
        Request { params }
    }

    /// Overlay a server continuation object on top of this request
    ///
    /// Every field of `continuation` replaces the same-named parameter.
    /// A `null` field removes the parameter.
    #[must_use]
    pub fn merge_continuation(&self, continuation: &JsonObject) -> Request {
        let mut params = self.params.clone();
        for (key, value) in continuation {
            match ParamValue::from_json(value) {
                Some(param) => {
                    params.insert(key.clone(), param);
                }
                None => {
                    params.remove(key);
                }
            }
        }
        Request { params }
    }

    /// Produce the wire form of this request without touching `self`
    ///
    /// Lists are `|`-joined, then `format` and `formatversion` defaults are
    /// added for any key that would otherwise be missing from the wire. A
    /// caller value of `false` is omitted, so the default still applies.
    pub fn normalize(&self) -> WireParams {
        let mut wire: WireParams = self
            .params
            .iter()
            .filter_map(|(k, v)| v.to_wire().map(|w| (k.clone(), w)))
            .collect();

        // Only values that reach the wire keep the default out
        wire.entry("format".to_string())
            .or_insert_with(|| DEFAULT_FORMAT.to_string());
        wire.entry("formatversion".to_string())
            .or_insert_with(|| DEFAULT_FORMAT_VERSION.to_string());
        wire
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Request {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<ParamValue>, const N: usize> From<[(K, V); N]> for Request {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Request {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = btree_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

// ============================================================================
// Request Options
// ============================================================================

/// Per-call options for [`ApiClient::execute`](crate::ApiClient::execute)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Send parameters as a form body instead of the query string
    pub post: bool,
}

impl RequestOptions {
    /// Options for a query-string (GET) request
    pub fn get() -> Self {
        Self { post: false }
    }

    /// Options for a form-body (POST) request
    pub fn post() -> Self {
        Self { post: true }
    }

    /// HTTP method these options select
    pub fn method(&self) -> Method {
        if self.post {
            Method::POST
        } else {
            Method::GET
        }
    }
}
