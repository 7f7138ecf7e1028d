//! ApiClient implementation

use crate::config::{validate_endpoint, ClientConfig};
use crate::diagnostics::{DiagnosticLevel, DiagnosticSink};
use crate::error::{Error, Result};
use crate::http::{HttpTransport, HttpTransportConfig, Transport, TransportRequest};
use crate::pagination::{validate_iterable, ContinueSignal, Continuation};
use crate::request::{Request, RequestOptions};
use crate::types::JsonValue;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Header carrying the client identity
pub const USER_AGENT_HEADER: &str = "User-Agent";

/// Client for one MediaWiki API endpoint
///
/// Cloning is cheap and clones share the same transport. The client keeps no
/// per-call state, so concurrent calls on one instance are independent.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    user_agent: String,
    api_url: String,
    transport: Arc<dyn Transport>,
    diagnostics: Option<Arc<dyn DiagnosticSink>>,
}

impl ApiClient {
    /// Create a client using the default HTTP transport and no diagnostics
    pub fn new(user_agent: impl Into<String>, api_url: impl Into<String>) -> Result<Self> {
        Self::builder(user_agent, api_url).build()
    }

    /// Start building a client
    pub fn builder(user_agent: impl Into<String>, api_url: impl Into<String>) -> ApiClientBuilder {
        ApiClientBuilder {
            user_agent: user_agent.into(),
            api_url: api_url.into(),
            timeout: None,
            transport: None,
            diagnostics: None,
        }
    }

    /// Create a client from a [`ClientConfig`]
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Self::builder(&config.user_agent, &config.api_url)
            .timeout(config.timeout())
            .build()
    }

    /// The configured `User-Agent`
    pub fn user_agent(&self) -> &str {
        &self.inner.user_agent
    }

    /// The configured endpoint
    pub fn api_url(&self) -> &str {
        &self.inner.api_url
    }

    /// Call the API once and return the decoded response body
    ///
    /// The request is normalized into a fresh parameter map (lists joined
    /// with `|`, `format=json` and `formatversion=2` filled in) and sent as
    /// a query string, or as a form body when `options.post` is set.
    ///
    /// Fails with [`Error::Status`] for any status other than 200, with
    /// [`Error::Api`] when the body has an `error` field, and with
    /// [`Error::InvalidResponse`] when the body is not a JSON object.
    /// Server `warnings` go to the diagnostic sink and do not fail the call.
    pub async fn execute(&self, request: &Request, options: RequestOptions) -> Result<JsonValue> {
        let transport_request = TransportRequest {
            endpoint: self.inner.api_url.clone(),
            method: options.method(),
            headers: HashMap::from([(
                USER_AGENT_HEADER.to_string(),
                self.inner.user_agent.clone(),
            )]),
            params: request.normalize(),
        };

        debug!(
            "{} {} ({} params)",
            transport_request.method,
            transport_request.endpoint,
            transport_request.params.len()
        );

        let response = self.inner.transport.send(transport_request).await?;

        if let Some(sink) = &self.inner.diagnostics {
            sink.log(DiagnosticLevel::Trace, &response.to_json());
        }

        if response.status != 200 {
            return Err(Error::status(response.status));
        }

        let body = response.body;
        if !body.is_object() {
            return Err(Error::InvalidResponse { body });
        }

        if let Some(error) = body.get("error") {
            return Err(Error::api(error.clone()));
        }

        if let Some(warnings) = body.get("warnings") {
            if let Some(sink) = &self.inner.diagnostics {
                sink.log(DiagnosticLevel::Warning, warnings);
            }
        }

        Ok(body)
    }

    /// Follow `continue` pagination, handing each page to `callback`
    ///
    /// The callback receives the decoded body of every page and resolves to a
    /// [`ContinueSignal`]. The next page is requested only when the signal
    /// says so and the page carried a `continue` object; otherwise the
    /// iteration ends with `Ok(())`. Pages are fetched strictly one after
    /// another. Any failure, from a call or the callback, ends the iteration
    /// and is returned.
    ///
    /// Each follow-up request is `request` plus the latest page's `continue`
    /// object only. Continuation keys from earlier pages are not carried
    /// forward.
    ///
    /// Requests carrying `rawcontinue`, or a `formatversion` below 2, are
    /// rejected with [`Error::Usage`] before anything is sent.
    pub async fn iterate<F, Fut, S>(
        &self,
        request: &Request,
        options: RequestOptions,
        mut callback: F,
    ) -> Result<()>
    where
        F: FnMut(JsonValue) -> Fut,
        Fut: Future<Output = Result<S>>,
        S: ContinueSignal,
    {
        validate_iterable(request)?;

        let continuation = Continuation::new(request);
        let mut current = continuation.seed().clone();
        let mut pages = 0usize;

        loop {
            let response = self.execute(&current, options).await?;
            pages += 1;

            let next = continuation.next_request(&response);
            let signal = callback(response).await?;

            match next {
                Some(next) if signal.should_continue() => current = next,
                Some(_) => {
                    debug!("iteration stopped by callback after {pages} page(s)");
                    return Ok(());
                }
                None => {
                    debug!("iteration complete after {pages} page(s)");
                    return Ok(());
                }
            }
        }
    }

    /// [`iterate`](Self::iterate) with a synchronous callback
    pub async fn iterate_sync<F, S>(
        &self,
        request: &Request,
        options: RequestOptions,
        mut callback: F,
    ) -> Result<()>
    where
        F: FnMut(&JsonValue) -> S,
        S: ContinueSignal,
    {
        self.iterate(request, options, |page| {
            std::future::ready(Ok(callback(&page)))
        })
        .await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("user_agent", &self.inner.user_agent)
            .field("api_url", &self.inner.api_url)
            .field("has_diagnostics", &self.inner.diagnostics.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`ApiClient`]
pub struct ApiClientBuilder {
    user_agent: String,
    api_url: String,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
    diagnostics: Option<Arc<dyn DiagnosticSink>>,
}

impl ApiClientBuilder {
    /// Set the timeout of the default HTTP transport
    ///
    /// Ignored when a custom transport is supplied.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a custom transport
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Attach a diagnostic sink
    #[must_use]
    pub fn diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient> {
        validate_endpoint(&self.user_agent, &self.api_url)?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => {
                let mut config = HttpTransportConfig::builder();
                if let Some(timeout) = self.timeout {
                    config = config.timeout(timeout);
                }
                Arc::new(HttpTransport::with_config(config.build())?)
            }
        };

        Ok(ApiClient {
            inner: Arc::new(ClientInner {
                user_agent: self.user_agent,
                api_url: self.api_url,
                transport,
                diagnostics: self.diagnostics,
            }),
        })
    }
}
