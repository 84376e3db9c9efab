//! HTTP client for the Zendesk Support API.
//!
//! This module provides the `ZendeskClient` struct for making authenticated
//! requests to the Zendesk REST API. Resource methods (tickets, users, ...)
//! live in the `resources` module and are built on the primitives here.
//!
//! # Layers
//!
//! - [`ZendeskClient::request`] resolves the endpoint, merges headers,
//!   applies basic auth and sends the request through the middleware chain.
//! - [`ZendeskClient::send`] adds the rate-limit retry: when a response
//!   carries a positive `Retry-After`, the identical request is replayed
//!   once after sleeping for that many seconds.
//! - [`ZendeskClient::execute`] encodes the JSON envelope, checks the status
//!   and decodes the response envelope.
//!
//! # Security
//!
//! The password is never logged. Transport errors are sanitized before
//! logging.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER, USER_AGENT,
};
use reqwest::{Body, Client, Method, Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::Config;
use crate::error::{ApiError, ZendeskError};
use crate::middleware::{Middleware, Next};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client identifier sent with every request.
pub const CLIENT_USER_AGENT: &str = concat!("zendesk-rust/", env!("CARGO_PKG_VERSION"));

/// Basic-auth credentials.
///
/// For API token authentication use [`Credentials::api_token`], which
/// appends `/token` to the email address.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Credentials for an API token issued to `email`.
    pub fn api_token(email: impl AsRef<str>, token: impl Into<String>) -> Self {
        Self::new(format!("{}/token", email.as_ref()), token)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password for sanitization purposes.
    ///
    /// This should ONLY be used for sanitizing error messages, never for logging.
    pub(crate) fn password_for_sanitization(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// HTTP client for the Zendesk API.
///
/// Cloning is cheap and clones share the connection pool and middleware
/// chain. The client holds no mutable state, so one instance can serve
/// any number of concurrent tasks.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let client = ZendeskClient::from_config(&config)?;
///
/// let ticket = client.show_ticket(42).await?;
/// ```
#[derive(Clone)]
pub struct ZendeskClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Origin every relative endpoint is resolved against.
    base_url: Url,

    /// SECURITY: the password must never be logged.
    credentials: Credentials,

    /// First element is the outermost layer.
    middleware: Arc<[Arc<dyn Middleware>]>,

    /// Extra headers added by [`ZendeskClient::with_header`].
    headers: HeaderMap,
}

impl fmt::Debug for ZendeskClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZendeskClient")
            .field("base_url", &self.base_url.as_str())
            .field("credentials", &self.credentials)
            .field("middleware", &self.middleware.len())
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ZendeskClient {
    /// Creates a client for `https://{domain}.zendesk.com`.
    ///
    /// Use `{email}/token` as the username with an API token as the password,
    /// or build [`Credentials::api_token`] and use [`ZendeskClient::builder`].
    ///
    /// # Errors
    ///
    /// Returns `ZendeskError::InvalidUrl` if the domain does not form a valid
    /// URL and `ZendeskError::HttpClient` if the HTTP client fails to
    /// initialize.
    pub fn new(domain: &str, username: &str, password: &str) -> Result<Self, ZendeskError> {
        Self::from_url(&format!("https://{}.zendesk.com", domain), username, password)
    }

    /// Like [`ZendeskClient::new`] but with an explicit endpoint instead of a
    /// Zendesk subdomain.
    pub fn from_url(endpoint: &str, username: &str, password: &str) -> Result<Self, ZendeskError> {
        Self::builder(endpoint, Credentials::new(username, password)).build()
    }

    /// Creates a client from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, ZendeskError> {
        Self::builder(
            &config.base_url,
            Credentials::new(&config.username, config.password()),
        )
        .build()
    }

    /// Starts building a client with middleware or a custom timeout.
    pub fn builder(endpoint: &str, credentials: Credentials) -> ClientBuilder {
        ClientBuilder::new(endpoint, credentials)
    }

    /// Returns a new client that also sends `name: value` with every request.
    ///
    /// The current client is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ZendeskError::InvalidHeader` if the name or value is not a
    /// legal HTTP header.
    pub fn with_header(&self, name: &str, value: &str) -> Result<Self, ZendeskError> {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ZendeskError::InvalidHeader(format!("{:?}: {}", name, e)))?;
        // The value may be a secret, so it is left out of the error.
        let header_value = HeaderValue::from_str(value).map_err(|_| {
            ZendeskError::InvalidHeader(format!("invalid value for header {}", header_name))
        })?;

        let mut client = self.clone();
        client.headers.insert(header_name, header_value);
        Ok(client)
    }

    /// Returns the base URL all endpoints are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends one authenticated request without retrying.
    ///
    /// `endpoint` is resolved against the base URL; an absolute URL replaces
    /// it. Headers are applied in increasing precedence: the client
    /// identifier, the client's header overlay, then `headers`. The
    /// `Authorization` header is always the configured basic credentials.
    ///
    /// # Errors
    ///
    /// Returns `ZendeskError::InvalidUrl` for a malformed endpoint and
    /// `ZendeskError::Http` for connection failures. The response status is
    /// not checked.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        headers: &HeaderMap,
        body: Option<Body>,
    ) -> Result<Response, ZendeskError> {
        let request = self.build_request(method, endpoint, headers, body)?;
        self.dispatch(request).await
    }

    /// Sends a request, replaying it once if the server asks to retry.
    ///
    /// When the response carries `Retry-After: N` with `N > 0`, the task
    /// sleeps `N` seconds and sends the identical request again; the second
    /// response is returned whatever it is. A missing, zero or unparsable
    /// header means no retry. Streaming bodies cannot be replayed; in that
    /// case the first response is returned.
    ///
    /// Dropping the returned future cancels both the request and the sleep.
    pub async fn send(
        &self,
        method: Method,
        endpoint: &str,
        headers: &HeaderMap,
        body: Option<Body>,
    ) -> Result<Response, ZendeskError> {
        let request = self.build_request(method, endpoint, headers, body)?;
        self.send_request(request).await
    }

    /// Sends a built request with the single `Retry-After` replay.
    async fn send_request(&self, request: Request) -> Result<Response, ZendeskError> {
        let replay = request.try_clone();
        let url = request.url().clone();

        let response = self.dispatch(request).await?;

        let Some(delay) = retry_after(&response) else {
            return Ok(response);
        };

        let Some(replay) = replay else {
            tracing::warn!(
                url = %url,
                status = response.status().as_u16(),
                "Retry-After received but the request body cannot be replayed"
            );
            return Ok(response);
        };

        tracing::warn!(
            method = %replay.method(),
            url = %url,
            delay_secs = delay.as_secs(),
            "Rate limited by Zendesk, retrying once"
        );

        tokio::time::sleep(delay).await;
        self.dispatch(replay).await
    }

    /// Calls an endpoint with an optional JSON body and decodes the JSON
    /// response into `O`.
    ///
    /// The body and its `Content-Type: application/json` header are only
    /// sent when `input` is `Some`. An empty successful body (e.g. `204 No
    /// Content`) decodes to `O::default()`.
    ///
    /// # Errors
    ///
    /// - `ZendeskError::Encode` if `input` cannot be serialized
    /// - `ZendeskError::Api` for a non-2xx response
    /// - `ZendeskError::Decode` for malformed JSON on a 2xx response
    pub async fn execute<I, O>(
        &self,
        method: Method,
        endpoint: &str,
        input: Option<&I>,
    ) -> Result<O, ZendeskError>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned + Default,
    {
        let mut headers = HeaderMap::new();
        let body = match input {
            Some(input) => {
                let json = serde_json::to_vec(input).map_err(ZendeskError::Encode)?;
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                Some(Body::from(json))
            }
            None => None,
        };

        self.exchange(method, endpoint, &headers, body).await
    }

    /// Makes a GET request and decodes the response.
    pub(crate) async fn get<O>(&self, endpoint: &str) -> Result<O, ZendeskError>
    where
        O: DeserializeOwned + Default,
    {
        self.execute::<(), O>(Method::GET, endpoint, None).await
    }

    /// Makes a POST request with a JSON body and decodes the response.
    pub(crate) async fn post<I, O>(&self, endpoint: &str, input: &I) -> Result<O, ZendeskError>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned + Default,
    {
        self.execute(Method::POST, endpoint, Some(input)).await
    }

    /// Makes a PUT request with a JSON body and decodes the response.
    pub(crate) async fn put<I, O>(&self, endpoint: &str, input: &I) -> Result<O, ZendeskError>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned + Default,
    {
        self.execute(Method::PUT, endpoint, Some(input)).await
    }

    /// Makes a DELETE request and decodes the (often empty) response.
    pub(crate) async fn delete<O>(&self, endpoint: &str) -> Result<O, ZendeskError>
    where
        O: DeserializeOwned + Default,
    {
        self.execute::<(), O>(Method::DELETE, endpoint, None).await
    }

    /// Sends a prepared body and decodes the JSON response.
    pub(crate) async fn exchange<O>(
        &self,
        method: Method,
        endpoint: &str,
        headers: &HeaderMap,
        body: Option<Body>,
    ) -> Result<O, ZendeskError>
    where
        O: DeserializeOwned + Default,
    {
        let response = self.send_checked(method, endpoint, headers, body).await?;

        let body = response.bytes().await.map_err(ZendeskError::Http)?;

        tracing::trace!(body = %String::from_utf8_lossy(&body), "Zendesk API response");

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(O::default());
        }

        serde_json::from_slice(&body).map_err(ZendeskError::Decode)
    }

    /// Sends with retry and turns a non-2xx response into a
    /// `ZendeskError::Api` carrying the requested method and URL.
    pub(crate) async fn send_checked(
        &self,
        method: Method,
        endpoint: &str,
        headers: &HeaderMap,
        body: Option<Body>,
    ) -> Result<Response, ZendeskError> {
        let request = self.build_request(method, endpoint, headers, body)?;
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.send_request(request).await?;
        check_response(method, url, response).await
    }


    /// Assembles the outgoing request: URL, merged headers, credentials and
    /// body.
    fn build_request(
        &self,
        method: Method,
        endpoint: &str,
        headers: &HeaderMap,
        body: Option<Body>,
    ) -> Result<Request, ZendeskError> {
        let url = self.base_url.join(endpoint)?;

        tracing::debug!(
            method = %method,
            endpoint = %endpoint,
            "Making Zendesk API request"
        );

        let mut merged = HeaderMap::new();
        merged.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
        overlay_headers(&mut merged, &self.headers);
        overlay_headers(&mut merged, headers);
        merged.remove(AUTHORIZATION);

        let mut builder = self.http.request(method, url).headers(merged).basic_auth(
            &self.credentials.username,
            Some(&self.credentials.password),
        );
        if let Some(body) = body {
            builder = builder.body(body);
        }

        builder.build().map_err(ZendeskError::Http)
    }

    /// Runs a built request through the middleware chain.
    async fn dispatch(&self, request: Request) -> Result<Response, ZendeskError> {
        let result = Next::new(&self.http, &self.middleware).run(request).await;

        if let Err(e) = &result {
            tracing::debug!(
                error = %e.sanitized_display(self.credentials.password_for_sanitization()),
                "Zendesk request failed before a response was received"
            );
        }

        result
    }
}

/// Replaces every header named in `source`, keeping all of its values.
fn overlay_headers(target: &mut HeaderMap, source: &HeaderMap) {
    for name in source.keys() {
        target.remove(name);
    }
    for (name, value) in source {
        target.append(name, value.clone());
    }
}

/// Returns the advertised backoff, or `None` when no retry is requested.
fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}

/// Passes a 2xx response through and turns anything else into a
/// `ZendeskError::Api`.
///
/// `method` and `url` come from the request, since a middleware-built or
/// redirected response does not carry them.
async fn check_response(
    method: Method,
    url: Url,
    response: Response,
) -> Result<Response, ZendeskError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.bytes().await.unwrap_or_default();
    let error = ApiError::from_body(method, url, status, &body);

    tracing::debug!(
        status = status.as_u16(),
        error = %error,
        "Zendesk API error"
    );

    Err(error.into())
}

/// Builder for a [`ZendeskClient`] with middleware or custom HTTP settings.
///
/// # Example
///
/// ```ignore
/// let client = ZendeskClient::builder("https://acme.zendesk.com", Credentials::api_token("agent@acme.com", token))
///     .with(Trace)
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub struct ClientBuilder {
    endpoint: String,
    credentials: Credentials,
    middleware: Vec<Arc<dyn Middleware>>,
    timeout: Duration,
    http: Option<Client>,
}

impl ClientBuilder {
    pub fn new(endpoint: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            endpoint: endpoint.into(),
            credentials,
            middleware: Vec::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            http: None,
        }
    }

    /// Appends a middleware layer. The first layer added sees requests first.
    pub fn with(mut self, middleware: impl Middleware) -> Self {
        self.middleware.push(Arc::new(middleware));
        self
    }

    /// Sets the per-request timeout (default 30 seconds).
    ///
    /// Ignored when a client is supplied with [`ClientBuilder::http_client`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Uses an existing `reqwest::Client`, e.g. to share a connection pool.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns `ZendeskError::InvalidUrl` if the endpoint is not a valid URL
    /// and `ZendeskError::HttpClient` if the HTTP client fails to initialize.
    pub fn build(self) -> Result<ZendeskClient, ZendeskError> {
        let base_url = Url::parse(&self.endpoint)?;

        let http = match self.http {
            Some(http) => http,
            None => Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(ZendeskError::HttpClient)?,
        };

        Ok(ZendeskClient {
            http,
            base_url,
            credentials: self.credentials,
            middleware: self.middleware.into(),
            headers: HeaderMap::new(),
        })
    }
}
