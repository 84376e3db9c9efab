//! Error types for the Zendesk client.
//!
//! This module defines `ZendeskError`, the unified error type returned by
//! every client operation, and `ApiError`, the decoded form of a non-2xx
//! response from the Zendesk API.
//!
//! # Security
//!
//! Credentials travel in the `Authorization` header only and never appear
//! in error messages. Use `sanitize_message()` before logging text that came
//! from an external source and may echo a secret back.

use std::collections::BTreeMap;
use std::fmt;

use reqwest::{Method, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Error type used when the error body could not be decoded.
pub const UNKNOWN_ERROR_TYPE: &str = "Unknown";

/// Description used when the error body could not be decoded.
pub const UNKNOWN_ERROR_DESCRIPTION: &str =
    "Oops! Something went wrong when parsing the error response.";

/// Unified error type for all Zendesk client operations.
#[derive(Error, Debug)]
pub enum ZendeskError {
    /// Configuration error - missing or invalid settings.
    #[error("configuration error: {0}")]
    Config(String),

    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// An endpoint or base URL could not be parsed or resolved.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A header name or value was rejected.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// The API answered with a non-2xx status.
    #[error("{0}")]
    Api(Box<ApiError>),

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A 2xx response carried a body that is not the expected JSON.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// A middleware layer failed before a response was produced.
    #[error("middleware error: {0}")]
    Middleware(#[source] anyhow::Error),
}

impl ZendeskError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        ZendeskError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ZendeskError::Config(message.into())
    }

    /// Wraps an arbitrary middleware failure.
    pub fn middleware(error: impl Into<anyhow::Error>) -> Self {
        ZendeskError::Middleware(error.into())
    }

    /// Returns the decoded API error, if this is one.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ZendeskError::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the HTTP status associated with this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ZendeskError::Api(e) => Some(e.status),
            ZendeskError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Returns true if the API reported that the resource does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Replaces every occurrence of `secret` in `message` with `[REDACTED]`.
    #[must_use]
    pub fn sanitize_message(message: &str, secret: &str) -> String {
        if secret.is_empty() {
            return message.to_string();
        }
        message.replace(secret, "[REDACTED]")
    }

    /// Display form of this error with `secret` redacted.
    #[must_use]
    pub fn sanitized_display(&self, secret: &str) -> String {
        Self::sanitize_message(&self.to_string(), secret)
    }
}

impl From<ApiError> for ZendeskError {
    fn from(error: ApiError) -> Self {
        ZendeskError::Api(Box::new(error))
    }
}

/// A non-2xx response decoded into its structured parts.
///
/// The request method, URL and status are always present. The remaining
/// fields come from the JSON error body:
///
/// ```json
/// {"error": "RecordInvalid", "description": "Record validation errors",
///  "details": {"email": [{"error": "DuplicateValue", "description": "..."}]}}
/// ```
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Method of the request that failed.
    pub method: Method,
    /// URL of the request that failed, as sent.
    pub url: Url,
    /// Status code returned by the server.
    pub status: StatusCode,
    /// Machine readable error type (e.g. `RecordInvalid`).
    pub error_type: Option<String>,
    /// Human readable description.
    pub description: Option<String>,
    /// Per-field validation details.
    pub details: Option<BTreeMap<String, Vec<ApiErrorDetail>>>,
}

impl ApiError {
    /// Builds an error from the raw response body.
    ///
    /// Falls back to a generic type and description when the body is not a
    /// recognizable error document, so the caller always gets a renderable
    /// message.
    pub fn from_body(method: Method, url: Url, status: StatusCode, body: &[u8]) -> Self {
        let mut error = ApiError {
            method,
            url,
            status,
            error_type: None,
            description: None,
            details: None,
        };

        match serde_json::from_slice::<RawApiError>(body) {
            Ok(raw) => {
                match raw.error {
                    Some(RawErrorKind::Code(code)) => error.error_type = Some(code),
                    Some(RawErrorKind::Titled { title, message }) => {
                        error.error_type = title;
                        error.description = message;
                    }
                    None => {}
                }
                if raw.description.is_some() {
                    error.description = raw.description;
                }
                error.details = raw.details;
            }
            Err(_) => {
                error.error_type = Some(UNKNOWN_ERROR_TYPE.to_string());
                error.description = Some(UNKNOWN_ERROR_DESCRIPTION.to_string());
            }
        }

        error
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.method, self.url, self.status.as_u16())?;

        if let Some(error_type) = self.error_type.as_deref().filter(|s| !s.is_empty()) {
            write!(f, " {}", error_type)?;
        }

        if let Some(description) = self.description.as_deref().filter(|s| !s.is_empty()) {
            write!(f, ": {}", description)?;
        }

        if let Some(details) = self.details.as_ref().filter(|d| !d.is_empty()) {
            write!(f, ":")?;
            for (field, entries) in details {
                let rendered: Vec<String> = entries.iter().map(ToString::to_string).collect();
                write!(f, " {}: [{}]", field, rendered.join(", "))?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// One entry of the per-field `details` mapping.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorDetail {
    /// Machine readable error type.
    #[serde(rename = "error", default)]
    pub error_type: Option<String>,

    /// Human readable description.
    #[serde(default)]
    pub description: Option<String>,
}

impl fmt::Display for ApiErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.error_type, &self.description) {
            (Some(t), Some(d)) => write!(f, "{}: {}", t, d),
            (Some(t), None) => write!(f, "{}", t),
            (None, Some(d)) => write!(f, "{}", d),
            (None, None) => Ok(()),
        }
    }
}

/// Wire shape of an error body.
#[derive(Debug, Deserialize)]
struct RawApiError {
    #[serde(default)]
    error: Option<RawErrorKind>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    details: Option<BTreeMap<String, Vec<ApiErrorDetail>>>,
}

/// Some endpoints report `error` as an object instead of a code string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawErrorKind {
    Code(String),
    Titled {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        message: Option<String>,
    },
}
