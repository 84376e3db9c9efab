//! Configuration for connecting to a Zendesk account.
//!
//! This module handles loading the account endpoint and credentials from
//! environment variables, with validation to ensure all required values are
//! present.

use std::env;
use std::fmt;

use crate::error::ZendeskError;

/// Configuration for connecting to Zendesk.
///
/// The password (or API token) is stored but never logged or exposed in
/// error messages.
#[derive(Clone)]
pub struct Config {
    /// Base URL of the account (e.g., `https://acme.zendesk.com`).
    pub base_url: String,

    /// Agent email, or `{email}/token` when authenticating with an API token.
    pub username: String,

    /// Password or API token.
    /// This value must never be logged or included in error messages.
    password: String,
}

impl Config {
    /// Builds a configuration for a Zendesk subdomain or explicit URL.
    ///
    /// `domain` is either a bare subdomain (`acme` → `https://acme.zendesk.com`)
    /// or a full `http://`/`https://` URL.
    ///
    /// # Errors
    ///
    /// Returns `ZendeskError::Config` if any value is empty or the domain is
    /// malformed.
    pub fn new(
        domain: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ZendeskError> {
        let base_url = Self::resolve_base_url(&domain.into())?;
        let username = username.into();
        let password = password.into();

        if username.trim().is_empty() {
            return Err(ZendeskError::invalid_config("username must not be empty"));
        }
        Self::validate_password(&password)?;

        Ok(Config {
            base_url,
            username,
            password,
        })
    }

    /// Loads configuration from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `ZENDESK_DOMAIN`: Subdomain (`acme`) or full base URL
    /// - `ZENDESK_USERNAME`: Agent email (append `/token` for API tokens)
    /// - `ZENDESK_PASSWORD`: Password or API token
    ///
    /// # Errors
    ///
    /// Returns `ZendeskError::Config` if any required variable is missing
    /// or if values fail validation.
    ///
    /// # Example
    ///
    /// ```ignore
    /// dotenvy::dotenv().ok();
    /// let config = Config::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self, ZendeskError> {
        let domain = Self::get_required_env("ZENDESK_DOMAIN")?;
        let username = Self::get_required_env("ZENDESK_USERNAME")?;
        let password = Self::get_required_env("ZENDESK_PASSWORD")?;

        Self::new(domain, username, password)
    }

    /// Returns the password or API token.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, ZendeskError> {
        env::var(name)
            .map_err(|_| ZendeskError::missing_env(name))
            .and_then(|value| {
                if value.trim().is_empty() {
                    Err(ZendeskError::missing_env(name))
                } else {
                    Ok(value)
                }
            })
    }

    /// Turns a subdomain or URL into a normalized base URL.
    fn resolve_base_url(domain: &str) -> Result<String, ZendeskError> {
        let domain = domain.trim();

        if domain.starts_with("http://") || domain.starts_with("https://") {
            return Ok(domain.trim_end_matches('/').to_string());
        }

        if domain.is_empty()
            || !domain
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-')
        {
            return Err(ZendeskError::invalid_config(
                "ZENDESK_DOMAIN must be a subdomain (e.g. \"acme\") or an http(s):// URL",
            ));
        }

        Ok(format!("https://{}.zendesk.com", domain))
    }

    /// Rejects empty and placeholder passwords.
    fn validate_password(password: &str) -> Result<(), ZendeskError> {
        if password.trim().is_empty() {
            return Err(ZendeskError::invalid_config("password must not be empty"));
        }

        let placeholders = ["your_password", "your_token", "placeholder", "changeme"];

        let trimmed = password.trim();
        if placeholders.iter().any(|p| trimmed.eq_ignore_ascii_case(p)) {
            return Err(ZendeskError::invalid_config(
                "ZENDESK_PASSWORD appears to be a placeholder value",
            ));
        }

        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
