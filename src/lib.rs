//! # Zendesk
//!
//! A typed async client for the Zendesk Support REST API.
//!
//! It maps tickets, users, organizations, comments, attachments, identities
//! and locales to Rust types and exposes one method per remote operation on
//! [`ZendeskClient`].
//!
//! ## Features
//!
//! - **Partial updates**: every model attribute is optional and only set
//!   attributes are sent; [`Nullable`](models::Nullable) clears a value
//! - **Pagination and sideloads**: [`ListOptions`](models::ListOptions),
//!   [`SideLoads`](models::SideLoads) and combined [`Page`](models::Page)
//!   results
//! - **Rate limiting**: a response with `Retry-After` is replayed once after
//!   the advertised delay
//! - **Typed errors**: non-2xx responses decode into
//!   [`ApiError`](error::ApiError) with the type, description and per-field
//!   details reported by Zendesk
//! - **Middleware**: wrap the sender for tracing, metrics or fake responses
//! - **Security**: the password is never logged
//!
//! ## Architecture
//!
//! - [`config`] - Configuration loading from environment variables
//! - [`error`] - Error types and the API error decoder
//! - [`client`] - Transport, retry policy and JSON envelope codec
//! - [`middleware`] - Pluggable request pipeline
//! - [`models`] - Resource types, the envelope and query helpers
//! - `resources` - One method per API operation, implemented on
//!   [`ZendeskClient`]
//!
//! ## Configuration
//!
//! [`Config::from_env`](config::Config::from_env) reads:
//!
//! - `ZENDESK_DOMAIN`: Subdomain (`acme`) or full base URL
//! - `ZENDESK_USERNAME`: Agent email, with `/token` appended for API tokens
//! - `ZENDESK_PASSWORD`: Password or API token
//!
//! ## Example
//!
//! ```ignore
//! use zendesk::config::Config;
//! use zendesk::models::Ticket;
//! use zendesk::ZendeskClient;
//!
//! async fn example() -> Result<(), zendesk::ZendeskError> {
//!     let config = Config::from_env()?;
//!     let client = ZendeskClient::from_config(&config)?;
//!
//!     // Solve a ticket without touching its other fields
//!     let patch = Ticket {
//!         status: Some("solved".to_string()),
//!         ..Default::default()
//!     };
//!     let ticket = client.update_ticket(42, &patch).await?;
//!     println!("#{:?} is now {:?}", ticket.id, ticket.status);
//!
//!     Ok(())
//! }
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
mod resources;

pub use client::{ClientBuilder, Credentials, ZendeskClient};
pub use error::{ApiError, ApiErrorDetail, ZendeskError};
pub use middleware::{Middleware, Next};
