//! Pluggable request pipeline.
//!
//! Every request the client sends passes through an ordered chain of
//! [`Middleware`] layers before it reaches the underlying `reqwest::Client`.
//! The first layer registered on the builder sees the request first. A layer
//! may inspect or rewrite the request, call [`Next::run`] to continue, or
//! return a response of its own without touching the network.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Request, Response};

use crate::error::ZendeskError;

/// A layer wrapped around the request sender.
///
/// # Example
///
/// ```ignore
/// struct Trace;
///
/// #[async_trait::async_trait]
/// impl Middleware for Trace {
///     async fn handle(&self, request: Request, next: Next<'_>) -> Result<Response, ZendeskError> {
///         tracing::info!(url = %request.url(), "outgoing");
///         next.run(request).await
///     }
/// }
/// ```
#[async_trait]
pub trait Middleware: Send + Sync + 'static {
    /// Handles one request, usually by delegating to `next`.
    async fn handle(&self, request: Request, next: Next<'_>) -> Result<Response, ZendeskError>;
}

/// The remainder of the chain after the current middleware.
#[derive(Clone, Copy)]
pub struct Next<'a> {
    client: &'a Client,
    middlewares: &'a [Arc<dyn Middleware>],
}

impl<'a> Next<'a> {
    pub(crate) fn new(client: &'a Client, middlewares: &'a [Arc<dyn Middleware>]) -> Self {
        Self {
            client,
            middlewares,
        }
    }

    /// Passes the request to the next layer, or sends it when none is left.
    pub async fn run(self, request: Request) -> Result<Response, ZendeskError> {
        match self.middlewares.split_first() {
            Some((current, rest)) => {
                current
                    .handle(request, Next::new(self.client, rest))
                    .await
            }
            None => self
                .client
                .execute(request)
                .await
                .map_err(ZendeskError::Http),
        }
    }
}
