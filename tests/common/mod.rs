//! Helpers shared by the integration tests.

#![allow(dead_code)]

use base64::Engine;
use wiremock::MockServer;
use zendesk::{Credentials, ZendeskClient};

pub const USERNAME: &str = "agent@acme.com/token";
pub const PASSWORD: &str = "s3cr3t-api-token";

/// Client pointed at the mock server.
pub fn client(server: &MockServer) -> ZendeskClient {
    ZendeskClient::from_url(&server.uri(), USERNAME, PASSWORD).unwrap()
}

/// Builder pointed at the mock server, for tests that add middleware.
pub fn builder(server: &MockServer) -> zendesk::ClientBuilder {
    ZendeskClient::builder(&server.uri(), Credentials::new(USERNAME, PASSWORD))
}

/// The `Authorization` header every request must carry.
pub fn expected_authorization() -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(format!("{}:{}", USERNAME, PASSWORD));
    format!("Basic {}", encoded)
}
