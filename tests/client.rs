//! Transport, retry and codec behavior against a mock Zendesk server.

mod common;

use std::time::{Duration, Instant};

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use reqwest::header::HeaderMap;
use reqwest::{Method, Request, Response};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zendesk::models::{Payload, Ticket};
use zendesk::{Middleware, Next, ZendeskError};

#[tokio::test]
async fn test_requests_carry_basic_auth_and_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/1.json"))
        .and(header("authorization", common::expected_authorization().as_str()))
        .and(header("user-agent", zendesk::client::CLIENT_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ticket": {"id": 1}})))
        .expect(1)
        .mount(&server)
        .await;

    let ticket = common::client(&server).show_ticket(1).await.unwrap();
    assert_eq!(ticket.id, Some(1));
}

#[tokio::test]
async fn test_authorization_cannot_be_overridden() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = common::client(&server)
        .with_header("Authorization", "Bearer overlay")
        .unwrap();
    let mut per_call = HeaderMap::new();
    per_call.insert("authorization", "Bearer per-call".parse().unwrap());

    client
        .request(Method::GET, "/api/v2/users/me.json", &per_call, None)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let values: Vec<_> = requests[0].headers.get_all("authorization").iter().collect();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0].to_str().unwrap(), common::expected_authorization());
}

#[tokio::test]
async fn test_header_overlay_does_not_leak_into_parent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let parent = common::client(&server);
    let child = parent.with_header("X-On-Behalf-Of", "42").unwrap();

    child
        .request(Method::GET, "/child", &HeaderMap::new(), None)
        .await
        .unwrap();
    parent
        .request(Method::GET, "/parent", &HeaderMap::new(), None)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].headers.get("x-on-behalf-of").unwrap(), "42");
    assert!(requests[1].headers.get("x-on-behalf-of").is_none());
}

#[tokio::test]
async fn test_per_call_header_wins_over_overlay() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("x-locale", "de"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client(&server).with_header("X-Locale", "en").unwrap();
    let mut per_call = HeaderMap::new();
    per_call.insert("x-locale", "de".parse().unwrap());

    let response = client
        .request(Method::GET, "/api/v2/locales.json", &per_call, None)
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_retry_after_replays_identical_request_once() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/tickets/5.json"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "1"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/tickets/5.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ticket": {"id": 5, "status": "pending"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let patch = Ticket {
        status: Some("pending".to_string()),
        ..Default::default()
    };

    let started = Instant::now();
    let ticket = common::client(&server).update_ticket(5, &patch).await.unwrap();

    assert!(started.elapsed() >= Duration::from_secs(1));
    assert_eq!(ticket.status.as_deref(), Some("pending"));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, requests[1].method);
    assert_eq!(requests[0].url, requests[1].url);
    assert_eq!(requests[0].body, requests[1].body);
}

#[tokio::test]
async fn test_second_rate_limit_is_returned_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "1")
                .set_body_json(json!({"error": "TooManyRequests"})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let err = common::client(&server).show_user(1).await.unwrap_err();

    assert_eq!(err.status(), Some(reqwest::StatusCode::TOO_MANY_REQUESTS));
    assert_eq!(err.api_error().unwrap().error_type.as_deref(), Some("TooManyRequests"));
}

#[tokio::test]
async fn test_no_retry_without_positive_retry_after() {
    for retry_after in [None, Some("0"), Some("later")] {
        let server = MockServer::start().await;
        let mut template = ResponseTemplate::new(503);
        if let Some(value) = retry_after {
            template = template.insert_header("Retry-After", value);
        }
        Mock::given(method("GET"))
            .respond_with(template)
            .expect(1)
            .mount(&server)
            .await;

        let err = common::client(&server).show_ticket(1).await.unwrap_err();
        assert_eq!(err.status(), Some(reqwest::StatusCode::SERVICE_UNAVAILABLE));
    }
}

#[tokio::test]
async fn test_partial_update_sends_only_set_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/tickets/9.json"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"ticket": {"status": "solved"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ticket": {"id": 9}})))
        .expect(1)
        .mount(&server)
        .await;

    let patch = Ticket {
        status: Some("solved".to_string()),
        ..Default::default()
    };
    common::client(&server).update_ticket(9, &patch).await.unwrap();
}

#[tokio::test]
async fn test_get_sends_no_body_or_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"locales": []})))
        .mount(&server)
        .await;

    common::client(&server).list_locales().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
    assert!(requests[0].headers.get("content-type").is_none());
}

#[tokio::test]
async fn test_empty_success_body_decodes_to_default() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/tickets/3.json"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    common::client(&server).delete_ticket(3).await.unwrap();
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"ticket\": "))
        .mount(&server)
        .await;

    let err = common::client(&server).show_ticket(1).await.unwrap_err();
    assert!(matches!(err, ZendeskError::Decode(_)));
}

#[tokio::test]
async fn test_api_error_renders_in_fixed_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/users.json"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({"error": "RecordInvalid", "description": "bad"})),
        )
        .mount(&server)
        .await;

    let err = common::client(&server)
        .create_user(&Default::default())
        .await
        .unwrap_err();
    let message = err.to_string();

    let positions: Vec<usize> = [
        "POST",
        format!("{}/api/v2/users.json", server.uri()).as_str(),
        "422",
        "RecordInvalid",
        "bad",
    ]
    .iter()
    .map(|needle| message.find(needle).unwrap())
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", message);
}

#[tokio::test]
async fn test_api_error_fallback_for_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<h1>oops</h1>"))
        .mount(&server)
        .await;

    let err = common::client(&server).show_organization(1).await.unwrap_err();
    let api = err.api_error().unwrap();

    assert_eq!(api.error_type.as_deref(), Some(zendesk::error::UNKNOWN_ERROR_TYPE));
    assert_eq!(
        api.description.as_deref(),
        Some(zendesk::error::UNKNOWN_ERROR_DESCRIPTION)
    );
}

#[tokio::test]
async fn test_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(
                json!({"error": {"title": "No help desk at acme", "message": "There is no help desk configured"}}),
            ),
        )
        .mount(&server)
        .await;

    let err = common::client(&server).show_ticket(404).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        err.api_error().unwrap().error_type.as_deref(),
        Some("No help desk at acme")
    );
}

#[tokio::test]
async fn test_transport_error_is_surfaced_without_retry() {
    // Nothing listens on port 1.
    let client = zendesk::ZendeskClient::from_url("http://127.0.0.1:1", "u", "p").unwrap();

    let err = client.show_ticket(1).await.unwrap_err();
    assert!(matches!(err, ZendeskError::Http(_)));
}

struct Canned;

#[async_trait]
impl Middleware for Canned {
    async fn handle(&self, _request: Request, _next: Next<'_>) -> Result<Response, ZendeskError> {
        let response = http::Response::builder()
            .status(200)
            .body(r#"{"ticket": {"id": 77, "subject": "from middleware"}}"#)
            .map_err(ZendeskError::middleware)?;
        Ok(Response::from(response))
    }
}

struct Tag(&'static str);

#[async_trait]
impl Middleware for Tag {
    async fn handle(&self, mut request: Request, next: Next<'_>) -> Result<Response, ZendeskError> {
        let order = match request.headers().get("x-order") {
            Some(existing) => format!("{},{}", existing.to_str().unwrap_or_default(), self.0),
            None => self.0.to_string(),
        };
        request
            .headers_mut()
            .insert("x-order", order.parse().map_err(ZendeskError::middleware)?);
        next.run(request).await
    }
}

#[tokio::test]
async fn test_middleware_can_short_circuit() {
    let server = MockServer::start().await;
    let client = common::builder(&server).with(Canned).build().unwrap();

    let ticket = client.show_ticket(77).await.unwrap();

    assert_eq!(ticket.subject.as_deref(), Some("from middleware"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_first_middleware_is_outermost() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::builder(&server)
        .with(Tag("outer"))
        .with(Tag("inner"))
        .build()
        .unwrap();

    let out: Payload = client
        .execute::<(), Payload>(Method::GET, "/api/v2/tickets.json", None)
        .await
        .unwrap();
    assert_eq!(out, Payload::default());

    let received = server.received_requests().await.unwrap();
    assert_eq!(received[0].headers["x-order"], "outer,inner");
}

struct Reject;

#[async_trait]
impl Middleware for Reject {
    async fn handle(&self, _request: Request, _next: Next<'_>) -> Result<Response, ZendeskError> {
        let response = http::Response::builder()
            .status(422)
            .body(r#"{"error":"RecordInvalid","description":"bad"}"#)
            .map_err(ZendeskError::middleware)?;
        Ok(Response::from(response))
    }
}

#[tokio::test]
async fn test_api_error_reports_requested_url() {
    let server = MockServer::start().await;
    let client = common::builder(&server).with(Reject).build().unwrap();

    let err = client.show_ticket(42).await.unwrap_err();
    let api = err.api_error().unwrap();

    assert_eq!(api.method, Method::GET);
    assert_eq!(api.url.path(), "/api/v2/tickets/42.json");
    assert_eq!(
        err.to_string(),
        format!("GET {}/api/v2/tickets/42.json: 422 RecordInvalid: bad", server.uri())
    );
}
