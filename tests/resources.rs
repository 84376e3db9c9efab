//! Resource methods: endpoints, query parameters and envelope keys.

mod common;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_bytes, body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zendesk::models::{
    ListOptions, ListUsersOptions, Nullable, OrganizationMembership, SearchFilter,
    SearchOperator, SideLoad, SideLoads, Ticket,
};

#[tokio::test]
async fn test_membership_create_is_idempotent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/organization_memberships.json"))
        .and(body_json(json!({"organization_membership": {"user_id": 1, "organization_id": 2}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "organization_membership": {"id": 461, "user_id": 1, "organization_id": 2, "default": true}
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = common::client(&server);
    let membership = OrganizationMembership {
        user_id: Some(1),
        organization_id: Some(2),
        ..Default::default()
    };

    let first = client.create_organization_membership(&membership).await.unwrap();
    let second = client.create_organization_membership(&membership).await.unwrap();

    assert_eq!(first.id, Some(461));
    assert_eq!(second.id, first.id);
}

#[tokio::test]
async fn test_pagination_returns_distinct_pages() {
    let server = MockServer::start().await;
    for (page, id) in [("1", 101), ("2", 102)] {
        let next_page = match page {
            "1" => json!(format!(
                "{}/api/v2/organizations/9/tickets.json?page=2&per_page=1",
                server.uri()
            )),
            _ => json!(null),
        };
        Mock::given(method("GET"))
            .and(path("/api/v2/organizations/9/tickets.json"))
            .and(query_param("page", page))
            .and(query_param("per_page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tickets": [{"id": id}],
                "next_page": next_page,
                "previous_page": null,
                "count": 2
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = common::client(&server);
    let first = client
        .list_organization_tickets(9, &ListOptions::new().with_page(1).with_per_page(1), &SideLoads::new())
        .await
        .unwrap();
    let second = client
        .list_organization_tickets(9, &ListOptions::new().with_page(2).with_per_page(1), &SideLoads::new())
        .await
        .unwrap();

    assert_eq!(first.items.len(), 1);
    assert_eq!(second.items.len(), 1);
    assert!(first.items[0].id != second.items[0].id);
    assert!(first.has_next());
    assert!(!second.has_next());
    assert_eq!(first.count, Some(2));
}

#[tokio::test]
async fn test_sideloads_are_requested_and_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/5/comments.json"))
        .and(query_param("include", "users,groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "comments": [{"id": 1, "body": "hi", "author_id": 10}],
            "users": [{"id": 10, "name": "Ada"}],
            "groups": [{"id": 20, "name": "Tier 1"}],
            "count": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let sideloads = SideLoads::new()
        .include(SideLoad::Users)
        .include(SideLoad::Groups);
    let page = common::client(&server)
        .list_ticket_comments_full(5, &ListOptions::default(), &sideloads)
        .await
        .unwrap();

    assert_eq!(page.items[0].body.as_deref(), Some("hi"));
    assert_eq!(page.users[0].name.as_deref(), Some("Ada"));
    assert_eq!(page.groups[0].name.as_deref(), Some("Tier 1"));
}

#[tokio::test]
async fn test_batch_update_sends_ticket_list() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/tickets/update_many.json"))
        .and(query_param_is_missing("ids"))
        .and(body_json(json!({"tickets": [
            {"id": 1, "status": "solved"},
            {"id": 2, "priority": "high"}
        ]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job_status": {"id": "abc", "status": "queued"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tickets = [
        Ticket {
            id: Some(1),
            status: Some("solved".to_string()),
            ..Default::default()
        },
        Ticket {
            id: Some(2),
            priority: Some("high".to_string()),
            ..Default::default()
        },
    ];
    let job = common::client(&server)
        .batch_update_many_tickets(&tickets)
        .await
        .unwrap();

    assert_eq!(job.id.as_deref(), Some("abc"));
    assert!(!job.is_finished());
}

#[tokio::test]
async fn test_bulk_update_sends_ids_and_single_patch() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/tickets/update_many.json"))
        .and(query_param("ids", "1,2,3"))
        .and(body_json(json!({"ticket": {"additional_tags": ["vip"], "assignee_id": null}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job_status": {"id": "def", "status": "working"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let patch = Ticket {
        additional_tags: vec!["vip".to_string()],
        assignee_id: Nullable::Null,
        ..Default::default()
    };
    let job = common::client(&server)
        .bulk_update_many_tickets(&[1, 2, 3], &patch)
        .await
        .unwrap();

    assert_eq!(job.id.as_deref(), Some("def"));
}

#[tokio::test]
async fn test_upload_sends_raw_body_with_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/uploads.json"))
        .and(query_param("filename", "log file.txt"))
        .and(query_param("token", "tok123"))
        .and(header("content-type", "application/binary"))
        .and(body_bytes(b"hello world".to_vec()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "upload": {
                "token": "tok123",
                "attachment": {"id": 7, "file_name": "log file.txt", "size": 11},
                "attachments": [{"id": 6}, {"id": 7}]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let upload = common::client(&server)
        .upload_file("log file.txt", Some("tok123"), b"hello world".to_vec())
        .await
        .unwrap();

    assert_eq!(upload.token.as_deref(), Some("tok123"));
    assert_eq!(upload.attachment.unwrap().size, Some(11));
    assert_eq!(upload.attachments.len(), 2);
}

#[tokio::test]
async fn test_first_upload_has_no_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/uploads.json"))
        .and(query_param("filename", "a.png"))
        .and(query_param_is_missing("token"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"upload": {"token": "new"}})))
        .expect(1)
        .mount(&server)
        .await;

    let upload = common::client(&server)
        .upload_file("a.png", None, vec![0u8; 4])
        .await
        .unwrap();
    assert_eq!(upload.token.as_deref(), Some("new"));
}

#[tokio::test]
async fn test_show_attachment_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/attachments/498483.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "attachment": {"id": 498483, "content_type": "image/png", "inline": false}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let attachment = common::client(&server).show_attachment(498483).await.unwrap();
    assert_eq!(attachment.content_type.as_deref(), Some("image/png"));
}

#[tokio::test]
async fn test_list_users_role_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/users.json"))
        .and(query_param("role[]", "agent"))
        .and(query_param("permission_set", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [{"id": 1, "role": "agent"}, {"id": 2, "role": "admin"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = ListUsersOptions::new()
        .with_role("agent")
        .with_role("admin")
        .with_permission_set(12);
    let users = common::client(&server).list_users(&options).await.unwrap();
    assert_eq!(users.len(), 2);

    let requests = server.received_requests().await.unwrap();
    let roles: Vec<String> = requests[0]
        .url
        .query_pairs()
        .filter(|(k, _)| k == "role[]")
        .map(|(_, v)| v.into_owned())
        .collect();
    assert_eq!(roles, vec!["agent", "admin"]);
}

#[tokio::test]
async fn test_search_user_by_external_id_requires_single_match() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/users/search.json"))
        .and(query_param("external_id", "crm-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"users": [{"id": 1}]})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/users/search.json"))
        .and(query_param("external_id", "dup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"users": [{"id": 1}, {"id": 2}]})))
        .mount(&server)
        .await;

    let client = common::client(&server);
    assert_eq!(
        client.search_user_by_external_id("crm-1").await.unwrap().and_then(|u| u.id),
        Some(1)
    );
    assert!(client.search_user_by_external_id("dup").await.unwrap().is_none());
}

#[tokio::test]
async fn test_search_tickets_builds_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/search.json"))
        .and(query_param("per_page", "5"))
        .and(query_param(
            "query",
            "type:ticket status<solved group:\"Tier 2\" \"printer\"",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"id": 33, "subject": "Printer on fire"}],
            "next_page": null,
            "count": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let results = common::client(&server)
        .search_tickets(
            "printer",
            &ListOptions::new().with_per_page(5),
            &[
                SearchFilter::status(SearchOperator::LessThan, "solved"),
                SearchFilter::group("Tier 2"),
            ],
        )
        .await
        .unwrap();

    assert_eq!(results.count, Some(1));
    assert_eq!(results.results[0].id, Some(33));
}

#[tokio::test]
async fn test_redact_comment_sends_bare_text() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/tickets/1/comments/2/redact"))
        .and(body_json(json!({"text": "4111 1111 1111 1111"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "comment": {"id": 2, "body": "My card is ▇▇▇▇"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let comment = common::client(&server)
        .redact_comment_string(1, 2, "4111 1111 1111 1111")
        .await
        .unwrap();
    assert_eq!(comment.id, Some(2));
}

#[tokio::test]
async fn test_make_identity_primary_returns_all_identities() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/users/1/identities/3/make_primary.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "identities": [
                {"id": 3, "type": "email", "primary": true},
                {"id": 4, "type": "phone_number", "primary": false}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let identities = common::client(&server)
        .make_identity_primary(1, 3)
        .await
        .unwrap();
    assert_eq!(identities.len(), 2);
    assert_eq!(identities[0].identity_type.as_deref(), Some("email"));
}

#[tokio::test]
async fn test_locale_code_and_job_id_are_path_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/locales/pt-BR.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"locale": {"id": 19, "locale": "pt-BR"}})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/job_statuses/a%2Fb.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"job_status": {"id": "a/b", "status": "completed"}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client(&server);
    assert_eq!(client.show_locale_by_code("pt-BR").await.unwrap().id, Some(19));
    assert!(client.show_job_status("a/b").await.unwrap().is_finished());
}

#[tokio::test]
async fn test_app_public_key_is_raw_text() {
    let server = MockServer::start().await;
    let pem = "-----BEGIN PUBLIC KEY-----\nMIIBIjAN\n-----END PUBLIC KEY-----\n";
    Mock::given(method("GET"))
        .and(path("/api/v2/apps/5/public_key.pem"))
        .respond_with(ResponseTemplate::new(200).set_body_string(pem))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/apps/6/public_key.pem"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "RecordNotFound"})))
        .mount(&server)
        .await;

    let client = common::client(&server);
    assert_eq!(client.show_app_public_key(5).await.unwrap(), pem);
    assert!(client.show_app_public_key(6).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_add_user_tags_returns_tag_list() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/users/8/tags.json"))
        .and(body_json(json!({"tags": ["vip"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tags": ["enterprise", "vip"]})))
        .expect(1)
        .mount(&server)
        .await;

    let tags = common::client(&server).add_user_tags(8, &["vip"]).await.unwrap();
    assert_eq!(tags, vec!["enterprise", "vip"]);
}

#[tokio::test]
async fn test_permanently_delete_ticket_returns_job() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/deleted_tickets/12.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job_status": {"id": "purge-12", "status": "queued"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let job = common::client(&server).permanently_delete_ticket(12).await.unwrap();
    assert_eq!(job.id.as_deref(), Some("purge-12"));
}

#[tokio::test]
async fn test_list_ticket_audits_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/4/audits.json"))
        .and(query_param("per_page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "audits": [{
                "id": 1,
                "ticket_id": 4,
                "events": [{"id": 9, "type": "Change", "field_name": "status", "value": "open", "previous_value": "new"}]
            }],
            "count": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = common::client(&server)
        .list_ticket_audits(4, &ListOptions::new().with_per_page(2))
        .await
        .unwrap();
    assert_eq!(page.items[0].events[0].field_name.as_deref(), Some("status"));
    assert_eq!(page.count, Some(1));
}

#[tokio::test]
async fn test_null_list_fields_decode_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ticket": {"id": 1, "tags": null, "collaborator_ids": null}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ticket = common::client(&server).show_ticket(1).await.unwrap();

    assert_eq!(ticket.id, Some(1));
    assert!(ticket.tags.is_empty());
    assert!(ticket.collaborator_ids.is_empty());
}
