//! Ticket audit models.
//!
//! Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/tickets/ticket_audits/>

use serde::{Deserialize, Serialize};

use super::{Attachment, Timestamp, Via};

/// A read-only record of one change to a ticket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketAudit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,

    #[serde(
        default,
        deserialize_with = "crate::models::optional::null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub events: Vec<AuditEvent>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via: Option<Via>,

    /// Free-form metadata (system info, custom keys).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

/// One event inside an audit.
///
/// Events are heterogeneous; the fields shared by the common event types
/// (`Comment`, `Create`, `Change`, `Notification`, ...) are typed, and the
/// field values of `Create`/`Change` events keep their raw JSON shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_body: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,

    #[serde(
        default,
        deserialize_with = "crate::models::optional::null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub attachments: Vec<Attachment>,

    /// Attribute changed by a `Create` or `Change` event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_value: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via: Option<Via>,
}
