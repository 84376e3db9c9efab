//! Ticket comment models.
//!
//! Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/tickets/ticket_comments/>

use serde::{Deserialize, Serialize};

use super::{Attachment, Timestamp, Via};

/// A comment on a ticket.
///
/// To attach files, upload them first and list the returned tokens in
/// `uploads`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketComment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// `Comment` or `VoiceComment`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub comment_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_body: Option<String>,

    /// Whether the requester can see the comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,

    #[serde(
        default,
        deserialize_with = "crate::models::optional::null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub attachments: Vec<Attachment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    /// Upload tokens to attach to this comment.
    #[serde(
        default,
        deserialize_with = "crate::models::optional::null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub uploads: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via: Option<Via>,
}

/// Body of a redact request: the exact text to strike from a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactedString {
    pub text: String,
}
