//! Ticket models.
//!
//! Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/tickets/tickets/>

use serde::{Deserialize, Serialize};

use super::{Nullable, TicketComment, Timestamp, Via};

/// A Zendesk ticket.
///
/// Every attribute is optional so the same type serves as a full record
/// (responses), a create payload and a partial update: only the fields that
/// are set are sent.
///
/// # Example
///
/// ```ignore
/// // Solve a ticket without touching any other attribute.
/// let patch = Ticket {
///     status: Some("solved".to_string()),
///     ..Default::default()
/// };
/// client.update_ticket(42, &patch).await?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique ticket ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// API URL of this ticket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// ID in an external system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    /// `problem`, `incident`, `question` or `task`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_subject: Option<String>,

    /// Read-only first comment of the ticket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Comment to add when creating or updating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<TicketComment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<i64>,

    /// `urgent`, `high`, `normal` or `low`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    /// `new`, `open`, `pending`, `hold`, `solved` or `closed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<i64>,

    /// Requester to create on the fly when creating a ticket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requester: Option<Requester>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitter_id: Option<i64>,

    /// Assigned agent; `Nullable::Null` unassigns.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub assignee_id: Nullable<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,

    /// Assigned group; `Nullable::Null` clears it.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub group_id: Nullable<i64>,

    #[serde(
        default,
        deserialize_with = "crate::models::optional::null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub collaborator_ids: Vec<i64>,

    /// CCs to add; each entry is a user ID, an email or a name/email pair.
    #[serde(
        default,
        deserialize_with = "crate::models::optional::null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub collaborators: Vec<Collaborator>,

    #[serde(
        default,
        deserialize_with = "crate::models::optional::null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub additional_collaborators: Vec<Collaborator>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forum_topic_id: Option<i64>,

    /// Problem this incident is linked to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_incidents: Option<bool>,

    /// Due date of a task ticket; `Nullable::Null` clears it.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub due_at: Nullable<Timestamp>,

    #[serde(
        default,
        deserialize_with = "crate::models::optional::null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via: Option<Via>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,

    #[serde(
        default,
        deserialize_with = "crate::models::optional::null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub custom_fields: Vec<CustomField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_form_id: Option<i64>,

    /// Closed ticket this one is a follow-up of.
    #[serde(
        rename = "via_followup_source_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub followup_source_id: Option<i64>,

    /// Tags to add without replacing existing ones (bulk updates).
    #[serde(
        default,
        deserialize_with = "crate::models::optional::null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub additional_tags: Vec<String>,

    /// Tags to remove (bulk updates).
    #[serde(
        default,
        deserialize_with = "crate::models::optional::null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub remove_tags: Vec<String>,
}

/// Value of a custom ticket field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    #[serde(default)]
    pub id: Option<i64>,

    /// Always sent; `None` clears the field.
    #[serde(default)]
    pub value: Option<CustomFieldValue>,
}

impl CustomField {
    /// Creates a custom field assignment.
    pub fn new(id: i64, value: impl Into<CustomFieldValue>) -> Self {
        Self {
            id: Some(id),
            value: Some(value.into()),
        }
    }
}

/// The shapes a custom field value takes on the wire.
///
/// Checkbox fields are booleans, numeric fields numbers, multi-select fields
/// lists of option tags and everything else a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomFieldValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
}

impl From<bool> for CustomFieldValue {
    fn from(value: bool) -> Self {
        CustomFieldValue::Bool(value)
    }
}

impl From<i64> for CustomFieldValue {
    fn from(value: i64) -> Self {
        CustomFieldValue::Integer(value)
    }
}

impl From<f64> for CustomFieldValue {
    fn from(value: f64) -> Self {
        CustomFieldValue::Float(value)
    }
}

impl From<&str> for CustomFieldValue {
    fn from(value: &str) -> Self {
        CustomFieldValue::Text(value.to_string())
    }
}

impl From<String> for CustomFieldValue {
    fn from(value: String) -> Self {
        CustomFieldValue::Text(value)
    }
}

impl From<Vec<String>> for CustomFieldValue {
    fn from(value: Vec<String>) -> Self {
        CustomFieldValue::List(value)
    }
}

/// A CC entry: a user ID, a bare email, or a name and email pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Collaborator {
    Id(i64),
    Email(String),
    Contact {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        email: Option<String>,
    },
}

/// Requester created alongside a new ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requester {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
