//! User identity models.
//!
//! Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/users/user_identities/>

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// One way of reaching a user: an email address, phone number, X handle, ...
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    /// `email`, `phone_number`, `twitter`, `facebook`, `google`, ...
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub identity_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undeliverable_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deliverable_state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype_name: Option<String>,
}
