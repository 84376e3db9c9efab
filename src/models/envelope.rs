//! The JSON envelope used by every request and response.
//!
//! Zendesk wraps resources under a key named after the resource
//! (`{"ticket": {...}}`, `{"users": [...]}`). [`Payload`] declares every key
//! the client uses, so a single decode picks up whichever one the server
//! returned and a single encode emits only the keys that were set.

use std::mem;

use serde::{Deserialize, Serialize};

use super::optional::null_as_empty;

use super::{
    Attachment, ComplianceDeletionStatus, Group, JobStatus, Locale, Organization,
    OrganizationMembership, Page, Schedule, Ticket, TicketAudit, TicketComment, TicketField,
    Upload, User, UserIdentity,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,

    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub audits: Vec<TicketAudit>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<TicketComment>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<TicketComment>,

    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub compliance_deletion_statuses: Vec<ComplianceDeletionStatus>,

    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<Group>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<UserIdentity>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub identities: Vec<UserIdentity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_status: Option<JobStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub locales: Vec<Locale>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub organizations: Vec<Organization>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_membership: Option<OrganizationMembership>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub organization_memberships: Vec<OrganizationMembership>,

    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub schedules: Vec<Schedule>,

    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket: Option<Ticket>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub tickets: Vec<Ticket>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_field: Option<TicketField>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub ticket_fields: Vec<TicketField>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload: Option<Upload>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<User>,

    // Pagination metadata on list responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<String>,
}

impl Payload {
    /// Splits a list response into a [`Page`], taking the primary items with
    /// `items` and the sideloads and pagination links from the envelope.
    pub(crate) fn into_page<T>(mut self, items: impl FnOnce(&mut Self) -> Vec<T>) -> Page<T> {
        let items = items(&mut self);
        Page {
            items,
            users: mem::take(&mut self.users),
            groups: mem::take(&mut self.groups),
            organizations: mem::take(&mut self.organizations),
            next_page: self.next_page,
            previous_page: self.previous_page,
            count: self.count,
        }
    }
}
