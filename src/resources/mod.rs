//! Resource methods for the Zendesk Support API.
//!
//! Each module adds methods to [`ZendeskClient`](crate::ZendeskClient) for
//! one area of the API. Every method follows the same shape: build the
//! endpoint (with pagination, sideload or filter parameters), wrap the input
//! in a [`Payload`](crate::models::Payload) envelope, call the API, and
//! unwrap the relevant key of the response envelope.
//!
//! A key missing from an otherwise successful response yields the type's
//! default value (an empty list, or an empty resource).

use std::borrow::Cow;

mod apps;
mod attachments;
mod audits;
mod comments;
mod identities;
mod job_statuses;
mod locales;
mod memberships;
mod organizations;
mod schedules;
mod search;
mod ticket_fields;
mod tickets;
mod users;

/// Percent-encodes a caller-supplied string for use as one path segment.
fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}
