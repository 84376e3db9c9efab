//! Business hours schedule models.
//!
//! Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/ticket-management/schedules/>

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A business hours schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub time_zone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,

    #[serde(default, deserialize_with = "crate::models::optional::null_as_empty")]
    pub intervals: Vec<Interval>,
}

/// Open hours expressed in minutes from the start of the week (Sunday 00:00).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start_time: i64,
    pub end_time: i64,
}
