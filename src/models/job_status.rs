//! Background job status models.
//!
//! Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/ticket-management/job_statuses/>

use serde::{Deserialize, Serialize};

/// Status of an asynchronous job such as a bulk ticket update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<i64>,

    /// Per-item outcome, filled in as the job runs.
    #[serde(
        default,
        deserialize_with = "crate::models::optional::null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub results: Vec<JobResult>,

    /// `queued`, `working`, `failed`, `completed` or `killed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,

    /// Poll this URL for progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl JobStatus {
    /// Returns true once the job will make no further progress.
    pub fn is_finished(&self) -> bool {
        matches!(
            self.status.as_deref(),
            Some("completed") | Some("failed") | Some("killed")
        )
    }
}

/// Outcome of one item processed by a job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}
