use super::segment;
use crate::client::ZendeskClient;
use crate::error::ZendeskError;
use crate::models::{JobStatus, Payload};

impl ZendeskClient {
    /// Polls the status of a background job.
    ///
    /// Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/ticket-management/job_statuses/#show-job-status>
    pub async fn show_job_status(&self, id: &str) -> Result<JobStatus, ZendeskError> {
        let out: Payload = self
            .get(&format!("/api/v2/job_statuses/{}.json", segment(id)))
            .await?;
        Ok(out.job_status.unwrap_or_default())
    }
}
