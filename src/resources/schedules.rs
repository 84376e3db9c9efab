use crate::client::ZendeskClient;
use crate::error::ZendeskError;
use crate::models::{Payload, Schedule};

impl ZendeskClient {
    /// Lists business hours schedules.
    ///
    /// Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/ticket-management/schedules/#list-schedules>
    pub async fn list_schedules(&self) -> Result<Vec<Schedule>, ZendeskError> {
        let out: Payload = self.get("/api/v2/business_hours/schedules.json").await?;
        Ok(out.schedules)
    }
}
