use crate::client::ZendeskClient;
use crate::error::ZendeskError;
use crate::models::{Payload, TicketField};

impl ZendeskClient {
    /// Lists system and custom ticket fields.
    ///
    /// Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/tickets/ticket_fields/#list-ticket-fields>
    pub async fn list_ticket_fields(&self) -> Result<Vec<TicketField>, ZendeskError> {
        let out: Payload = self.get("/api/v2/ticket_fields.json").await?;
        Ok(out.ticket_fields)
    }
}
