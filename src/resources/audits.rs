use std::mem;

use crate::client::ZendeskClient;
use crate::error::ZendeskError;
use crate::models::{ListOptions, Page, Payload, Query, TicketAudit};

impl ZendeskClient {
    /// Lists a page of a ticket's audit trail.
    ///
    /// Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/tickets/ticket_audits/#list-audits-for-a-ticket>
    pub async fn list_ticket_audits(
        &self,
        ticket_id: i64,
        options: &ListOptions,
    ) -> Result<Page<TicketAudit>, ZendeskError> {
        let mut query = Query::new();
        options.apply(&mut query);

        let path = format!("/api/v2/tickets/{}/audits.json", ticket_id);
        let out: Payload = self.get(&query.to_endpoint(&path)).await?;
        Ok(out.into_page(|p| mem::take(&mut p.audits)))
    }
}
