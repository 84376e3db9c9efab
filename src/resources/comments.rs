//! Ticket comment operations.
//!
//! Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/tickets/ticket_comments/>

use std::mem;

use crate::client::ZendeskClient;
use crate::error::ZendeskError;
use crate::models::{ListOptions, Page, Payload, Query, RedactedString, SideLoads, TicketComment};

impl ZendeskClient {
    /// Lists the first page of a ticket's comments.
    pub async fn list_ticket_comments(
        &self,
        ticket_id: i64,
    ) -> Result<Vec<TicketComment>, ZendeskError> {
        let out: Payload = self
            .get(&format!("/api/v2/tickets/{}/comments.json", ticket_id))
            .await?;
        Ok(out.comments)
    }

    /// Lists a page of a ticket's comments with sideloads and pagination
    /// links.
    pub async fn list_ticket_comments_full(
        &self,
        ticket_id: i64,
        options: &ListOptions,
        sideloads: &SideLoads,
    ) -> Result<Page<TicketComment>, ZendeskError> {
        let mut query = Query::new();
        options.apply(&mut query);
        sideloads.apply(&mut query);

        let path = format!("/api/v2/tickets/{}/comments.json", ticket_id);
        let out: Payload = self.get(&query.to_endpoint(&path)).await?;
        Ok(out.into_page(|p| mem::take(&mut p.comments)))
    }

    /// Replaces every occurrence of `text` in a comment with `▇` characters.
    ///
    /// Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/tickets/ticket_comments/#redact-string-in-comment>
    pub async fn redact_comment_string(
        &self,
        ticket_id: i64,
        comment_id: i64,
        text: &str,
    ) -> Result<TicketComment, ZendeskError> {
        let input = RedactedString {
            text: text.to_string(),
        };
        let out: Payload = self
            .put(
                &format!("/api/v2/tickets/{}/comments/{}/redact", ticket_id, comment_id),
                &input,
            )
            .await?;
        Ok(out.comment.unwrap_or_default())
    }
}
