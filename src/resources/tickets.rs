//! Ticket operations.
//!
//! Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/tickets/tickets/>

use std::mem;

use crate::client::ZendeskClient;
use crate::error::ZendeskError;
use crate::models::{join_ids, JobStatus, ListOptions, Page, Payload, Query, SideLoads, Ticket};

impl ZendeskClient {
    /// Fetches a ticket by ID.
    pub async fn show_ticket(&self, id: i64) -> Result<Ticket, ZendeskError> {
        let out: Payload = self.get(&format!("/api/v2/tickets/{}.json", id)).await?;
        Ok(out.ticket.unwrap_or_default())
    }

    /// Creates a ticket.
    ///
    /// The first comment goes in `ticket.comment`.
    pub async fn create_ticket(&self, ticket: &Ticket) -> Result<Ticket, ZendeskError> {
        let input = Payload {
            ticket: Some(ticket.clone()),
            ..Default::default()
        };
        let out: Payload = self.post("/api/v2/tickets.json", &input).await?;
        Ok(out.ticket.unwrap_or_default())
    }

    /// Updates a ticket.
    ///
    /// Only the fields set on `ticket` are sent, so a patch carrying just a
    /// status leaves every other attribute untouched. Use
    /// [`Nullable::Null`](crate::models::Nullable::Null) to clear the
    /// assignee, group or due date.
    pub async fn update_ticket(&self, id: i64, ticket: &Ticket) -> Result<Ticket, ZendeskError> {
        let input = Payload {
            ticket: Some(ticket.clone()),
            ..Default::default()
        };
        let out: Payload = self
            .put(&format!("/api/v2/tickets/{}.json", id), &input)
            .await?;
        Ok(out.ticket.unwrap_or_default())
    }

    /// Applies a different patch to each ticket in one background job.
    ///
    /// Every ticket must carry its `id`. Sends `{"tickets": [...]}`.
    ///
    /// Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/tickets/tickets/#update-many-tickets>
    pub async fn batch_update_many_tickets(
        &self,
        tickets: &[Ticket],
    ) -> Result<JobStatus, ZendeskError> {
        let input = Payload {
            tickets: tickets.to_vec(),
            ..Default::default()
        };
        let out: Payload = self.put("/api/v2/tickets/update_many.json", &input).await?;
        Ok(out.job_status.unwrap_or_default())
    }

    /// Applies the same patch to every ticket in `ids` in one background job.
    ///
    /// Sends `{"ticket": {...}}` with the IDs in the `ids` query parameter.
    /// Use `additional_tags` and `remove_tags` on the patch to add or remove
    /// tags without replacing the whole list.
    pub async fn bulk_update_many_tickets(
        &self,
        ids: &[i64],
        ticket: &Ticket,
    ) -> Result<JobStatus, ZendeskError> {
        let mut query = Query::new();
        query.push("ids", join_ids(ids));

        let input = Payload {
            ticket: Some(ticket.clone()),
            ..Default::default()
        };
        let out: Payload = self
            .put(&query.to_endpoint("/api/v2/tickets/update_many.json"), &input)
            .await?;
        Ok(out.job_status.unwrap_or_default())
    }

    /// Lists one page of an organization's tickets with optional sideloads.
    pub async fn list_organization_tickets(
        &self,
        organization_id: i64,
        options: &ListOptions,
        sideloads: &SideLoads,
    ) -> Result<Page<Ticket>, ZendeskError> {
        let mut query = Query::new();
        options.apply(&mut query);
        sideloads.apply(&mut query);

        let path = format!("/api/v2/organizations/{}/tickets.json", organization_id);
        let out: Payload = self.get(&query.to_endpoint(&path)).await?;
        Ok(out.into_page(|p| mem::take(&mut p.tickets)))
    }

    /// Lists tickets requested by a user.
    pub async fn list_requested_tickets(&self, user_id: i64) -> Result<Vec<Ticket>, ZendeskError> {
        let out: Payload = self
            .get(&format!("/api/v2/users/{}/tickets/requested.json", user_id))
            .await?;
        Ok(out.tickets)
    }

    /// Lists the incidents linked to a problem ticket.
    pub async fn list_ticket_incidents(
        &self,
        problem_id: i64,
    ) -> Result<Vec<Ticket>, ZendeskError> {
        let out: Payload = self
            .get(&format!("/api/v2/tickets/{}/incidents.json", problem_id))
            .await?;
        Ok(out.tickets)
    }

    /// Moves a ticket to the deleted tickets view.
    pub async fn delete_ticket(&self, id: i64) -> Result<(), ZendeskError> {
        self.delete::<Payload>(&format!("/api/v2/tickets/{}.json", id))
            .await?;
        Ok(())
    }

    /// Permanently removes a deleted ticket and its attachments.
    ///
    /// The ticket must have been deleted with [`ZendeskClient::delete_ticket`]
    /// first. This cannot be undone.
    pub async fn permanently_delete_ticket(&self, id: i64) -> Result<JobStatus, ZendeskError> {
        let out: Payload = self
            .delete(&format!("/api/v2/deleted_tickets/{}.json", id))
            .await?;
        Ok(out.job_status.unwrap_or_default())
    }
}
