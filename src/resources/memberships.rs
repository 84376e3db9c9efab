//! Organization membership operations.
//!
//! Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/organizations/organization_memberships/>

use crate::client::ZendeskClient;
use crate::error::ZendeskError;
use crate::models::{OrganizationMembership, Payload};

impl ZendeskClient {
    /// Adds a user to an organization.
    ///
    /// Creating a membership that already exists succeeds and returns the
    /// existing membership.
    pub async fn create_organization_membership(
        &self,
        membership: &OrganizationMembership,
    ) -> Result<OrganizationMembership, ZendeskError> {
        let input = Payload {
            organization_membership: Some(membership.clone()),
            ..Default::default()
        };
        let out: Payload = self
            .post("/api/v2/organization_memberships.json", &input)
            .await?;
        Ok(out.organization_membership.unwrap_or_default())
    }

    pub async fn list_organization_memberships_by_user_id(
        &self,
        user_id: i64,
    ) -> Result<Vec<OrganizationMembership>, ZendeskError> {
        let out: Payload = self
            .get(&format!(
                "/api/v2/users/{}/organization_memberships.json",
                user_id
            ))
            .await?;
        Ok(out.organization_memberships)
    }

    pub async fn list_organization_memberships_by_organization_id(
        &self,
        organization_id: i64,
    ) -> Result<Vec<OrganizationMembership>, ZendeskError> {
        let out: Payload = self
            .get(&format!(
                "/api/v2/organizations/{}/organization_memberships.json",
                organization_id
            ))
            .await?;
        Ok(out.organization_memberships)
    }

    pub async fn delete_organization_membership(&self, id: i64) -> Result<(), ZendeskError> {
        self.delete::<Payload>(&format!("/api/v2/organization_memberships/{}.json", id))
            .await?;
        Ok(())
    }
}
