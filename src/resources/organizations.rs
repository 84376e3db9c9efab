//! Organization operations.
//!
//! Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/organizations/organizations/>

use crate::client::ZendeskClient;
use crate::error::ZendeskError;
use crate::models::{join_ids, ListOptions, Organization, Payload, Query};

impl ZendeskClient {
    pub async fn show_organization(&self, id: i64) -> Result<Organization, ZendeskError> {
        let out: Payload = self
            .get(&format!("/api/v2/organizations/{}.json", id))
            .await?;
        Ok(out.organization.unwrap_or_default())
    }

    /// Fetches up to 100 organizations by ID.
    pub async fn show_many_organizations(
        &self,
        ids: &[i64],
    ) -> Result<Vec<Organization>, ZendeskError> {
        let mut query = Query::new();
        query.push("ids", join_ids(ids));

        let out: Payload = self
            .get(&query.to_endpoint("/api/v2/organizations/show_many.json"))
            .await?;
        Ok(out.organizations)
    }

    pub async fn create_organization(
        &self,
        organization: &Organization,
    ) -> Result<Organization, ZendeskError> {
        let input = Payload {
            organization: Some(organization.clone()),
            ..Default::default()
        };
        let out: Payload = self.post("/api/v2/organizations.json", &input).await?;
        Ok(out.organization.unwrap_or_default())
    }

    /// Creates an organization, or updates the one matching its ID or
    /// external ID.
    pub async fn create_or_update_organization(
        &self,
        organization: &Organization,
    ) -> Result<Organization, ZendeskError> {
        let input = Payload {
            organization: Some(organization.clone()),
            ..Default::default()
        };
        let out: Payload = self
            .post("/api/v2/organizations/create_or_update.json", &input)
            .await?;
        Ok(out.organization.unwrap_or_default())
    }

    /// Updates an organization. Only the fields set on `organization` are sent.
    pub async fn update_organization(
        &self,
        id: i64,
        organization: &Organization,
    ) -> Result<Organization, ZendeskError> {
        let input = Payload {
            organization: Some(organization.clone()),
            ..Default::default()
        };
        let out: Payload = self
            .put(&format!("/api/v2/organizations/{}.json", id), &input)
            .await?;
        Ok(out.organization.unwrap_or_default())
    }

    pub async fn list_organizations(
        &self,
        options: &ListOptions,
    ) -> Result<Vec<Organization>, ZendeskError> {
        let mut query = Query::new();
        options.apply(&mut query);

        let out: Payload = self
            .get(&query.to_endpoint("/api/v2/organizations.json"))
            .await?;
        Ok(out.organizations)
    }

    pub async fn delete_organization(&self, id: i64) -> Result<(), ZendeskError> {
        self.delete::<Payload>(&format!("/api/v2/organizations/{}.json", id))
            .await?;
        Ok(())
    }

    /// Lists organizations whose name starts with `name` (case-insensitive).
    ///
    /// Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/organizations/organizations/#autocomplete-organizations>
    pub async fn autocomplete_organizations(
        &self,
        name: &str,
    ) -> Result<Vec<Organization>, ZendeskError> {
        let mut query = Query::new();
        query.push("name", name);

        let out: Payload = self
            .get(&query.to_endpoint("/api/v2/organizations/autocomplete.json"))
            .await?;
        Ok(out.organizations)
    }

    pub async fn search_organizations_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Vec<Organization>, ZendeskError> {
        let mut query = Query::new();
        query.push("external_id", external_id);

        let out: Payload = self
            .get(&query.to_endpoint("/api/v2/organizations/search.json"))
            .await?;
        Ok(out.organizations)
    }
}
