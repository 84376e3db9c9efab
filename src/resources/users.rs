//! User operations.
//!
//! Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/users/users/>

use crate::client::ZendeskClient;
use crate::error::ZendeskError;
use crate::models::{join_ids, ComplianceDeletionStatus, ListUsersOptions, Payload, Query, User};

impl ZendeskClient {
    /// Fetches a user by ID.
    pub async fn show_user(&self, id: i64) -> Result<User, ZendeskError> {
        let out: Payload = self.get(&format!("/api/v2/users/{}.json", id)).await?;
        Ok(out.user.unwrap_or_default())
    }

    /// Fetches up to 100 users by ID.
    pub async fn show_many_users(&self, ids: &[i64]) -> Result<Vec<User>, ZendeskError> {
        let mut query = Query::new();
        query.push("ids", join_ids(ids));

        let out: Payload = self
            .get(&query.to_endpoint("/api/v2/users/show_many.json"))
            .await?;
        Ok(out.users)
    }

    /// Fetches up to 100 users by external ID.
    pub async fn show_many_users_by_external_ids(
        &self,
        external_ids: &[&str],
    ) -> Result<Vec<User>, ZendeskError> {
        let mut query = Query::new();
        query.push("external_ids", external_ids.join(","));

        let out: Payload = self
            .get(&query.to_endpoint("/api/v2/users/show_many.json"))
            .await?;
        Ok(out.users)
    }

    pub async fn create_user(&self, user: &User) -> Result<User, ZendeskError> {
        let input = Payload {
            user: Some(user.clone()),
            ..Default::default()
        };
        let out: Payload = self.post("/api/v2/users.json", &input).await?;
        Ok(out.user.unwrap_or_default())
    }

    /// Creates a user, or updates the one matching its email or external ID.
    ///
    /// Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/users/users/#create-or-update-user>
    pub async fn create_or_update_user(&self, user: &User) -> Result<User, ZendeskError> {
        let input = Payload {
            user: Some(user.clone()),
            ..Default::default()
        };
        let out: Payload = self
            .post("/api/v2/users/create_or_update.json", &input)
            .await?;
        Ok(out.user.unwrap_or_default())
    }

    /// Updates a user. Only the fields set on `user` are sent.
    pub async fn update_user(&self, id: i64, user: &User) -> Result<User, ZendeskError> {
        let input = Payload {
            user: Some(user.clone()),
            ..Default::default()
        };
        let out: Payload = self
            .put(&format!("/api/v2/users/{}.json", id), &input)
            .await?;
        Ok(out.user.unwrap_or_default())
    }

    /// Soft-deletes a user and returns it with `active: false`.
    pub async fn delete_user(&self, id: i64) -> Result<User, ZendeskError> {
        let out: Payload = self.delete(&format!("/api/v2/users/{}.json", id)).await?;
        Ok(out.user.unwrap_or_default())
    }

    /// Permanently deletes a soft-deleted user (GDPR erasure).
    ///
    /// Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/users/users/#permanently-delete-user>
    pub async fn permanently_delete_user(&self, id: i64) -> Result<User, ZendeskError> {
        let out: Payload = self
            .delete(&format!("/api/v2/deleted_users/{}.json", id))
            .await?;
        Ok(out.user.unwrap_or_default())
    }

    /// Lists users, filtered by role or permission set.
    pub async fn list_users(&self, options: &ListUsersOptions) -> Result<Vec<User>, ZendeskError> {
        let mut query = Query::new();
        options.apply(&mut query);

        let out: Payload = self.get(&query.to_endpoint("/api/v2/users.json")).await?;
        Ok(out.users)
    }

    /// Lists the users of an organization.
    pub async fn list_organization_users(
        &self,
        organization_id: i64,
        options: &ListUsersOptions,
    ) -> Result<Vec<User>, ZendeskError> {
        let mut query = Query::new();
        options.apply(&mut query);

        let path = format!("/api/v2/organizations/{}/users.json", organization_id);
        let out: Payload = self.get(&query.to_endpoint(&path)).await?;
        Ok(out.users)
    }

    /// Searches users by name or email address.
    pub async fn search_users(&self, query_text: &str) -> Result<Vec<User>, ZendeskError> {
        let mut query = Query::new();
        query.push("query", query_text);

        let out: Payload = self
            .get(&query.to_endpoint("/api/v2/users/search.json"))
            .await?;
        Ok(out.users)
    }

    /// Looks up a user by external ID.
    ///
    /// Returns `None` unless exactly one user matches.
    pub async fn search_user_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<User>, ZendeskError> {
        let mut query = Query::new();
        query.push("external_id", external_id);

        let out: Payload = self
            .get(&query.to_endpoint("/api/v2/users/search.json"))
            .await?;

        let mut users = out.users;
        if users.len() == 1 {
            Ok(users.pop())
        } else {
            Ok(None)
        }
    }

    /// Adds tags to a user and returns the user's full tag list.
    ///
    /// Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/ticket-management/tags/#add-tags>
    pub async fn add_user_tags(&self, id: i64, tags: &[&str]) -> Result<Vec<String>, ZendeskError> {
        let input = Payload {
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        };
        let out: Payload = self
            .put(&format!("/api/v2/users/{}/tags.json", id), &input)
            .await?;
        Ok(out.tags)
    }

    /// Shows the GDPR deletion progress for a user across Zendesk products.
    pub async fn show_compliance_deletion_statuses(
        &self,
        id: i64,
    ) -> Result<Vec<ComplianceDeletionStatus>, ZendeskError> {
        let out: Payload = self
            .get(&format!(
                "/api/v2/users/{}/compliance_deletion_statuses.json",
                id
            ))
            .await?;
        Ok(out.compliance_deletion_statuses)
    }
}
