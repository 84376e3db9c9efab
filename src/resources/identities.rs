//! User identity operations.
//!
//! Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/users/user_identities/>

use crate::client::ZendeskClient;
use crate::error::ZendeskError;
use crate::models::{Payload, UserIdentity};

impl ZendeskClient {
    pub async fn list_identities(&self, user_id: i64) -> Result<Vec<UserIdentity>, ZendeskError> {
        let out: Payload = self
            .get(&format!("/api/v2/users/{}/identities.json", user_id))
            .await?;
        Ok(out.identities)
    }

    pub async fn show_identity(
        &self,
        user_id: i64,
        id: i64,
    ) -> Result<UserIdentity, ZendeskError> {
        let out: Payload = self
            .get(&format!("/api/v2/users/{}/identities/{}.json", user_id, id))
            .await?;
        Ok(out.identity.unwrap_or_default())
    }

    pub async fn create_identity(
        &self,
        user_id: i64,
        identity: &UserIdentity,
    ) -> Result<UserIdentity, ZendeskError> {
        let input = Payload {
            identity: Some(identity.clone()),
            ..Default::default()
        };
        let out: Payload = self
            .post(&format!("/api/v2/users/{}/identities.json", user_id), &input)
            .await?;
        Ok(out.identity.unwrap_or_default())
    }

    pub async fn update_identity(
        &self,
        user_id: i64,
        id: i64,
        identity: &UserIdentity,
    ) -> Result<UserIdentity, ZendeskError> {
        let input = Payload {
            identity: Some(identity.clone()),
            ..Default::default()
        };
        let out: Payload = self
            .put(
                &format!("/api/v2/users/{}/identities/{}.json", user_id, id),
                &input,
            )
            .await?;
        Ok(out.identity.unwrap_or_default())
    }

    /// Makes an identity the user's primary one and returns all of the
    /// user's identities.
    ///
    /// Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/users/user_identities/#make-identity-primary>
    pub async fn make_identity_primary(
        &self,
        user_id: i64,
        id: i64,
    ) -> Result<Vec<UserIdentity>, ZendeskError> {
        let out: Payload = self
            .execute::<(), Payload>(
                reqwest::Method::PUT,
                &format!(
                    "/api/v2/users/{}/identities/{}/make_primary.json",
                    user_id, id
                ),
                None,
            )
            .await?;
        Ok(out.identities)
    }

    pub async fn delete_identity(&self, user_id: i64, id: i64) -> Result<(), ZendeskError> {
        self.delete::<Payload>(&format!("/api/v2/users/{}/identities/{}.json", user_id, id))
            .await?;
        Ok(())
    }
}
