use reqwest::header::HeaderMap;
use reqwest::Method;

use crate::client::ZendeskClient;
use crate::error::ZendeskError;

impl ZendeskClient {
    /// Fetches an app's public key (PEM) for verifying the JWTs it signs.
    ///
    /// Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/apps/apps/#get-app-public-key>
    pub async fn show_app_public_key(&self, app_id: i64) -> Result<String, ZendeskError> {
        let response = self
            .send_checked(
                Method::GET,
                &format!("/api/v2/apps/{}/public_key.pem", app_id),
                &HeaderMap::new(),
                None,
            )
            .await?;

        response.text().await.map_err(ZendeskError::Http)
    }
}
