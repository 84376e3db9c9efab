//! Locale operations.
//!
//! Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/account-configuration/locales/>

use super::segment;
use crate::client::ZendeskClient;
use crate::error::ZendeskError;
use crate::models::{Locale, Payload};

impl ZendeskClient {
    /// Lists the locales available to the account.
    pub async fn list_locales(&self) -> Result<Vec<Locale>, ZendeskError> {
        let out: Payload = self.get("/api/v2/locales.json").await?;
        Ok(out.locales)
    }

    pub async fn show_locale(&self, id: i64) -> Result<Locale, ZendeskError> {
        let out: Payload = self.get(&format!("/api/v2/locales/{}.json", id)).await?;
        Ok(out.locale.unwrap_or_default())
    }

    /// Fetches a locale by its code, e.g. `en-US`.
    pub async fn show_locale_by_code(&self, code: &str) -> Result<Locale, ZendeskError> {
        let out: Payload = self
            .get(&format!("/api/v2/locales/{}.json", segment(code)))
            .await?;
        Ok(out.locale.unwrap_or_default())
    }
}
