//! Attachment and upload operations.
//!
//! Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/tickets/ticket-attachments/>

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Body, Method};

use crate::client::ZendeskClient;
use crate::error::ZendeskError;
use crate::models::{Attachment, Payload, Query, Upload};

/// Content type Zendesk expects for raw uploads.
const UPLOAD_CONTENT_TYPE: &str = "application/binary";

impl ZendeskClient {
    pub async fn show_attachment(&self, id: i64) -> Result<Attachment, ZendeskError> {
        let out: Payload = self
            .get(&format!("/api/v2/attachments/{}.json", id))
            .await?;
        Ok(out.attachment.unwrap_or_default())
    }

    /// Uploads a file for attaching to a ticket comment.
    ///
    /// Pass the token from a previous upload to add more files to it. The
    /// returned token goes in `TicketComment::uploads`.
    ///
    /// `content` is sent as the raw request body. In-memory bodies
    /// (`Vec<u8>`, `Bytes`, `String`) are replayed on a rate-limit retry;
    /// streaming bodies are not.
    pub async fn upload_file(
        &self,
        filename: &str,
        token: Option<&str>,
        content: impl Into<Body>,
    ) -> Result<Upload, ZendeskError> {
        let mut query = Query::new();
        query.push("filename", filename);
        if let Some(token) = token {
            query.push("token", token);
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(UPLOAD_CONTENT_TYPE));

        let out: Payload = self
            .exchange(
                Method::POST,
                &query.to_endpoint("/api/v2/uploads.json"),
                &headers,
                Some(content.into()),
            )
            .await?;
        Ok(out.upload.unwrap_or_default())
    }
}
