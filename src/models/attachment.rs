//! Attachment and upload models.
//!
//! Zendesk API docs: <https://developer.zendesk.com/api-reference/ticketing/tickets/ticket-attachments/>

use serde::{Deserialize, Serialize};

/// A file attached to a comment, or a user's photo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// Where the file can be downloaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,
}

/// A pending upload.
///
/// The token identifies the upload; pass it to further `upload_file` calls
/// to add more files, and list it in a comment's `uploads` to attach them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// The file added by this call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,

    /// Every file in the upload so far.
    #[serde(
        default,
        deserialize_with = "crate::models::optional::null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub attachments: Vec<Attachment>,
}
