use serde::{Deserialize, Serialize};

/// A mentee-submitted non-academic accomplishment record, as it travels
/// over the wire. The `type` field keeps its historical JSON name; in Rust
/// it is called `kind` to stay out of the keyword's way.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Store-assigned ULID, immutable after creation.
    pub id: String,
    pub mentee_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    /// Relative path of the uploaded proof document, when one was attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_path: Option<String>,
    /// Unix timestamp in milliseconds.
    pub created_at: u64,
}

/// Caller-provided fields of a new activity; everything the store assigns
/// itself (id, timestamps, pdf path) is absent here.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    pub mentee_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

/// Error body returned by the HTTP surface.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}
