//! Messages a tool streams back to the host.

use bytes::Bytes;
use futures::Stream;
use serde::Serialize;
use std::path::PathBuf;
use std::pin::Pin;

/// A finite, single-use stream of tool messages.
pub type MessageStream = Pin<Box<dyn Stream<Item = ToolMessage> + Send>>;

/// One unit of a tool's streamed response.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolMessage {
    /// Human-readable status line.
    Text(String),
    /// Binary payload with its metadata.
    Blob { blob: Bytes, meta: BlobMeta },
}

impl ToolMessage {
    pub fn text(text: impl Into<String>) -> Self {
        ToolMessage::Text(text.into())
    }

    pub fn blob(blob: Bytes, meta: BlobMeta) -> Self {
        ToolMessage::Blob { blob, meta }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ToolMessage::Text(t) => Some(t),
            ToolMessage::Blob { .. } => None,
        }
    }

    pub fn is_blob(&self) -> bool {
        matches!(self, ToolMessage::Blob { .. })
    }
}

/// Metadata attached to a blob message.
///
/// Serializes as a map; optional keys are omitted when unset so the host sees
/// only `{mime_type}` for audio that was not written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlobMeta {
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

impl BlobMeta {
    pub fn new(mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            filename: None,
            local_path: None,
            file_size: None,
        }
    }

    /// Record where the payload was saved.
    pub fn saved_as(mut self, filename: impl Into<String>, local_path: PathBuf, file_size: u64) -> Self {
        self.filename = Some(filename.into());
        self.local_path = Some(local_path);
        self.file_size = Some(file_size);
        self
    }

    /// Metadata as the JSON map handed to the host.
    pub fn to_map(&self) -> serde_json::Map<String, serde_json::Value> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        }
    }
}
