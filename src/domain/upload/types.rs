use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage coordinates of a completed transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub bucket: String,
    pub key: String,
    pub etag: String,
}

impl UploadResult {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>, etag: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            etag: etag.into(),
        }
    }

    /// Form fields posted to the backend, in posting order.
    pub fn form_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("bucket", self.bucket.as_str()),
            ("key", self.key.as_str()),
            ("etag", self.etag.as_str()),
        ]
    }
}

/// Presentation state of one upload item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileVisualState {
    Pending,
    Success,
    Error,
}

impl FileVisualState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, FileVisualState::Pending)
    }

    /// Only `Pending` moves, and only to a terminal state.
    pub fn can_transition_to(self, next: FileVisualState) -> bool {
        matches!(
            (self, next),
            (FileVisualState::Pending, FileVisualState::Success | FileVisualState::Error)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FileVisualState::Pending => "pending",
            FileVisualState::Success => "success",
            FileVisualState::Error => "error",
        }
    }
}

impl fmt::Display for FileVisualState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A backend response that completed, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..400).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub result: UploadResult,
    pub status: u16,
}
