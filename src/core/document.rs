//! Uploaded document records.
//!
//! A [`Document`] only describes a file picked in the browser; no file
//! content is retained anywhere.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Label shown when the browser reports no media type for a file.
pub const GENERIC_TYPE_LABEL: &str = "Документ";

/// Opaque, client-generated document identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Fresh random (v4) identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// File metadata as reported by the browser file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingFile {
    pub name: String,
    /// MIME type reported by the browser; often empty for unknown extensions.
    pub media_type: String,
}

impl IncomingFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    pub media_type: String,
    pub uploaded_at: DateTime<Utc>,
}

impl Document {
    pub fn from_incoming(file: IncomingFile, uploaded_at: DateTime<Utc>) -> Self {
        Self {
            id: DocumentId::generate(),
            name: file.name,
            media_type: file.media_type,
            uploaded_at,
        }
    }

    /// Media type for display, falling back to [`GENERIC_TYPE_LABEL`].
    pub fn type_label(&self) -> &str {
        if self.media_type.is_empty() {
            GENERIC_TYPE_LABEL
        } else {
            &self.media_type
        }
    }
}
