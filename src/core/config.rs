//! Presentation constants and mock-service settings.
//!
//! Every field has a default, so a partial (or empty) JSON object is a valid
//! config.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::session::LOGGED_IN_KEY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocflowConfig {
    /// Local-storage key of the durable login flag.
    pub session_key: String,
    /// Extensions offered by the file picker (`accept` attribute).
    pub accepted_extensions: Vec<String>,
    pub login_background_url: String,
    pub logo_url: String,
    /// Static image handed out by "download form".
    pub form_template_url: String,
    pub form_template_filename: String,
    /// Placeholder written to the clipboard by "copy link".
    pub share_link: String,
    /// Shown in the subscription dialog; never decremented.
    pub remaining_documents: u32,
    pub user_display_name: String,
    pub toast_timeout_ms: u32,
}

fn default_accepted_extensions() -> Vec<String> {
    [".pdf", ".doc", ".docx", ".txt"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for DocflowConfig {
    fn default() -> Self {
        Self {
            session_key: LOGGED_IN_KEY.to_string(),
            accepted_extensions: default_accepted_extensions(),
            login_background_url: "https://cdn.poehali.dev/projects/15e8d7ed-2cfe-4c80-8e2d-8aa4ca31fc13/files/cf9dfade-5061-4363-826b-3c0fc0e44bc1.jpg".to_string(),
            logo_url: "https://cdn.poehali.dev/files/c5fd7ec7-0659-498e-877f-d8d371e9af52.png"
                .to_string(),
            form_template_url: "assets/transport-order-template.svg".to_string(),
            form_template_filename: "transport-order-template.svg".to_string(),
            share_link: "https://example.com/docflow/transport-order".to_string(),
            remaining_documents: 10,
            user_display_name: "Иван Иванов".to_string(),
            toast_timeout_ms: 4000,
        }
    }
}

impl DocflowConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Value for the file input's `accept` attribute.
    pub fn accept_attr(&self) -> String {
        self.accepted_extensions.join(",")
    }
}
