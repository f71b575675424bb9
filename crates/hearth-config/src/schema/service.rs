use serde::{Deserialize, Serialize};

/// Where the chat service lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Scheme and authority, e.g. `http://127.0.0.1:5000`.
    pub base_url: String,
    /// Path of the chat endpoint, joined onto `base_url`.
    pub chat_path: String,
    /// TCP connect timeout in seconds (valid range: 1-120).
    ///
    /// No overall request timeout is applied.
    pub connect_timeout_secs: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".into(),
            chat_path: "/chat".into(),
            connect_timeout_secs: 10,
        }
    }
}

impl ServiceConfig {
    /// Full URL of the chat endpoint.
    pub fn chat_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.chat_path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
