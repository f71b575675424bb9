use serde::{Deserialize, Serialize};

/// Opening line shown when a session starts.
pub const DEFAULT_GREETING: &str = "Hey... I missed you thoda sa. How was your day? 💜";

/// Chat session behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// AI-role line appended on start. Empty disables it.
    pub greeting: String,
    /// Refuse new submissions while a reply is still pending.
    pub serialize_exchanges: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.into(),
            serialize_exchanges: false,
        }
    }
}
