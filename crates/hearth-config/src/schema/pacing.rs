use serde::{Deserialize, Serialize};

/// Artificial typing delay inserted before a successful reply is shown.
///
/// `delay = min(max_ms, base_ms + per_char_ms * reply_length)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    pub base_ms: u32,
    pub per_char_ms: u32,
    pub max_ms: u32,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            base_ms: 350,
            per_char_ms: 12,
            max_ms: 1800,
        }
    }
}
