use serde::{Deserialize, Serialize};

/// Persistent key-value storage location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the JSON storage file. Empty uses the platform data directory.
    pub path: String,
}
