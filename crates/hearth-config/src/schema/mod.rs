//! Configuration schema types for Hearth.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod pacing;
mod service;
mod session;
mod storage;
mod system;

pub use pacing::*;
pub use service::*;
pub use session::*;
pub use storage::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Hearth.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HearthConfig {
    pub service: ServiceConfig,
    pub pacing: PacingConfig,
    pub session: SessionConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}
