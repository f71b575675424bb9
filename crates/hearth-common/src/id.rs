use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix every generated client identity carries.
pub const CLIENT_ID_PREFIX: &str = "user_";

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Opaque per-install correlation token sent with every chat request.
///
/// Generated once as `user_<uuid-v4>` and persisted indefinitely. The client
/// never interprets it; values read back from storage are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientIdentity(String);

impl ClientIdentity {
    pub fn generate() -> Self {
        Self(format!("{CLIENT_ID_PREFIX}{}", new_id()))
    }

    /// Wrap a token previously read from storage.
    pub fn from_stored(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the token has the `user_<uuid>` shape produced by [`generate`](Self::generate).
    pub fn is_generated_shape(&self) -> bool {
        self.0
            .strip_prefix(CLIENT_ID_PREFIX)
            .is_some_and(|rest| uuid::Uuid::parse_str(rest).is_ok())
    }
}

impl fmt::Display for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
