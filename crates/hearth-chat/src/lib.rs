//! Chat engine for Hearth.
//!
//! Provides:
//! - the [`ChatService`] seam and its HTTP implementation
//! - the persisted client identity
//! - the append-only transcript
//! - reply pacing
//! - the [`Session`] controller that runs one exchange per submission

pub mod http;
pub mod identity;
pub mod pacing;
pub mod session;
pub mod transcript;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use http::{HttpChatService, HttpServiceConfig};
pub use identity::{get_or_create_client_id, reset_client_id, CLIENT_ID_KEY};
pub use pacing::Pacing;
pub use session::{
    Exchange, ExchangeOutcome, SendResult, Session, SessionOptions, Submission, FALLBACK_REPLY,
};
pub use transcript::Transcript;

/// The remote service that produces replies.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Send one message and wait for its reply. Exactly one request per call.
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ChatError>;
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub client_id: String,
}

/// Successful response body. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Error response body. Only used for diagnostics.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("network error: {0}")]
    Network(String),
    #[error("service error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
    #[error("parse error: {0}")]
    Parse(String),
}
