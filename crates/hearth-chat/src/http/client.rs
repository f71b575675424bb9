//! HTTP client struct and response interpretation.

use reqwest::StatusCode;

use crate::{ChatError, ChatReply, ErrorBody};

use super::config::HttpServiceConfig;

/// Message logged when a failed response carries no `error` field.
const UNKNOWN_SERVICE_ERROR: &str = "Something went wrong";

/// Chat service reached over HTTP.
pub struct HttpChatService {
    pub(crate) config: HttpServiceConfig,
    pub(crate) http: reqwest::Client,
}

impl HttpChatService {
    pub fn new(config: HttpServiceConfig) -> Result<Self, ChatError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| ChatError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn chat_url(&self) -> &str {
        &self.config.chat_url
    }

    /// Turn a status and raw body into a reply or an error.
    ///
    /// Failed statuses report the body's `error` field when present. A
    /// successful status still fails if the body is not JSON with a string
    /// `reply`.
    pub(crate) fn interpret(status: StatusCode, body: &str) -> Result<ChatReply, ChatError> {
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| {
                    let snippet: String = body.chars().take(200).collect();
                    if snippet.trim().is_empty() {
                        UNKNOWN_SERVICE_ERROR.to_string()
                    } else {
                        snippet
                    }
                });
            return Err(ChatError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str::<ChatReply>(body).map_err(|e| ChatError::Parse(e.to_string()))
    }
}
