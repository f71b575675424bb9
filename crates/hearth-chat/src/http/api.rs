//! ChatService trait implementation for HttpChatService.

use async_trait::async_trait;
use tracing::debug;

use crate::{ChatError, ChatReply, ChatRequest, ChatService};

use super::client::HttpChatService;

#[async_trait]
impl ChatService for HttpChatService {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
        debug!(url = %self.config.chat_url, client_id = %request.client_id, "chat request");

        let response = self
            .http
            .post(&self.config.chat_url)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        debug!(%status, bytes = body.len(), "chat response");
        Self::interpret(status, &body)
    }
}
