//! HTTP chat service configuration.

use std::time::Duration;

/// Only the connect phase is bounded; the request itself waits as long as
/// the transport allows.
#[derive(Debug, Clone)]
pub struct HttpServiceConfig {
    /// Full URL of the chat endpoint.
    pub chat_url: String,
    pub connect_timeout: Duration,
}

impl HttpServiceConfig {
    pub fn new(chat_url: impl Into<String>) -> Self {
        Self {
            chat_url: chat_url.into(),
            connect_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}
