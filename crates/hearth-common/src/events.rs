//! View events emitted by a chat session.
//!
//! The session never touches a screen directly. Every visible change is
//! published on an [`EventBus`] and the active front end renders it.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{MessageEntry, Status};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SessionEvent {
    MessageAppended(MessageEntry),
    ScrolledToBottom,
    TypingChanged(bool),
    StatusChanged(Status),
    InputCleared,
    InputFocused,
}

pub struct EventBus {
    sender: broadcast::Sender<SessionEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of subscribers that received the event.
    pub fn publish(&self, event: SessionEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}
