//! Session struct, options and presence state.

use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use hearth_common::{ClientIdentity, EventBus, MessageEntry, Role, SessionEvent, Status};
use tokio::sync::broadcast;
use tracing::info;

use crate::pacing::Pacing;
use crate::transcript::Transcript;
use crate::ChatService;

/// Tunables for a [`Session`].
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub pacing: Pacing,
    /// AI-role line appended by [`Session::start`].
    pub greeting: Option<String>,
    /// Refuse submissions while an exchange is pending.
    pub serialize_exchanges: bool,
    /// Buffered events per subscriber before it starts lagging.
    pub event_capacity: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            pacing: Pacing::default(),
            greeting: None,
            serialize_exchanges: false,
            event_capacity: 256,
        }
    }
}

impl SessionOptions {
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        let greeting = greeting.into();
        self.greeting = (!greeting.is_empty()).then_some(greeting);
        self
    }

    pub fn with_serialized_exchanges(mut self, serialize: bool) -> Self {
        self.serialize_exchanges = serialize;
        self
    }
}

#[derive(Debug, Default)]
pub(super) struct Presence {
    pub(super) typing: bool,
    pub(super) status: Status,
}

pub(super) struct SessionInner {
    pub(super) identity: ClientIdentity,
    pub(super) service: Arc<dyn ChatService>,
    pub(super) options: SessionOptions,
    pub(super) bus: Arc<EventBus>,
    pub(super) transcript: Transcript,
    pub(super) presence: Mutex<Presence>,
    /// Held by the pending exchange when exchanges are serialized.
    pub(super) busy: AtomicBool,
}

impl SessionInner {
    pub(super) fn set_typing(&self, typing: bool) {
        self.presence().typing = typing;
        self.bus.publish(SessionEvent::TypingChanged(typing));
        if typing {
            self.transcript.scroll_to_bottom();
        }
    }

    pub(super) fn set_status(&self, status: Status) {
        self.presence().status = status;
        self.bus.publish(SessionEvent::StatusChanged(status));
    }

    fn presence(&self) -> std::sync::MutexGuard<'_, Presence> {
        self.presence.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// A chat session. Cheap to clone; clones share all state.
#[derive(Clone)]
pub struct Session {
    pub(super) inner: Arc<SessionInner>,
}

impl Session {
    pub fn new(
        identity: ClientIdentity,
        service: Arc<dyn ChatService>,
        options: SessionOptions,
    ) -> Self {
        let bus = Arc::new(EventBus::new(options.event_capacity));
        Self {
            inner: Arc::new(SessionInner {
                identity,
                service,
                transcript: Transcript::new(Arc::clone(&bus)),
                bus,
                options,
                presence: Mutex::new(Presence::default()),
                busy: AtomicBool::new(false),
            }),
        }
    }

    /// Subscribe to view events. Subscribe before [`start`](Self::start) to
    /// see the greeting.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.bus.subscribe()
    }

    /// Publish the initial presence and append the greeting, if any.
    pub fn start(&self) {
        info!(client_id = %self.inner.identity, "session started");
        self.inner.set_status(Status::Online);
        if let Some(ref greeting) = self.inner.options.greeting {
            self.inner.transcript.append(greeting.clone(), Role::Ai);
        }
    }

    pub fn identity(&self) -> &ClientIdentity {
        &self.inner.identity
    }

    /// Snapshot of the transcript in display order.
    pub fn transcript(&self) -> Vec<MessageEntry> {
        self.inner.transcript.entries()
    }

    pub fn status(&self) -> Status {
        self.inner.presence().status
    }

    pub fn is_typing(&self) -> bool {
        self.inner.presence().typing
    }
}
