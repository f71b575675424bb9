//! Append-only transcript.

use std::sync::{Arc, Mutex};

use hearth_common::{EventBus, MessageEntry, Role, SessionEvent};

/// Ordered, append-only list of displayed messages.
///
/// Every append is published and followed by a scroll to the newest entry.
/// Insertion order is display order.
pub struct Transcript {
    entries: Mutex<Vec<MessageEntry>>,
    bus: Arc<EventBus>,
}

impl Transcript {
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            bus,
        }
    }

    pub fn append(&self, text: impl Into<String>, role: Role) {
        let entry = MessageEntry::new(text, role);
        // Publish under the lock so concurrent appends reach subscribers in
        // the order they were stored. `publish` never blocks.
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.push(entry.clone());
        self.bus.publish(SessionEvent::MessageAppended(entry));
        self.scroll_to_bottom();
    }

    pub fn scroll_to_bottom(&self) {
        self.bus.publish(SessionEvent::ScrolledToBottom);
    }

    /// Snapshot of all entries in display order.
    pub fn entries(&self) -> Vec<MessageEntry> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_order() {
        let transcript = Transcript::new(Arc::new(EventBus::new(16)));
        transcript.append("one", Role::User);
        transcript.append("two", Role::Ai);
        transcript.append("three", Role::User);

        let texts: Vec<_> = transcript
            .entries()
            .iter()
            .map(|e| e.text().to_string())
            .collect();
        assert_eq!(texts, ["one", "two", "three"]);
        assert_eq!(transcript.len(), 3);
    }

    #[tokio::test]
    async fn every_append_scrolls() {
        let bus = Arc::new(EventBus::new(16));
        let mut rx = bus.subscribe();
        let transcript = Transcript::new(bus);

        transcript.append("hello", Role::User);

        assert_eq!(
            rx.recv().await.unwrap(),
            SessionEvent::MessageAppended(MessageEntry::user("hello"))
        );
        assert_eq!(rx.recv().await.unwrap(), SessionEvent::ScrolledToBottom);
    }

    #[test]
    fn concurrent_appends_publish_in_stored_order() {
        const THREADS: usize = 4;
        const PER_THREAD: usize = 2000;

        // Room for every event so nothing lags out of the receiver.
        let bus = Arc::new(EventBus::new(THREADS * PER_THREAD * 2));
        let mut rx = bus.subscribe();
        let transcript = Arc::new(Transcript::new(bus));

        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let transcript = Arc::clone(&transcript);
                std::thread::spawn(move || {
                    for i in 0..PER_THREAD {
                        transcript.append(format!("{t}-{i}"), Role::User);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut shown = Vec::new();
        while let Ok(event) = rx.try_recv() {
            if let SessionEvent::MessageAppended(entry) = event {
                shown.push(entry);
            }
        }
        assert_eq!(shown.len(), THREADS * PER_THREAD);
        assert_eq!(shown, transcript.entries());
    }

    #[test]
    fn new_transcript_is_empty() {
        let transcript = Transcript::new(Arc::new(EventBus::new(4)));
        assert!(transcript.is_empty());
    }
}
