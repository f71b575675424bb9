//! Line-oriented terminal front end.
//!
//! The renderer prints session events to stdout. The input loop feeds stdin
//! through the composer: a line ending in `\` continues the message on the
//! next line (Shift+Enter), any other line submits it (Enter).

use std::io::Write;

use hearth_chat::{Exchange, Session, Submission};
use hearth_common::{HearthError, MessageEntry, Role, SessionEvent, Status};
use hearth_platform::{Composer, ComposerAction, Key, Modifiers};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Width of the speaker column, including the separator.
const GUTTER: usize = 6;

/// Writes session events as transcript lines.
pub struct Renderer<W: Write> {
    out: W,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn handle(&mut self, event: &SessionEvent) -> std::io::Result<()> {
        match event {
            SessionEvent::MessageAppended(entry) => self.write_entry(entry),
            SessionEvent::TypingChanged(true) => writeln!(self.out, "{:GUTTER$}...", ""),
            SessionEvent::StatusChanged(status) => self.write_status(*status),
            SessionEvent::ScrolledToBottom => self.out.flush(),
            SessionEvent::TypingChanged(false)
            | SessionEvent::InputCleared
            | SessionEvent::InputFocused => Ok(()),
        }
    }

    fn write_entry(&mut self, entry: &MessageEntry) -> std::io::Result<()> {
        let speaker = match entry.role() {
            Role::User => "you",
            Role::Ai => "ai",
        };
        let mut lines = entry.text().split('\n');
        let first = lines.next().unwrap_or_default();
        writeln!(self.out, "{:<width$}> {first}", speaker, width = GUTTER - 2)?;
        for line in lines {
            writeln!(self.out, "{:GUTTER$}{line}", "")?;
        }
        Ok(())
    }

    fn write_status(&mut self, status: Status) -> std::io::Result<()> {
        writeln!(self.out, "[{status}]")
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Keys produced by one line of terminal input.
pub fn line_keys(line: &str) -> Vec<(Key, Modifiers)> {
    let (text, enter) = match line.strip_suffix('\\') {
        Some(text) => (text, Modifiers::SHIFT),
        None => (line, Modifiers::NONE),
    };
    text.chars()
        .map(|c| (Key::Char(c), Modifiers::NONE))
        .chain(std::iter::once((Key::Enter, enter)))
        .collect()
}

/// Drive the session from stdin until EOF or Ctrl+C.
pub async fn run(session: Session) -> Result<(), HearthError> {
    let renderer = tokio::spawn(render_events(session.subscribe()));
    session.start();

    let result = input_loop(&session).await;

    // The event channel closes once the last session handle is gone.
    drop(session);
    if let Err(e) = renderer.await {
        warn!(error = %e, "renderer task failed");
    }
    result
}

async fn render_events(mut events: broadcast::Receiver<SessionEvent>) {
    let mut renderer = Renderer::new(std::io::stdout());
    loop {
        match events.recv().await {
            Ok(event) => {
                if let Err(e) = renderer.handle(&event) {
                    warn!(error = %e, "failed to write to stdout");
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                warn!(skipped, "renderer fell behind, events dropped");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

/// Feed one line of input through the composer and submit whatever it
/// produces. Returns the exchanges that were started.
///
/// A refused (busy) message is dropped from the composer so the next line
/// starts fresh; the user re-types it once the reply has landed.
pub fn handle_line(session: &Session, composer: &mut Composer, line: &str) -> Vec<Exchange> {
    let mut started = Vec::new();
    for (key, mods) in line_keys(line) {
        let ComposerAction::Submit(text) = composer.process_key(key, mods) else {
            continue;
        };
        match session.submit(&text) {
            Submission::Started(exchange) => {
                composer.clear();
                started.push(exchange);
            }
            Submission::Busy => {
                composer.clear();
                eprintln!("(still waiting for a reply; message not sent)");
            }
            Submission::Ignored => {}
        }
    }
    started
}

async fn input_loop(session: &Session) -> Result<(), HearthError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut composer = Composer::new();
    let mut exchanges = JoinSet::new();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => {
                    for exchange in handle_line(session, &mut composer, &line) {
                        exchanges.spawn(exchange.settle());
                    }
                }
                None => break,
            },
            Some(joined) = exchanges.join_next(), if !exchanges.is_empty() => {
                if let Err(e) = joined {
                    warn!(error = %e, "exchange task failed");
                }
            }
            _ = &mut ctrl_c => {
                info!("Interrupted");
                exchanges.shutdown().await;
                return Ok(());
            }
        }
    }

    debug!(pending = exchanges.len(), "input closed, waiting for replies");
    while let Some(joined) = exchanges.join_next().await {
        if let Err(e) = joined {
            warn!(error = %e, "exchange task failed");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hearth_chat::{HttpChatService, HttpServiceConfig, SessionOptions};
    use hearth_common::ClientIdentity;

    use super::*;

    /// Session whose exchanges are never settled, so no request goes out.
    fn serialized_session() -> Session {
        let service =
            HttpChatService::new(HttpServiceConfig::new("http://127.0.0.1:9/chat")).unwrap();
        Session::new(
            ClientIdentity::generate(),
            Arc::new(service),
            SessionOptions::default().with_serialized_exchanges(true),
        )
    }

    fn render(events: &[SessionEvent]) -> String {
        let mut renderer = Renderer::new(Vec::new());
        for event in events {
            renderer.handle(event).unwrap();
        }
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn renders_exchange() {
        let out = render(&[
            SessionEvent::MessageAppended(MessageEntry::user("hello")),
            SessionEvent::ScrolledToBottom,
            SessionEvent::InputCleared,
            SessionEvent::InputFocused,
            SessionEvent::TypingChanged(true),
            SessionEvent::StatusChanged(Status::Typing),
            SessionEvent::MessageAppended(MessageEntry::ai("hi there")),
            SessionEvent::TypingChanged(false),
            SessionEvent::StatusChanged(Status::Online),
        ]);
        assert_eq!(
            out,
            "you > hello\n      ...\n[typing...]\nai  > hi there\n[online]\n"
        );
    }

    #[test]
    fn multi_line_messages_are_indented() {
        let out = render(&[SessionEvent::MessageAppended(MessageEntry::user(
            "line one\nline two",
        ))]);
        assert_eq!(out, "you > line one\n      line two\n");
    }

    #[test]
    fn plain_line_submits() {
        let keys = line_keys("hi");
        assert_eq!(
            keys,
            vec![
                (Key::Char('h'), Modifiers::NONE),
                (Key::Char('i'), Modifiers::NONE),
                (Key::Enter, Modifiers::NONE),
            ]
        );
    }

    #[test]
    fn trailing_backslash_is_shift_enter() {
        let mut composer = Composer::new();
        let mut submitted = None;
        for line in ["first\\", "second"] {
            for (key, mods) in line_keys(line) {
                if let ComposerAction::Submit(text) = composer.process_key(key, mods) {
                    submitted = Some(text);
                }
            }
        }
        assert_eq!(submitted.as_deref(), Some("first\nsecond"));
    }

    #[test]
    fn line_submits_and_clears_composer() {
        let session = serialized_session();
        let mut composer = Composer::new();

        let started = handle_line(&session, &mut composer, "hello");
        assert_eq!(started.len(), 1);
        assert_eq!(started[0].message(), "hello");
        assert!(composer.is_empty());
    }

    #[test]
    fn busy_message_does_not_leak_into_next_line() {
        let session = serialized_session();
        let mut composer = Composer::new();

        let pending = handle_line(&session, &mut composer, "first");
        assert_eq!(pending.len(), 1);

        assert!(handle_line(&session, &mut composer, "second").is_empty());
        assert!(composer.is_empty());
        assert_eq!(session.transcript(), vec![MessageEntry::user("first")]);

        drop(pending);
        let next = handle_line(&session, &mut composer, "third");
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].message(), "third");
    }

    #[test]
    fn continued_line_waits_for_enter() {
        let session = serialized_session();
        let mut composer = Composer::new();

        assert!(handle_line(&session, &mut composer, "first\\").is_empty());
        assert!(session.transcript().is_empty());

        let started = handle_line(&session, &mut composer, "second");
        assert_eq!(started[0].message(), "first\nsecond");
    }
}
