//! One submit → reply (or fallback) cycle.

use std::sync::Arc;

use hearth_common::{Role, SessionEvent};
use tracing::{debug, error};

use crate::{ChatError, ChatRequest};

use super::guards::{BusyGuard, TypingGuard};
use super::manager::{Session, SessionInner};

/// Shown in place of a reply whenever an exchange fails.
pub const FALLBACK_REPLY: &str = "Hmm... network ne mood kharab kar diya 😅 try again?";

/// How an exchange ended.
#[derive(Debug)]
pub enum ExchangeOutcome {
    /// The reply text, appended after the pacing delay.
    Delivered(String),
    /// The cause of a failure. Only logged; the transcript gets [`FALLBACK_REPLY`].
    Failed(ChatError),
}

/// Result of [`Session::submit`].
pub enum Submission {
    /// Blank input. Nothing was appended or sent.
    Ignored,
    /// Another exchange is pending and exchanges are serialized.
    Busy,
    /// The user message is on screen; drive the exchange with [`Exchange::settle`].
    Started(Exchange),
}

/// Result of [`Session::send`].
#[derive(Debug)]
pub enum SendResult {
    Ignored,
    Busy,
    Settled(ExchangeOutcome),
}

/// A submitted message waiting for its reply.
///
/// Holds the typing indicator up until it is settled or dropped.
pub struct Exchange {
    inner: Arc<SessionInner>,
    message: String,
    _typing: TypingGuard,
    _busy: Option<BusyGuard>,
}

impl Session {
    /// Accept user input and start an exchange.
    ///
    /// Everything visible up to the network call happens before this
    /// returns: the user entry is appended, the input is cleared and
    /// refocused, and the typing indicator and status are raised.
    pub fn submit(&self, input: &str) -> Submission {
        let text = input.trim();
        if text.is_empty() {
            return Submission::Ignored;
        }

        let busy = if self.inner.options.serialize_exchanges {
            match BusyGuard::acquire(&self.inner) {
                Some(guard) => Some(guard),
                None => {
                    debug!("submission refused: reply still pending");
                    return Submission::Busy;
                }
            }
        } else {
            None
        };

        self.inner.transcript.append(text, Role::User);
        self.inner.bus.publish(SessionEvent::InputCleared);
        self.inner.bus.publish(SessionEvent::InputFocused);

        let typing = TypingGuard::engage(Arc::clone(&self.inner));

        Submission::Started(Exchange {
            inner: Arc::clone(&self.inner),
            message: text.to_string(),
            _typing: typing,
            _busy: busy,
        })
    }

    /// Submit and wait for the exchange to settle.
    pub async fn send(&self, input: &str) -> SendResult {
        match self.submit(input) {
            Submission::Ignored => SendResult::Ignored,
            Submission::Busy => SendResult::Busy,
            Submission::Started(exchange) => SendResult::Settled(exchange.settle().await),
        }
    }
}

impl Exchange {
    /// The trimmed text being sent.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Send the message, pace the reply, and append the reply or the fallback.
    ///
    /// Never fails: service errors are logged and replaced by
    /// [`FALLBACK_REPLY`]. The typing indicator is lowered when `self` drops
    /// at the end of this call.
    pub async fn settle(self) -> ExchangeOutcome {
        let outcome = self.inner.deliver(&self.message).await;

        match &outcome {
            ExchangeOutcome::Delivered(reply) => {
                self.inner.transcript.append(reply.clone(), Role::Ai);
            }
            ExchangeOutcome::Failed(err) => {
                error!(client_id = %self.inner.identity, error = %err, "chat exchange failed");
                self.inner.transcript.append(FALLBACK_REPLY, Role::Ai);
            }
        }

        outcome
    }
}

impl SessionInner {
    /// Request the reply, then hold it back for the pacing delay.
    async fn deliver(&self, message: &str) -> ExchangeOutcome {
        let request = ChatRequest {
            message: message.to_string(),
            client_id: self.identity.as_str().to_string(),
        };

        let reply = match self.service.send(&request).await {
            Ok(reply) => reply.reply,
            Err(e) => return ExchangeOutcome::Failed(e),
        };

        let delay = self.options.pacing.delay_for(&reply);
        debug!(delay_ms = delay.as_millis() as u64, "pacing reply");
        tokio::time::sleep(delay).await;

        ExchangeOutcome::Delivered(reply)
    }
}
