//! Chat session controller.
//!
//! A `Session` owns the client identity, the transcript and the presence
//! state (typing indicator and status line), and runs one exchange per
//! submitted message. Every visible change goes out as a `SessionEvent`.

mod exchange;
mod guards;
mod manager;


pub use exchange::{Exchange, ExchangeOutcome, SendResult, Submission, FALLBACK_REPLY};
pub use manager::{Session, SessionOptions};
