//! HTTP chat service client.
//!
//! Implements [`ChatService`](crate::ChatService) as a single JSON
//! `POST` per message against the configured chat endpoint. No auth
//! headers, no retries, no streaming.

mod api;
mod client;
mod config;


pub use client::HttpChatService;
pub use config::HttpServiceConfig;
