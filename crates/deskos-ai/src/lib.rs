//! Client for the remote text-generation service used by the terminal and
//! code-editor apps.
//!
//! The desktop shell never blocks on the network: requests go through
//! [`bridge::AiHandle`] to a background thread that owns the HTTP client,
//! and each requester polls its own reply channel during the shell tick.

pub mod bridge;
pub mod client;
pub mod config;
pub mod prompts;

pub use bridge::{AiHandle, AiReply};
pub use client::GeminiClient;
pub use config::GeminiConfig;
