//! Groq chat-completions client.
//!
//! Implements the `CompletionService` trait against Groq's
//! OpenAI-compatible API (https://api.groq.com/openai/v1).

mod api;
mod client;
mod config;

pub use client::GroqClient;
pub use config::{GroqConfig, API_KEY_ENV, DEFAULT_BASE_URL};
