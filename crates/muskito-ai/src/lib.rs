//! Conversation core for Muskito.
//!
//! Provides:
//! - A `Session` that owns the active personality and the conversation history
//! - The `CompletionService` seam the session talks through
//! - A Groq (OpenAI-compatible) client with SSE streaming
//! - The fixed personality prompt table

pub mod groq;
pub mod personality;
pub mod session;
pub mod streaming;

use std::pin::Pin;

use async_trait::async_trait;
use futures_util::Stream;

pub use groq::{GroqClient, GroqConfig};
pub use personality::PersonalityMode;
pub use session::{FailedTurnPolicy, GenerationParams, ReplyStream, Session, SessionError};

/// Lazy, single-pass sequence of text fragments from a streaming completion.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String, AiError>> + Send>>;

/// A chat-completions backend.
///
/// Authentication, rate limiting and retries are the implementation's
/// concern; the session surfaces any error as-is.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Generate a whole reply. `None` means the service returned no content.
    async fn complete(&self, request: &CompletionRequest) -> Result<Option<String>, AiError>;

    /// Open a streaming reply. Fragments are pulled by the caller.
    async fn complete_streaming(
        &self,
        request: &CompletionRequest,
    ) -> Result<FragmentStream, AiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Everything a backend needs to produce one reply.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    Api(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
}
