//! Session struct, personality selection, and history bookkeeping.

use std::sync::Arc;

use tracing::info;

use crate::groq::{GroqClient, GroqConfig};
use crate::personality::PersonalityMode;
use crate::{CompletionRequest, CompletionService, Message};

use super::types::{FailedTurnPolicy, GenerationParams, SessionError};

/// A single conversation with one completion backend.
///
/// Not shareable: `chat` and `chat_stream` take `&mut self`, so at most one
/// request is in flight per session. Independent conversations use
/// independent sessions.
pub struct Session {
    /// Backend every turn is sent to.
    pub(super) service: Arc<dyn CompletionService>,
    /// Active personality.
    pub(super) mode: PersonalityMode,
    /// User/Assistant turns only; never contains a system message.
    pub(super) history: Vec<Message>,
    pub(super) params: GenerationParams,
    pub(super) failed_turn_policy: FailedTurnPolicy,
}

impl Session {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self {
            service,
            mode: PersonalityMode::default(),
            history: Vec::new(),
            params: GenerationParams::default(),
            failed_turn_policy: FailedTurnPolicy::default(),
        }
    }

    /// Create a session backed by Groq, resolving the key from `api_key`
    /// or the `GROQ_API_KEY` env var.
    pub fn connect(api_key: Option<String>) -> Result<Self, SessionError> {
        let client = GroqClient::new(GroqConfig::resolve(api_key)?)?;
        Ok(Self::new(Arc::new(client)))
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_mode(mut self, mode: PersonalityMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_failed_turn_policy(mut self, policy: FailedTurnPolicy) -> Self {
        self.failed_turn_policy = policy;
        self
    }

    /// Switch personality by identifier. History is left untouched.
    pub fn set_mode(&mut self, mode: &str) -> Result<(), SessionError> {
        let mode: PersonalityMode = mode.parse()?;
        if mode != self.mode {
            info!(from = %self.mode, to = %mode, "Personality mode switched");
        }
        self.mode = mode;
        Ok(())
    }

    pub fn mode(&self) -> PersonalityMode {
        self.mode
    }

    /// The fixed instruction text for the active mode.
    pub fn system_prompt(&self) -> &'static str {
        self.mode.system_prompt()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Get the conversation history.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Number of messages in history.
    pub fn message_count(&self) -> usize {
        self.history.len()
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn failed_turn_policy(&self) -> FailedTurnPolicy {
        self.failed_turn_policy
    }

    /// The message list the next request would carry, given the current history.
    pub fn build_messages(&self) -> Vec<Message> {
        compose_request(&self.params, self.mode, &self.history).messages
    }
}

/// `[system prompt] ++ history`, plus the generation parameters.
pub(super) fn compose_request(
    params: &GenerationParams,
    mode: PersonalityMode,
    history: &[Message],
) -> CompletionRequest {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(Message::system(mode.system_prompt()));
    messages.extend_from_slice(history);
    CompletionRequest {
        model: params.model.clone(),
        messages,
        temperature: params.temperature,
        max_tokens: params.max_tokens,
    }
}
