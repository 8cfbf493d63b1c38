//! Session types, errors, and the pending-turn guard.

use crate::personality::UnknownMode;
use crate::{AiError, Message};

pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Model and sampling parameters sent with every request, streaming or not.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.9,
            max_tokens: 512,
        }
    }
}

/// What happens to the user turn when its reply never completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailedTurnPolicy {
    /// The user message stays in history without a reply.
    #[default]
    KeepUserTurn,
    /// The user message is removed; history only holds completed pairs.
    Rollback,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    InvalidMode(#[from] UnknownMode),

    #[error("completion service error: {0}")]
    CompletionService(#[from] AiError),
}

/// A user turn waiting for its assistant reply.
///
/// The user message is appended on `begin`. `commit` records the reply;
/// dropping the guard without committing applies the failed-turn policy,
/// so errors, early returns and cancelled futures all leave history
/// well-defined.
pub(crate) struct PendingTurn<'a> {
    history: &'a mut Vec<Message>,
    policy: FailedTurnPolicy,
    settled: bool,
}

impl<'a> PendingTurn<'a> {
    pub(crate) fn begin(
        history: &'a mut Vec<Message>,
        policy: FailedTurnPolicy,
        user_message: String,
    ) -> Self {
        history.push(Message::user(user_message));
        Self {
            history,
            policy,
            settled: false,
        }
    }

    pub(crate) fn history(&self) -> &[Message] {
        self.history.as_slice()
    }

    pub(crate) fn commit(mut self, reply: String) {
        self.history.push(Message::assistant(reply));
        self.settled = true;
    }
}

impl Drop for PendingTurn<'_> {
    fn drop(&mut self) {
        if self.settled || self.policy == FailedTurnPolicy::KeepUserTurn {
            return;
        }
        tracing::debug!("Rolling back unanswered user turn");
        self.history.pop();
    }
}
