//! Async chat methods for Session (whole reply + streaming).

use tracing::debug;

use super::manager::{compose_request, Session};
use super::stream::ReplyStream;
use super::types::{PendingTurn, SessionError};

impl Session {
    /// Send a user message and wait for the whole reply.
    ///
    /// A reply with no content is recorded as an empty assistant turn.
    pub async fn chat(&mut self, user_message: impl Into<String>) -> Result<String, SessionError> {
        let turn = PendingTurn::begin(
            &mut self.history,
            self.failed_turn_policy,
            user_message.into(),
        );
        let request = compose_request(&self.params, self.mode, turn.history());

        debug!(mode = %self.mode, messages = request.messages.len(), "Chat request");

        let reply = self.service.complete(&request).await?.unwrap_or_default();
        turn.commit(reply.clone());
        Ok(reply)
    }

    /// Send a user message and stream the reply.
    ///
    /// The assistant turn is recorded only once the returned stream has
    /// been drained to its end. A stream dropped early, or one that fails,
    /// records no reply. Callers must drain it.
    pub async fn chat_stream(
        &mut self,
        user_message: impl Into<String>,
    ) -> Result<ReplyStream<'_>, SessionError> {
        let turn = PendingTurn::begin(
            &mut self.history,
            self.failed_turn_policy,
            user_message.into(),
        );
        let request = compose_request(&self.params, self.mode, turn.history());

        debug!(mode = %self.mode, messages = request.messages.len(), "Chat streaming request");

        let fragments = self.service.complete_streaming(&request).await?;
        Ok(ReplyStream::new(turn, fragments))
    }
}
