//! Streaming reply that records the assistant turn on exhaustion.

use std::pin::Pin;
use std::task::{ready, Context, Poll};

use futures_util::stream::FusedStream;
use futures_util::{Stream, StreamExt};

use crate::FragmentStream;

use super::types::{PendingTurn, SessionError};

/// Text fragments of one assistant reply, pulled by the caller.
///
/// Borrows the session mutably until dropped. Once the upstream ends
/// cleanly the accumulated text is appended to history and the stream
/// yields `None` from then on. An upstream error is yielded once and
/// ends the stream without recording a reply.
pub struct ReplyStream<'a> {
    turn: Option<PendingTurn<'a>>,
    fragments: Option<FragmentStream>,
    reply: String,
}

impl<'a> ReplyStream<'a> {
    pub(super) fn new(turn: PendingTurn<'a>, fragments: FragmentStream) -> Self {
        Self {
            turn: Some(turn),
            fragments: Some(fragments),
            reply: String::new(),
        }
    }

    /// Text received so far.
    pub fn reply_so_far(&self) -> &str {
        &self.reply
    }

    /// Drain the remaining fragments and return the full reply.
    pub async fn collect_reply(mut self) -> Result<String, SessionError> {
        while let Some(fragment) = self.next().await {
            fragment?;
        }
        Ok(std::mem::take(&mut self.reply))
    }
}

impl Stream for ReplyStream<'_> {
    type Item = Result<String, SessionError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        let Some(fragments) = this.fragments.as_mut() else {
            return Poll::Ready(None);
        };

        match ready!(fragments.poll_next_unpin(cx)) {
            Some(Ok(fragment)) => {
                this.reply.push_str(&fragment);
                Poll::Ready(Some(Ok(fragment)))
            }
            Some(Err(e)) => {
                this.fragments = None;
                // Dropping the turn applies the failed-turn policy
                this.turn = None;
                Poll::Ready(Some(Err(e.into())))
            }
            None => {
                this.fragments = None;
                if let Some(turn) = this.turn.take() {
                    turn.commit(this.reply.clone());
                }
                Poll::Ready(None)
            }
        }
    }
}

impl FusedStream for ReplyStream<'_> {
    fn is_terminated(&self) -> bool {
        self.fragments.is_none()
    }
}
