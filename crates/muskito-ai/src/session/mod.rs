//! Conversation session management.
//!
//! A `Session` holds the active personality and the User/Assistant
//! history. The system prompt is never stored; it is synthesized in
//! front of the history on every request.

mod chat;
mod manager;
mod stream;
mod types;


pub use manager::Session;
pub use stream::ReplyStream;
pub use types::{FailedTurnPolicy, GenerationParams, SessionError};
