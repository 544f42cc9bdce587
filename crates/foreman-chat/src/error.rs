//! Error types for the conversation panel.
//!
//! Empty input and unrecognized requests are not errors: the first is
//! ignored, the second gets the fallback reply.

use foreman_core::error::ForemanError;

use crate::types::TurnId;

/// Errors from the chat engine.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("a response is already being composed")]
    ResponsePending,
    #[error("no response is pending for turn {0}")]
    NothingPending(TurnId),
    #[error("session is closed")]
    SessionClosed,
    #[error("session state unavailable: {0}")]
    StateLock(String),
    #[error("response task failed: {0}")]
    ResponseTask(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("core error: {0}")]
    Core(String),
}

impl From<ForemanError> for ChatError {
    fn from(err: ForemanError) -> Self {
        match err {
            ForemanError::Serialization(msg) => ChatError::Serialization(msg),
            other => ChatError::Core(other.to_string()),
        }
    }
}
