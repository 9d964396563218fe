use thiserror::Error;

use crate::session::SessionState;

/// Errors from session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The session already reached a terminal state; discard it and
    /// start a new conversation.
    #[error("session already finished in state {0:?}")]
    SessionFinished(SessionState),
}

pub type Result<T> = std::result::Result<T, SessionError>;
