use crate::session::effect::Notice;
use thiserror::Error;

/// Recoverable rejections of a comment submission.
///
/// Both leave the session untouched and are surfaced as an info notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The comment was empty or whitespace only.
    #[error("empty comment")]
    EmptyComment,

    #[error("a comment was already submitted in this session")]
    AlreadyCommented,
}

impl SessionError {
    pub fn notice(self) -> Notice {
        match self {
            SessionError::EmptyComment => Notice::EmptyComment,
            SessionError::AlreadyCommented => Notice::AlreadyCommented,
        }
    }
}
