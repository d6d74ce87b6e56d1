use crate::session::error::SessionError;

/// One of the two vote controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteControl {
    Like,
    Dislike,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
}

/// Key of a user-facing message. Texts come from `[messages]` in the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Liked,
    Disliked,
    CommentAdded,
    EmptyComment,
    AlreadyCommented,
    ResetDone,
}

impl Notice {
    pub fn severity(self) -> Severity {
        match self {
            Notice::EmptyComment | Notice::AlreadyCommented => Severity::Info,
            Notice::Liked | Notice::Disliked | Notice::CommentAdded | Notice::ResetDone => {
                Severity::Success
            }
        }
    }
}

/// Side effects requested by [`SessionReducer`](super::SessionReducer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    /// Show a transient message.
    Notify(Notice),
    /// Briefly highlight a vote control.
    Acknowledge(VoteControl),
    /// The intent was rejected; state is unchanged.
    Rejected(SessionError),
    /// Empty the comment input.
    ClearInput,
    /// State changed; the view must be rebuilt.
    Render,
}
