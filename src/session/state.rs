use crate::session::effect::VoteControl;
use crate::ui::mvi::UiState;
use serde::Serialize;

/// The visitor's current vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    #[default]
    None,
    Like,
    Dislike,
}

impl From<VoteControl> for Vote {
    fn from(control: VoteControl) -> Self {
        match control {
            VoteControl::Like => Vote::Like,
            VoteControl::Dislike => Vote::Dislike,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    /// Trimmed, non-empty text. Stored verbatim; escaping happens at render time.
    pub text: String,
    /// Creation time as produced by the clock's formatter.
    pub timestamp: String,
}

/// Everything recorded for the current session.
///
/// Plain data with public fields. Validation lives in [`SessionReducer`](super::SessionReducer).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SessionState {
    pub like_count: u32,
    pub dislike_count: u32,
    pub user_vote: Vote,
    pub has_commented: bool,
    pub comments: Vec<Comment>,
}

impl UiState for SessionState {}

impl SessionState {
    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }
}
