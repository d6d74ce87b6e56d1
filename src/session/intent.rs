use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionIntent {
    CastLike,
    CastDislike,
    /// Raw input text; the reducer trims and validates it.
    /// `timestamp` is captured by the caller so the reducer stays pure.
    SubmitComment { text: String, timestamp: String },
    /// Wipe the session. Confirmation happens before this intent is dispatched.
    Reset,
}

impl Intent for SessionIntent {}
