use crate::ui::confirm::state::ConfirmChoice;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmIntent {
    Open { question: String },
    /// Left/Right/Tab: move between Yes and No.
    Toggle,
    /// Answer directly (y / n keys).
    Answer(ConfirmChoice),
    /// Enter: answer with the selected button.
    Accept,
    /// Escape: same as answering No.
    Cancel,
}

impl Intent for ConfirmIntent {}
