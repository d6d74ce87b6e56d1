use crate::ui::confirm::intent::ConfirmIntent;
use crate::ui::confirm::state::{ConfirmChoice, ConfirmDialogState};
use crate::ui::mvi::Reducer;

/// Outcome of a closed dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmEffect {
    Confirmed,
    Cancelled,
}

pub struct ConfirmReducer;

impl Reducer for ConfirmReducer {
    type State = ConfirmDialogState;
    type Intent = ConfirmIntent;
    type Effect = ConfirmEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Vec<Self::Effect>) {
        match (state, intent) {
            (ConfirmDialogState::Hidden, ConfirmIntent::Open { question }) => (
                ConfirmDialogState::Visible {
                    question,
                    selected: ConfirmChoice::default(),
                },
                Vec::new(),
            ),
            // Already asking: keep the pending question.
            (visible @ ConfirmDialogState::Visible { .. }, ConfirmIntent::Open { .. }) => {
                (visible, Vec::new())
            }
            (ConfirmDialogState::Visible { question, selected }, ConfirmIntent::Toggle) => (
                ConfirmDialogState::Visible {
                    question,
                    selected: selected.toggled(),
                },
                Vec::new(),
            ),
            (ConfirmDialogState::Visible { .. }, ConfirmIntent::Answer(choice)) => close(choice),
            (ConfirmDialogState::Visible { selected, .. }, ConfirmIntent::Accept) => {
                close(selected)
            }
            (ConfirmDialogState::Visible { .. }, ConfirmIntent::Cancel) => {
                close(ConfirmChoice::No)
            }
            (ConfirmDialogState::Hidden, _) => (ConfirmDialogState::Hidden, Vec::new()),
        }
    }
}

fn close(choice: ConfirmChoice) -> (ConfirmDialogState, Vec<ConfirmEffect>) {
    let effect = match choice {
        ConfirmChoice::Yes => ConfirmEffect::Confirmed,
        ConfirmChoice::No => ConfirmEffect::Cancelled,
    };
    (ConfirmDialogState::Hidden, vec![effect])
}
