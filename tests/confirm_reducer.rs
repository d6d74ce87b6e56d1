use feedback_widget::ui::confirm::{
    ConfirmChoice, ConfirmDialogState, ConfirmEffect, ConfirmIntent, ConfirmReducer,
};
use feedback_widget::ui::mvi::Reducer;

fn open() -> ConfirmDialogState {
    let (state, effects) = ConfirmReducer::reduce(
        ConfirmDialogState::Hidden,
        ConfirmIntent::Open {
            question: "Reset?".to_string(),
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn open_shows_dialog_with_no_preselected() {
    let state = open();
    assert_eq!(
        state,
        ConfirmDialogState::Visible {
            question: "Reset?".to_string(),
            selected: ConfirmChoice::No,
        }
    );
}

#[test]
fn accept_with_default_selection_cancels() {
    let (state, effects) = ConfirmReducer::reduce(open(), ConfirmIntent::Accept);
    assert!(!state.is_visible());
    assert_eq!(effects, vec![ConfirmEffect::Cancelled]);
}

#[test]
fn toggle_then_accept_confirms() {
    let (state, _) = ConfirmReducer::reduce(open(), ConfirmIntent::Toggle);
    let (state, effects) = ConfirmReducer::reduce(state, ConfirmIntent::Accept);
    assert!(!state.is_visible());
    assert_eq!(effects, vec![ConfirmEffect::Confirmed]);
}

#[test]
fn direct_answers_close_dialog() {
    let (_, effects) =
        ConfirmReducer::reduce(open(), ConfirmIntent::Answer(ConfirmChoice::Yes));
    assert_eq!(effects, vec![ConfirmEffect::Confirmed]);
    let (_, effects) = ConfirmReducer::reduce(open(), ConfirmIntent::Answer(ConfirmChoice::No));
    assert_eq!(effects, vec![ConfirmEffect::Cancelled]);
}

#[test]
fn cancel_is_a_no_answer() {
    let (state, _) = ConfirmReducer::reduce(open(), ConfirmIntent::Toggle);
    let (state, effects) = ConfirmReducer::reduce(state, ConfirmIntent::Cancel);
    assert_eq!(state, ConfirmDialogState::Hidden);
    assert_eq!(effects, vec![ConfirmEffect::Cancelled]);
}

#[test]
fn reopening_keeps_pending_question() {
    let (state, _) = ConfirmReducer::reduce(open(), ConfirmIntent::Toggle);
    let (state, effects) = ConfirmReducer::reduce(
        state,
        ConfirmIntent::Open {
            question: "Other?".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(
        state,
        ConfirmDialogState::Visible {
            question: "Reset?".to_string(),
            selected: ConfirmChoice::Yes,
        }
    );
}

#[test]
fn hidden_ignores_answers() {
    for intent in [
        ConfirmIntent::Accept,
        ConfirmIntent::Cancel,
        ConfirmIntent::Toggle,
        ConfirmIntent::Answer(ConfirmChoice::Yes),
    ] {
        let (state, effects) = ConfirmReducer::reduce(ConfirmDialogState::Hidden, intent);
        assert_eq!(state, ConfirmDialogState::Hidden);
        assert!(effects.is_empty());
    }
}
