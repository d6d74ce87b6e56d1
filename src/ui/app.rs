use crate::controller::ViewController;
use crate::session::{SessionError, VoteControl};
use crate::ui::confirm::{ConfirmDialogState, ConfirmEffect, ConfirmIntent, ConfirmReducer};
use crate::ui::mvi::Reducer;
use crate::view::ViewModel;

/// Focusable controls, in Tab order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Like,
    Dislike,
    Reset,
    CommentInput,
    Submit,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Like,
        Focus::Dislike,
        Focus::Reset,
        Focus::CommentInput,
        Focus::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Terminal-side wrapper around the [`ViewController`]: focus, the confirm
/// modal and quit handling.
pub struct App {
    should_quit: bool,
    focus: Focus,
    controller: ViewController,
    /// Reset confirmation (MVI pattern).
    confirm: ConfirmDialogState,
    /// Redraw needed for reasons the controller does not see.
    dirty: bool,
}

impl App {
    pub fn new(controller: ViewController) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Like,
            controller,
            confirm: ConfirmDialogState::default(),
            dirty: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            self.focus = focus;
            self.dirty = true;
        }
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    pub fn controller(&self) -> &ViewController {
        &self.controller
    }

    pub fn view(&self) -> ViewModel {
        self.controller.view()
    }

    pub fn confirm_dialog(&self) -> &ConfirmDialogState {
        &self.confirm
    }

    pub fn is_confirming(&self) -> bool {
        self.confirm.is_visible()
    }

    /// Enter or Space on the focused control.
    pub fn activate(&mut self) {
        match self.focus {
            Focus::Like => self.vote(VoteControl::Like),
            Focus::Dislike => self.vote(VoteControl::Dislike),
            Focus::Reset => self.request_reset(),
            Focus::CommentInput => {
                let _ = self.submit_comment();
            }
            // A disabled control ignores activation.
            Focus::Submit => {
                if self.controller.view().submit_enabled {
                    let _ = self.submit_comment();
                }
            }
        }
    }

    pub fn vote(&mut self, control: VoteControl) {
        match control {
            VoteControl::Like => self.controller.cast_like(),
            VoteControl::Dislike => self.controller.cast_dislike(),
        };
    }

    /// Submits the input buffer (Enter in the comment input).
    pub fn submit_comment(&mut self) -> Result<(), SessionError> {
        self.controller.submit_input()
    }

    pub fn type_char(&mut self, ch: char) {
        self.controller.push_input(ch);
    }

    pub fn backspace(&mut self) {
        self.controller.pop_input();
    }

    /// Opens the confirmation modal; the reset runs once it is answered.
    pub fn request_reset(&mut self) {
        let question = self.controller.reset_question().to_string();
        self.dispatch_confirm(ConfirmIntent::Open { question });
    }

    pub fn dispatch_confirm(&mut self, intent: ConfirmIntent) {
        let (state, effects) = ConfirmReducer::reduce(self.confirm.clone(), intent);
        if state != self.confirm {
            self.dirty = true;
        }
        self.confirm = state;

        for effect in effects {
            let answer = effect == ConfirmEffect::Confirmed;
            self.controller.reset(&mut |_: &str| answer);
            self.dirty = true;
        }
    }

    pub fn on_tick(&mut self) {
        self.controller.on_tick();
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        tracing::debug!(cols, rows, "terminal resized");
        self.dirty = true;
    }

    /// True once after anything visible changed.
    pub fn take_dirty(&mut self) -> bool {
        let controller_dirty = self.controller.take_dirty();
        std::mem::take(&mut self.dirty) || controller_dirty
    }
}
