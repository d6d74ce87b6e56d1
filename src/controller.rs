//! The View Controller: turns user actions into session transitions and keeps
//! the derived view (notifications, acknowledgments, input buffer) in sync.
//!
//! The controller owns the only [`SessionState`]. Front-ends call the action
//! methods, poll [`ViewController::on_tick`] for timers and rebuild the view
//! when [`ViewController::take_dirty`] says so.

use crate::clock::Clock;
use crate::config::{Config, Messages};
use crate::notification::{Notification, NotificationCenter};
use crate::session::{
    Notice, SessionEffect, SessionError, SessionIntent, SessionReducer, SessionState, VoteControl,
};
use crate::timer::{TimerId, TimerKind, Timers};
use crate::ui::mvi::Reducer;
use crate::view::{Decorations, ViewModel};
use std::time::Duration;

/// Synchronous yes/no decision. The reset only proceeds on `true`.
pub trait ConfirmPrompt {
    fn confirm(&mut self, question: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> ConfirmPrompt for F {
    fn confirm(&mut self, question: &str) -> bool {
        self(question)
    }
}

pub struct ViewController {
    state: SessionState,
    input: String,
    notifications: NotificationCenter,
    notification_timer: Option<TimerId>,
    like_ack: Option<TimerId>,
    dislike_ack: Option<TimerId>,
    timers: Timers,
    clock: Box<dyn Clock>,
    messages: Messages,
    notification_duration: Duration,
    acknowledge_duration: Duration,
    dirty: bool,
}

impl ViewController {
    pub fn new(config: &Config, clock: Box<dyn Clock>) -> Self {
        Self {
            state: SessionState::default(),
            input: String::new(),
            notifications: NotificationCenter::new(),
            notification_timer: None,
            like_ack: None,
            dislike_ack: None,
            timers: Timers::new(),
            clock,
            messages: config.messages.clone(),
            notification_duration: config.notification_duration(),
            acknowledge_duration: config.acknowledge_duration(),
            // The startup render.
            dirty: true,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.dirty = true;
    }

    pub fn push_input(&mut self, ch: char) {
        self.input.push(ch);
        self.dirty = true;
    }

    pub fn pop_input(&mut self) {
        if self.input.pop().is_some() {
            self.dirty = true;
        }
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    pub fn is_acknowledged(&self, control: VoteControl) -> bool {
        match control {
            VoteControl::Like => self.like_ack.is_some(),
            VoteControl::Dislike => self.dislike_ack.is_some(),
        }
    }

    pub fn reset_question(&self) -> &str {
        &self.messages.reset_question
    }

    /// Returns false when the like was redundant.
    pub fn cast_like(&mut self) -> bool {
        matches!(self.dispatch(SessionIntent::CastLike), Ok(true))
    }

    /// Returns false when the dislike was redundant.
    pub fn cast_dislike(&mut self) -> bool {
        matches!(self.dispatch(SessionIntent::CastDislike), Ok(true))
    }

    pub fn submit_comment(&mut self, raw: &str) -> Result<(), SessionError> {
        let timestamp = self.clock.timestamp();
        self.dispatch(SessionIntent::SubmitComment {
            text: raw.to_string(),
            timestamp,
        })
        .map(|_| ())
    }

    /// Submits whatever is in the input buffer (the Enter key).
    pub fn submit_input(&mut self) -> Result<(), SessionError> {
        let raw = self.input.clone();
        self.submit_comment(&raw)
    }

    /// Asks `prompt` first; wipes the session only on confirmation.
    /// Returns whether the reset happened.
    pub fn reset<P: ConfirmPrompt + ?Sized>(&mut self, prompt: &mut P) -> bool {
        if !prompt.confirm(&self.messages.reset_question) {
            tracing::debug!("reset cancelled");
            return false;
        }
        let reset = matches!(self.dispatch(SessionIntent::Reset), Ok(true));
        tracing::info!("session reset");
        reset
    }

    /// Fires due timers: notification expiry and acknowledgment clearing.
    pub fn on_tick(&mut self) {
        for kind in self.timers.fire_due(self.clock.now()) {
            match kind {
                TimerKind::ExpireNotification(token) => {
                    if self.notifications.expire(token) {
                        self.notification_timer = None;
                        self.dirty = true;
                    }
                }
                TimerKind::ClearAcknowledge(control) => {
                    *self.ack_slot(control) = None;
                    self.dirty = true;
                }
            }
        }
    }

    pub fn view(&self) -> ViewModel {
        ViewModel::build(
            &self.state,
            Decorations {
                notification: self.notifications.current(),
                like_acknowledged: self.like_ack.is_some(),
                dislike_acknowledged: self.dislike_ack.is_some(),
                placeholder: &self.messages.no_comments,
            },
        )
    }

    /// True once after anything visible changed.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Runs the reducer and applies its effects.
    /// `Ok(false)` means the intent was a no-op.
    fn dispatch(&mut self, intent: SessionIntent) -> Result<bool, SessionError> {
        tracing::debug!(?intent, "dispatch");
        let (state, effects) = SessionReducer::reduce(std::mem::take(&mut self.state), intent);
        self.state = state;

        let changed = !effects.is_empty();
        let mut outcome = Ok(changed);
        for effect in effects {
            match effect {
                SessionEffect::Rejected(error) => {
                    tracing::debug!(%error, "intent rejected");
                    outcome = Err(error);
                }
                SessionEffect::Notify(notice) => self.notify(notice),
                SessionEffect::Acknowledge(control) => self.acknowledge(control),
                SessionEffect::ClearInput => {
                    self.input.clear();
                    self.dirty = true;
                }
                SessionEffect::Render => self.dirty = true,
            }
        }
        outcome
    }

    fn notify(&mut self, notice: Notice) {
        let token = self
            .notifications
            .show(self.messages.text(notice), notice.severity());
        if let Some(previous) = self.notification_timer.take() {
            self.timers.cancel(previous);
        }
        let now = self.clock.now();
        self.notification_timer = Some(self.timers.schedule(
            now,
            self.notification_duration,
            TimerKind::ExpireNotification(token),
        ));
        self.dirty = true;
    }

    fn acknowledge(&mut self, control: VoteControl) {
        let now = self.clock.now();
        let delay = self.acknowledge_duration;
        let id = self.timers.schedule(now, delay, TimerKind::ClearAcknowledge(control));
        let previous = self.ack_slot(control).replace(id);
        if let Some(previous) = previous {
            self.timers.cancel(previous);
        }
        self.dirty = true;
    }

    fn ack_slot(&mut self, control: VoteControl) -> &mut Option<TimerId> {
        match control {
            VoteControl::Like => &mut self.like_ack,
            VoteControl::Dislike => &mut self.dislike_ack,
        }
    }
}
