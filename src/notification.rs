//! Transient user-facing messages.
//!
//! Only one message is visible at a time. Every [`NotificationCenter::show`]
//! issues a fresh token; [`NotificationCenter::expire`] clears the message
//! only when it is handed the token of the message currently shown, so an
//! expiry scheduled for an older message can never clear a newer one.

use crate::session::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationToken(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub severity: Severity,
    pub token: NotificationToken,
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
    generation: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever is shown. Last write wins.
    pub fn show(&mut self, text: impl Into<String>, severity: Severity) -> NotificationToken {
        self.generation += 1;
        let token = NotificationToken(self.generation);
        self.current = Some(Notification {
            text: text.into(),
            severity,
            token,
        });
        token
    }

    /// Clears the message if `token` identifies it. Returns whether anything was cleared.
    pub fn expire(&mut self, token: NotificationToken) -> bool {
        match &self.current {
            Some(current) if current.token == token => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
