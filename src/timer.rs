//! Delayed callbacks polled from the event loop.
//!
//! Nothing runs on its own thread: the owner calls [`Timers::fire_due`] on
//! every tick and handles the returned kinds.

use crate::notification::NotificationToken;
use crate::session::VoteControl;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    ExpireNotification(NotificationToken),
    ClearAcknowledge(VoteControl),
}

#[derive(Debug)]
struct Pending {
    id: TimerId,
    deadline: Instant,
    kind: TimerKind,
}

#[derive(Debug, Default)]
pub struct Timers {
    next_id: u64,
    pending: Vec<Pending>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, kind: TimerKind) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.push(Pending {
            id,
            deadline: now + delay,
            kind,
        });
        id
    }

    /// Returns false if the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.id != id);
        self.pending.len() != before
    }

    /// Removes and returns every timer whose deadline is at or before `now`,
    /// earliest first. Ties keep scheduling order.
    pub fn fire_due(&mut self, now: Instant) -> Vec<TimerKind> {
        let (mut due, rest): (Vec<Pending>, Vec<Pending>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|timer| timer.deadline <= now);
        self.pending = rest;
        due.sort_by_key(|timer| (timer.deadline, timer.id));
        due.into_iter().map(|timer| timer.kind).collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|timer| timer.deadline).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
