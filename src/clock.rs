//! Time source for timers and comment timestamps.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Monotonic time for timers plus the human-readable timestamp of "now".
pub trait Clock: Send {
    fn now(&self) -> Instant;

    /// Current local time rendered for display on a comment.
    fn timestamp(&self) -> String;
}

/// Wall clock with a `chrono` strftime pattern evaluated in local time.
///
/// The pattern is validated by `Config::validate` before it reaches here.
pub struct SystemClock {
    format: String,
}

impl SystemClock {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn timestamp(&self) -> String {
        chrono::Local::now().format(&self.format).to_string()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Clone)]
pub struct ManualClock {
    inner: Arc<Mutex<ManualTime>>,
}

struct ManualTime {
    now: Instant,
    timestamp: String,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ManualTime {
                now: Instant::now(),
                timestamp: "2024-01-01 00:00:00".to_string(),
            })),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut time = self.inner.lock();
        time.now += by;
    }

    pub fn set_timestamp(&self, timestamp: impl Into<String>) {
        self.inner.lock().timestamp = timestamp.into();
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.inner.lock().now
    }

    fn timestamp(&self) -> String {
        self.inner.lock().timestamp.clone()
    }
}
