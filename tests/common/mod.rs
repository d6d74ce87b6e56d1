//! Shared test helpers.

#![allow(dead_code, unused_imports)]

use feedback_widget::clock::ManualClock;
use feedback_widget::config::Config;
use feedback_widget::controller::ViewController;
use feedback_widget::session::SessionState;

pub const TIMESTAMP: &str = "2024-05-01 10:30:00";

/// Controller on a manual clock, default config.
pub fn controller() -> (ViewController, ManualClock) {
    controller_with(&Config::default())
}

pub fn controller_with(config: &Config) -> (ViewController, ManualClock) {
    let clock = ManualClock::new();
    clock.set_timestamp(TIMESTAMP);
    let controller = ViewController::new(config, Box::new(clock.clone()));
    (controller, clock)
}

pub fn counts(state: &SessionState) -> (u32, u32) {
    (state.like_count, state.dislike_count)
}
