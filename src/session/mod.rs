//! Session core: the visitor's vote and comment state and its transitions.

mod effect;
mod error;
mod intent;
mod reducer;
mod state;

pub use effect::{Notice, SessionEffect, Severity, VoteControl};
pub use error::SessionError;
pub use intent::SessionIntent;
pub use reducer::SessionReducer;
pub use state::{Comment, SessionState, Vote};
