//! Model-View-Intent (MVI) primitives shared by the session core and the
//! terminal dialogs.
//!
//! ```text
//! Intent ──→ Reducer ──→ (State, Effects) ──→ ViewModel ──→ Frame
//!    ↑                                                        │
//!    └────────────────────── key events ──────────────────────┘
//! ```
//!
//! - **State**: plain data, cloned into each transition
//! - **Intent**: a discrete user action
//! - **Reducer**: pure transition returning the requested side effects
//! - **Effects**: executed by the owner (controller or app), never by the reducer

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
