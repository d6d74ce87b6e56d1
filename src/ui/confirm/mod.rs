//! Modal yes/no prompt in front of a destructive action.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_confirm_dialog;
pub use intent::ConfirmIntent;
pub use reducer::{ConfirmEffect, ConfirmReducer};
pub use state::{ConfirmChoice, ConfirmDialogState};
