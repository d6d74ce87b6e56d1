use crate::session::Notice;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container. Every table is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub messages: Messages,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Timing and formatting of the widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long a notification stays visible, in milliseconds (default: 3000).
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,
    /// Highlight duration of a vote control after voting, in milliseconds (default: 500).
    #[serde(default = "default_acknowledge_ms")]
    pub acknowledge_ms: u64,
    /// Event loop tick in milliseconds (default: 100). Bounds timer precision.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// chrono strftime pattern for comment timestamps, local time.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

/// User-facing texts. Override any of them to localize the widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub liked: String,
    pub disliked: String,
    pub comment_added: String,
    pub empty_comment: String,
    pub already_commented: String,
    pub reset_done: String,
    /// Shown in place of the comment list while it is empty.
    pub no_comments: String,
    /// Question asked before a reset.
    pub reset_question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset: "error", "warn", "info", "debug", "trace", "off".
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to `<data_dir>/feedback-widget/feedback.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_notification_ms() -> u64 {
    3000
}

fn default_acknowledge_ms() -> u64 {
    500
}

fn default_tick_ms() -> u64 {
    100
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Messages {
    pub fn text(&self, notice: Notice) -> &str {
        match notice {
            Notice::Liked => &self.liked,
            Notice::Disliked => &self.disliked,
            Notice::CommentAdded => &self.comment_added,
            Notice::EmptyComment => &self.empty_comment,
            Notice::AlreadyCommented => &self.already_commented,
            Notice::ResetDone => &self.reset_done,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_ms: default_notification_ms(),
            acknowledge_ms: default_acknowledge_ms(),
            tick_ms: default_tick_ms(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            liked: "Thanks for the like! 👍".to_string(),
            disliked: "Thanks for the feedback! 👎".to_string(),
            comment_added: "Comment added! 💬".to_string(),
            empty_comment: "Please enter a comment!".to_string(),
            already_commented: "You have already commented!".to_string(),
            reset_done: "Everything has been reset! 🔄".to_string(),
            no_comments: "No comments yet. Be the first to comment!".to_string(),
            reset_question:
                "Reset everything? Your vote and comment will be cleared.".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
