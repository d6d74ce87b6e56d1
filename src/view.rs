//! Derived view of the session: what every front-end renders.
//!
//! [`ViewModel`] is a pure function of the session state, the current
//! notification and the acknowledgment flags. Comment text is escaped here,
//! never in the stored state.

use crate::notification::Notification;
use crate::sanitize::sanitize_terminal_text;
use crate::session::{SessionState, Severity, Vote};
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlView {
    pub count: u32,
    pub enabled: bool,
    /// Short highlight right after a vote.
    pub acknowledged: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    /// Escaped, display-safe text.
    pub text: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentListView {
    Placeholder(String),
    Items(Vec<CommentView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub text: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub like: ControlView,
    pub dislike: ControlView,
    pub submit_enabled: bool,
    pub comments: CommentListView,
    pub message: Option<MessageView>,
}

/// Inputs to [`ViewModel::build`] that live outside the session state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decorations<'a> {
    pub notification: Option<&'a Notification>,
    pub like_acknowledged: bool,
    pub dislike_acknowledged: bool,
    pub placeholder: &'a str,
}

impl ViewModel {
    pub fn build(state: &SessionState, decorations: Decorations<'_>) -> Self {
        let comments = if state.comments.is_empty() {
            CommentListView::Placeholder(decorations.placeholder.to_string())
        } else {
            CommentListView::Items(
                state
                    .comments
                    .iter()
                    .map(|comment| CommentView {
                        text: escape_markup(&sanitize_terminal_text(&comment.text)).into_owned(),
                        timestamp: sanitize_terminal_text(&comment.timestamp).into_owned(),
                    })
                    .collect(),
            )
        };

        Self {
            like: ControlView {
                count: state.like_count,
                enabled: state.user_vote != Vote::Like,
                acknowledged: decorations.like_acknowledged,
            },
            dislike: ControlView {
                count: state.dislike_count,
                enabled: state.user_vote != Vote::Dislike,
                acknowledged: decorations.dislike_acknowledged,
            },
            submit_enabled: !state.has_commented,
            comments,
            message: decorations.notification.map(|n| MessageView {
                text: n.text.clone(),
                severity: n.severity,
            }),
        }
    }
}

/// Escapes the five HTML-significant characters.
pub fn escape_markup(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// HTML fragment of the comment list. Item text is already escaped by
/// [`ViewModel::build`]; the placeholder comes from trusted config but is
/// escaped anyway.
pub fn render_comment_list_html(comments: &CommentListView) -> String {
    match comments {
        CommentListView::Placeholder(text) => {
            format!("<div class=\"no-comments\">{}</div>", escape_markup(text))
        }
        CommentListView::Items(items) => items
            .iter()
            .map(|item| {
                format!(
                    "<div class=\"comment-item\"><div class=\"comment-text\">{}</div><div class=\"comment-time\">{}</div></div>",
                    item.text,
                    escape_markup(&item.timestamp)
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
