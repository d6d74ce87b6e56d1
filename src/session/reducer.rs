use crate::session::effect::{Notice, SessionEffect, VoteControl};
use crate::session::error::SessionError;
use crate::session::intent::SessionIntent;
use crate::session::state::{Comment, SessionState, Vote};
use crate::ui::mvi::Reducer;

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;
    type Effect = SessionEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Vec<Self::Effect>) {
        match intent {
            SessionIntent::CastLike => cast(state, VoteControl::Like),
            SessionIntent::CastDislike => cast(state, VoteControl::Dislike),
            SessionIntent::SubmitComment { text, timestamp } => submit(state, &text, timestamp),
            SessionIntent::Reset => (
                SessionState::default(),
                vec![
                    SessionEffect::Notify(Notice::ResetDone),
                    SessionEffect::Render,
                ],
            ),
        }
    }
}

fn cast(mut state: SessionState, control: VoteControl) -> (SessionState, Vec<SessionEffect>) {
    let vote = Vote::from(control);
    if state.user_vote == vote {
        return (state, Vec::new());
    }

    // Switching takes back the previous vote first.
    match state.user_vote {
        Vote::Like => state.like_count = state.like_count.saturating_sub(1),
        Vote::Dislike => state.dislike_count = state.dislike_count.saturating_sub(1),
        Vote::None => {}
    }

    let notice = match control {
        VoteControl::Like => {
            state.like_count = state.like_count.saturating_add(1);
            Notice::Liked
        }
        VoteControl::Dislike => {
            state.dislike_count = state.dislike_count.saturating_add(1);
            Notice::Disliked
        }
    };
    state.user_vote = vote;

    (
        state,
        vec![
            SessionEffect::Notify(notice),
            SessionEffect::Acknowledge(control),
            SessionEffect::Render,
        ],
    )
}

fn submit(
    mut state: SessionState,
    raw: &str,
    timestamp: String,
) -> (SessionState, Vec<SessionEffect>) {
    let text = raw.trim_matches(|ch: char| ch.is_whitespace() || ch == '\u{feff}');
    if text.is_empty() {
        return reject(state, SessionError::EmptyComment);
    }
    if state.has_commented {
        return reject(state, SessionError::AlreadyCommented);
    }

    state.comments.push(Comment {
        text: text.to_string(),
        timestamp,
    });
    state.has_commented = true;

    (
        state,
        vec![
            SessionEffect::ClearInput,
            SessionEffect::Notify(Notice::CommentAdded),
            SessionEffect::Render,
        ],
    )
}

fn reject(state: SessionState, error: SessionError) -> (SessionState, Vec<SessionEffect>) {
    (
        state,
        vec![
            SessionEffect::Rejected(error),
            SessionEffect::Notify(error.notice()),
        ],
    )
}
