mod common;

use common::{controller, counts, TIMESTAMP};
use feedback_widget::config::Messages;
use feedback_widget::session::{SessionError, Severity, Vote, VoteControl};
use feedback_widget::view::CommentListView;
use std::time::Duration;

#[test]
fn full_scenario_like_dislike_comment_reset() {
    let (mut controller, _clock) = controller();

    assert!(controller.cast_like());
    assert_eq!(counts(controller.state()), (1, 0));
    assert_eq!(controller.state().user_vote, Vote::Like);

    assert!(controller.cast_dislike());
    assert_eq!(counts(controller.state()), (0, 1));
    assert_eq!(controller.state().user_vote, Vote::Dislike);

    assert_eq!(controller.submit_comment(" hello "), Ok(()));
    let comments = &controller.state().comments;
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].text, "hello");
    assert_eq!(comments[0].timestamp, TIMESTAMP);
    assert!(controller.state().has_commented);

    assert!(controller.reset(&mut |_: &str| true));
    assert!(controller.state().is_initial());
}

#[test]
fn redundant_like_has_no_side_effects() {
    let (mut controller, _clock) = controller();
    controller.cast_like();
    controller.take_dirty();
    let token = controller.notification().map(|n| n.token);

    assert!(!controller.cast_like());
    assert!(!controller.take_dirty());
    assert_eq!(controller.notification().map(|n| n.token), token);
    assert_eq!(counts(controller.state()), (1, 0));
}

#[test]
fn vote_shows_success_message_and_acknowledgment() {
    let (mut controller, clock) = controller();
    controller.cast_like();

    let message = controller.notification().expect("message shown");
    assert_eq!(message.text, Messages::default().liked);
    assert_eq!(message.severity, Severity::Success);
    assert!(controller.is_acknowledged(VoteControl::Like));
    assert!(!controller.is_acknowledged(VoteControl::Dislike));

    clock.advance(Duration::from_millis(499));
    controller.on_tick();
    assert!(controller.is_acknowledged(VoteControl::Like));

    clock.advance(Duration::from_millis(1));
    controller.on_tick();
    assert!(!controller.is_acknowledged(VoteControl::Like));
    assert!(controller.notification().is_some());
}

#[test]
fn notification_clears_after_three_seconds() {
    let (mut controller, clock) = controller();
    controller.cast_dislike();

    clock.advance(Duration::from_millis(2999));
    controller.on_tick();
    assert!(controller.notification().is_some());

    clock.advance(Duration::from_millis(1));
    controller.take_dirty();
    controller.on_tick();
    assert!(controller.notification().is_none());
    assert!(controller.take_dirty());
}

#[test]
fn newer_message_survives_older_expiry() {
    let (mut controller, clock) = controller();
    controller.cast_like();

    clock.advance(Duration::from_millis(2000));
    let _ = controller.submit_comment("nice");
    let newer = controller.notification().map(|n| n.token);

    // The first message's deadline passes; the second must stay.
    clock.advance(Duration::from_millis(1500));
    controller.on_tick();
    let current = controller.notification().expect("newer message kept");
    assert_eq!(Some(current.token), newer);
    assert_eq!(current.text, Messages::default().comment_added);

    clock.advance(Duration::from_millis(1500));
    controller.on_tick();
    assert!(controller.notification().is_none());
}

#[test]
fn empty_comment_reports_validation_error() {
    let (mut controller, _clock) = controller();
    for text in ["", "   "] {
        assert_eq!(
            controller.submit_comment(text),
            Err(SessionError::EmptyComment)
        );
    }
    assert!(controller.state().comments.is_empty());
    let message = controller.notification().expect("info shown");
    assert_eq!(message.severity, Severity::Info);
    assert_eq!(message.text, Messages::default().empty_comment);
}

#[test]
fn second_comment_reports_already_commented() {
    let (mut controller, _clock) = controller();
    controller.submit_comment("first").unwrap();
    assert_eq!(
        controller.submit_comment("second"),
        Err(SessionError::AlreadyCommented)
    );
    assert_eq!(controller.state().comments.len(), 1);
    assert_eq!(
        controller.notification().map(|n| n.text.as_str()),
        Some(Messages::default().already_commented.as_str())
    );
}

#[test]
fn enter_submits_and_clears_input() {
    let (mut controller, _clock) = controller();
    for ch in "  great widget ".chars() {
        controller.push_input(ch);
    }
    assert_eq!(controller.submit_input(), Ok(()));
    assert_eq!(controller.input(), "");
    assert_eq!(controller.state().comments[0].text, "great widget");
}

#[test]
fn rejected_submit_keeps_input() {
    let (mut controller, _clock) = controller();
    controller.submit_comment("first").unwrap();
    controller.set_input("again");
    assert_eq!(
        controller.submit_input(),
        Err(SessionError::AlreadyCommented)
    );
    assert_eq!(controller.input(), "again");
}

#[test]
fn cancelled_reset_changes_nothing() {
    let (mut controller, _clock) = controller();
    controller.cast_like();
    controller.submit_comment("keep me").unwrap();
    let before = controller.state().clone();
    let message = controller.notification().cloned();
    controller.take_dirty();

    let mut asked = None;
    let reset = controller.reset(&mut |question: &str| {
        asked = Some(question.to_string());
        false
    });

    assert!(!reset);
    assert_eq!(asked.as_deref(), Some(Messages::default().reset_question.as_str()));
    assert_eq!(controller.state(), &before);
    assert_eq!(controller.notification().cloned(), message);
    assert!(!controller.take_dirty());
}

#[test]
fn confirmed_reset_notifies() {
    let (mut controller, _clock) = controller();
    controller.cast_like();
    assert!(controller.reset(&mut |_: &str| true));
    assert_eq!(
        controller.notification().map(|n| n.text.clone()),
        Some(Messages::default().reset_done)
    );
    assert!(controller.state().is_initial());
}

#[test]
fn view_reflects_state() {
    let (mut controller, _clock) = controller();
    let view = controller.view();
    assert_eq!(
        view.comments,
        CommentListView::Placeholder(Messages::default().no_comments)
    );
    assert!(view.submit_enabled);

    controller.cast_dislike();
    controller.submit_comment("<b>bold</b>").unwrap();
    let view = controller.view();
    assert_eq!(view.dislike.count, 1);
    assert!(!view.dislike.enabled);
    assert!(view.like.enabled);
    assert!(view.dislike.acknowledged);
    assert!(!view.submit_enabled);
    let CommentListView::Items(items) = view.comments else {
        panic!("expected comment items");
    };
    assert_eq!(items[0].text, "&lt;b&gt;bold&lt;/b&gt;");
    assert_eq!(controller.state().comments[0].text, "<b>bold</b>");
}

#[test]
fn startup_requests_one_render() {
    let (mut controller, _clock) = controller();
    assert!(controller.take_dirty());
    assert!(!controller.take_dirty());
}
