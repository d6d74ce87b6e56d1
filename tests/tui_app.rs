mod common;

use common::controller;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use feedback_widget::ui::app::{App, Focus};
use feedback_widget::ui::input::handle_key;
use feedback_widget::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn app() -> App {
    App::new(controller().0)
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn shortcut_keys_vote() {
    let mut app = app();
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.controller().state().like_count, 1);
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.controller().state().like_count, 0);
    assert_eq!(app.controller().state().dislike_count, 1);
}

#[test]
fn tab_cycles_focus() {
    let mut app = app();
    assert_eq!(app.focus(), Focus::Like);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Dislike);
    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus(), Focus::Submit);
}

#[test]
fn typing_and_enter_submit_comment() {
    let mut app = app();
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.focus(), Focus::CommentInput);

    // Shortcut letters are text while typing.
    type_text(&mut app, "lovely ");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.controller().input(), "lovely");
    assert_eq!(app.controller().state().like_count, 0);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.controller().state().comments[0].text, "lovely");
    assert_eq!(app.controller().input(), "");
}

#[test]
fn disabled_submit_ignores_activation() {
    let mut app = app();
    press(&mut app, KeyCode::Char('c'));
    type_text(&mut app, "first");
    press(&mut app, KeyCode::Enter);
    let first_token = app.controller().notification().map(|n| n.token);

    app.set_focus(Focus::Submit);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.controller().notification().map(|n| n.token), first_token);
    assert_eq!(app.controller().state().comments.len(), 1);
}

#[test]
fn reset_waits_for_confirmation() {
    let mut app = app();
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('r'));
    assert!(app.is_confirming());

    // Modal: votes are blocked while asking.
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.controller().state().dislike_count, 0);

    press(&mut app, KeyCode::Char('y'));
    assert!(!app.is_confirming());
    assert!(app.controller().state().is_initial());
}

#[test]
fn enter_on_default_choice_cancels_reset() {
    let mut app = app();
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('r'));
    press(&mut app, KeyCode::Enter);
    assert!(!app.is_confirming());
    assert_eq!(app.controller().state().like_count, 1);
}

#[test]
fn ctrl_q_quits_even_while_typing() {
    let mut app = app();
    app.set_focus(Focus::CommentInput);
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());
    assert_eq!(app.controller().input(), "");
}

#[test]
fn renders_counts_placeholder_and_message() {
    let mut app = app();
    let initial = screen(&app);
    assert!(initial.contains("No comments yet."));
    assert!(initial.contains("Feedback"));

    press(&mut app, KeyCode::Char('l'));
    let after = screen(&app);
    assert!(after.contains("Thanks for the like!"));
}

#[test]
fn renders_escaped_comment_and_dialog() {
    let mut app = app();
    press(&mut app, KeyCode::Char('c'));
    type_text(&mut app, "<i>hi</i>");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    let rendered = screen(&app);
    assert!(rendered.contains("&lt;i&gt;hi&lt;/i&gt;"));

    press(&mut app, KeyCode::Char('r'));
    let rendered = screen(&app);
    assert!(rendered.contains("Confirm"));
    assert!(rendered.contains("[ Yes ]"));
}

#[test]
fn dirty_only_after_visible_change() {
    let mut app = app();
    assert!(app.take_dirty());
    assert!(!app.take_dirty());
    press(&mut app, KeyCode::Char('l'));
    assert!(app.take_dirty());
    press(&mut app, KeyCode::Char('l'));
    assert!(!app.take_dirty());
}

#[test]
fn cursor_follows_display_width_of_wide_input() {
    let mut app = app();
    press(&mut app, KeyCode::Char('c'));
    type_text(&mut app, "👍a");

    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    terminal.draw(|frame| draw(frame, &app)).unwrap();
    let cursor = terminal.get_cursor_position().unwrap();
    // Border cell, then two cells for the emoji and one for `a`.
    assert_eq!((cursor.x, cursor.y), (4, 7));
}

#[test]
fn escape_leaves_input_without_quitting() {
    let mut app = app();
    press(&mut app, KeyCode::Char('c'));
    type_text(&mut app, "draft");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.focus(), Focus::Submit);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.focus(), Focus::Submit);
    assert!(!app.should_quit());
    assert_eq!(app.controller().input(), "draft");
}
