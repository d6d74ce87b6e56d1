use crate::session::VoteControl;
use crate::ui::app::{App, Focus};
use crate::ui::confirm::{ConfirmChoice, ConfirmIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // The prompt is modal: nothing else reacts until it is answered.
    if app.is_confirming() {
        handle_confirm_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        _ => {}
    }

    if app.focus() == Focus::CommentInput {
        handle_input_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.activate(),
        KeyCode::Left => app.focus_prev(),
        KeyCode::Right => app.focus_next(),
        KeyCode::Char(ch) if !has_command_modifier(key) => match ch.to_ascii_lowercase() {
            'l' => app.vote(VoteControl::Like),
            'd' => app.vote(VoteControl::Dislike),
            'r' => app.request_reset(),
            'c' | 'i' => app.set_focus(Focus::CommentInput),
            'q' => app.request_quit(),
            _ => {}
        },
        _ => {}
    }
}

fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            let _ = app.submit_comment();
        }
        KeyCode::Backspace => app.backspace(),
        KeyCode::Esc => app.set_focus(Focus::Submit),
        KeyCode::Char(ch) if !has_command_modifier(key) => app.type_char(ch),
        _ => {}
    }
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::Char('y' | 'Y') => ConfirmIntent::Answer(ConfirmChoice::Yes),
        KeyCode::Char('n' | 'N') => ConfirmIntent::Answer(ConfirmChoice::No),
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => ConfirmIntent::Toggle,
        KeyCode::Enter => ConfirmIntent::Accept,
        KeyCode::Esc => ConfirmIntent::Cancel,
        _ => return,
    };
    app.dispatch_confirm(intent);
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
