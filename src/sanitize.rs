//! Display-safe text for the terminal.
//!
//! Comment text is user input. Before it reaches a ratatui buffer we drop
//! escape sequences and control characters so a comment cannot move the
//! cursor, retitle the window or write to the clipboard. Line breaks and tabs
//! collapse to a single space because comments render on one row.

use std::borrow::Cow;

const ESC: char = '\x1b';
const BEL: char = '\x07';

pub fn sanitize_terminal_text(input: &str) -> Cow<'_, str> {
    if !input.chars().any(is_unsafe) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ESC => match chars.peek() {
                Some('[') => {
                    chars.next();
                    // CSI: parameters and intermediates, then one final byte.
                    while let Some(&next) = chars.peek() {
                        chars.next();
                        if ('\x40'..='\x7e').contains(&next) {
                            break;
                        }
                    }
                }
                Some(']') => {
                    chars.next();
                    // OSC: terminated by BEL or ESC \.
                    while let Some(next) = chars.next() {
                        if next == BEL {
                            break;
                        }
                        if next == ESC && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                Some(_) => {
                    chars.next();
                }
                None => {}
            },
            '\n' | '\r' | '\t' => out.push(' '),
            c if is_control(c) => {}
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn is_unsafe(c: char) -> bool {
    c == ESC || is_control(c)
}

fn is_control(c: char) -> bool {
    c <= '\x1f' || c == '\x7f' || ('\u{0080}'..='\u{009f}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_is_borrowed() {
        let text = "plain <b>text</b> مرحبا";
        assert!(matches!(sanitize_terminal_text(text), Cow::Borrowed(_)));
    }

    #[test]
    fn strips_csi_sequences() {
        assert_eq!(sanitize_terminal_text("a\x1b[2Jb"), "ab");
        assert_eq!(sanitize_terminal_text("\x1b[1;31mred\x1b[0m"), "red");
    }

    #[test]
    fn strips_osc_sequences() {
        assert_eq!(sanitize_terminal_text("x\x1b]52;c;aGVsbG8=\x07y"), "xy");
        assert_eq!(sanitize_terminal_text("x\x1b]0;title\x1b\\y"), "xy");
    }

    #[test]
    fn whitespace_controls_become_spaces() {
        assert_eq!(sanitize_terminal_text("a\nb\tc"), "a b c");
    }

    #[test]
    fn drops_other_controls() {
        assert_eq!(sanitize_terminal_text("a\x07\x00\x7fb\u{009b}"), "ab");
    }
}
