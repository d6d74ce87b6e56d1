//! Line-oriented front-end: one command per line on the input, the rendered
//! view on the output. Useful for scripting and for terminals where the full
//! UI is not wanted.
//!
//! `reset` asks on the output and blocks until a line is read back.

use crate::controller::{ConfirmPrompt, ViewController};
use crate::session::Severity;
use crate::view::{render_comment_list_html, CommentListView, ViewModel};
use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  like              vote like
  dislike           vote dislike
  comment <text>    submit your comment (once per session)
  reset             clear vote and comment (asks first)
  show              print the current view
  html              print the comment list as HTML
  json              print the session state as JSON
  help              this text
  quit              leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Like,
    Dislike,
    Comment(String),
    Reset,
    Show,
    Html,
    Json,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// Returns `None` for blank lines.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            return None;
        }
        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (trimmed, ""),
        };
        let command = match word.to_ascii_lowercase().as_str() {
            "like" | "l" => Command::Like,
            "dislike" | "d" => Command::Dislike,
            // Raw rest of the line; the controller trims and validates.
            "comment" | "c" => Command::Comment(rest.to_string()),
            "reset" | "r" => Command::Reset,
            "show" | "s" => Command::Show,
            "html" => Command::Html,
            "json" => Command::Json,
            "help" | "h" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(word.to_string()),
        };
        Some(command)
    }
}

/// Reads one answer line. Anything but y/yes is a no, including EOF and errors.
struct LinePrompt<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
    error: Option<io::Error>,
}

impl<R: BufRead, W: Write> ConfirmPrompt for LinePrompt<'_, R, W> {
    fn confirm(&mut self, question: &str) -> bool {
        let asked = write!(self.output, "{question} [y/N] ").and_then(|_| self.output.flush());
        if let Err(err) = asked {
            self.error = Some(err);
            return false;
        }
        let mut answer = String::new();
        match read_line_lossy(self.input, &mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(err) => {
                self.error = Some(err);
                false
            }
        }
    }
}

/// Like `BufRead::read_line`, but invalid UTF-8 is replaced instead of failing.
fn read_line_lossy<R: BufRead + ?Sized>(input: &mut R, line: &mut String) -> io::Result<usize> {
    let mut raw = Vec::new();
    let read = input.read_until(b'\n', &mut raw)?;
    line.push_str(&String::from_utf8_lossy(&raw));
    Ok(read)
}

pub fn run_plain<R: BufRead, W: Write>(
    controller: &mut ViewController,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    tracing::info!("plain front-end started");
    output.write_all(render_plain(&controller.view()).as_bytes())?;
    controller.take_dirty();

    let mut line = String::new();
    loop {
        line.clear();
        if read_line_lossy(&mut input, &mut line)? == 0 {
            break;
        }
        controller.on_tick();
        let Some(command) = Command::parse(&line) else {
            continue;
        };

        match command {
            Command::Like => {
                controller.cast_like();
            }
            Command::Dislike => {
                controller.cast_dislike();
            }
            Command::Comment(text) => {
                let _ = controller.submit_comment(&text);
            }
            Command::Reset => {
                let mut prompt = LinePrompt {
                    input: &mut input,
                    output: &mut output,
                    error: None,
                };
                controller.reset(&mut prompt);
                if let Some(err) = prompt.error {
                    return Err(err);
                }
            }
            Command::Show => {
                output.write_all(render_plain(&controller.view()).as_bytes())?;
                controller.take_dirty();
                continue;
            }
            Command::Html => {
                writeln!(output, "{}", render_comment_list_html(&controller.view().comments))?;
                continue;
            }
            Command::Json => {
                let json = serde_json::to_string_pretty(controller.state())
                    .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
                writeln!(output, "{json}")?;
                continue;
            }
            Command::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
            Command::Unknown(word) => {
                writeln!(output, "Unknown command '{word}'. Type 'help' for commands.")?;
                continue;
            }
        }

        if controller.take_dirty() {
            output.write_all(render_plain(&controller.view()).as_bytes())?;
        }
        output.flush()?;
    }

    output.flush()?;
    tracing::info!("plain front-end stopped");
    Ok(())
}

/// Text rendering of the view: counts, control availability, message, comments.
pub fn render_plain(view: &ViewModel) -> String {
    let availability = |enabled: bool| if enabled { "enabled" } else { "disabled" };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Likes: {}  Dislikes: {}",
        view.like.count, view.dislike.count
    );
    let _ = writeln!(
        out,
        "[like: {}] [dislike: {}] [submit: {}]",
        availability(view.like.enabled),
        availability(view.dislike.enabled),
        availability(view.submit_enabled)
    );
    if let Some(message) = &view.message {
        let marker = match message.severity {
            Severity::Success => "✓",
            Severity::Info => "ℹ",
        };
        let _ = writeln!(out, "{marker} {}", message.text);
    }
    match &view.comments {
        CommentListView::Placeholder(text) => {
            let _ = writeln!(out, "Comments: {text}");
        }
        CommentListView::Items(items) => {
            let _ = writeln!(out, "Comments:");
            for item in items {
                let _ = writeln!(out, "  - {} ({})", item.text, item.timestamp);
            }
        }
    }
    out
}
