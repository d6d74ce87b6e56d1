use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which key hints apply right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterMode {
    Controls,
    Typing,
    Confirm,
}

impl FooterMode {
    fn hints(self) -> &'static str {
        match self {
            FooterMode::Controls => {
                " Tab: Focus │ Enter: Activate │ L: Like │ D: Dislike │ C: Comment │ R: Reset │ Q: Quit"
            }
            FooterMode::Typing => " Enter: Submit │ Esc: Leave input │ Tab: Next │ Ctrl+Q: Quit",
            FooterMode::Confirm => " Y: Yes │ N/Esc: No │ ←/→: Choose │ Enter: Answer",
        }
    }
}

pub struct Footer {
    mode: FooterMode,
}

impl Footer {
    pub fn new(mode: FooterMode) -> Self {
        Self { mode }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.mode.hints();
        let version = format!("v{VERSION} ");

        // Char count, not byte count: the separators are multi-byte.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
