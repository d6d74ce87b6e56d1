use crate::ui::theme::{DISLIKE_COLOR, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, LIKE_COLOR};
use crate::view::ViewModel;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn widget(&self, view: &ViewModel) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Feedback", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("👍 {}", view.like.count),
                Style::default().fg(LIKE_COLOR),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("👎 {}", view.dislike.count),
                Style::default().fg(DISLIKE_COLOR),
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
