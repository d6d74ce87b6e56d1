use crate::ui::confirm::state::{ConfirmChoice, ConfirmDialogState};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 52;

pub fn render_confirm_dialog(frame: &mut Frame, state: &ConfirmDialogState) {
    let ConfirmDialogState::Visible { question, selected } = state else {
        return;
    };

    let inner_width = DIALOG_WIDTH.saturating_sub(4) as usize;
    // Rough wrap estimate; Paragraph does the real wrapping.
    let question_rows = question.chars().count().div_ceil(inner_width.max(1)).max(1);

    let button = |label: &'static str, choice: ConfirmChoice| {
        let style = if *selected == choice {
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        Span::styled(label, style)
    };

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        question.as_str(),
        Style::default().fg(HEADER_TEXT),
    ))];
    lines.push(Line::from(""));
    lines.push(
        Line::from(vec![
            button("[ Yes ]", ConfirmChoice::Yes),
            Span::raw("   "),
            button("[ No ]", ConfirmChoice::No),
        ])
        .alignment(Alignment::Center),
    );

    let height = (question_rows + 2 + 2) as u16;
    let area = centered_rect_by_size(frame.area(), DIALOG_WIDTH, height);
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(" Confirm ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
