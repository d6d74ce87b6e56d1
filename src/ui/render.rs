use crate::session::Severity;
use crate::ui::app::{App, Focus};
use crate::ui::confirm::render_confirm_dialog;
use crate::ui::footer::{Footer, FooterMode};
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, input_row, input_tail, layout_regions, vote_buttons};
use crate::ui::theme::{
    ACCENT, DISABLED_TEXT, DISLIKE_COLOR, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, INFO_BG,
    LIKE_COLOR, SUCCESS_BG,
};
use crate::view::{CommentListView, ControlView, ViewModel};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let view = app.view();
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header.widget(&view), header);
    frame.render_widget(Clear, body);

    let regions = body_regions(body);
    let (like, dislike, reset) = vote_buttons(regions.votes);
    let focus = app.focus();

    frame.render_widget(
        vote_button("Like 👍", &view.like, LIKE_COLOR, focus == Focus::Like),
        like,
    );
    frame.render_widget(
        vote_button("Dislike 👎", &view.dislike, DISLIKE_COLOR, focus == Focus::Dislike),
        dislike,
    );
    frame.render_widget(button("Reset 🔄", true, focus == Focus::Reset), reset);

    let (input, submit) = input_row(regions.input);
    draw_input(frame, app, &view, input);
    frame.render_widget(
        button("Submit", view.submit_enabled, focus == Focus::Submit),
        submit,
    );

    draw_message(frame, &view, regions.message);
    draw_comments(frame, &view, regions.comments);

    let mode = if app.is_confirming() {
        FooterMode::Confirm
    } else if focus == Focus::CommentInput {
        FooterMode::Typing
    } else {
        FooterMode::Controls
    };
    frame.render_widget(Footer::new(mode).widget(footer), footer);

    render_confirm_dialog(frame, app.confirm_dialog());
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(FOCUS_BORDER).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    }
}

fn vote_button(
    label: &'static str,
    control: &ControlView,
    color: Color,
    focused: bool,
) -> Paragraph<'static> {
    let mut style = if control.enabled {
        Style::default().fg(color)
    } else {
        Style::default().fg(DISABLED_TEXT).add_modifier(Modifier::DIM)
    };
    if control.acknowledged {
        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }

    let line = Line::from(vec![
        Span::styled(label, style),
        Span::styled(format!("  {}", control.count), style),
    ]);
    Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(focused)),
        )
}

fn button(label: &'static str, enabled: bool, focused: bool) -> Paragraph<'static> {
    let style = if enabled {
        Style::default().fg(HEADER_TEXT)
    } else {
        Style::default().fg(DISABLED_TEXT).add_modifier(Modifier::DIM)
    };
    Paragraph::new(Span::styled(label, style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(focused)),
        )
}

fn draw_input(frame: &mut Frame<'_>, app: &App, view: &ViewModel, area: Rect) {
    let focused = app.focus() == Focus::CommentInput;
    let text = app.controller().input();
    let inner_width = area.width.saturating_sub(2) as usize;

    // Keep the end of long input visible.
    let (visible, visible_width) = input_tail(text, inner_width);

    let content = if text.is_empty() && !focused {
        let hint = if view.submit_enabled {
            "Write a comment..."
        } else {
            ""
        };
        Span::styled(hint, Style::default().fg(DISABLED_TEXT))
    } else {
        Span::styled(visible.to_string(), Style::default().fg(HEADER_TEXT))
    };

    frame.render_widget(
        Paragraph::new(content).block(
            Block::default()
                .title(Span::styled(" Comment ", Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(border_style(focused)),
        ),
        area,
    );

    if focused && area.width > 2 && area.height > 2 {
        let x = area.x + 1 + visible_width.min(inner_width) as u16;
        frame.set_cursor_position((x.min(area.x + area.width - 2), area.y + 1));
    }
}

fn draw_message(frame: &mut Frame<'_>, view: &ViewModel, area: Rect) {
    let Some(message) = &view.message else {
        return;
    };
    let bg = match message.severity {
        Severity::Success => SUCCESS_BG,
        Severity::Info => INFO_BG,
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            message.text.clone(),
            Style::default().fg(HEADER_TEXT).bg(bg),
        ))
        .alignment(Alignment::Center),
        area,
    );
}

fn draw_comments(frame: &mut Frame<'_>, view: &ViewModel, area: Rect) {
    let lines: Vec<Line> = match &view.comments {
        CommentListView::Placeholder(text) => vec![Line::from(Span::styled(
            text.clone(),
            Style::default()
                .fg(DISABLED_TEXT)
                .add_modifier(Modifier::ITALIC),
        ))],
        CommentListView::Items(items) => items
            .iter()
            .flat_map(|item| {
                [
                    Line::from(Span::styled(
                        item.text.clone(),
                        Style::default().fg(HEADER_TEXT),
                    )),
                    Line::from(Span::styled(
                        item.timestamp.clone(),
                        Style::default().fg(DISABLED_TEXT),
                    )),
                ]
            })
            .collect(),
    };

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(Span::styled(" Comments ", Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}
