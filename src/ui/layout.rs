use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::UnicodeWidthChar;

/// Areas of the widget body, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyRegions {
    pub votes: Rect,
    pub input: Rect,
    pub message: Rect,
    pub comments: Rect,
}

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_regions(body: Rect) -> BodyRegions {
    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(body);
    BodyRegions {
        votes: rows[0],
        input: rows[1],
        message: rows[2],
        comments: rows[3],
    }
}

/// Like, Dislike and Reset buttons side by side.
pub fn vote_buttons(votes: Rect) -> (Rect, Rect, Rect) {
    let cols = Layout::horizontal([
        Constraint::Percentage(35),
        Constraint::Percentage(35),
        Constraint::Percentage(30),
    ])
    .split(votes);
    (cols[0], cols[1], cols[2])
}

/// Comment input with its Submit button on the right.
pub fn input_row(input: Rect) -> (Rect, Rect) {
    let cols = Layout::horizontal([Constraint::Min(10), Constraint::Length(12)]).split(input);
    (cols[0], cols[1])
}

/// The longest suffix of `text` that fits in `width` columns with one cell
/// left for the cursor, and its display width.
pub fn input_tail(text: &str, width: usize) -> (&str, usize) {
    let budget = width.saturating_sub(1);
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        start = idx;
    }
    (&text[start..], used)
}

/// Rect of at most `width` x `height`, centered in `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_full_height() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height + body.height + footer.height, 24);
        assert_eq!(body.y, 3);
    }

    #[test]
    fn tiny_area_does_not_underflow() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 2));
        assert_eq!(header.height, 2);
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 0);
    }

    #[test]
    fn input_tail_counts_display_width() {
        assert_eq!(input_tail("hello", 10), ("hello", 5));
        assert_eq!(input_tail("hello", 4), ("llo", 3));
        // Wide characters take two cells each.
        assert_eq!(input_tail("a👍👍", 4), ("👍", 2));
        assert_eq!(input_tail("日本語", 6), ("本語", 4));
        assert_eq!(input_tail("", 0), ("", 0));
    }

    #[test]
    fn centered_rect_is_clamped() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect_by_size(area, 40, 4);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.y, 3);
    }
}
