use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x66, 0x7e, 0xea);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUS_BORDER: Color = Color::Rgb(0x66, 0x7e, 0xea);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const DISABLED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const LIKE_COLOR: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const DISLIKE_COLOR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const SUCCESS_BG: Color = Color::Rgb(0x14, 0x53, 0x2d);
pub const INFO_BG: Color = Color::Rgb(0x1e, 0x3a, 0x8a);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
