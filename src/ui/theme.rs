use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT_PRIMARY: Color = Color::Rgb(0xe5, 0xe7, 0xeb);
pub const TEXT_MUTED: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const TEXT_DIM: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const ACCENT_BLUE: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const ACCENT_PURPLE: Color = Color::Rgb(0xc0, 0x84, 0xfc);
pub const PROGRESS_FILL: Color = Color::Rgb(0xd1, 0xd5, 0xdb);
pub const PROGRESS_TRACK: Color = Color::Rgb(0x37, 0x41, 0x51);
pub const CORNER: Color = Color::Rgb(0x4b, 0x55, 0x63);
