use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Cyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const PROMPT: Color = Color::Blue;
pub const TABLE_HEADER: Color = Color::Red;
pub const TABLE_CELL: Color = Color::Yellow;
pub const SPINNER: Color = Color::Magenta;
