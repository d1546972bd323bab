//! Color palette for the Slack Deck theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Reset;
pub const CARD_BG: Color = Color::Reset;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = PRIMARY;

// --- Brand ---
pub const PRIMARY: Color = Color::Rgb(108, 142, 191);
pub const SECONDARY: Color = Color::Rgb(218, 232, 252);
pub const ACCENT: Color = Color::Rgb(213, 232, 212);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

/// Foreground on top of a highlighted (PRIMARY) background
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::LightGreen;
pub const STATUS_YELLOW: Color = Color::LightYellow;
pub const STATUS_RED: Color = Color::LightRed;

// --- Error banner ---
pub const ERROR_FG: Color = Color::Rgb(248, 206, 204);
pub const ERROR_BORDER: Color = Color::Red;
