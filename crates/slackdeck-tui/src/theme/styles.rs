//! Semantic style builders for the Slack Deck theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use slackdeck_core::Presence;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

/// App title and message authors
pub fn title() -> Style {
    Style::default()
        .fg(palette::PRIMARY)
        .add_modifier(Modifier::BOLD)
}

/// Timestamps and channel names in the message panel
pub fn channel() -> Style {
    Style::default().fg(palette::ACCENT)
}

/// Key-binding help in the footer
pub fn help() -> Style {
    Style::default()
        .fg(palette::SECONDARY)
        .add_modifier(Modifier::ITALIC)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Selection styles ---

/// Highlighted menu entry
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::PRIMARY)
        .add_modifier(Modifier::BOLD)
}

// --- Error styles ---
pub fn error_text() -> Style {
    Style::default()
        .fg(palette::ERROR_FG)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn error_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::ERROR_BORDER))
}

// --- Presence indicator mapping ---

/// Color of the header presence dot and label
pub fn presence(presence: Presence) -> Style {
    let color = match presence {
        Presence::Active => palette::STATUS_GREEN,
        Presence::Away => palette::STATUS_YELLOW,
        Presence::DoNotDisturb => palette::STATUS_RED,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
