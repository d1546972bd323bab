//! Abstract input key event, independent of terminal library.
//!
//! Keeps slackdeck-app free of crossterm types. The TUI converts
//! `crossterm::event::KeyEvent` into `InputKey` at the boundary.

/// Abstract input key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
}
