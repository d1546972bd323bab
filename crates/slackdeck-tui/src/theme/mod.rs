//! Centralized theme for the Slack Deck TUI.
//!
//! This module provides:
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions
//! - `icons` - Glyphs (presence dot, spinner frames)

pub mod icons;
pub mod palette;
pub mod styles;
