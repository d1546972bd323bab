//! Footer widget with static key-binding help

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Help text, identical on every page
pub const HELP_TEXT: &str = "q/ctrl+c: quit • esc: back • ↑/↓: navigate • enter: select";

pub struct Footer;

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::styled(HELP_TEXT, styles::help()))
            .alignment(Alignment::Center)
            .block(styles::glass_block(false))
            .render(area, buf);
    }
}
