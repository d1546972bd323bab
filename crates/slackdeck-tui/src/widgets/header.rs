//! Header bar widget
//!
//! Shows the app title, the logged-in user and the presence indicator.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use slackdeck_core::{Identity, Presence};

use crate::theme::{icons, palette, styles};

use super::truncate_to_width;

const TITLE_PREFIX: &str = "Slack TUI - Logged in as: ";

/// Header showing the identity and presence, constant across pages
pub struct MainHeader<'a> {
    identity: Option<&'a Identity>,
    presence: Presence,
}

impl<'a> MainHeader<'a> {
    pub fn new(identity: Option<&'a Identity>, presence: Presence) -> Self {
        Self { identity, presence }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let presence_text = format!("{} {}", icons::PRESENCE_DOT, self.presence.label());
        let separator = " | ";

        // The display name gives way first on narrow terminals
        let fixed = 1 + TITLE_PREFIX.len() + separator.len() + self.presence.label().len() + 2;
        let name = self
            .identity
            .map(|identity| identity.display_name.as_str())
            .unwrap_or_default();
        let name = truncate_to_width(name, (inner.width as usize).saturating_sub(fixed));

        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(format!("{TITLE_PREFIX}{name}"), styles::title()),
            Span::styled(separator, styles::text_muted()),
            Span::styled(presence_text, styles::presence(self.presence)),
        ]);

        buf.set_line(inner.x, inner.y, &line, inner.width);
    }
}
