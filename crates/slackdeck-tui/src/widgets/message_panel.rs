//! Scrollable message panel
//!
//! Draws the lines laid out by `slackdeck_app::message_view`, starting at the
//! scroll offset held in `AppState`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use slackdeck_app::message_view::{panel_lines, PanelLine, NO_MESSAGES};
use slackdeck_core::ChatMessage;

use crate::theme::styles;

pub struct MessagePanel<'a> {
    messages: &'a [ChatMessage],
    scroll: usize,
}

impl<'a> MessagePanel<'a> {
    pub fn new(messages: &'a [ChatMessage], scroll: usize) -> Self {
        Self { messages, scroll }
    }
}

impl Widget for MessagePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(styles::border_active());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let visible = panel_lines(self.messages, inner.width)
            .into_iter()
            .skip(self.scroll)
            .take(inner.height as usize);

        for (row, line) in visible.enumerate() {
            let line = styled_line(line);
            buf.set_line(inner.x, inner.y + row as u16, &line, inner.width);
        }
    }
}

fn styled_line(line: PanelLine) -> Line<'static> {
    match line {
        PanelLine::Heading {
            time,
            author,
            channel,
        } => Line::from(vec![
            Span::styled(time, styles::channel()),
            Span::raw(" "),
            Span::styled(author, styles::title()),
            Span::styled(" in ", styles::text_muted()),
            Span::styled(format!("#{channel}"), styles::channel()),
        ]),
        PanelLine::Body(text) => Line::styled(text, styles::text_primary()),
        PanelLine::Blank => Line::default(),
        PanelLine::Empty => Line::styled(NO_MESSAGES, styles::text_secondary()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use chrono::{TimeZone, Utc};

    fn message(author: &str, text: &str) -> ChatMessage {
        ChatMessage {
            author: author.to_string(),
            text: text.to_string(),
            channel_name: "general".to_string(),
            timestamp: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn test_empty_panel() {
        let mut term = TestTerminal::new();
        term.render_widget(MessagePanel::new(&[], 0), Rect::new(0, 0, 78, 18));
        assert!(term.buffer_contains("No messages found."));
    }

    #[test]
    fn test_heading_and_body() {
        let mut term = TestTerminal::new();
        let messages = vec![message("alice", "hello world")];

        term.render_widget(MessagePanel::new(&messages, 0), Rect::new(0, 0, 78, 18));

        assert!(term.buffer_contains("alice in #general"));
        assert!(term.buffer_contains("hello world"));
    }

    #[test]
    fn test_scroll_skips_lines() {
        let mut term = TestTerminal::new();
        let messages = vec![message("alice", "first"), message("bob", "second")];

        // Skip alice's heading, body and separator
        term.render_widget(MessagePanel::new(&messages, 3), Rect::new(0, 0, 78, 18));

        assert!(!term.buffer_contains("first"));
        assert!(term.buffer_contains("bob in #general"));
        assert!(term.buffer_contains("second"));
    }

    #[test]
    fn test_panel_clips_to_height() {
        let mut term = TestTerminal::new();
        let messages: Vec<_> = (0..10).map(|i| message("alice", &format!("msg-{i}"))).collect();

        term.render_widget(MessagePanel::new(&messages, 0), Rect::new(0, 0, 78, 6));

        assert!(term.buffer_contains("msg-0"));
        assert!(term.buffer_contains("msg-1"));
        assert!(!term.buffer_contains("msg-2"));
    }
}
