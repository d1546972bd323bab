//! Line model of the message panel
//!
//! The panel is laid out here, not in the renderer, so the update loop can
//! clamp scrolling against exactly the lines that will be drawn.

use chrono::Local;
use slackdeck_core::ChatMessage;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Text shown when a fetch returned nothing
pub const NO_MESSAGES: &str = "No messages found.";

/// One visual row of the message panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelLine {
    /// `HH:MM author in #channel`
    Heading {
        time: String,
        author: String,
        channel: String,
    },
    /// A wrapped slice of the message body
    Body(String),
    /// Separator after each message
    Blank,
    /// The whole panel when there are no messages
    Empty,
}

/// Lay out `messages` for a panel `width` columns wide.
///
/// Bodies are hard-wrapped at `width` terminal columns, so wide characters
/// count double. A `width` of zero disables wrapping.
pub fn panel_lines(messages: &[ChatMessage], width: u16) -> Vec<PanelLine> {
    if messages.is_empty() {
        return vec![PanelLine::Empty];
    }

    let mut lines = Vec::new();
    for message in messages {
        lines.push(PanelLine::Heading {
            time: message
                .timestamp
                .with_timezone(&Local)
                .format("%H:%M")
                .to_string(),
            author: message.author.clone(),
            channel: message.channel_name.clone(),
        });
        for paragraph in message.text.split('\n') {
            lines.extend(wrap(paragraph, width as usize).into_iter().map(PanelLine::Body));
        }
        lines.push(PanelLine::Blank);
    }
    lines
}

/// Largest scroll offset that still fills the panel
pub fn max_scroll(messages: &[ChatMessage], width: u16, height: u16) -> usize {
    panel_lines(messages, width)
        .len()
        .saturating_sub(height as usize)
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.width() <= width {
        return vec![text.to_string()];
    }

    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if row_width + w > width && !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }
        row.push(c);
        row_width += w;
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn test_empty_list() {
        assert_eq!(panel_lines(&[], 80), vec![PanelLine::Empty]);
    }

    #[test]
    fn test_heading_body_blank() {
        let lines = panel_lines(&[message("alice", "hello")], 80);
        assert_eq!(lines.len(), 3);
        match &lines[0] {
            PanelLine::Heading {
                time,
                author,
                channel,
            } => {
                assert_eq!(time.len(), 5);
                assert_eq!(author, "alice");
                assert_eq!(channel, "general");
            }
            other => panic!("expected heading, got {other:?}"),
        }
        assert_eq!(lines[1], PanelLine::Body("hello".to_string()));
        assert_eq!(lines[2], PanelLine::Blank);
    }

    #[test]
    fn test_bodies_wrap_and_split_on_newlines() {
        let lines = panel_lines(&[message("bob", "abcdefgh\nij")], 3);
        let bodies: Vec<_> = lines
            .iter()
            .filter_map(|line| match line {
                PanelLine::Body(text) => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(bodies, ["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn test_wide_characters_wrap_by_columns() {
        let lines = panel_lines(&[message("kenji", "日本語テキストです日本")], 10);
        let bodies: Vec<_> = lines
            .iter()
            .filter_map(|line| match line {
                PanelLine::Body(text) => Some(text.as_str()),
                _ => None,
            })
            .collect();

        assert_eq!(bodies, ["日本語テキ", "ストです日", "本"]);
        assert!(bodies.iter().all(|body| body.width() <= 10));
    }

    #[test]
    fn test_wide_character_alone_when_panel_is_narrower() {
        assert_eq!(wrap("日本", 1), ["日", "本"]);
    }

    #[test]
    fn test_max_scroll_counts_wide_rows() {
        let messages = vec![message("kenji", "日本語テキストです日本")];
        // heading + 3 body rows + blank
        assert_eq!(max_scroll(&messages, 10, 2), 3);
    }

    #[test]
    fn test_max_scroll() {
        let messages = vec![message("a", "one"), message("b", "two")];
        // 2 messages x 3 lines
        assert_eq!(max_scroll(&messages, 80, 4), 2);
        assert_eq!(max_scroll(&messages, 80, 10), 0);
    }
}
