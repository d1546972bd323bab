//! Custom widget components

mod footer;
mod header;
mod menu_list;
mod message_panel;

pub use footer::{Footer, HELP_TEXT};
pub use header::MainHeader;
pub use menu_list::MenuList;
pub use message_panel::MessagePanel;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `max_width` terminal columns, ending with `…` when
/// anything was dropped
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
