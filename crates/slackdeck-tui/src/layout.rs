//! Screen layout definitions for the TUI
//!
//! Areas are derived from the same constants the app crate uses for
//! `LayoutDims`, so the rendered panel always matches the scroll bounds.

use ratatui::layout::{Constraint, Layout, Rect};
use slackdeck_app::layout::{FOOTER_HEIGHT, HEADER_HEIGHT, LIST_WIDTH_MARGIN, PANEL_WIDTH_MARGIN};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header block (title, identity, presence)
    pub header: Rect,

    /// Page content between header and footer
    pub content: Rect,

    /// Footer block (key-binding help)
    pub footer: Rect,
}

/// Split the full screen into header, content and footer
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
        footer: chunks[2],
    }
}

/// Menu list area, centered inside the content area
pub fn list_area(content: Rect) -> Rect {
    centered_width(content, content.width.saturating_sub(LIST_WIDTH_MARGIN))
}

/// Outer message panel area. Its side borders leave an inner width of
/// `width - PANEL_WIDTH_MARGIN`.
pub fn panel_area(content: Rect) -> Rect {
    centered_width(
        content,
        content.width.saturating_sub(PANEL_WIDTH_MARGIN.saturating_sub(2)),
    )
}

fn centered_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
