//! Screen dimensions recorded from resize events
//!
//! The update loop stores the terminal size here so scrolling can be clamped
//! without the renderer holding state. The renderer derives the same areas.

/// Rows used by the header block
pub const HEADER_HEIGHT: u16 = 3;
/// Rows used by the footer block
pub const FOOTER_HEIGHT: u16 = 3;
/// Columns trimmed from the terminal width for menu lists
pub const LIST_WIDTH_MARGIN: u16 = 10;
/// Columns trimmed from the terminal width for the message panel
pub const PANEL_WIDTH_MARGIN: u16 = 4;

/// Terminal size; zero until the first resize arrives
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutDims {
    pub width: u16,
    pub height: u16,
}

impl LayoutDims {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// False until the first resize event has been processed
    pub fn is_initialized(&self) -> bool {
        self.width > 0
    }

    /// Rows between header and footer
    pub fn content_height(&self) -> u16 {
        self.height.saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT)
    }

    /// `(width, height)` of a menu list
    pub fn list_size(&self) -> (u16, u16) {
        (
            self.width.saturating_sub(LIST_WIDTH_MARGIN),
            self.content_height(),
        )
    }

    /// `(width, height)` of the message panel viewport
    pub fn panel_size(&self) -> (u16, u16) {
        (
            self.width.saturating_sub(PANEL_WIDTH_MARGIN),
            self.content_height(),
        )
    }
}
