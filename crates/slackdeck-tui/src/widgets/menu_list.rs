//! Menu list widget
//!
//! Renders one catalog as a bordered list of two-line entries (name and
//! description) with the cursor entry highlighted.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{List, ListItem, ListState, StatefulWidget, Widget},
};

use slackdeck_app::menu_state::MenuState;

use crate::theme::styles;

use super::truncate_to_width;

const HIGHLIGHT_SYMBOL: &str = "│ ";

pub struct MenuList<'a> {
    menu: &'a MenuState,
}

impl<'a> MenuList<'a> {
    pub fn new(menu: &'a MenuState) -> Self {
        Self { menu }
    }
}

impl Widget for MenuList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let catalog = self.menu.catalog();
        let block = styles::glass_block(true)
            .title(Span::styled(format!(" {} ", catalog.title), styles::title()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let text_width = (inner.width as usize).saturating_sub(HIGHLIGHT_SYMBOL.chars().count());
        let items: Vec<ListItem> = catalog
            .items
            .iter()
            .map(|item| {
                ListItem::new(Text::from(vec![
                    Line::styled(truncate_to_width(item.name, text_width), styles::text_primary()),
                    Line::styled(
                        truncate_to_width(item.description, text_width),
                        styles::text_secondary(),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(styles::focused_selected())
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        // Fresh list state each frame: the offset follows the cursor
        let mut list_state = ListState::default().with_selected(Some(self.menu.selected_index()));
        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use slackdeck_app::catalog::{MAIN_MENU, PRESET_MENU, STATUS_MENU};

    #[test]
    fn test_menu_shows_title_and_items() {
        let mut term = TestTerminal::new();
        let menu = MenuState::new(MAIN_MENU);

        term.render_widget(MenuList::new(&menu), Rect::new(0, 0, 70, 18));

        assert!(term.buffer_contains("Quick Actions"));
        assert!(term.buffer_contains("View Messages"));
        assert!(term.buffer_contains("View recent messages from Slack"));
        assert!(term.buffer_contains("Quit"));
    }

    #[test]
    fn test_selected_item_has_marker() {
        let mut term = TestTerminal::new();
        let mut menu = MenuState::new(STATUS_MENU);
        menu.select_next();

        term.render_widget(MenuList::new(&menu), Rect::new(0, 0, 70, 18));

        assert!(term.buffer_contains("│ Away"));
        assert!(!term.buffer_contains("│ Active"));
    }

    #[test]
    fn test_cursor_stays_visible_in_short_area() {
        let mut term = TestTerminal::new();
        let mut menu = MenuState::new(PRESET_MENU);
        for _ in 0..3 {
            menu.select_next();
        }

        // Room for two entries only
        term.render_widget(MenuList::new(&menu), Rect::new(0, 0, 70, 6));

        assert!(term.buffer_contains("Lunch Break"));
        assert!(!term.buffer_contains("Be Right Back"));
    }
}
