//! Single-selection cursor over a static catalog

use crate::catalog::{Catalog, MenuItem};

/// Cursor into one [`Catalog`]. Moves clamp at both ends, no wraparound.
#[derive(Debug, Clone, Copy)]
pub struct MenuState {
    catalog: Catalog,
    selected_index: usize,
}

impl MenuState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selected_index: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected(&self) -> Option<&'static MenuItem> {
        self.catalog.get(self.selected_index)
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.catalog.len() {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }
}
