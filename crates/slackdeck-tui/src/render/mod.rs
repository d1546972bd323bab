//! Main render/view function (View in TEA pattern)


use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use slackdeck_app::menu_state::MenuState;
use slackdeck_app::state::{AppState, Page};

use super::{layout, widgets};
use crate::theme::{icons, palette, styles};

/// Shown until the first resize event has set the layout
pub const INITIALIZING_TEXT: &str = "Initializing...";

/// Render the complete UI (View function in TEA)
///
/// A pure function of `state`: the error view wins over the loading view,
/// which wins over the page content. Header and footer frame all three.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    if !state.layout.is_initialized() {
        frame.render_widget(
            Paragraph::new(INITIALIZING_TEXT).style(styles::text_secondary()),
            area,
        );
        return;
    }

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new(state.identity.as_ref(), state.presence),
        areas.header,
    );

    if let Some(error) = &state.error {
        render_error(frame, areas.content, error);
    } else if state.is_loading {
        render_loading(frame, areas.content, state.spinner_frame);
    } else {
        render_page(frame, areas.content, state);
    }

    frame.render_widget(widgets::Footer, areas.footer);
}

fn render_page(frame: &mut Frame, content: Rect, state: &AppState) {
    match state.page {
        Page::Main => render_menu(frame, content, &state.main_menu),
        Page::SetStatus => render_menu(frame, content, &state.status_menu),
        Page::PresetMessage => render_menu(frame, content, &state.preset_menu),
        Page::Messages => frame.render_widget(
            widgets::MessagePanel::new(&state.messages, state.message_scroll),
            layout::panel_area(content),
        ),
    }
}

fn render_menu(frame: &mut Frame, content: Rect, menu: &MenuState) {
    frame.render_widget(widgets::MenuList::new(menu), layout::list_area(content));
}

/// Rows of the error banner, borders included
const ERROR_BANNER_HEIGHT: u16 = 5;

/// Error banner: replaces the page until dismissed
fn render_error(frame: &mut Frame, content: Rect, error: &str) {
    let banner = Paragraph::new(Line::from(vec![Span::styled(
        format!("Error: {error}"),
        styles::error_text(),
    )]))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(styles::error_block());

    frame.render_widget(banner, centered_rows(layout::list_area(content), ERROR_BANNER_HEIGHT));
}

fn render_loading(frame: &mut Frame, content: Rect, spinner_frame: u64) {
    let line = Line::from(vec![
        Span::styled(icons::spinner(spinner_frame), styles::title()),
        Span::styled(" Loading...", styles::text_secondary()),
    ]);

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        centered_rows(content, 1),
    );
}

/// `height` rows from the vertical middle of `area`
fn centered_rows(area: Rect, height: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    middle
}
