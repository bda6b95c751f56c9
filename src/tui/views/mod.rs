// Screen composition
//
// Tab bar on top, the active tab's panes in the middle, status bar at the
// bottom; palette, modals and toast are drawn over everything.

mod modal;

use crate::tui::app::App;
use crate::tui::components::{palette_panel, pane, status_bar, tab_bar};
use crate::tui::layout::pane_areas;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(app.colors.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    tab_bar::render(f, chunks[0], app);

    let tab = app.workspace.active_tab();
    let focused = app.workspace.focused();
    let covered = app.command_palette.is_open() || app.modal.is_some();
    for (pane_id, rect) in tab.panes.iter().zip(pane_areas(chunks[1], tab.panes.len())) {
        if let Some(session) = app.workspace.session(*pane_id) {
            // Overlays own the cursor while open
            let has_cursor = *pane_id == focused && !covered;
            let menu = app
                .completion
                .as_ref()
                .filter(|(owner, _)| owner == pane_id)
                .map(|(_, menu)| menu);
            pane::render(f, rect, session, &app.colors, has_cursor, menu);
        }
    }

    status_bar::render(f, chunks[2], app);

    if app.command_palette.is_open() {
        palette_panel::render(f, &app.command_palette, &app.colors);
    }
    if let Some(m) = &app.modal {
        modal::render(f, m, app);
    }
    if let Some(toast) = &app.toast {
        toast.render(f, area, &app.colors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use crate::theme::{ThemeId, ThemeStore};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        let mut config = Config {
            persist_theme: false,
            ..Config::default()
        };
        config.typing.enabled = false;
        App::with_themes_dir(config, LogBuffer::new(), ThemeStore::new(ThemeId::Default), None)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn draws_welcome_prompt_and_status() {
        let app = app();
        let text = screen(&app, 120, 12);
        assert!(text.contains("Welcome to terminal-ui"));
        assert!(text.contains("guest@openknots:~$"));
        assert!(text.contains("1 Terminal"));
        assert!(text.contains("F12 logs"));
    }

    #[test]
    fn draws_overlays() {
        let mut app = app();
        app.command_palette.open();
        assert!(screen(&app, 100, 24).contains("Command Palette"));

        app.command_palette.close();
        app.modal = Some(crate::tui::modal::Modal::Help);
        assert!(screen(&app, 100, 30).contains("Keyboard"));
    }

    #[test]
    fn page_up_reveals_earlier_output() {
        let mut app = app();
        let theme = app.theme();
        app.workspace.run("echo early-marker", theme);
        app.workspace.run("help", theme);
        app.workspace.run("help", theme);
        assert!(!screen(&app, 120, 12).contains("early-marker"));

        for _ in 0..10 {
            press(&mut app, KeyCode::PageUp);
        }
        let text = screen(&app, 120, 12);
        assert!(text.contains("Welcome to terminal-ui"));
        assert!(text.contains("early-marker"));
        assert!(text.contains("more"));
        assert!(text.contains(" ↑"));
    }

    #[test]
    fn tab_completion_draws_a_popup() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Tab);
        let text = screen(&app, 100, 16);
        assert!(text.contains("cat"));
        assert!(text.contains("clear"));
        assert!(text.contains("clear screen"));
    }

    #[test]
    fn explorer_overlay_lists_the_tree() {
        let mut app = app();
        press(&mut app, KeyCode::F(2));
        let text = screen(&app, 100, 24);
        assert!(text.contains("Explorer"));
        assert!(text.contains("Documents"));
        assert!(text.contains(".zshrc"));
    }

    #[test]
    fn survives_tiny_terminal() {
        let mut app = app();
        app.workspace.split_pane();
        app.modal = Some(crate::tui::modal::Modal::Logs);
        screen(&app, 10, 4);
    }
}
