// Status bar component
//
// Bottom row: focused pane's cwd, theme, tab/pane counts and key hints.
// Hints shrink with the terminal width. Badges sit at the right edge.

use super::badge::{badge, BadgeVariant};
use crate::session::vfs;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn status_text(app: &App, width: u16) -> String {
    let ws = &app.workspace;
    let cwd = ws
        .focused_session()
        .map(|s| vfs::display_path(s.cwd()))
        .unwrap_or_default();
    let panes = ws.active_tab().panes.len();

    match Breakpoint::from_width(width) {
        Breakpoint::Compact => format!(" {} │ {}", cwd, app.theme().name()),
        Breakpoint::Normal => format!(
            " {} │ {} │ tab {}/{} │ F1 help",
            cwd,
            app.theme().name(),
            ws.active_index() + 1,
            ws.tab_count(),
        ),
        Breakpoint::Wide => format!(
            " {} │ {} │ tab {}/{} │ {} pane{} │ {}",
            cwd,
            app.theme().name(),
            ws.active_index() + 1,
            ws.tab_count(),
            panes,
            if panes == 1 { "" } else { "s" },
            "^K palette  ^T tab  ^D split  ^W close  F1 help  F2 files  F12 logs",
        ),
    }
}

/// Right-hand badges: how far the focused pane is scrolled back and, on
/// wide terminals, the version
pub fn status_badges(app: &App, width: u16) -> Vec<(String, BadgeVariant)> {
    let mut badges = Vec::new();
    let scrolled = app
        .workspace
        .focused_session()
        .map_or(0, |s| s.scroll_offset());
    if scrolled > 0 {
        badges.push((format!("↑{}", scrolled), BadgeVariant::Warning));
    }
    if Breakpoint::from_width(width) == Breakpoint::Wide {
        badges.push((
            format!("v{}", env!("CARGO_PKG_VERSION")),
            BadgeVariant::Neutral,
        ));
    }
    badges
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    for (text, variant) in status_badges(app, area.width) {
        spans.push(Span::raw(" "));
        spans.push(badge(&text, variant, &app.colors));
    }
    let badges = Line::from(spans).right_aligned();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(badges.width() as u16)])
        .split(area);

    let line = Line::from(Span::styled(
        status_text(app, area.width),
        Style::default().fg(app.colors.dim),
    ));
    let style = Style::default().bg(app.colors.background);
    f.render_widget(Paragraph::new(line).style(style), chunks[0]);
    f.render_widget(Paragraph::new(badges).style(style), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use crate::theme::{ThemeId, ThemeStore};
    use pretty_assertions::assert_eq;

    #[test]
    fn text_shrinks_with_width() {
        let config = Config {
            persist_theme: false,
            ..Config::default()
        };
        let app =
            App::with_themes_dir(config, LogBuffer::new(), ThemeStore::new(ThemeId::Nord), None);
        assert_eq!(status_text(&app, 40), " /home/guest │ Nord");
        assert_eq!(status_text(&app, 80), " /home/guest │ Nord │ tab 1/1 │ F1 help");
        assert!(status_text(&app, 120).contains("1 pane │"));
    }

    #[test]
    fn badges_show_scrollback_and_version() {
        let config = Config {
            persist_theme: false,
            ..Config::default()
        };
        let mut app =
            App::with_themes_dir(config, LogBuffer::new(), ThemeStore::new(ThemeId::Nord), None);
        assert!(status_badges(&app, 80).is_empty());

        app.workspace.run("help", ThemeId::Nord);
        if let Some(session) = app.workspace.focused_session_mut() {
            session.scroll_up(3);
        }
        let badges = status_badges(&app, 120);
        assert_eq!(badges[0], ("↑3".to_string(), BadgeVariant::Warning));
        assert_eq!(badges[1].1, BadgeVariant::Neutral);
        assert!(badges[1].0.starts_with('v'));
    }
}
