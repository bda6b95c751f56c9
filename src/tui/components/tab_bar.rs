// Tab bar component
//
// One row of tab titles; the active tab is highlighted. A leading dot marks
// tabs holding more than one pane.

use crate::tui::app::App;
use crate::workspace::Tab;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Label of one tab: `" 1 Terminal "`, or `" 2 Terminal ·2 "` for split tabs
pub fn tab_label(index: usize, tab: &Tab) -> String {
    if tab.panes.len() > 1 {
        format!(" {} {} ·{} ", index + 1, tab.title, tab.panes.len())
    } else {
        format!(" {} {} ", index + 1, tab.title)
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let active = app.workspace.active_index();

    let mut spans = vec![Span::styled(
        " ▍terminal-ui ",
        Style::default()
            .fg(colors.accent)
            .add_modifier(Modifier::BOLD),
    )];
    for (i, tab) in app.workspace.tabs().iter().enumerate() {
        let style = if i == active {
            Style::default()
                .fg(colors.background)
                .bg(colors.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.dim)
        };
        spans.push(Span::styled(tab_label(i, tab), style));
        spans.push(Span::raw(" "));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(colors.background));
    f.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionOptions, VirtualFs};
    use crate::workspace::Workspace;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[test]
    fn labels_number_tabs_and_count_panes() {
        let mut ws = Workspace::new(Arc::new(VirtualFs::demo()), SessionOptions::default());
        assert_eq!(tab_label(0, ws.active_tab()), " 1 Terminal ");
        ws.split_pane();
        assert_eq!(tab_label(0, ws.active_tab()), " 1 Terminal ·2 ");
    }
}
