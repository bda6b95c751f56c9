// Command palette overlay
//
// Query line on top, filtered items below grouped by their heading. The
// list scrolls to keep the selection visible.

use crate::palette::{CommandPalette, PaletteItem};
use crate::theme::Palette;
use crate::tui::layout::centered_rect;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const WIDTH: u16 = 48;
const HEIGHT: u16 = 16;

/// First visible item so that `selected` stays inside a window of `rows`
pub fn scroll_start(selected: usize, rows: usize) -> usize {
    if rows == 0 {
        return selected;
    }
    selected.saturating_sub(rows - 1)
}

fn item_line(item: &PaletteItem, selected: bool, colors: &Palette) -> Line<'static> {
    let style = if selected {
        Style::default()
            .fg(colors.background)
            .bg(colors.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.foreground)
    };
    Line::from(vec![
        Span::styled(format!(" {:<9}", item.group), Style::default().fg(colors.dim)),
        Span::styled(format!(" {} ", item.label), style),
    ])
}

pub fn render(f: &mut Frame, palette: &CommandPalette, colors: &Palette) {
    let area = centered_rect(WIDTH, HEIGHT, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors.accent))
        .style(Style::default().bg(colors.background))
        .title(" Command Palette ")
        .title_bottom(Line::from(" ↑/↓ select · Enter run · Esc close ").centered());
    let inner: Rect = block.inner(area);
    f.render_widget(block, area);

    let items = palette.filtered();
    let rows = inner.height.saturating_sub(2) as usize;

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" > ", Style::default().fg(colors.accent)),
            Span::styled(palette.query().to_string(), Style::default().fg(colors.foreground)),
        ]),
        Line::raw(""),
    ];
    if items.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No matching commands",
            Style::default().fg(colors.dim),
        )));
    } else {
        let start = scroll_start(palette.selected(), rows);
        lines.extend(
            items
                .iter()
                .enumerate()
                .skip(start)
                .take(rows)
                .map(|(i, item)| item_line(item, i == palette.selected(), colors)),
        );
    }

    f.render_widget(Paragraph::new(lines), inner);
}
