// Completion popup
//
// Suggestions for the word being completed, drawn just above the input row
// of the focused pane. When the pane has no room above the input, the popup
// goes below it instead. The selected suggestion is highlighted.

use crate::session::{CompletionMenu, Suggestion, SuggestionKind};
use crate::theme::Palette;
use crate::tui::components::palette_panel::scroll_start;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Suggestions shown at once; the rest scroll
const MAX_ROWS: usize = 6;

pub fn kind_color(kind: SuggestionKind, colors: &Palette) -> Color {
    match kind {
        SuggestionKind::Command => colors.blue,
        SuggestionKind::Flag => colors.yellow,
        SuggestionKind::Theme => colors.purple,
        SuggestionKind::Directory => colors.cyan,
        SuggestionKind::File => colors.green,
    }
}

fn suggestion_line(
    s: &Suggestion,
    label_width: usize,
    selected: bool,
    colors: &Palette,
) -> Line<'static> {
    let (label_style, desc_style) = if selected {
        let style = Style::default().fg(colors.background).bg(colors.accent);
        (style.add_modifier(Modifier::BOLD), style)
    } else {
        (
            Style::default().fg(kind_color(s.kind, colors)),
            Style::default().fg(colors.dim),
        )
    };
    let pad = label_width.saturating_sub(s.label.width());
    let mut spans = vec![Span::styled(
        format!(" {}{} ", s.label, " ".repeat(pad)),
        label_style,
    )];
    if let Some(desc) = &s.description {
        spans.push(Span::styled(format!("{} ", desc), desc_style));
    }
    Line::from(spans)
}

/// Where the popup goes inside `pane` for an input line on `input_row`
pub fn popup_area(pane: Rect, input_row: u16, rows: u16, width: u16) -> Rect {
    let height = rows + 2;
    let width = width.min(pane.width);
    let above = input_row.saturating_sub(pane.y);
    if above >= height {
        return Rect::new(pane.x, input_row - height, width, height);
    }
    let below = pane.bottom().saturating_sub(input_row + 1);
    Rect::new(pane.x, input_row + 1, width, height.min(below))
}

pub fn render(
    f: &mut Frame,
    pane: Rect,
    input_row: u16,
    menu: &CompletionMenu,
    colors: &Palette,
) {
    let suggestions = menu.suggestions();
    let label_width = suggestions.iter().map(|s| s.label.width()).max().unwrap_or(0);
    let desc_width = suggestions
        .iter()
        .filter_map(|s| s.description.as_deref())
        .map(|d| d.width() + 1)
        .max()
        .unwrap_or(0);
    let rows = suggestions.len().min(MAX_ROWS);
    let width = (label_width + desc_width + 4) as u16;

    let area = popup_area(pane, input_row, rows as u16, width);
    if area.height < 3 {
        return;
    }
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.background));
    let visible = block.inner(area).height as usize;

    let selected = menu.selected().unwrap_or(0);
    let lines: Vec<Line> = suggestions
        .iter()
        .enumerate()
        .skip(scroll_start(selected, visible))
        .take(visible)
        .map(|(i, s)| suggestion_line(s, label_width, menu.selected() == Some(i), colors))
        .collect();
    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn popup_prefers_the_space_above_the_input() {
        let pane = Rect::new(0, 0, 40, 20);
        assert_eq!(popup_area(pane, 15, 3, 30), Rect::new(0, 10, 30, 5));
    }

    #[test]
    fn popup_flips_below_and_shrinks_to_fit() {
        let pane = Rect::new(0, 0, 20, 10);
        assert_eq!(popup_area(pane, 2, 3, 30), Rect::new(0, 3, 20, 5));
        assert_eq!(popup_area(pane, 2, 6, 10), Rect::new(0, 3, 10, 7));
    }
}
