// Terminal pane component
//
// Draws one session: scrollback pinned to the bottom unless scrolled back,
// then the prompt and input line. The focused pane gets the accent border,
// the cursor and any open completion popup.

use super::completion;
use crate::layout::{ProgressBar, TableLineKind};
use crate::session::{CompletionMenu, LineContent, OutputStyle, Session};
use crate::theme::Palette;
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Styled rendering of one scrollback line
pub fn styled_line(
    session: &Session,
    line: &crate::session::Line,
    colors: &Palette,
) -> Line<'static> {
    match &line.content {
        LineContent::Command { prompt, text } => Line::from(vec![
            Span::styled(
                prompt.clone(),
                Style::default()
                    .fg(colors.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(text.clone(), Style::default().fg(colors.foreground)),
        ]),
        LineContent::Output { style, .. } => {
            let mut s = Style::default().fg(colors.output(*style));
            if *style == OutputStyle::Error {
                s = s.add_modifier(Modifier::BOLD);
            }
            Line::from(Span::styled(session.visible_text(line), s))
        }
        LineContent::Progress {
            label,
            percent,
            variant,
        } => {
            let bar = ProgressBar::new(*percent).label(label.clone()).variant(*variant);
            let (filled, empty) = bar.bar_parts();
            Line::from(vec![
                Span::styled(format!("{} [", label), Style::default().fg(colors.foreground)),
                Span::styled(filled, Style::default().fg(colors.progress(*variant))),
                Span::styled(empty, Style::default().fg(colors.dim)),
                Span::styled(
                    format!("] {}", bar.percent_text()),
                    Style::default().fg(colors.foreground),
                ),
            ])
        }
        LineContent::Table(row) => {
            let style = match row.kind {
                TableLineKind::Border => Style::default().fg(colors.border),
                TableLineKind::Header => Style::default()
                    .fg(colors.accent)
                    .add_modifier(Modifier::BOLD),
                // Zebra striping
                TableLineKind::Row(i) if i % 2 == 1 => Style::default()
                    .fg(colors.foreground)
                    .bg(colors.selection),
                TableLineKind::Row(_) => Style::default().fg(colors.foreground),
            };
            Line::from(Span::styled(row.text.clone(), style))
        }
        LineContent::Spinner { .. } => Line::from(Span::styled(
            session.visible_text(line),
            Style::default().fg(colors.blue),
        )),
    }
}

/// Prompt plus the uncommitted input
pub fn input_line(session: &Session, colors: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            session.prompt(),
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            session.input().text().to_string(),
            Style::default().fg(colors.foreground),
        ),
    ])
}

/// Column of the cursor within the input row
pub fn cursor_column(session: &Session) -> u16 {
    let (before, _) = session.input().split_at_cursor();
    (session.prompt().width() + 1 + before.width()) as u16
}

/// Scrollback window `start..end` of `len` lines that fits in `room` rows
/// after scrolling `offset` lines back. The offset is clamped so the window
/// never runs past the oldest line.
pub fn visible_range(len: usize, room: usize, offset: usize) -> (usize, usize) {
    let offset = offset.min(len.saturating_sub(room));
    let end = len - offset;
    (end.saturating_sub(room), end)
}

/// Draw a session. `menu` is the completion popup, shown only when focused.
pub fn render(
    f: &mut Frame,
    area: Rect,
    session: &Session,
    colors: &Palette,
    focused: bool,
    menu: Option<&CompletionMenu>,
) {
    let border = if focused { colors.accent } else { colors.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors.background));
    let inner = block.inner(area);

    let room = inner.height.saturating_sub(1) as usize;
    let lines = session.lines();
    let (start, end) = visible_range(lines.len(), room, session.scroll_offset());
    let below = lines.len() - end;
    let block = if below > 0 {
        block.title_bottom(
            Line::from(Span::styled(
                format!(" ↓ {} more ", below),
                Style::default().fg(colors.yellow),
            ))
            .right_aligned(),
        )
    } else {
        block
    };
    f.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let mut text: Vec<Line> = lines[start..end]
        .iter()
        .map(|l| styled_line(session, l, colors))
        .collect();
    text.push(input_line(session, colors));

    f.render_widget(Paragraph::new(text), inner);

    if focused {
        let row = (inner.y + (end - start) as u16).min(inner.bottom().saturating_sub(1));
        let col = inner.x + cursor_column(session).min(inner.width.saturating_sub(1));
        f.set_cursor_position(Position::new(col, row));
        if let Some(menu) = menu {
            completion::render(f, inner, row, menu, colors);
        }
    }
}
