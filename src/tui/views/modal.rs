// Modal overlay rendering: keyboard help, the captured logs and the file
// explorer.

use crate::logging::LogLevel;
use crate::tui::app::App;
use crate::tui::components::palette_panel::scroll_start;
use crate::tui::layout::centered_rect;
use crate::tui::modal::Modal;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const HELP_KEYS: &[(&str, &[(&str, &str)])] = &[
    (
        "Keyboard",
        &[
            ("Enter", "Run command"),
            ("Tab", "Complete command or path"),
            ("↑/↓", "Command history"),
            ("PgUp/PgDn", "Scroll back"),
            ("Shift+↑/↓", "Scroll one line"),
            ("←/→ Home End", "Move cursor"),
            ("Ctrl+U", "Clear input"),
            ("Ctrl+V", "Paste"),
            ("Ctrl+L", "Clear screen"),
        ],
    ),
    (
        "Workspace",
        &[
            ("Ctrl+K", "Command palette"),
            ("Ctrl+T", "New tab"),
            ("Ctrl+D", "Split pane"),
            ("Ctrl+W", "Close pane"),
            ("Alt+←/→", "Switch tab"),
            ("Tab", "Next pane (empty input)"),
        ],
    ),
    (
        "General",
        &[
            ("F1", "Toggle this help"),
            ("F2", "File explorer"),
            ("F12", "Logs"),
            ("Ctrl+Q", "Quit"),
        ],
    ),
];

pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Logs => render_logs(f, app),
        Modal::Explorer => render_explorer(f, app),
    }
}

fn frame_block<'a>(modal: &Modal, app: &App, hint: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(app.colors.accent))
        .style(Style::default().bg(app.colors.background))
        .title(modal.title())
        .title_bottom(Line::from(hint).centered())
}

fn render_help(f: &mut Frame, app: &App) {
    let colors = &app.colors;
    let key_style = Style::default().fg(colors.accent);
    let desc_style = Style::default().fg(colors.foreground);
    let header_style = Style::default()
        .fg(colors.yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for (heading, keys) in HELP_KEYS {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(format!("  {heading}"), header_style)));
        for (key, desc) in *keys {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(format!("{:<14}", key), key_style),
                Span::styled(*desc, desc_style),
            ]));
        }
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  Theme: ", Style::default().fg(colors.dim)),
        Span::styled(app.theme().name(), key_style),
    ]));

    let height = lines.len() as u16 + 2;
    let area = centered_rect(46, height, f.area());
    f.render_widget(Clear, area);
    let block = frame_block(&Modal::Help, app, " F1 or Esc to close ");
    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}

fn render_logs(f: &mut Frame, app: &App) {
    let colors = &app.colors;
    let frame = f.area();
    let area = centered_rect(
        (frame.width * 9 / 10).max(40),
        (frame.height * 8 / 10).max(10),
        frame,
    );
    f.render_widget(Clear, area);

    let block = frame_block(&Modal::Logs, app, " ↑/↓ PgUp/PgDn scroll · F12 or Esc to close ");
    let rows = block.inner(area).height as usize;

    let entries = app.log_buffer.get_all();
    let end = entries.len().saturating_sub(app.log_scroll.offset);
    let start = end.saturating_sub(rows);

    let lines: Vec<Line> = if entries.is_empty() {
        vec![Line::from(Span::styled(
            " No log entries yet",
            Style::default().fg(colors.dim),
        ))]
    } else {
        entries[start..end]
            .iter()
            .map(|entry| {
                let level_color = match entry.level {
                    LogLevel::Error => colors.red,
                    LogLevel::Warn => colors.yellow,
                    LogLevel::Info => colors.green,
                    LogLevel::Debug => colors.blue,
                    LogLevel::Trace => colors.dim,
                };
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", entry.timestamp.format("%H:%M:%S")),
                        Style::default().fg(colors.dim),
                    ),
                    Span::styled(
                        format!("{:<5} ", entry.level.as_str()),
                        Style::default().fg(level_color),
                    ),
                    Span::styled(entry.message.clone(), Style::default().fg(colors.foreground)),
                ])
            })
            .collect()
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_explorer(f: &mut Frame, app: &App) {
    let Some(explorer) = &app.explorer else {
        return;
    };
    let colors = &app.colors;
    let frame = f.area();
    let area = centered_rect(56, (frame.height * 8 / 10).max(8), frame);
    f.render_widget(Clear, area);

    let block = frame_block(
        &Modal::Explorer,
        app,
        " ↑/↓ move · Enter toggle · F2 or Esc to close ",
    )
    .title(Line::from(format!(" {} ", explorer.root())).right_aligned());
    let rows = block.inner(area).height as usize;

    let selected = explorer.selected();
    let lines: Vec<Line> = explorer
        .rows()
        .into_iter()
        .enumerate()
        .skip(scroll_start(selected, rows))
        .take(rows)
        .map(|(i, row)| {
            let mut label = Style::default().fg(colors.node(row.style));
            if i == selected {
                label = label.bg(colors.selection).add_modifier(Modifier::BOLD);
            }
            Line::from(vec![
                Span::styled(format!(" {}", row.prefix), Style::default().fg(colors.border)),
                Span::styled(row.content, label),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}
