// TUI module - Terminal User Interface
//
// Terminal setup and teardown, and the event loop. The loop waits on three
// sources: keyboard/paste input, a periodic tick driving the typing
// animation and toast expiry, and theme-store changes.

pub mod app;
pub mod clipboard;
pub mod components;
pub mod explorer;
pub mod layout;
pub mod modal;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::theme::ThemeStore;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Animation tick
const TICK: Duration = Duration::from_millis(30);

/// Set up the terminal, run the event loop, restore the terminal
pub async fn run_tui(
    config: Config,
    log_buffer: LogBuffer,
    theme_store: ThemeStore,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config, log_buffer, theme_store.clone());
    tracing::info!(theme = %app.theme(), "tui started");

    let result = run_event_loop(&mut terminal, &mut app, &theme_store).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    theme_store: &ThemeStore,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(TICK);
    let mut theme_rx = theme_store.subscribe();
    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            terminal
                .draw(|f| views::draw(f, app))
                .context("Failed to draw terminal")?;
            dirty = false;
        }

        tokio::select! {
            // Keyboard and paste input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key)) => {
                            app.handle_key(key);
                            dirty = true;
                        }
                        Ok(Event::Paste(text)) => {
                            app.paste(&text);
                            dirty = true;
                        }
                        Ok(Event::Resize(..)) => dirty = true,
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                let now = Instant::now();
                dirty |= app.tick(now - last_tick);
                last_tick = now;
            }

            Ok(()) = theme_rx.changed() => {
                let id = *theme_rx.borrow_and_update();
                app.on_theme_changed(id);
                dirty = true;
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!("tui stopped");
    Ok(())
}
