// terminal-ui - a faux multi-pane terminal
//
// Startup order: parse CLI, load config, set up tracing, then either run a
// subcommand (exec, config) or hand over to the TUI.

use anyhow::Result;
use clap::Parser;
use terminal_ui::cli::{self, Cli, Commands};
use terminal_ui::config::{Config, LogRotation};
use terminal_ui::logging::{LogBuffer, TuiLogLayer};
use terminal_ui::theme::ThemeStore;
use terminal_ui::tui;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// TUI mode captures events into the log buffer so they never garble the
/// alternate screen; other modes write to stderr. File logging (JSON, rolling)
/// is added on top when enabled. The returned guard flushes the file writer
/// and must live until exit.
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(config: &Config, log_buffer: &LogBuffer, tui_mode: bool) -> Option<WorkerGuard> {
    let default_filter = format!("terminal_ui={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let (file_layer, guard) = if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let dir = &config.logging.file_dir;
                let prefix = &config.logging.file_prefix;
                let appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(dir, prefix),
                    LogRotation::Daily => tracing_appender::rolling::daily(dir, prefix),
                    LogRotation::Never => tracing_appender::rolling::never(dir, prefix),
                };
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    let tui_layer = tui_mode.then(|| TuiLogLayer::new(log_buffer.clone()));
    let stderr_layer =
        (!tui_mode).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A broken config file is fatal, except for `config` itself, which is
    // how the user repairs it
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) if matches!(cli.command, Some(Commands::Config { .. })) => {
            eprintln!("Warning: {e}; using defaults");
            Config::default()
        }
        Err(e) => {
            e.eprint_boxed();
            std::process::exit(1);
        }
    };

    let tui_mode = cli.command.is_none();
    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config, &log_buffer, tui_mode);

    if cli::handle_cli(&cli, &config)? {
        return Ok(());
    }

    // Write the template on first run so users can find the options
    Config::ensure_config_exists();

    let theme = cli.theme.unwrap_or(config.theme);
    let theme_store = ThemeStore::new(theme);

    if let Err(e) = tui::run_tui(config, log_buffer, theme_store).await {
        tracing::error!("TUI error: {:?}", e);
        return Err(e);
    }
    Ok(())
}
