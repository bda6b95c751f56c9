// CLI module - command-line argument parsing and handlers
//
// Without a subcommand the TUI starts. Subcommands:
// - exec <cmd>...: run commands through a fresh session, print the output
// - config --show | --path | --reset | --edit | --update

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::Command;
use std::sync::Arc;

use crate::config::{Config, VERSION};
use crate::session::{Effect, Session, SessionEnv, SessionOptions, VirtualFs};
use crate::theme::ThemeId;

/// terminal-ui - a faux multi-pane terminal with canned commands
#[derive(Parser, Debug)]
#[command(name = "terminal-ui")]
#[command(version = VERSION)]
#[command(about = "Terminal-styled widgets and a virtual terminal session", long_about = None)]
pub struct Cli {
    /// Theme for this run (overrides config and TERMUI_THEME)
    #[arg(long, global = true, value_parser = parse_theme)]
    pub theme: Option<ThemeId>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run commands in a fresh session and print the output
    Exec {
        /// One command line per argument, e.g. `exec "cd Documents" ls`
        #[arg(required = true)]
        commands: Vec<String>,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Rewrite config with the current layout (preserves user values)
        #[arg(long)]
        update: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

fn parse_theme(s: &str) -> Result<ThemeId, String> {
    s.parse()
}

/// Handle a subcommand. Returns true if one ran (exit after).
pub fn handle_cli(cli: &Cli, config: &Config) -> Result<bool> {
    match &cli.command {
        Some(Commands::Exec { commands }) => {
            let theme = cli.theme.unwrap_or(config.theme);
            let mut stdout = std::io::stdout().lock();
            for line in exec(commands, theme) {
                writeln!(stdout, "{line}").context("writing to stdout")?;
            }
            Ok(true)
        }
        Some(Commands::Config {
            show,
            reset,
            edit,
            update,
            path,
        }) => {
            if *path {
                handle_config_path()?;
            } else if *show {
                handle_config_show(config);
            } else if *reset {
                handle_config_reset()?;
            } else if *edit {
                handle_config_edit()?;
            } else if *update {
                handle_config_update(config)?;
            } else {
                println!("Usage: terminal-ui config [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
                println!("  --update  Rewrite config with the current layout, keeping user values");
                println!("  --path    Show config file path");
            }
            Ok(true)
        }
        None => Ok(false),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// exec
// ─────────────────────────────────────────────────────────────────────────────

/// Run each command line through one session and collect the plain-text
/// output as it appears. `clear` drops nothing already collected. Split and
/// new-tab requests have no meaning here and are ignored.
pub fn exec(commands: &[String], theme: ThemeId) -> Vec<String> {
    let options = SessionOptions {
        welcome: false,
        ..Default::default()
    };
    let mut session = Session::new(Arc::new(VirtualFs::demo()), &options);
    let mut env = SessionEnv {
        theme,
        tab_count: 1,
    };

    let mut out = Vec::new();
    let mut seen = 0;
    for command in commands {
        for effect in session.submit_text(command, &env) {
            match effect {
                Effect::ThemeChange(id) => env.theme = id,
                other => tracing::debug!(?other, "ignored in exec mode"),
            }
        }
        let threshold = seen;
        for line in session.lines().iter().filter(|l| l.id > threshold) {
            out.push(session.visible_text(line));
            seen = line.id;
        }
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// config
// ─────────────────────────────────────────────────────────────────────────────

fn config_path() -> Result<std::path::PathBuf> {
    Config::config_path().context("could not determine config path")
}

fn handle_config_path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}

fn handle_config_show(config: &Config) {
    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = config_path()?;

    if path.exists() {
        eprint!("Config file exists at {}. Overwrite? [y/N] ", path.display());
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("reading confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("writing {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

fn handle_config_edit() -> Result<()> {
    let path = config_path()?;

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .with_context(|| format!("launching {editor}"))?;
    if !status.success() {
        bail!("{editor} exited with {status}");
    }
    Ok(())
}

fn handle_config_update(config: &Config) -> Result<()> {
    let path = config_path()?;

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
        return Ok(());
    }

    let backup_path = path.with_extension("toml.bak");
    match std::fs::copy(&path, &backup_path) {
        Ok(_) => println!("Backup created: {}", backup_path.display()),
        Err(e) => eprintln!("Warning: Could not create backup: {}", e),
    }

    std::fs::write(&path, config.to_toml())
        .with_context(|| format!("writing {}", path.display()))?;

    println!("Config updated with latest structure: {}", path.display());
    println!("Your values have been preserved.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cmds(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn exec_prints_each_command_and_output() {
        let out = exec(&cmds(&["cd Documents", "pwd"]), ThemeId::Default);
        assert_eq!(
            out,
            vec![
                "guest@openknots:~$ cd Documents",
                "guest@openknots:Documents$ pwd",
                "/home/guest/Documents",
            ]
        );
    }

    #[test]
    fn exec_keeps_output_from_before_clear() {
        let out = exec(&cmds(&["whoami", "clear", "whoami"]), ThemeId::Default);
        assert_eq!(
            out,
            vec![
                "guest@openknots:~$ whoami",
                "guest",
                "guest@openknots:~$ whoami",
                "guest",
            ]
        );
    }

    #[test]
    fn exec_follows_theme_changes() {
        let out = exec(&cmds(&["theme nord", "neofetch"]), ThemeId::Default);
        assert!(out.iter().any(|l| l.contains("Theme: Nord")));
    }

    #[test]
    fn parses_theme_and_exec() {
        let cli = Cli::try_parse_from(["terminal-ui", "--theme", "dracula", "exec", "ls", "pwd"])
            .expect("valid args");
        assert_eq!(cli.theme, Some(ThemeId::Dracula));
        assert!(
            matches!(cli.command, Some(Commands::Exec { ref commands }) if commands.len() == 2)
        );
    }

    #[test]
    fn rejects_unknown_theme() {
        assert!(Cli::try_parse_from(["terminal-ui", "--theme", "neon"]).is_err());
    }
}
