//! Configuration for the terminal demo
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/terminal-ui/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::session::SessionOptions;
use crate::theme::ThemeId;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;
mod session;


pub use logging::{FileLogging, LogRotation, LoggingConfig};
pub use session::{FileShell, FileTyping, ShellConfig, TypingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ENV_THEME: &str = "TERMUI_THEME";
pub const ENV_HISTORY_LIMIT: &str = "TERMUI_HISTORY_LIMIT";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Theme applied at startup
    pub theme: ThemeId,

    /// Write theme changes made in the UI back to the config file
    pub persist_theme: bool,

    pub shell: ShellConfig,
    pub typing: TypingConfig,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeId::default(),
            persist_theme: true,
            shell: ShellConfig::default(),
            typing: TypingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Config file shape; every field optional so partial files work
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub theme: Option<String>,
    pub persist_theme: Option<bool>,
    pub shell: Option<FileShell>,
    pub typing: Option<FileTyping>,
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// A config file that exists but cannot be used
#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            Self::Parse { path, source } => {
                write!(f, "cannot parse {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

impl ConfigError {
    /// Print the error the way startup reports it, before any terminal setup
    pub fn eprint_boxed(&self) {
        let (title, path, detail) = match self {
            Self::Read { path, source } => (
                "CONFIG ERROR - Cannot read configuration file  ",
                path,
                source.to_string(),
            ),
            Self::Parse { path, source } => (
                "CONFIG ERROR - Failed to parse configuration file",
                path,
                source.to_string(),
            ),
        };
        eprintln!("\n╔════════════════════════════════════════════════════╗");
        eprintln!("║  {}║", title);
        eprintln!("╚════════════════════════════════════════════════════╝\n");
        eprintln!("  File: {}\n", path.display());
        eprintln!("  Error: {}\n", detail.trim_end());
        if matches!(self, Self::Parse { .. }) {
            eprintln!("  Tip: Check for:\n");
            eprintln!("    - Missing quotes around string values");
            eprintln!("    - Invalid boolean values (use true/false)");
            eprintln!("    - Typos in section names\n");
            eprintln!("  To reset, run `terminal-ui config --reset`.\n");
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Paths
// ─────────────────────────────────────────────────────────────────────────────

/// ~/.config/terminal-ui, Unix-style on every platform
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join("terminal-ui"))
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// ~/.config/terminal-ui/config.toml
    pub fn config_path() -> Option<PathBuf> {
        config_dir().map(|p| p.join("config.toml"))
    }

    /// Write the default template on first run. Failures are ignored; the
    /// file is optional.
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };
        if path.exists() {
            return;
        }
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Read and parse a config file. A missing file is an empty config.
    pub fn load_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Merge a parsed file with environment lookups and defaults
    pub fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // Theme: env > file > default; an unknown name falls back to default
        let theme = match env(ENV_THEME).or(file.theme) {
            Some(name) => name.parse::<ThemeId>().unwrap_or_else(|e: String| {
                eprintln!("warning: {e}, using {}", ThemeId::default());
                ThemeId::default()
            }),
            None => ThemeId::default(),
        };

        let persist_theme = file.persist_theme.unwrap_or(true);

        let history_limit = env(ENV_HISTORY_LIMIT).and_then(|v| v.trim().parse().ok());
        let shell = ShellConfig::from_file(file.shell, history_limit);
        let typing = TypingConfig::from_file(file.typing);
        let logging = LoggingConfig::from_file(file.logging);

        Self {
            theme,
            persist_theme,
            shell,
            typing,
            logging,
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn load() -> Result<Self, ConfigError> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Options for every new Session
    pub fn session_options(&self) -> SessionOptions {
        session::session_options(&self.shell, &self.typing)
    }
}
