//! Shell and typing-animation settings for new panes

use serde::Deserialize;
use std::time::Duration;

use crate::session::SessionOptions;

// ─────────────────────────────────────────────────────────────────────────────
// Shell
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Commands kept per pane; 0 keeps everything
    pub history_limit: usize,
    /// Print the welcome line in new panes
    pub welcome: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history_limit: 1000,
            welcome: true,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileShell {
    pub history_limit: Option<usize>,
    pub welcome: Option<bool>,
}

impl ShellConfig {
    pub fn from_file(file: Option<FileShell>, history_limit_env: Option<usize>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            history_limit: history_limit_env
                .or(file.history_limit)
                .unwrap_or(defaults.history_limit),
            welcome: file.welcome.unwrap_or(defaults.welcome),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Typing animation
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingConfig {
    pub enabled: bool,
    /// Per-char interval; values under 10 are raised to 10
    pub interval_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: 20,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileTyping {
    pub enabled: Option<bool>,
    pub interval_ms: Option<u64>,
}

impl TypingConfig {
    pub fn from_file(file: Option<FileTyping>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            enabled: file.enabled.unwrap_or(defaults.enabled),
            interval_ms: file.interval_ms.unwrap_or(defaults.interval_ms),
        }
    }
}

/// Options every new Session is created with
pub fn session_options(shell: &ShellConfig, typing: &TypingConfig) -> SessionOptions {
    SessionOptions {
        history_limit: (shell.history_limit > 0).then_some(shell.history_limit),
        welcome: shell.welcome,
        typing_interval: typing
            .enabled
            .then(|| Duration::from_millis(typing.interval_ms)),
    }
}
