//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;
use crate::theme::ThemeId;

/// Quote and escape a string the way TOML expects
fn toml_str(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

impl Config {
    pub fn to_toml(&self) -> String {
        format!(
            r#"# terminal-ui configuration

# Theme: {themes}
theme = {theme}

# Save theme changes made in the UI (palette or `theme` command) back here
persist_theme = {persist}

[shell]
# Commands remembered per pane (0 = unlimited)
history_limit = {history_limit}
# Greet new panes with a welcome line
welcome = {welcome}

[typing]
# Type the welcome line out instead of printing it at once
enabled = {typing_enabled}
# Milliseconds per character (minimum 10)
interval_ms = {interval_ms}

[logging]
# trace, debug, info, warn, error (RUST_LOG overrides)
level = {level}
# JSON log files in addition to the in-app log view
file_enabled = {file_enabled}
file_dir = {file_dir}
# hourly, daily, never
file_rotation = {rotation}
file_prefix = {prefix}
"#,
            themes = ThemeId::available(),
            theme = toml_str(self.theme.as_str()),
            persist = self.persist_theme,
            history_limit = self.shell.history_limit,
            welcome = self.shell.welcome,
            typing_enabled = self.typing.enabled,
            interval_ms = self.typing.interval_ms,
            level = toml_str(&self.logging.level),
            file_enabled = self.logging.file_enabled,
            file_dir = toml_str(&self.logging.file_dir.to_string_lossy()),
            rotation = toml_str(self.logging.file_rotation.as_str()),
            prefix = toml_str(&self.logging.file_prefix),
        )
    }

    /// Write the config to the standard path, creating the directory
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.to_toml())
    }
}
