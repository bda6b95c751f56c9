//! Catppuccin Mocha - Soothing pastel, darkest flavor

pub const THEME: &str = r##"# Catppuccin Mocha palette for terminal-ui

[meta]
name = "Catppuccin Mocha"
version = 1

[ui]
background = "#1e1e2e"
foreground = "#cdd6f4"
dim = "#6c7086"
accent = "#cba6f7"
border = "#313244"
selection_bg = "#45475a"

[ansi]
green = "#a6e3a1"
red = "#f38ba8"
blue = "#89b4fa"
yellow = "#f9e2af"
purple = "#cba6f7"
cyan = "#94e2d5"
"##;
