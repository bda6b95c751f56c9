//! Solarized Dark - Precision colors, dark base

pub const THEME: &str = r##"# Solarized Dark palette for terminal-ui

[meta]
name = "Solarized Dark"
version = 1

[ui]
background = "#002b36"
foreground = "#839496"
dim = "#586e75"
accent = "#268bd2"
border = "#073642"
selection_bg = "#073642"

[ansi]
green = "#859900"
red = "#dc322f"
blue = "#268bd2"
yellow = "#b58900"
purple = "#6c71c4"
cyan = "#2aa198"
"##;
