//! Gruvbox - Retro groove, warm contrast

pub const THEME: &str = r##"# Gruvbox palette for terminal-ui

[meta]
name = "Gruvbox"
version = 1

[ui]
background = "#282828"
foreground = "#ebdbb2"
dim = "#928374"
accent = "#b8bb26"
border = "#3c3836"
selection_bg = "#504945"

[ansi]
green = "#b8bb26"
red = "#fb4934"
blue = "#83a598"
yellow = "#fabd2f"
purple = "#d3869b"
cyan = "#8ec07c"
"##;
