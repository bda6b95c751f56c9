//! Dracula - Dark theme with vivid pastels

pub const THEME: &str = r##"# Dracula palette for terminal-ui

[meta]
name = "Dracula"
version = 1

[ui]
background = "#282a36"
foreground = "#f8f8f2"
dim = "#6272a4"
accent = "#bd93f9"
border = "#44475a"
selection_bg = "#44475a"

[ansi]
green = "#50fa7b"
red = "#ff5555"
blue = "#bd93f9"
yellow = "#f1fa8c"
purple = "#ff79c6"
cyan = "#8be9fd"
"##;
