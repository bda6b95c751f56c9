//! Monokai - Classic high-contrast editor palette

pub const THEME: &str = r##"# Monokai palette for terminal-ui

[meta]
name = "Monokai"
version = 1

[ui]
background = "#272822"
foreground = "#f8f8f2"
dim = "#75715e"
accent = "#a6e22e"
border = "#3e3d32"
selection_bg = "#49483e"

[ansi]
green = "#a6e22e"
red = "#f92672"
blue = "#66d9ef"
yellow = "#e6db74"
purple = "#ae81ff"
cyan = "#a1efe4"
"##;
