//! One Dark - Atom's iconic dark theme

pub const THEME: &str = r##"# One Dark palette for terminal-ui

[meta]
name = "One Dark"
version = 1

[ui]
background = "#282c34"
foreground = "#abb2bf"
dim = "#5c6370"
accent = "#61afef"
border = "#3e4451"
selection_bg = "#3e4451"

[ansi]
green = "#98c379"
red = "#e06c75"
blue = "#61afef"
yellow = "#e5c07b"
purple = "#c678dd"
cyan = "#56b6c2"
"##;
