//! Nord - Arctic, bluish color palette

pub const THEME: &str = r##"# Nord palette for terminal-ui

[meta]
name = "Nord"
version = 1

[ui]
background = "#2e3440"
foreground = "#d8dee9"
dim = "#616e88"
accent = "#81a1c1"
border = "#3b4252"
selection_bg = "#434c5e"

[ansi]
green = "#a3be8c"
red = "#bf616a"
blue = "#81a1c1"
yellow = "#ebcb8b"
purple = "#b48ead"
cyan = "#88c0d0"
"##;
