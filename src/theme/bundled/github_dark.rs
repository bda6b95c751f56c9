//! GitHub Dark - GitHub's dark default

pub const THEME: &str = r##"# GitHub Dark palette for terminal-ui

[meta]
name = "GitHub Dark"
version = 1

[ui]
background = "#0d1117"
foreground = "#c9d1d9"
dim = "#8b949e"
accent = "#58a6ff"
border = "#30363d"
selection_bg = "#264f78"

[ansi]
green = "#3fb950"
red = "#f85149"
blue = "#58a6ff"
yellow = "#d29922"
purple = "#bc8cff"
cyan = "#39c5cf"
"##;
