//! Default - Emerald on near-black

pub const THEME: &str = r##"# Default palette for terminal-ui

[meta]
name = "Default"
version = 1

[ui]
background = "#0a0a0a"
foreground = "#e5e5e5"
dim = "#737373"
accent = "#10b981"
border = "#262626"
selection_bg = "#1f2937"

[ansi]
green = "#10b981"
red = "#ef4444"
blue = "#3b82f6"
yellow = "#f59e0b"
purple = "#a855f7"
cyan = "#06b6d4"
"##;
