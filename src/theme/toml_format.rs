// TOML palette format
//
// Each theme names its chrome colors plus the six ANSI hues the terminal
// widgets draw with. Missing optional keys fall back to neighbours when the
// palette is resolved.
//
// Format version: 1

use ratatui::style::Color;
use serde::Deserialize;

/// Root structure for TOML theme files
#[derive(Debug, Clone, Deserialize)]
pub struct TomlTheme {
    pub meta: ThemeMeta,
    pub ui: UiColors,
    pub ansi: AnsiColors,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
    #[allow(dead_code)] // For future schema evolution
    pub version: u32,
}

/// Terminal chrome
#[derive(Debug, Clone, Deserialize)]
pub struct UiColors {
    pub background: String,
    pub foreground: String,
    /// Secondary text (prompt punctuation, hints, dim output)
    pub dim: String,
    pub accent: String,
    /// Falls back to `dim`
    pub border: Option<String>,
    /// Falls back to `border`
    pub selection_bg: Option<String>,
}

/// Hues used by output styles and progress variants
#[derive(Debug, Clone, Deserialize)]
pub struct AnsiColors {
    pub green: String,
    pub red: String,
    pub blue: String,
    pub yellow: String,
    pub purple: String,
    pub cyan: String,
}

impl TomlTheme {
    /// Parse a TOML theme from string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Parse a color string to ratatui Color
    /// Supports:
    /// - Hex format: #RRGGBB
    /// - ANSI format: ansi:0-15, ansi:fg, ansi:bg (inherit terminal colors)
    pub fn parse_color(value: &str) -> Color {
        if let Some(ansi) = value.strip_prefix("ansi:") {
            return match ansi {
                "0" => Color::Black,
                "1" => Color::Red,
                "2" => Color::Green,
                "3" => Color::Yellow,
                "4" => Color::Blue,
                "5" => Color::Magenta,
                "6" => Color::Cyan,
                "7" => Color::White,
                "8" => Color::DarkGray,
                "9" => Color::LightRed,
                "10" => Color::LightGreen,
                "11" => Color::LightYellow,
                "12" => Color::LightBlue,
                "13" => Color::LightMagenta,
                "14" => Color::LightCyan,
                "15" => Color::Gray,
                "fg" | "bg" => Color::Reset,
                _ => Color::White,
            };
        }

        let hex = value.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Color::White;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);
        Color::Rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(TomlTheme::parse_color("#ff0000"), Color::Rgb(255, 0, 0));
        assert_eq!(TomlTheme::parse_color("00ff00"), Color::Rgb(0, 255, 0));
        assert_eq!(TomlTheme::parse_color("ansi:4"), Color::Blue);
        assert_eq!(TomlTheme::parse_color("ansi:bg"), Color::Reset);
        assert_eq!(TomlTheme::parse_color("#abc"), Color::White);
        assert_eq!(TomlTheme::parse_color("#ééé"), Color::White);
    }

    #[test]
    fn test_parse_theme_with_optional_keys_missing() {
        let toml = r##"
[meta]
name = "Test Theme"
version = 1

[ui]
background = "ansi:bg"
foreground = "ansi:fg"
dim = "ansi:8"
accent = "ansi:2"

[ansi]
green = "ansi:2"
red = "ansi:1"
blue = "ansi:4"
yellow = "ansi:3"
purple = "ansi:5"
cyan = "ansi:6"
"##;

        let theme = TomlTheme::from_str(toml).unwrap();
        assert_eq!(theme.meta.name, "Test Theme");
        assert!(theme.ui.border.is_none());
        assert_eq!(theme.ansi.cyan, "ansi:6");
    }
}
