// Theme system
//
// - ThemeId / THEMES: the fixed catalog (id, display name, accent)
// - TomlTheme: native palette file format
// - Palette: resolved colors ready for rendering
// - ThemeStore: the one piece of global, shared selection state
//
// Palette loading priority:
// 1. External TOML from ~/.config/terminal-ui/themes/<id>.toml
// 2. Bundled TOML (compiled in)
// 3. Hardcoded default

mod bundled;
mod store;
mod toml_format;

pub use store::ThemeStore;
pub use toml_format::TomlTheme;

use ratatui::style::Color;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::layout::{NodeStyle, ProgressVariant};
use crate::session::OutputStyle;

/// Catalog theme identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeId {
    #[default]
    Default,
    Dracula,
    Nord,
    Monokai,
    GithubDark,
    SolarizedDark,
    OneDark,
    Gruvbox,
    CatppuccinMocha,
}

/// Catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeInfo {
    pub id: ThemeId,
    pub slug: &'static str,
    pub name: &'static str,
    pub accent: &'static str,
}

const fn entry(
    id: ThemeId,
    slug: &'static str,
    name: &'static str,
    accent: &'static str,
) -> ThemeInfo {
    ThemeInfo {
        id,
        slug,
        name,
        accent,
    }
}

pub const THEMES: &[ThemeInfo] = &[
    entry(ThemeId::Default, "default", "Default", "#10b981"),
    entry(ThemeId::Dracula, "dracula", "Dracula", "#bd93f9"),
    entry(ThemeId::Nord, "nord", "Nord", "#81a1c1"),
    entry(ThemeId::Monokai, "monokai", "Monokai", "#a6e22e"),
    entry(ThemeId::GithubDark, "github-dark", "GitHub Dark", "#58a6ff"),
    entry(ThemeId::SolarizedDark, "solarized-dark", "Solarized Dark", "#268bd2"),
    entry(ThemeId::OneDark, "one-dark", "One Dark", "#61afef"),
    entry(ThemeId::Gruvbox, "gruvbox", "Gruvbox", "#b8bb26"),
    entry(ThemeId::CatppuccinMocha, "catppuccin-mocha", "Catppuccin Mocha", "#cba6f7"),
];

impl ThemeId {
    pub fn info(self) -> &'static ThemeInfo {
        // Every variant has exactly one catalog row
        THEMES.iter().find(|t| t.id == self).unwrap_or(&THEMES[0])
    }

    pub fn as_str(self) -> &'static str {
        self.info().slug
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Match a catalog id or display name, ignoring case
    pub fn find(query: &str) -> Option<ThemeId> {
        let query = query.trim().to_lowercase();
        THEMES
            .iter()
            .find(|t| t.slug == query || t.name.to_lowercase() == query)
            .map(|t| t.id)
    }

    /// All catalog ids joined for display (`default, dracula, ...`)
    pub fn available() -> String {
        THEMES.iter().map(|t| t.slug).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeId::find(s).ok_or_else(|| {
            format!(
                "unknown theme '{}' (available: {})",
                s,
                ThemeId::available()
            )
        })
    }
}

/// Complete resolved palette ready for use in the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub name: String,
    pub background: Color,
    pub foreground: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub selection: Color,
    pub green: Color,
    pub red: Color,
    pub blue: Color,
    pub yellow: Color,
    pub purple: Color,
    pub cyan: Color,
}

impl Palette {
    /// Resolve a catalog theme, preferring an override file in `dir`
    /// (normally `themes_dir()`). With no directory the bundled palette is
    /// used.
    pub fn load_from(id: ThemeId, dir: Option<&Path>) -> Self {
        if let Some(palette) = dir.and_then(|dir| Self::load_external(id, dir)) {
            return palette;
        }

        bundled::get(id)
            .and_then(|content| TomlTheme::from_str(content).ok())
            .map(Self::from_toml)
            .unwrap_or_else(Self::hardcoded_default)
    }

    fn load_external(id: ThemeId, dir: &Path) -> Option<Self> {
        let path = dir.join(format!("{}.toml", id.as_str()));
        let contents = std::fs::read_to_string(&path).ok()?;
        match TomlTheme::from_str(&contents) {
            Ok(theme) => {
                tracing::debug!(path = %path.display(), "loaded external theme");
                Some(Self::from_toml(theme))
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "ignoring unparseable theme file"
                );
                None
            }
        }
    }

    pub fn from_toml(toml: TomlTheme) -> Self {
        let parse = TomlTheme::parse_color;
        let border = toml.ui.border.as_deref().unwrap_or(&toml.ui.dim);
        let selection = toml.ui.selection_bg.as_deref().unwrap_or(border);

        Self {
            name: toml.meta.name.clone(),
            background: parse(&toml.ui.background),
            foreground: parse(&toml.ui.foreground),
            dim: parse(&toml.ui.dim),
            accent: parse(&toml.ui.accent),
            border: parse(border),
            selection: parse(selection),
            green: parse(&toml.ansi.green),
            red: parse(&toml.ansi.red),
            blue: parse(&toml.ansi.blue),
            yellow: parse(&toml.ansi.yellow),
            purple: parse(&toml.ansi.purple),
            cyan: parse(&toml.ansi.cyan),
        }
    }

    /// Fallback when no palette can be loaded
    fn hardcoded_default() -> Self {
        Self {
            name: "Default (Fallback)".to_string(),
            background: Color::Reset,
            foreground: Color::Reset,
            dim: Color::DarkGray,
            accent: Color::Green,
            border: Color::DarkGray,
            selection: Color::DarkGray,
            green: Color::Green,
            red: Color::Red,
            blue: Color::Blue,
            yellow: Color::Yellow,
            purple: Color::Magenta,
            cyan: Color::Cyan,
        }
    }

    /// Foreground for an output line style
    pub fn output(&self, style: OutputStyle) -> Color {
        match style {
            OutputStyle::Normal => self.foreground,
            OutputStyle::Success => self.green,
            OutputStyle::Error => self.red,
            OutputStyle::Info => self.blue,
            OutputStyle::Warning => self.yellow,
            OutputStyle::Dim => self.dim,
        }
    }

    /// Fill color of a progress bar
    pub fn progress(&self, variant: ProgressVariant) -> Color {
        match variant {
            ProgressVariant::Green => self.green,
            ProgressVariant::Blue => self.blue,
            ProgressVariant::Yellow => self.yellow,
            ProgressVariant::Red => self.red,
            ProgressVariant::Purple => self.purple,
            ProgressVariant::Cyan => self.cyan,
        }
    }

    /// Color of a tree node label
    pub fn node(&self, style: NodeStyle) -> Color {
        match style {
            NodeStyle::Normal => self.foreground,
            NodeStyle::Success => self.green,
            NodeStyle::Error => self.red,
            NodeStyle::Info => self.blue,
            NodeStyle::Warning => self.yellow,
        }
    }
}

impl Default for Palette {
    /// Bundled default colors; never reads user overrides
    fn default() -> Self {
        Self::load_from(ThemeId::Default, None)
    }
}

/// Directory for user palette overrides
pub fn themes_dir() -> Option<PathBuf> {
    crate::config::config_dir().map(|d| d.join("themes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("nord", Some(ThemeId::Nord) ; "by id")]
    #[test_case("GitHub Dark", Some(ThemeId::GithubDark) ; "by name")]
    #[test_case("CATPPUCCIN-MOCHA", Some(ThemeId::CatppuccinMocha) ; "id ignores case")]
    #[test_case("solarized dark", Some(ThemeId::SolarizedDark) ; "name ignores case")]
    #[test_case("solarized", None ; "no prefix match")]
    fn find_theme(query: &str, expected: Option<ThemeId>) {
        assert_eq!(ThemeId::find(query), expected);
    }

    #[test]
    fn catalog_lists_nine_themes_in_order() {
        assert_eq!(
            ThemeId::available(),
            concat!(
                "default, dracula, nord, monokai, github-dark, solarized-dark, ",
                "one-dark, gruvbox, catppuccin-mocha"
            )
        );
    }

    #[test]
    fn every_bundled_palette_parses_and_matches_catalog() {
        for info in THEMES {
            let content = bundled::get(info.id).expect("bundled theme present");
            let toml = TomlTheme::from_str(content).expect("bundled theme parses");
            assert_eq!(toml.meta.name, info.name);
            assert_eq!(toml.ui.accent, info.accent);
        }
    }

    #[test]
    fn palette_maps_styles_to_hues() {
        let toml = TomlTheme::from_str(bundled::get(ThemeId::Nord).unwrap()).unwrap();
        let palette = Palette::from_toml(toml);
        assert_eq!(palette.output(OutputStyle::Error), Color::Rgb(0xbf, 0x61, 0x6a));
        assert_eq!(palette.progress(ProgressVariant::Cyan), Color::Rgb(0x88, 0xc0, 0xd0));
        assert_eq!(palette.node(NodeStyle::Info), palette.blue);
        assert_eq!(palette.node(NodeStyle::Normal), palette.foreground);
        assert_eq!(palette.accent, Color::Rgb(0x81, 0xa1, 0xc1));
    }

    #[test]
    fn override_dir_wins_over_bundled() {
        let dir = std::env::temp_dir()
            .join(format!("terminal-ui-themes-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let custom = bundled::get(ThemeId::Nord)
            .unwrap()
            .replace("#81a1c1", "#123456");
        std::fs::write(dir.join("nord.toml"), custom).unwrap();
        std::fs::write(dir.join("dracula.toml"), "not toml [").unwrap();

        let nord = Palette::load_from(ThemeId::Nord, Some(&dir));
        assert_eq!(nord.accent, Color::Rgb(0x12, 0x34, 0x56));
        // Broken override falls back to the bundled file
        let dracula = Palette::load_from(ThemeId::Dracula, Some(&dir));
        assert_eq!(dracula, Palette::load_from(ThemeId::Dracula, None));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn from_str_reports_available_themes() {
        let err = "nope".parse::<ThemeId>().unwrap_err();
        assert!(err.contains("catppuccin-mocha"));
        assert_eq!("dracula".parse::<ThemeId>(), Ok(ThemeId::Dracula));
    }
}
