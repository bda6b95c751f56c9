//! Bundled TOML palettes (compiled into binary)
//!
//! One module per catalog theme. A file of the same id under
//! ~/.config/terminal-ui/themes/ overrides the bundled palette.

// ─────────────────────────────────────────────────────────────────────────────
// Theme modules
// ─────────────────────────────────────────────────────────────────────────────

mod catppuccin_mocha;
mod default_theme;
mod dracula;
mod github_dark;
mod gruvbox;
mod monokai;
mod nord;
mod one_dark;
mod solarized_dark;

use super::ThemeId;

// ─────────────────────────────────────────────────────────────────────────────
// Bundled theme collection
// ─────────────────────────────────────────────────────────────────────────────

/// Bundled theme: catalog id and TOML content
pub struct BundledTheme {
    pub id: ThemeId,
    pub content: &'static str,
}

/// All bundled themes, in catalog order
pub const BUNDLED_THEMES: &[BundledTheme] = &[
    BundledTheme {
        id: ThemeId::Default,
        content: default_theme::THEME,
    },
    BundledTheme {
        id: ThemeId::Dracula,
        content: dracula::THEME,
    },
    BundledTheme {
        id: ThemeId::Nord,
        content: nord::THEME,
    },
    BundledTheme {
        id: ThemeId::Monokai,
        content: monokai::THEME,
    },
    BundledTheme {
        id: ThemeId::GithubDark,
        content: github_dark::THEME,
    },
    BundledTheme {
        id: ThemeId::SolarizedDark,
        content: solarized_dark::THEME,
    },
    BundledTheme {
        id: ThemeId::OneDark,
        content: one_dark::THEME,
    },
    BundledTheme {
        id: ThemeId::Gruvbox,
        content: gruvbox::THEME,
    },
    BundledTheme {
        id: ThemeId::CatppuccinMocha,
        content: catppuccin_mocha::THEME,
    },
];

/// Bundled TOML for a theme
pub fn get(id: ThemeId) -> Option<&'static str> {
    BUNDLED_THEMES
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.content)
}
