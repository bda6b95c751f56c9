// Badge component
//
// A short label on a filled background, e.g. ` v0.1.0 ` or ` ↑12 `.

use crate::theme::Palette;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Success,
    Error,
    Warning,
    Info,
}

impl BadgeVariant {
    pub fn color(self, colors: &Palette) -> Color {
        match self {
            BadgeVariant::Neutral => colors.dim,
            BadgeVariant::Success => colors.green,
            BadgeVariant::Error => colors.red,
            BadgeVariant::Warning => colors.yellow,
            BadgeVariant::Info => colors.blue,
        }
    }
}

pub fn badge(text: &str, variant: BadgeVariant, colors: &Palette) -> Span<'static> {
    Span::styled(
        format!(" {} ", text),
        Style::default()
            .fg(colors.background)
            .bg(variant.color(colors))
            .add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(BadgeVariant::Success ; "success")]
    #[test_case(BadgeVariant::Warning ; "warning")]
    #[test_case(BadgeVariant::Neutral ; "neutral")]
    fn badge_is_padded_and_filled(variant: BadgeVariant) {
        let colors = Palette::default();
        let span = badge("v1", variant, &colors);
        assert_eq!(span.content, " v1 ");
        assert_eq!(span.style.bg, Some(variant.color(&colors)));
        assert_eq!(span.style.fg, Some(colors.background));
    }
}
