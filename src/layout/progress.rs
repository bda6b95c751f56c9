// Progress bar layout
//
//   Installing... [████████░░░░░░░░░░░░] 40%

/// Color of the filled portion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressVariant {
    #[default]
    Green,
    Blue,
    Yellow,
    Red,
    Purple,
    Cyan,
}

pub const DEFAULT_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    pub percent: f64,
    pub label: Option<String>,
    pub width: usize,
    pub filled: char,
    pub empty: char,
    pub show_percent: bool,
    pub variant: ProgressVariant,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            percent: 0.0,
            label: None,
            width: DEFAULT_WIDTH,
            filled: '█',
            empty: '░',
            show_percent: true,
            variant: ProgressVariant::default(),
        }
    }
}

impl ProgressBar {
    pub fn new(percent: f64) -> Self {
        Self {
            percent,
            ..Default::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn glyphs(mut self, filled: char, empty: char) -> Self {
        self.filled = filled;
        self.empty = empty;
        self
    }

    pub fn show_percent(mut self, show: bool) -> Self {
        self.show_percent = show;
        self
    }

    pub fn variant(mut self, variant: ProgressVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Percent clamped to 0..=100 (NaN reads as 0)
    pub fn clamped(&self) -> f64 {
        if self.percent.is_nan() {
            return 0.0;
        }
        self.percent.clamp(0.0, 100.0)
    }

    pub fn filled_cells(&self) -> usize {
        ((self.clamped() / 100.0) * self.width as f64).round() as usize
    }

    /// Filled and empty runs of the bar, for callers that color them apart
    pub fn bar_parts(&self) -> (String, String) {
        let filled = self.filled_cells();
        (
            self.filled.to_string().repeat(filled),
            self.empty.to_string().repeat(self.width - filled),
        )
    }

    pub fn percent_text(&self) -> String {
        let pct = self.clamped();
        if pct.fract() == 0.0 {
            format!("{}%", pct as u32)
        } else {
            format!("{}%", pct)
        }
    }

    pub fn render(&self) -> String {
        let (filled, empty) = self.bar_parts();
        let mut out = String::new();
        if let Some(label) = &self.label {
            out.push_str(label);
            out.push(' ');
        }
        out.push('[');
        out.push_str(&filled);
        out.push_str(&empty);
        out.push(']');
        if self.show_percent {
            out.push(' ');
            out.push_str(&self.percent_text());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(0.0, 0 ; "empty")]
    #[test_case(40.0, 8 ; "forty")]
    #[test_case(12.0, 2 ; "rounds down")]
    #[test_case(13.0, 3 ; "rounds up")]
    #[test_case(100.0, 20 ; "full")]
    #[test_case(250.0, 20 ; "clamps high")]
    #[test_case(-5.0, 0 ; "clamps low")]
    fn filled_cells(percent: f64, expected: usize) {
        assert_eq!(ProgressBar::new(percent).filled_cells(), expected);
    }

    #[test]
    fn renders_label_bar_and_percent() {
        let bar = ProgressBar::new(40.0).label("Installing...");
        assert_eq!(bar.render(), "Installing... [████████░░░░░░░░░░░░] 40%");
    }

    #[test]
    fn custom_glyphs_and_hidden_percent() {
        let bar = ProgressBar::new(50.0).width(4).glyphs('=', '-').show_percent(false);
        assert_eq!(bar.render(), "[==--]");
    }

    #[test]
    fn out_of_range_percent_text_is_clamped() {
        assert_eq!(ProgressBar::new(140.0).percent_text(), "100%");
        assert_eq!(ProgressBar::new(f64::NAN).percent_text(), "0%");
        assert_eq!(ProgressBar::new(33.5).percent_text(), "33.5%");
    }
}
