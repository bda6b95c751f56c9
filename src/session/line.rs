// Line model - a session's scrollback
//
// Lines are only ever appended in batches or cleared wholesale. Ids come from
// a per-buffer counter that survives `reset`, so an id is never handed out
// twice in the life of a session.

use std::time::Duration;

use crate::layout::{spinner, ProgressBar, ProgressVariant, TableLine};

/// Cosmetic style of an output line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    #[default]
    Normal,
    Success,
    Error,
    Info,
    Warning,
    Dim,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LineContent {
    /// Echo of a submitted command with the prompt captured at submit time
    Command { prompt: String, text: String },
    Output { text: String, style: OutputStyle },
    Progress {
        label: String,
        percent: f64,
        variant: ProgressVariant,
    },
    /// One line of a box-drawn table, tagged so the header and stripes can
    /// be styled
    Table(TableLine),
    /// Animated spinner; the frame comes from the session clock
    Spinner { text: String },
}

impl LineContent {
    pub fn output(text: impl Into<String>, style: OutputStyle) -> Self {
        LineContent::Output {
            text: text.into(),
            style,
        }
    }

    pub fn normal(text: impl Into<String>) -> Self {
        Self::output(text, OutputStyle::Normal)
    }

    /// Plain-text rendering, as printed by headless `exec`. Spinners show
    /// their first frame.
    pub fn plain_text(&self) -> String {
        match self {
            LineContent::Command { prompt, text } => format!("{} {}", prompt, text),
            LineContent::Output { text, .. } => text.clone(),
            LineContent::Progress {
                label,
                percent,
                variant,
            } => ProgressBar::new(*percent)
                .label(label.clone())
                .variant(*variant)
                .render(),
            LineContent::Table(line) => line.text.clone(),
            LineContent::Spinner { text } => spinner::render(text, Duration::ZERO),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub id: u64,
    pub content: LineContent,
}

#[derive(Debug, Clone)]
pub struct LineBuffer {
    lines: Vec<Line>,
    next_id: u64,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            next_id: 1,
        }
    }
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign fresh ids and append in order
    pub fn append(&mut self, contents: impl IntoIterator<Item = LineContent>) {
        for content in contents {
            let id = self.next_id;
            self.next_id += 1;
            self.lines.push(Line { id, content });
        }
    }

    /// Drop every line; the id counter keeps counting
    pub fn reset(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_increase_and_survive_reset() {
        let mut buf = LineBuffer::new();
        buf.append([LineContent::normal("a"), LineContent::normal("b")]);
        assert_eq!(buf.lines().iter().map(|l| l.id).collect::<Vec<_>>(), vec![1, 2]);

        buf.reset();
        assert!(buf.is_empty());

        buf.append([LineContent::normal("c")]);
        assert_eq!(buf.lines()[0].id, 3);
    }

    #[test]
    fn plain_text_of_each_kind() {
        let command = LineContent::Command {
            prompt: "guest@openknots:~$".into(),
            text: "ls".into(),
        };
        assert_eq!(command.plain_text(), "guest@openknots:~$ ls");

        let progress = LineContent::Progress {
            label: "Building".into(),
            percent: 75.0,
            variant: ProgressVariant::Blue,
        };
        assert_eq!(progress.plain_text(), "Building [███████████████░░░░░] 75%");

        let spinner = LineContent::Spinner {
            text: "Waiting".into(),
        };
        assert_eq!(spinner.plain_text(), "⠋ Waiting");
    }
}
