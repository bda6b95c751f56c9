// Command history with shell-style up/down recall
//
// The cursor is `None` while the user is typing fresh input and `Some(i)`
// while walking back through entries. Stepping forward past the newest entry
// leaves navigation with an empty input; whatever was typed before the first
// step back is not brought back.

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: Option<usize>,
    limit: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` entries, dropping the oldest first
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Default::default()
        }
    }

    /// Record a submitted command and stop navigating.
    ///
    /// Blank input is ignored, as is any command already in the history.
    /// The earlier entry keeps its position.
    pub fn record(&mut self, text: &str) {
        self.cursor = None;

        let text = text.trim();
        if text.is_empty() || self.entries.iter().any(|e| e == text) {
            return;
        }
        self.entries.push(text.to_string());

        if let Some(limit) = self.limit {
            if self.entries.len() > limit {
                let excess = self.entries.len() - limit;
                self.entries.drain(..excess);
            }
        }
    }

    /// Step back (up arrow). `None` when there is nothing to recall.
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let index = match self.cursor {
            None => self.entries.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(index);
        self.entries.get(index).map(String::as_str)
    }

    /// Step forward (down arrow). `None` when not navigating; `Some("")` when
    /// stepping past the newest entry.
    pub fn recall_next(&mut self) -> Option<&str> {
        let index = self.cursor? + 1;
        if index >= self.entries.len() {
            self.cursor = None;
            return Some("");
        }
        self.cursor = Some(index);
        self.entries.get(index).map(String::as_str)
    }

    pub fn is_navigating(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
