// Command palette
//
// A filterable list of workspace actions. The palette only tracks query and
// selection; confirming hands back a PaletteAction for the app to carry out.

use crate::theme::{ThemeId, THEMES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteAction {
    NewTab,
    SplitPane,
    ClosePane,
    ClearTerminal,
    SetTheme(ThemeId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteItem {
    pub group: &'static str,
    pub label: String,
    pub action: PaletteAction,
}

#[derive(Debug, Clone)]
pub struct CommandPalette {
    items: Vec<PaletteItem>,
    query: String,
    selected: usize,
    open: bool,
}

impl Default for CommandPalette {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandPalette {
    pub fn new() -> Self {
        let mut items = vec![
            item("Terminal", "New Tab", PaletteAction::NewTab),
            item("Terminal", "Split Pane", PaletteAction::SplitPane),
            item("Terminal", "Close Pane", PaletteAction::ClosePane),
            item("Terminal", "Clear Terminal", PaletteAction::ClearTerminal),
        ];
        items.extend(
            THEMES
                .iter()
                .map(|t| item("Theme", t.name, PaletteAction::SetTheme(t.id))),
        );

        Self {
            items,
            query: String::new(),
            selected: 0,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open with an empty query
    pub fn open(&mut self) {
        self.open = true;
        self.query.clear();
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Items whose label contains the query, ignoring case
    pub fn filtered(&self) -> Vec<&PaletteItem> {
        let needle = self.query.to_lowercase();
        self.items
            .iter()
            .filter(|i| i.label.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.selected = 0;
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        let len = self.filtered().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.filtered().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Close and return the selected action, if any item matches
    pub fn confirm(&mut self) -> Option<PaletteAction> {
        let action = self.filtered().get(self.selected).map(|i| i.action);
        self.close();
        action
    }
}

fn item(group: &'static str, label: &str, action: PaletteAction) -> PaletteItem {
    PaletteItem {
        group,
        label: label.to_string(),
        action,
    }
}
