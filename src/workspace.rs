// Workspace - tabs of panes, one Session per pane
//
// Tabs and panes draw ids from one shared counter. The last tab and the last
// pane of a tab can never be closed. Split and new-tab requests raised by a
// session are handled here; theme changes are handed back to the caller,
// which owns the ThemeStore.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::session::{Effect, Session, SessionEnv, SessionOptions, VirtualFs};
use crate::theme::ThemeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaneId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(u64);

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Tab {
    pub id: TabId,
    pub title: String,
    /// Left to right
    pub panes: Vec<PaneId>,
}

pub struct Workspace {
    tabs: Vec<Tab>,
    active: TabId,
    focused: PaneId,
    sessions: HashMap<PaneId, Session>,
    next_id: u64,
    fs: Arc<VirtualFs>,
    options: SessionOptions,
}

impl Workspace {
    /// One tab holding one pane
    pub fn new(fs: Arc<VirtualFs>, options: SessionOptions) -> Self {
        let mut ws = Self {
            tabs: Vec::new(),
            active: TabId(0),
            focused: PaneId(0),
            sessions: HashMap::new(),
            next_id: 0,
            fs,
            options,
        };
        ws.add_tab();
        ws
    }

    fn uid(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn new_pane(&mut self) -> PaneId {
        let id = PaneId(self.uid());
        self.sessions
            .insert(id, Session::new(Arc::clone(&self.fs), &self.options));
        id
    }

    // ─────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn active_tab(&self) -> &Tab {
        self.tabs
            .iter()
            .find(|t| t.id == self.active)
            .unwrap_or(&self.tabs[0])
    }

    pub fn active_index(&self) -> usize {
        self.tabs
            .iter()
            .position(|t| t.id == self.active)
            .unwrap_or(0)
    }

    pub fn focused(&self) -> PaneId {
        self.focused
    }

    pub fn session(&self, pane: PaneId) -> Option<&Session> {
        self.sessions.get(&pane)
    }

    pub fn session_mut(&mut self, pane: PaneId) -> Option<&mut Session> {
        self.sessions.get_mut(&pane)
    }

    pub fn focused_session(&self) -> Option<&Session> {
        self.sessions.get(&self.focused)
    }

    pub fn focused_session_mut(&mut self) -> Option<&mut Session> {
        self.sessions.get_mut(&self.focused)
    }

    pub fn sessions_mut(&mut self) -> impl Iterator<Item = &mut Session> {
        self.sessions.values_mut()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tabs
    // ─────────────────────────────────────────────────────────────────────

    /// Open a tab with one fresh pane and switch to it
    pub fn add_tab(&mut self) -> TabId {
        let pane = self.new_pane();
        let id = TabId(self.uid());
        self.tabs.push(Tab {
            id,
            title: "Terminal".to_string(),
            panes: vec![pane],
        });
        self.active = id;
        self.focused = pane;
        tracing::info!(tab = %id, pane = %pane, "tab opened");
        id
    }

    /// Close a tab and drop its sessions. Refused for the last tab.
    pub fn close_tab(&mut self, id: TabId) -> bool {
        if self.tabs.len() <= 1 {
            return false;
        }
        let Some(index) = self.tabs.iter().position(|t| t.id == id) else {
            return false;
        };

        let tab = self.tabs.remove(index);
        for pane in &tab.panes {
            self.sessions.remove(pane);
        }

        if self.active == id {
            let next = &self.tabs[index.min(self.tabs.len() - 1)];
            self.active = next.id;
            self.focused = next.panes[0];
        }
        tracing::info!(tab = %id, "tab closed");
        true
    }

    /// Switch tabs, focusing the tab's first pane
    pub fn select_tab(&mut self, id: TabId) -> bool {
        let Some(tab) = self.tabs.iter().find(|t| t.id == id) else {
            return false;
        };
        self.active = tab.id;
        self.focused = tab.panes[0];
        true
    }

    pub fn next_tab(&mut self) {
        let index = (self.active_index() + 1) % self.tabs.len();
        self.select_tab(self.tabs[index].id);
    }

    pub fn prev_tab(&mut self) {
        let len = self.tabs.len();
        let index = (self.active_index() + len - 1) % len;
        self.select_tab(self.tabs[index].id);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Panes
    // ─────────────────────────────────────────────────────────────────────

    /// Add a pane to the right end of the active tab and focus it
    pub fn split_pane(&mut self) -> PaneId {
        let pane = self.new_pane();
        let active = self.active;
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == active) {
            tab.panes.push(pane);
        }
        self.focused = pane;
        tracing::info!(tab = %active, pane = %pane, "pane split");
        pane
    }

    /// Close a pane and drop its session. Refused for a tab's last pane.
    pub fn close_pane(&mut self, pane: PaneId) -> bool {
        let Some(tab) = self.tabs.iter_mut().find(|t| t.panes.contains(&pane)) else {
            return false;
        };
        if tab.panes.len() <= 1 {
            return false;
        }

        tab.panes.retain(|p| *p != pane);
        let first = tab.panes[0];
        self.sessions.remove(&pane);
        if self.focused == pane {
            self.focused = first;
        }
        tracing::info!(pane = %pane, "pane closed");
        true
    }

    /// Focus a pane of the active tab
    pub fn focus_pane(&mut self, pane: PaneId) -> bool {
        if self.active_tab().panes.contains(&pane) {
            self.focused = pane;
            true
        } else {
            false
        }
    }

    /// Move focus to the next pane of the active tab, wrapping
    pub fn focus_next_pane(&mut self) {
        let next = {
            let panes = &self.active_tab().panes;
            let index = panes.iter().position(|p| *p == self.focused).unwrap_or(0);
            panes[(index + 1) % panes.len()]
        };
        self.focused = next;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────

    /// Submit the focused pane's input line
    pub fn submit(&mut self, theme: ThemeId) -> Vec<Effect> {
        let env = self.env(theme);
        let effects = match self.focused_session_mut() {
            Some(session) => session.submit(&env),
            None => return Vec::new(),
        };
        self.apply_effects(effects)
    }

    /// Run a command in the focused pane as if typed
    pub fn run(&mut self, command: &str, theme: ThemeId) -> Vec<Effect> {
        let env = self.env(theme);
        let effects = match self.focused_session_mut() {
            Some(session) => session.submit_text(command, &env),
            None => return Vec::new(),
        };
        self.apply_effects(effects)
    }

    fn env(&self, theme: ThemeId) -> SessionEnv {
        SessionEnv {
            theme,
            tab_count: self.tabs.len(),
        }
    }

    /// Carry out split and new-tab requests; return the rest
    pub fn apply_effects(&mut self, effects: Vec<Effect>) -> Vec<Effect> {
        let mut rest = Vec::new();
        for effect in effects {
            match effect {
                Effect::RequestSplit => {
                    self.split_pane();
                }
                Effect::RequestNewTab => {
                    self.add_tab();
                }
                other => rest.push(other),
            }
        }
        rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn workspace() -> Workspace {
        Workspace::new(Arc::new(VirtualFs::demo()), SessionOptions::default())
    }

    #[test]
    fn starts_with_one_tab_one_pane() {
        let ws = workspace();
        assert_eq!(ws.tab_count(), 1);
        assert_eq!(ws.active_tab().panes, vec![ws.focused()]);
        assert_eq!(ws.focused().to_string(), "t1");
        assert_eq!(ws.active_tab().id.to_string(), "t2");
    }

    #[test]
    fn last_tab_and_last_pane_cannot_close() {
        let mut ws = workspace();
        let tab = ws.active_tab().id;
        let pane = ws.focused();
        assert!(!ws.close_tab(tab));
        assert!(!ws.close_pane(pane));
        assert!(ws.session(pane).is_some());
    }

    #[test]
    fn split_focuses_new_pane_and_close_refocuses_first() {
        let mut ws = workspace();
        let first = ws.focused();
        let second = ws.split_pane();
        assert_eq!(ws.focused(), second);
        assert_eq!(ws.active_tab().panes, vec![first, second]);

        assert!(ws.close_pane(second));
        assert_eq!(ws.focused(), first);
        assert!(ws.session(second).is_none());
    }

    #[test]
    fn closing_active_tab_selects_neighbour() {
        let mut ws = workspace();
        let t1 = ws.active_tab().id;
        let t2 = ws.add_tab();
        let t3 = ws.add_tab();
        ws.select_tab(t2);

        assert!(ws.close_tab(t2));
        assert_eq!(ws.active_tab().id, t3);

        assert!(ws.close_tab(t3));
        assert_eq!(ws.active_tab().id, t1);
        assert_eq!(ws.focused(), ws.active_tab().panes[0]);
    }

    #[test]
    fn closing_inactive_tab_keeps_selection() {
        let mut ws = workspace();
        let t1 = ws.active_tab().id;
        let t2 = ws.add_tab();
        assert!(ws.close_tab(t1));
        assert_eq!(ws.active_tab().id, t2);
    }

    #[test]
    fn tab_cycling_wraps() {
        let mut ws = workspace();
        let t1 = ws.active_tab().id;
        let t2 = ws.add_tab();
        ws.next_tab();
        assert_eq!(ws.active_tab().id, t1);
        ws.prev_tab();
        assert_eq!(ws.active_tab().id, t2);
    }

    #[test]
    fn pane_focus_cycles_within_tab() {
        let mut ws = workspace();
        let first = ws.focused();
        let second = ws.split_pane();
        ws.focus_next_pane();
        assert_eq!(ws.focused(), first);
        ws.focus_next_pane();
        assert_eq!(ws.focused(), second);

        let other_tab_pane = {
            ws.add_tab();
            ws.focused()
        };
        ws.select_tab(ws.tabs()[0].id);
        assert!(!ws.focus_pane(other_tab_pane));
    }

    #[test]
    fn session_signals_are_consumed() {
        let mut ws = workspace();
        assert!(ws.run("split", ThemeId::Default).is_empty());
        assert_eq!(ws.active_tab().panes.len(), 2);

        assert!(ws.run("tab", ThemeId::Default).is_empty());
        assert_eq!(ws.tab_count(), 2);

        assert_eq!(
            ws.run("theme dracula", ThemeId::Default),
            vec![Effect::ThemeChange(ThemeId::Dracula)]
        );
    }

    #[test]
    fn sessions_are_independent() {
        let mut ws = workspace();
        let first = ws.focused();
        ws.run("cd Documents", ThemeId::Default);
        let second = ws.split_pane();
        assert_eq!(ws.session(first).unwrap().cwd(), "~/Documents");
        assert_eq!(ws.session(second).unwrap().cwd(), "~");
    }
}
