// TUI application state
//
// App owns the workspace, the overlays and the resolved colors. Key
// handling is layered: modal, then command palette, then global shortcuts,
// then the focused pane's input line.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use super::clipboard;
use super::components::toast::Toast;
use super::explorer::Explorer;
use super::modal::{LogScroll, Modal, ModalAction};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::palette::{CommandPalette, PaletteAction};
use crate::session::{CompletionMenu, Effect, VirtualFs};
use crate::theme::{self, Palette, ThemeId, ThemeStore};
use crate::workspace::{PaneId, Workspace};

/// Entries moved by PageUp/PageDown in the logs overlay
const LOG_PAGE: usize = 10;

/// Scrollback lines moved by PageUp/PageDown in a pane
const SCROLL_PAGE: usize = 10;

/// Rows moved by PageUp/PageDown in the explorer
const EXPLORER_PAGE: usize = 8;

pub struct App {
    pub workspace: Workspace,
    pub command_palette: CommandPalette,
    pub modal: Option<Modal>,
    pub log_scroll: LogScroll,
    pub toast: Option<Toast>,
    pub log_buffer: LogBuffer,
    /// Colors of the current theme
    pub colors: Palette,
    colors_for: ThemeId,
    pub should_quit: bool,
    /// Open Tab-completion menu and the pane it belongs to
    pub completion: Option<(PaneId, CompletionMenu)>,
    /// Explorer state while the explorer overlay is open
    pub explorer: Option<Explorer>,
    fs: Arc<VirtualFs>,
    themes_dir: Option<PathBuf>,
    theme_store: ThemeStore,
    config: Config,
}

impl App {
    pub fn new(config: Config, log_buffer: LogBuffer, theme_store: ThemeStore) -> Self {
        Self::with_themes_dir(config, log_buffer, theme_store, theme::themes_dir())
    }

    /// Like `new`, but theme overrides are read from `themes_dir` only
    pub fn with_themes_dir(
        config: Config,
        log_buffer: LogBuffer,
        theme_store: ThemeStore,
        themes_dir: Option<PathBuf>,
    ) -> Self {
        let fs = Arc::new(VirtualFs::demo());
        let workspace = Workspace::new(Arc::clone(&fs), config.session_options());
        let colors_for = theme_store.get();
        let colors = Palette::load_from(colors_for, themes_dir.as_deref());

        Self {
            workspace,
            command_palette: CommandPalette::new(),
            modal: None,
            log_scroll: LogScroll::default(),
            toast: None,
            log_buffer,
            colors,
            colors_for,
            should_quit: false,
            completion: None,
            explorer: None,
            fs,
            themes_dir,
            theme_store,
            config,
        }
    }

    pub fn theme(&self) -> ThemeId {
        self.theme_store.get()
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────────────────

    /// Select a theme, saving it to the config file when enabled
    pub fn set_theme(&mut self, id: ThemeId) {
        if !self.theme_store.set(id) {
            return;
        }
        self.on_theme_changed(id);

        if self.config.persist_theme {
            self.config.theme = id;
            if let Err(e) = self.config.save() {
                tracing::warn!(error = %e, "could not save theme to config");
                self.show_toast("✗ Could not save theme");
            }
        }
    }

    /// Reload colors after the store changed
    pub fn on_theme_changed(&mut self, id: ThemeId) {
        if self.colors_for != id {
            self.colors = Palette::load_from(id, self.themes_dir.as_deref());
            self.colors_for = id;
        }
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in self.workspace.apply_effects(effects) {
            match effect {
                Effect::ThemeChange(id) => self.set_theme(id),
                Effect::OpenExplorer(path) => self.open_explorer(&path),
                other => tracing::debug!(?other, "unhandled effect"),
            }
        }
    }

    /// Browse the virtual filesystem from `path`
    pub fn open_explorer(&mut self, path: &str) {
        match self.fs.tree_view(path) {
            Some(view) => {
                tracing::debug!(path, "explorer opened");
                self.explorer = Some(Explorer::new(path, view));
                self.modal = Some(Modal::Explorer);
            }
            None => self.show_toast(format!("✗ Not a directory: {}", path)),
        }
    }

    fn open_explorer_at_cwd(&mut self) {
        let cwd = self.workspace.focused_session().map(|s| s.cwd().to_string());
        if let Some(cwd) = cwd {
            self.open_explorer(&cwd);
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────

    /// Close the focused pane, or its tab when it is the last pane
    pub fn close_focused(&mut self) {
        let pane = self.workspace.focused();
        if self.workspace.close_pane(pane) {
            return;
        }
        let tab = self.workspace.active_tab().id;
        if !self.workspace.close_tab(tab) {
            self.show_toast("Last pane can't be closed");
        }
    }

    pub fn clear_focused(&mut self) {
        if let Some(session) = self.workspace.focused_session_mut() {
            session.clear();
        }
    }

    pub fn run_palette_action(&mut self, action: PaletteAction) {
        tracing::debug!(?action, "palette action");
        match action {
            PaletteAction::NewTab => {
                self.workspace.add_tab();
            }
            PaletteAction::SplitPane => {
                self.workspace.split_pane();
            }
            PaletteAction::ClosePane => self.close_focused(),
            PaletteAction::ClearTerminal => self.clear_focused(),
            PaletteAction::SetTheme(id) => self.set_theme(id),
        }
    }

    /// Insert text into the focused input line
    pub fn paste(&mut self, text: &str) {
        if let Some(session) = self.workspace.focused_session_mut() {
            session.input_mut().insert_str(text);
        }
    }

    fn paste_clipboard(&mut self) {
        match clipboard::paste_from_clipboard() {
            Ok(text) => self.paste(&text),
            Err(e) => {
                tracing::warn!(error = %e, "paste failed");
                self.show_toast("✗ Clipboard unavailable");
            }
        }
    }

    /// Advance animations and expire the toast. Returns true when a redraw
    /// is needed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let mut redraw = false;
        for session in self.workspace.sessions_mut() {
            redraw |= session.tick(elapsed);
        }
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
            redraw = true;
        }
        redraw
    }

    // ─────────────────────────────────────────────────────────────────────
    // Keys
    // ─────────────────────────────────────────────────────────────────────

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if !matches!(
            key.code,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc | KeyCode::Enter
        ) {
            self.completion = None;
        }
        if self.handle_modal_key(&key)
            || self.handle_palette_key(&key)
            || self.handle_global_key(&key)
        {
            return;
        }
        self.handle_input_key(&key);
    }

    fn handle_modal_key(&mut self, key: &KeyEvent) -> bool {
        let Some(modal) = self.modal else {
            return false;
        };
        let action = modal.handle_input(key.code);
        match modal {
            Modal::Logs => self
                .log_scroll
                .apply(action, self.log_buffer.len(), LOG_PAGE),
            Modal::Explorer => {
                if let Some(explorer) = self.explorer.as_mut() {
                    explorer.apply(action, EXPLORER_PAGE);
                }
            }
            Modal::Help => {}
        }
        if action == ModalAction::Close {
            self.modal = None;
            self.explorer = None;
        }
        true
    }

    fn handle_palette_key(&mut self, key: &KeyEvent) -> bool {
        if !self.command_palette.is_open() {
            return false;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.command_palette.close(),
            KeyCode::Char('k') if ctrl => self.command_palette.close(),
            KeyCode::Enter => {
                if let Some(action) = self.command_palette.confirm() {
                    self.run_palette_action(action);
                }
            }
            KeyCode::Up => self.command_palette.select_prev(),
            KeyCode::Down | KeyCode::Tab => self.command_palette.select_next(),
            KeyCode::Backspace => self.command_palette.pop_char(),
            KeyCode::Char(c) if !ctrl => self.command_palette.push_char(c),
            _ => {}
        }
        true
    }

    fn handle_global_key(&mut self, key: &KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => self.should_quit = true,
            KeyCode::Char('k') if ctrl => self.command_palette.open(),
            KeyCode::Char('t') if ctrl => {
                self.workspace.add_tab();
            }
            KeyCode::Char('d') if ctrl => {
                self.workspace.split_pane();
            }
            KeyCode::Char('w') if ctrl => self.close_focused(),
            KeyCode::Char('l') if ctrl => self.clear_focused(),
            KeyCode::Char('v') if ctrl => self.paste_clipboard(),
            KeyCode::Left if alt => self.workspace.prev_tab(),
            KeyCode::Right if alt => self.workspace.next_tab(),
            KeyCode::PageUp if ctrl => self.workspace.prev_tab(),
            KeyCode::PageDown if ctrl => self.workspace.next_tab(),
            KeyCode::F(1) => self.modal = Some(Modal::Help),
            KeyCode::F(2) => self.open_explorer_at_cwd(),
            KeyCode::F(12) => {
                self.log_scroll = LogScroll::default();
                self.modal = Some(Modal::Logs);
            }
            _ => return false,
        }
        true
    }

    fn handle_input_key(&mut self, key: &KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Enter => {
                // With a menu open, Enter keeps the suggestion already in place
                if self.completion.take().is_none() {
                    let effects = self.workspace.submit(self.theme());
                    self.apply_effects(effects);
                }
                return;
            }
            KeyCode::Esc => {
                if let Some((pane, menu)) = self.completion.take() {
                    if let Some(session) = self.workspace.session_mut(pane) {
                        session.input_mut().set(menu.base());
                    }
                }
                return;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.complete(key.code == KeyCode::BackTab);
                return;
            }
            _ => {}
        }

        let Some(session) = self.workspace.focused_session_mut() else {
            return;
        };
        match key.code {
            KeyCode::PageUp => session.scroll_up(SCROLL_PAGE),
            KeyCode::PageDown => session.scroll_down(SCROLL_PAGE),
            KeyCode::Up if shift => session.scroll_up(1),
            KeyCode::Down if shift => session.scroll_down(1),
            KeyCode::Up => session.recall_previous(),
            KeyCode::Down => session.recall_next(),
            KeyCode::Char('u') if ctrl => session.input_mut().clear(),
            KeyCode::Char(c) if !ctrl => session.input_mut().insert(c),
            KeyCode::Backspace => session.input_mut().backspace(),
            KeyCode::Delete => session.input_mut().delete(),
            KeyCode::Left => session.input_mut().move_left(),
            KeyCode::Right => session.input_mut().move_right(),
            KeyCode::Home => session.input_mut().move_home(),
            KeyCode::End => session.input_mut().move_end(),
            _ => {}
        }
    }

    /// Tab completes the last word of the input, cycling on repeat presses.
    /// On an empty input with no menu open it moves focus instead.
    fn complete(&mut self, backward: bool) {
        let pane = self.workspace.focused();
        let open = match self.completion.take() {
            Some((owner, menu)) if owner == pane => Some(menu),
            _ => None,
        };
        let input_empty = self
            .workspace
            .focused_session()
            .map_or(true, |s| s.input().is_empty());
        if open.is_none() && input_empty {
            self.workspace.focus_next_pane();
            return;
        }

        let Some(session) = self.workspace.focused_session_mut() else {
            return;
        };
        let menu = open.or_else(|| {
            CompletionMenu::open(session.input().text(), session.cwd(), session.fs())
        });
        let Some(mut menu) = menu else {
            return;
        };

        let completed = if backward {
            menu.select_prev()
        } else {
            menu.select_next()
        };
        session.input_mut().set(&completed);
        if !menu.is_single() {
            self.completion = Some((pane, menu));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        let config = Config {
            persist_theme: false,
            ..Config::default()
        };
        App::with_themes_dir(config, LogBuffer::new(), ThemeStore::new(ThemeId::Default), None)
    }

    fn input(app: &App) -> String {
        app.workspace
            .focused_session()
            .map(|s| s.input().text().to_string())
            .unwrap_or_default()
    }

    fn type_text(app: &mut App, text: &str) {
        text.chars().for_each(|c| press(app, KeyCode::Char(c)));
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_line(app: &mut App, text: &str) {
        text.chars().for_each(|c| press(app, KeyCode::Char(c)));
        press(app, KeyCode::Enter);
    }

    fn focused_text(app: &App) -> Vec<String> {
        app.workspace
            .focused_session()
            .map(|s| s.render_plain())
            .unwrap_or_default()
    }

    #[test]
    fn typing_and_enter_runs_command() {
        let mut app = app();
        type_line(&mut app, "whoami");
        assert_eq!(focused_text(&app).last().map(String::as_str), Some("guest"));
    }

    #[test]
    fn theme_command_updates_store_and_colors() {
        let mut app = app();
        type_line(&mut app, "theme dracula");
        assert_eq!(app.theme(), ThemeId::Dracula);
        assert_eq!(app.colors, Palette::load_from(ThemeId::Dracula, None));
    }

    #[test]
    fn shortcuts_manage_tabs_and_panes() {
        let mut app = app();
        ctrl(&mut app, 't');
        assert_eq!(app.workspace.tab_count(), 2);
        ctrl(&mut app, 'd');
        assert_eq!(app.workspace.active_tab().panes.len(), 2);

        ctrl(&mut app, 'w');
        assert_eq!(app.workspace.active_tab().panes.len(), 1);
        ctrl(&mut app, 'w');
        assert_eq!(app.workspace.tab_count(), 1);
        ctrl(&mut app, 'w');
        assert_eq!(app.workspace.tab_count(), 1);
        assert!(app.toast.is_some());
    }

    #[test]
    fn tab_cycles_panes_only_with_empty_input() {
        let mut app = app();
        let first = app.workspace.focused();
        ctrl(&mut app, 'd');
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.workspace.focused(), first);

        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.workspace.focused(), first);
    }

    #[test]
    fn palette_captures_typing_and_runs_action() {
        let mut app = app();
        ctrl(&mut app, 'k');
        assert!(app.command_palette.is_open());
        for c in "split".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert!(!app.command_palette.is_open());
        assert_eq!(app.workspace.active_tab().panes.len(), 2);
        // Nothing leaked into the input line
        assert!(app.workspace.focused_session().unwrap().input().is_empty());
    }

    #[test]
    fn modal_swallows_keys_until_closed() {
        let mut app = app();
        press(&mut app, KeyCode::F(1));
        press(&mut app, KeyCode::Char('a'));
        assert!(app.workspace.focused_session().unwrap().input().is_empty());
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.modal, None);
    }

    #[test]
    fn ctrl_l_clears_and_ctrl_u_empties_input() {
        let mut app = app();
        type_line(&mut app, "date");
        ctrl(&mut app, 'l');
        assert!(focused_text(&app).is_empty());

        press(&mut app, KeyCode::Char('a'));
        ctrl(&mut app, 'u');
        assert!(app.workspace.focused_session().unwrap().input().is_empty());
    }

    #[test]
    fn paste_flattens_newlines() {
        let mut app = app();
        app.paste("echo a\nb");
        assert_eq!(
            app.workspace.focused_session().unwrap().input().text(),
            "echo a b"
        );
    }

    #[test]
    fn tab_completes_a_single_match() {
        let mut app = app();
        type_text(&mut app, "ec");
        press(&mut app, KeyCode::Tab);
        assert_eq!(input(&app), "echo ");
        assert!(app.completion.is_none());
    }

    #[test]
    fn tab_cycles_several_matches_and_esc_restores() {
        let mut app = app();
        type_text(&mut app, "c");
        press(&mut app, KeyCode::Tab);
        assert_eq!(input(&app), "cat ");
        press(&mut app, KeyCode::Tab);
        assert_eq!(input(&app), "cd ");
        press(&mut app, KeyCode::BackTab);
        assert_eq!(input(&app), "cat ");
        let shown = app.completion.as_ref().map(|(_, m)| m.suggestions().len());
        assert_eq!(shown, Some(3));

        press(&mut app, KeyCode::Esc);
        assert_eq!(input(&app), "c");
        assert!(app.completion.is_none());
    }

    #[test]
    fn enter_accepts_the_suggestion_without_running_it() {
        let mut app = app();
        type_text(&mut app, "cd D");
        press(&mut app, KeyCode::Tab);
        assert_eq!(input(&app), "cd Documents/");
        press(&mut app, KeyCode::Enter);
        assert!(focused_text(&app).iter().all(|l| !l.contains("cd Documents")));
        assert_eq!(input(&app), "cd Documents/");

        press(&mut app, KeyCode::Enter);
        assert!(input(&app).is_empty());
        assert_eq!(app.workspace.focused_session().unwrap().cwd(), "~/Documents");
    }

    #[test]
    fn tab_with_no_match_leaves_input_alone() {
        let mut app = app();
        type_text(&mut app, "zz");
        press(&mut app, KeyCode::Tab);
        assert_eq!(input(&app), "zz");
        assert!(app.completion.is_none());
    }

    #[test]
    fn typing_closes_the_menu() {
        let mut app = app();
        type_text(&mut app, "c");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('x'));
        assert!(app.completion.is_none());
        assert_eq!(input(&app), "cat x");
    }

    #[test]
    fn page_keys_scroll_and_submit_returns_to_bottom() {
        let mut app = app();
        type_line(&mut app, "help");
        press(&mut app, KeyCode::PageUp);
        let offset = |app: &App| app.workspace.focused_session().unwrap().scroll_offset();
        assert_eq!(offset(&app), 10);
        app.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT));
        assert_eq!(offset(&app), 9);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(offset(&app), 0);

        press(&mut app, KeyCode::PageUp);
        type_line(&mut app, "pwd");
        assert_eq!(offset(&app), 0);
    }

    #[test]
    fn interactive_tree_opens_the_explorer() {
        let mut app = app();
        type_line(&mut app, "tree -i");
        assert_eq!(app.modal, Some(Modal::Explorer));
        assert_eq!(app.explorer.as_ref().map(Explorer::root), Some("~"));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.explorer.as_ref().map(|e| e.rows().len()), Some(9));
        // Keys went to the explorer, not the input line
        assert!(input(&app).is_empty());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.modal, None);
        assert!(app.explorer.is_none());
    }

    #[test]
    fn f2_opens_the_explorer_at_cwd() {
        let mut app = app();
        type_line(&mut app, "cd Projects");
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.explorer.as_ref().map(Explorer::root), Some("~/Projects"));
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.modal, None);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }
}
