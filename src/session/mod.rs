// Virtual terminal session
//
// One Session per pane: scrollback, cwd, history and the input line. A
// submission runs through the dispatcher; the result is applied here, and
// anything that reaches beyond the pane (theme, split, new tab) comes back to
// the caller as an Effect.

pub mod complete;
pub mod dispatch;
pub mod history;
pub mod input;
pub mod line;
pub mod typing;
pub mod vfs;

pub use complete::{complete, Completion, CompletionMenu, Suggestion, SuggestionKind};
pub use dispatch::{dispatch, Dispatch, DispatchContext, SessionPatch, Signal, Verb};
pub use history::History;
pub use input::InputLine;
pub use line::{Line, LineBuffer, LineContent, OutputStyle};
pub use typing::Typewriter;
pub use vfs::VirtualFs;

use std::sync::Arc;
use std::time::Duration;

use crate::layout::spinner;
use crate::theme::ThemeId;

pub const PROMPT_USER: &str = "guest";
pub const PROMPT_HOST: &str = "openknots";

pub const WELCOME: &str = "Welcome to terminal-ui — type \"help\" for commands.";

/// Requests a submission makes of the world outside its pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ThemeChange(ThemeId),
    RequestSplit,
    RequestNewTab,
    /// Browse this directory in the explorer overlay
    OpenExplorer(String),
}

/// Per-session knobs, usually taken from config
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub history_limit: Option<usize>,
    /// Start with the welcome line
    pub welcome: bool,
    /// Type the welcome line out at this interval instead of showing it
    pub typing_interval: Option<Duration>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            history_limit: None,
            welcome: true,
            typing_interval: None,
        }
    }
}

/// Workspace facts a command may read
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionEnv {
    pub theme: ThemeId,
    pub tab_count: usize,
}

#[derive(Debug, Clone)]
pub struct Session {
    lines: LineBuffer,
    cwd: String,
    history: History,
    input: InputLine,
    fs: Arc<VirtualFs>,
    /// Line currently being typed out, by id
    typing: Option<(u64, Typewriter)>,
    /// Time ticked so far; drives spinner frames
    clock: Duration,
    /// Lines scrolled back from the newest
    scroll: usize,
}

impl Session {
    pub fn new(fs: Arc<VirtualFs>, options: &SessionOptions) -> Self {
        let mut session = Self {
            lines: LineBuffer::new(),
            cwd: vfs::HOME.to_string(),
            history: History::with_limit(options.history_limit),
            input: InputLine::new(),
            fs,
            typing: None,
            clock: Duration::ZERO,
            scroll: 0,
        };

        if options.welcome {
            session
                .lines
                .append([LineContent::output(WELCOME, OutputStyle::Dim)]);
            let welcome = session.lines.lines().last().map(|l| l.id);
            if let (Some(interval), Some(id)) = (options.typing_interval, welcome) {
                session.typing = Some((id, Typewriter::new(WELCOME, interval)));
            }
        }
        session
    }

    pub fn lines(&self) -> &[Line] {
        self.lines.lines()
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputLine {
        &mut self.input
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    /// `guest@openknots:<last cwd segment>$`
    pub fn prompt(&self) -> String {
        format!(
            "{}@{}:{}$",
            PROMPT_USER,
            PROMPT_HOST,
            vfs::prompt_segment(&self.cwd)
        )
    }

    /// Submit whatever is in the input line, leaving it empty
    pub fn submit(&mut self, env: &SessionEnv) -> Vec<Effect> {
        let raw = self.input.take();
        self.submit_text(&raw, env)
    }

    /// Run one line of input as if typed at the prompt
    pub fn submit_text(&mut self, raw: &str, env: &SessionEnv) -> Vec<Effect> {
        if raw.trim().is_empty() {
            return Vec::new();
        }

        // Recorded first so `history` lists itself
        self.history.record(raw);
        self.scroll_to_bottom();

        let prompt = self.prompt();
        let ctx = DispatchContext {
            cwd: &self.cwd,
            prompt: &prompt,
            theme: env.theme,
            tab_count: env.tab_count,
            history: self.history.entries(),
            fs: &self.fs,
        };
        let Some(result) = dispatch(&ctx, raw) else {
            return Vec::new();
        };

        // Output lands after the welcome line, so stop typing it
        if let Some((_, typewriter)) = self.typing.as_mut() {
            typewriter.finish();
        }

        if result.clear {
            self.clear();
        } else {
            self.lines.append(result.lines);
        }

        if let Some(cwd) = result.patch.cwd {
            self.cwd = cwd;
        }

        let mut effects = Vec::new();
        if let Some(theme) = result.patch.theme {
            effects.push(Effect::ThemeChange(theme));
        }
        effects.extend(result.signals.into_iter().map(|s| match s {
            Signal::RequestSplit => Effect::RequestSplit,
            Signal::RequestNewTab => Effect::RequestNewTab,
            Signal::OpenExplorer(path) => Effect::OpenExplorer(path),
        }));
        effects
    }

    /// Empty the scrollback and stop any typing animation
    pub fn clear(&mut self) {
        self.lines.reset();
        self.scroll_to_bottom();
        if let Some((_, mut typewriter)) = self.typing.take() {
            typewriter.cancel();
        }
    }

    /// Up arrow: load the previous history entry into the input line
    pub fn recall_previous(&mut self) {
        if let Some(entry) = self.history.recall_previous() {
            self.input.set(entry);
        }
    }

    /// Down arrow: load the next entry, or an empty line past the newest
    pub fn recall_next(&mut self) {
        if let Some(entry) = self.history.recall_next() {
            self.input.set(entry);
        }
    }

    /// Lines scrolled back from the newest; zero follows new output
    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    /// Scroll back, stopping at the oldest line
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = (self.scroll + lines).min(self.lines.len().saturating_sub(1));
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = 0;
    }

    /// Advance the typing animation and spinners. Returns true when a redraw
    /// is needed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let frame = spinner::frame_index(self.clock);
        self.clock += elapsed;
        let spun = frame != spinner::frame_index(self.clock) && self.has_spinner();

        let Some((_, typewriter)) = self.typing.as_mut() else {
            return spun;
        };
        let changed = typewriter.advance(elapsed);
        if typewriter.is_done() {
            self.typing = None;
            return true;
        }
        changed || spun
    }

    fn has_spinner(&self) -> bool {
        self.lines()
            .iter()
            .any(|l| matches!(l.content, LineContent::Spinner { .. }))
    }

    pub fn is_typing(&self) -> bool {
        self.typing.is_some()
    }

    /// Text of a line as currently shown; a line mid-animation shows only its
    /// revealed prefix.
    pub fn visible_text(&self, line: &Line) -> String {
        match (&self.typing, &line.content) {
            (Some((id, typewriter)), _) if *id == line.id => typewriter.visible().to_string(),
            (_, LineContent::Spinner { text }) => spinner::render(text, self.clock),
            (_, content) => content.plain_text(),
        }
    }

    /// Scrollback as plain text lines
    pub fn render_plain(&self) -> Vec<String> {
        self.lines().iter().map(|l| self.visible_text(l)).collect()
    }
}
