// Command dispatch
//
// Turns one raw input line into a batch of new lines, an optional patch to
// the session (cwd, theme) and zero or more signals for the workspace. Every
// verb reports failure as error-styled lines; dispatch itself cannot fail.

use crate::layout::{
    pad_cell, render_diff, render_tree, Align, DiffMode, ProgressVariant, Table, TreeInput,
};
use crate::theme::ThemeId;

use super::line::{LineContent, OutputStyle};
use super::vfs::{self, VirtualFs, HOME};

/// Recognized command verbs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Help,
    About,
    Echo,
    Date,
    Whoami,
    Pwd,
    Ls,
    Cat,
    Cd,
    Tree,
    Diff,
    Neofetch,
    Progress,
    Deps,
    History,
    Theme,
    Split,
    Tab,
    Clear,
}

/// Verb, usage and description, in `help` order
pub const VERBS: &[(Verb, &str, &str)] = &[
    (Verb::Help, "help", "show this message"),
    (Verb::About, "about", "about terminal-ui"),
    (Verb::Echo, "echo <text>", "print text"),
    (Verb::Date, "date", "current date/time"),
    (Verb::Whoami, "whoami", "current user"),
    (Verb::Pwd, "pwd", "print working directory"),
    (Verb::Ls, "ls [dir]", "list files"),
    (Verb::Cat, "cat <file>", "read file contents"),
    (Verb::Cd, "cd <dir>", "change directory"),
    (Verb::Tree, "tree [-i] [dir]", "show directory tree"),
    (Verb::Diff, "diff [-s] <a> <b>", "compare two files"),
    (Verb::Neofetch, "neofetch", "system info"),
    (Verb::Progress, "progress", "progress bars demo"),
    (Verb::Deps, "deps", "dependency table"),
    (Verb::History, "history", "list command history"),
    (Verb::Theme, "theme [name]", "switch theme"),
    (Verb::Split, "split", "split terminal pane"),
    (Verb::Tab, "tab", "open new tab"),
    (Verb::Clear, "clear", "clear screen"),
];

impl Verb {
    /// Case-insensitive lookup
    pub fn parse(word: &str) -> Option<Verb> {
        let word = word.to_lowercase();
        VERBS
            .iter()
            .find(|(_, usage, _)| verb_name(usage) == word)
            .map(|(verb, _, _)| *verb)
    }

    /// Whether `arg` is one of this verb's flags, short or long
    pub fn has_flag(self, arg: &str, long: &str) -> bool {
        FLAGS
            .iter()
            .any(|(verb, short, l, _)| *verb == self && *l == long && (arg == *short || arg == *l))
    }
}

/// First word of a usage string
pub fn verb_name(usage: &str) -> &str {
    usage.split(' ').next().unwrap_or(usage)
}

/// Flags a verb accepts, with their long form and description
pub const FLAGS: &[(Verb, &str, &str, &str)] = &[
    (Verb::Diff, "-s", "--split", "side-by-side view"),
    (Verb::Tree, "-i", "--interactive", "open in the explorer"),
];

/// Workspace-level requests raised by a verb
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    RequestSplit,
    RequestNewTab,
    /// Browse the directory at this path
    OpenExplorer(String),
}

/// Session state changes requested by a verb
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionPatch {
    pub cwd: Option<String>,
    pub theme: Option<ThemeId>,
}

/// Everything a single submission produces
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dispatch {
    /// Drop all existing lines; set only by `clear`, with no new lines
    pub clear: bool,
    pub lines: Vec<LineContent>,
    pub patch: SessionPatch,
    pub signals: Vec<Signal>,
}

/// Read-only view of the session and workspace a command runs against
#[derive(Debug, Clone, Copy)]
pub struct DispatchContext<'a> {
    pub cwd: &'a str,
    /// Prompt captured for the command echo
    pub prompt: &'a str,
    pub theme: ThemeId,
    pub tab_count: usize,
    pub history: &'a [String],
    pub fs: &'a VirtualFs,
}

const NEOFETCH_LOGO: [&str; 8] = [
    "        ",
    "  ╱╲    ",
    " ╱  ╲   ",
    "╱ ╱╲ ╲  ",
    "╲ ╲╱ ╱  ",
    " ╲  ╱   ",
    "  ╲╱    ",
    "        ",
];

const DEPS: &[(&str, &str, &str)] = &[
    ("ratatui", "0.29", "1.9 MB"),
    ("crossterm", "0.28", "412 KB"),
    ("tokio", "1", "3.4 MB"),
    ("clap", "4", "980 KB"),
    ("serde", "1.0", "310 KB"),
    ("tracing", "0.1", "245 KB"),
];

/// Run one line of input. `None` for blank input: nothing happens at all.
pub fn dispatch(ctx: &DispatchContext<'_>, raw: &str) -> Option<Dispatch> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    let mut tokens = text.split_whitespace();
    let word = tokens.next()?;
    let args: Vec<&str> = tokens.collect();
    let arg_text = args.join(" ");

    let verb = Verb::parse(word);
    tracing::debug!(verb = word, args = %arg_text, known = verb.is_some(), "dispatch");

    if verb == Some(Verb::Clear) {
        return Some(Dispatch {
            clear: true,
            ..Default::default()
        });
    }

    let mut out = Dispatch::default();
    out.lines.push(LineContent::Command {
        prompt: ctx.prompt.to_string(),
        text: text.to_string(),
    });

    let Some(verb) = verb else {
        out.lines.push(error(format!("command not found: {}", word)));
        out.lines.push(dim("Type \"help\" for available commands."));
        return Some(out);
    };

    match verb {
        Verb::Clear => {}
        Verb::Help => help(&mut out.lines),
        Verb::About => {
            out.lines.extend([
                LineContent::output(
                    format!("terminal-ui v{}", env!("CARGO_PKG_VERSION")),
                    OutputStyle::Success,
                ),
                LineContent::normal("Beautiful terminal-like UI components for the terminal."),
                LineContent::normal("Built with Rust, ratatui & crossterm."),
                LineContent::output("https://github.com/OpenKnots/terminal-ui", OutputStyle::Info),
            ]);
        }
        Verb::Echo => {
            if arg_text.is_empty() {
                out.lines.push(warning("Usage: echo <text>"));
            } else {
                out.lines.push(LineContent::normal(arg_text));
            }
        }
        Verb::Date => {
            let now = chrono::Local::now();
            out.lines
                .push(LineContent::normal(now.format("%a %b %d %Y %H:%M:%S GMT%z").to_string()));
        }
        Verb::Whoami => out.lines.push(LineContent::normal("guest")),
        Verb::Pwd => out.lines.push(LineContent::normal(vfs::display_path(ctx.cwd))),
        Verb::Ls => {
            let target = args
                .first()
                .map(|a| vfs::resolve(ctx.cwd, a))
                .unwrap_or_else(|| ctx.cwd.to_string());
            match ctx.fs.dir(&target) {
                Some(children) => out.lines.push(LineContent::normal(children.join("  "))),
                None => out.lines.push(no_such_path("ls", &target)),
            }
        }
        Verb::Cat => {
            if arg_text.is_empty() {
                out.lines.push(warning("Usage: cat <file>"));
            } else {
                let path = vfs::resolve(ctx.cwd, &arg_text);
                match ctx.fs.file(&path) {
                    Some(content) => out
                        .lines
                        .extend(content.split('\n').map(LineContent::normal)),
                    None => out
                        .lines
                        .push(error(format!("cat: {}: No such file or directory", arg_text))),
                }
            }
        }
        Verb::Cd => cd(ctx, &arg_text, &mut out),
        Verb::Tree => tree(ctx, &args, &mut out),
        Verb::Diff => diff(ctx, &args, &mut out.lines),
        Verb::Neofetch => neofetch(ctx, &mut out.lines),
        Verb::Progress => {
            out.lines.push(LineContent::output("Progress demo:", OutputStyle::Info));
            for (label, percent, variant) in [
                ("Installing...", 40.0, ProgressVariant::Green),
                ("Building...", 75.0, ProgressVariant::Blue),
                ("Deploying...", 100.0, ProgressVariant::Cyan),
                ("Errors", 12.0, ProgressVariant::Red),
            ] {
                out.lines.push(LineContent::Progress {
                    label: label.to_string(),
                    percent,
                    variant,
                });
            }
            out.lines.push(LineContent::Spinner {
                text: "Waiting for health checks...".to_string(),
            });
        }
        Verb::Deps => {
            let table = DEPS
                .iter()
                .fold(Table::new(["Name", "Version", "Size"]), |t, (name, version, size)| {
                    t.row([name, version, size])
                })
                .align([Align::Left, Align::Left, Align::Right]);
            out.lines
                .extend(table.render_lines().into_iter().map(LineContent::Table));
        }
        Verb::History => {
            out.lines.extend(
                ctx.history
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| LineContent::normal(format!("{:>5}  {}", i + 1, entry))),
            );
        }
        Verb::Theme => theme(ctx, &arg_text, &mut out),
        Verb::Split => {
            out.lines.push(info("Splitting pane..."));
            out.signals.push(Signal::RequestSplit);
        }
        Verb::Tab => {
            out.lines.push(info("Opening new tab..."));
            out.signals.push(Signal::RequestNewTab);
        }
    }

    Some(out)
}

fn help(lines: &mut Vec<LineContent>) {
    lines.push(info("Available commands:"));
    lines.extend(
        VERBS
            .iter()
            .map(|(_, usage, desc)| LineContent::normal(format!("  {:<20}{}", usage, desc))),
    );
    lines.push(LineContent::normal(""));
    for (keys, desc) in [
        ("↑/↓", "command history"),
        ("Ctrl+K", "command palette"),
        ("Ctrl+T", "new tab"),
        ("Ctrl+D", "split pane"),
        ("Tab", "complete command or path"),
        ("PgUp/PgDn", "scroll back"),
    ] {
        lines.push(dim(format!("  {:<20}{}", keys, desc)));
    }
}

fn cd(ctx: &DispatchContext<'_>, arg: &str, out: &mut Dispatch) {
    let target = match arg {
        "" | HOME => HOME.to_string(),
        ".." => vfs::parent(ctx.cwd),
        _ => vfs::resolve(ctx.cwd, arg),
    };

    if ctx.fs.dir(&target).is_some() {
        out.patch.cwd = Some(target);
    } else {
        out.lines
            .push(error(format!("cd: no such file or directory: {}", arg)));
    }
}

/// Static `tree` listing, or with `-i` a snapshot plus a request to open the
/// explorer on the same directory
fn tree(ctx: &DispatchContext<'_>, args: &[&str], out: &mut Dispatch) {
    let interactive = args.iter().any(|a| Verb::Tree.has_flag(a, "--interactive"));
    let target = args
        .iter()
        .find(|a| !a.starts_with('-'))
        .map(|a| vfs::resolve(ctx.cwd, a))
        .unwrap_or_else(|| ctx.cwd.to_string());

    if interactive {
        let Some(view) = ctx.fs.tree_view(&target) else {
            out.lines.push(no_such_path("tree", &target));
            return;
        };
        let renderer = vfs::explorer_renderer();
        let input = TreeInput::Nodes {
            view: &view,
            renderer: &renderer,
        };
        out.lines
            .extend(render_tree(input).into_iter().map(LineContent::normal));
        out.lines
            .push(dim("Explorer: ↑/↓ move · Enter toggle · Esc close"));
        out.signals.push(Signal::OpenExplorer(target));
        return;
    }

    let Some(tree) = ctx.fs.dir_tree(&target) else {
        out.lines.push(no_such_path("tree", &target));
        return;
    };
    let input = TreeInput::Directory {
        root: &target,
        tree: &tree,
    };
    out.lines
        .extend(render_tree(input).into_iter().map(LineContent::normal));
    let (dirs, files) = tree.counts();
    out.lines.push(LineContent::normal(""));
    out.lines.push(dim(format!(
        "{} {}, {} {}",
        dirs,
        if dirs == 1 { "directory" } else { "directories" },
        files,
        if files == 1 { "file" } else { "files" }
    )));
}

fn diff(ctx: &DispatchContext<'_>, args: &[&str], lines: &mut Vec<LineContent>) {
    let mode = if args.iter().any(|a| Verb::Diff.has_flag(a, "--split")) {
        DiffMode::Split
    } else {
        DiffMode::Unified
    };
    let files: Vec<&str> = args.iter().copied().filter(|a| !a.starts_with('-')).collect();
    let (Some(a), Some(b)) = (files.first(), files.get(1)) else {
        lines.push(warning("Usage: diff [-s|--split] <file1> <file2>"));
        return;
    };

    let mut contents = Vec::with_capacity(2);
    for arg in [a, b] {
        match ctx.fs.file(&vfs::resolve(ctx.cwd, arg)) {
            Some(content) => contents.push(content),
            None => {
                lines.push(error(format!("diff: {}: No such file or directory", arg)));
                return;
            }
        }
    }

    lines.push(LineContent::output(format!("--- {}", a), OutputStyle::Error));
    lines.push(LineContent::output(format!("+++ {}", b), OutputStyle::Success));
    for text in render_diff(contents[0], contents[1], mode) {
        // The gutter is the first column in both modes; a changed split row
        // holds both sides, so it gets its own color
        let style = match (text.chars().next(), mode) {
            (Some(' ') | None, _) => OutputStyle::Dim,
            (_, DiffMode::Split) => OutputStyle::Warning,
            (Some('-'), DiffMode::Unified) => OutputStyle::Error,
            (_, DiffMode::Unified) => OutputStyle::Success,
        };
        lines.push(LineContent::output(text, style));
    }
}

fn neofetch(ctx: &DispatchContext<'_>, lines: &mut Vec<LineContent>) {
    let rows = [
        Some("terminal-ui".to_string()),
        None,
        Some("Shell: vsh".to_string()),
        Some(format!("Theme: {}", ctx.theme.name())),
        Some(format!("Tabs: {}", ctx.tab_count)),
        Some("Rust + ratatui".to_string()),
    ];
    let width = rows
        .iter()
        .flatten()
        .map(|r| unicode_width::UnicodeWidthStr::width(r.as_str()))
        .max()
        .unwrap_or(0)
        .max(12);
    let rule = "─".repeat(width + 2);

    let mut boxed = vec![format!("╭{}╮", rule)];
    for row in &rows {
        boxed.push(match row {
            Some(text) => format!("│ {} │", pad_cell(text, width, Align::Left)),
            None => format!("├{}┤", rule),
        });
    }
    boxed.push(format!("╰{}╯", rule));

    lines.extend(
        NEOFETCH_LOGO
            .iter()
            .zip(boxed)
            .map(|(logo, text)| {
            LineContent::output(format!("{}{}", logo, text), OutputStyle::Info)
        }),
    );
}

fn theme(ctx: &DispatchContext<'_>, arg: &str, out: &mut Dispatch) {
    if arg.is_empty() {
        out.lines.extend([
            info(format!("Current: {}", ctx.theme.name())),
            LineContent::normal(format!("Available: {}", ThemeId::available())),
            dim("Usage: theme <name>"),
        ]);
        return;
    }

    match ThemeId::find(arg) {
        Some(id) => {
            out.patch.theme = Some(id);
            out.lines.push(LineContent::output(
                format!("Theme switched to {}", id.name()),
                OutputStyle::Success,
            ));
        }
        None => {
            out.lines.push(error(format!("Unknown theme: {}", arg)));
            out.lines
                .push(dim(format!("Available: {}", ThemeId::available())));
        }
    }
}

fn no_such_path(verb: &str, target: &str) -> LineContent {
    error(format!(
        "{}: cannot access '{}': No such file or directory",
        verb, target
    ))
}

fn info(text: impl Into<String>) -> LineContent {
    LineContent::output(text, OutputStyle::Info)
}

fn warning(text: impl Into<String>) -> LineContent {
    LineContent::output(text, OutputStyle::Warning)
}

fn error(text: impl Into<String>) -> LineContent {
    LineContent::output(text, OutputStyle::Error)
}

fn dim(text: impl Into<String>) -> LineContent {
    LineContent::output(text, OutputStyle::Dim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::TableLineKind;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use test_case::test_case;

    const PROMPT: &str = "guest@openknots:~$";

    fn run_in(cwd: &str, raw: &str) -> Option<Dispatch> {
        let fs = VirtualFs::demo();
        let history = vec!["ls".to_string(), raw.trim().to_string()];
        let ctx = DispatchContext {
            cwd,
            prompt: PROMPT,
            theme: ThemeId::Dracula,
            tab_count: 2,
            history: &history,
            fs: &fs,
        };
        dispatch(&ctx, raw)
    }

    fn run(raw: &str) -> Dispatch {
        run_in(HOME, raw).expect("non-empty input dispatches")
    }

    /// Output lines after the command echo, as (text, style)
    fn outputs(d: &Dispatch) -> Vec<(String, OutputStyle)> {
        d.lines
            .iter()
            .skip(1)
            .map(|l| match l {
                LineContent::Output { text, style } => (text.clone(), *style),
                other => (other.plain_text(), OutputStyle::Normal),
            })
            .collect()
    }

    fn texts(d: &Dispatch) -> Vec<String> {
        outputs(d).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn blank_input_does_nothing() {
        assert_eq!(run_in(HOME, ""), None);
        assert_eq!(run_in(HOME, "   \t "), None);
    }

    #[test]
    fn clear_has_no_lines_and_no_echo() {
        let d = run("clear");
        assert!(d.clear);
        assert!(d.lines.is_empty());
        assert!(run("CLEAR  now").clear);
    }

    #[test]
    fn echo_line_is_first_and_trimmed() {
        let d = run("  whoami  ");
        assert_eq!(
            d.lines[0],
            LineContent::Command {
                prompt: PROMPT.to_string(),
                text: "whoami".to_string()
            }
        );
        assert_eq!(texts(&d), vec!["guest"]);
    }

    #[test_case("echo hi", "hi" ; "single word")]
    #[test_case("echo   hello    world", "hello world" ; "whitespace runs collapse")]
    #[test_case("ECHO x", "x" ; "verb ignores case")]
    fn echo(raw: &str, expected: &str) {
        assert_eq!(outputs(&run(raw)), vec![(expected.to_string(), OutputStyle::Normal)]);
    }

    #[test_case("echo" ; "bare")]
    #[test_case("echo   " ; "trailing spaces")]
    fn echo_without_text_warns(raw: &str) {
        assert_eq!(
            outputs(&run(raw)),
            vec![("Usage: echo <text>".to_string(), OutputStyle::Warning)]
        );
    }

    #[test]
    fn unknown_verb_keeps_original_case() {
        assert_eq!(
            outputs(&run("FooBar --x")),
            vec![
                ("command not found: FooBar".to_string(), OutputStyle::Error),
                ("Type \"help\" for available commands.".to_string(), OutputStyle::Dim),
            ]
        );
    }

    #[test]
    fn help_lists_every_verb() {
        let lines = texts(&run("help"));
        assert_eq!(lines[0], "Available commands:");
        assert_eq!(lines[1], "  help                show this message");
        assert_eq!(lines[3], "  echo <text>         print text");
        for (_, usage, _) in VERBS {
            assert!(lines.iter().any(|l| l.starts_with(&format!("  {}", usage))), "{}", usage);
        }
    }

    #[test]
    fn pwd_expands_home() {
        assert_eq!(texts(&run_in("~/Documents", "pwd").unwrap()), vec!["/home/guest/Documents"]);
    }

    #[test]
    fn ls_lists_and_errors() {
        assert_eq!(
            texts(&run("ls")),
            vec!["Documents  Projects  Downloads  .config  .zshrc  README.md"]
        );
        assert_eq!(texts(&run("ls Documents")), vec!["notes.txt  resume.pdf"]);
        assert_eq!(
            outputs(&run("ls .zshrc")),
            vec![(
                "ls: cannot access '~/.zshrc': No such file or directory".to_string(),
                OutputStyle::Error
            )]
        );
    }

    #[test]
    fn cat_reads_and_errors() {
        assert_eq!(texts(&run("cat README.md")).len(), 3);
        assert_eq!(texts(&run("cat ~/.zshrc"))[1], "alias ll=\"ls -la\"");
        assert_eq!(
            outputs(&run("cat")),
            vec![("Usage: cat <file>".to_string(), OutputStyle::Warning)]
        );
        assert_eq!(
            texts(&run("cat Documents")),
            vec!["cat: Documents: No such file or directory"]
        );
    }

    #[test_case("~", "Documents", Some("~/Documents") ; "into child")]
    #[test_case("~/Documents", "..", Some("~") ; "up one")]
    #[test_case("~", "..", Some("~") ; "up from root stays")]
    #[test_case("~/Projects", "", Some("~") ; "bare goes home")]
    #[test_case("~/Projects", "~", Some("~") ; "tilde goes home")]
    #[test_case("~/Projects", "~/Downloads", Some("~/Downloads") ; "absolute")]
    #[test_case("~", "README.md", None ; "file is not a dir")]
    fn cd_targets(cwd: &str, arg: &str, expected: Option<&str>) {
        let d = run_in(cwd, &format!("cd {}", arg)).unwrap();
        assert_eq!(d.patch.cwd.as_deref(), expected);
    }

    #[test]
    fn cd_nonexistent_reports_one_error() {
        let d = run("cd nonexistent");
        assert_eq!(d.patch, SessionPatch::default());
        assert_eq!(
            outputs(&d),
            vec![(
                "cd: no such file or directory: nonexistent".to_string(),
                OutputStyle::Error
            )]
        );
    }

    #[test]
    fn successful_cd_prints_only_the_echo() {
        assert_eq!(run("cd Projects").lines.len(), 1);
    }

    #[test]
    fn theme_without_arg_describes_current() {
        assert_eq!(
            texts(&run("theme")),
            vec![
                "Current: Dracula".to_string(),
                format!("Available: {}", ThemeId::available()),
                "Usage: theme <name>".to_string(),
            ]
        );
    }

    #[test]
    fn theme_switch_by_name_and_id() {
        let d = run("theme Solarized Dark");
        assert_eq!(d.patch.theme, Some(ThemeId::SolarizedDark));
        assert_eq!(texts(&d), vec!["Theme switched to Solarized Dark"]);
        assert_eq!(run("theme ONE-DARK").patch.theme, Some(ThemeId::OneDark));
    }

    #[test]
    fn unknown_theme_lists_available() {
        let d = run("theme vaporwave");
        assert_eq!(d.patch.theme, None);
        assert_eq!(
            outputs(&d)[0],
            ("Unknown theme: vaporwave".to_string(), OutputStyle::Error)
        );
        assert_eq!(outputs(&d)[1].1, OutputStyle::Dim);
    }

    #[test]
    fn split_and_tab_raise_signals() {
        let d = run("split");
        assert_eq!(d.signals, vec![Signal::RequestSplit]);
        assert_eq!(texts(&d), vec!["Splitting pane..."]);
        assert_eq!(run("tab").signals, vec![Signal::RequestNewTab]);
    }

    #[test]
    fn neofetch_box_is_aligned() {
        let lines = texts(&run("neofetch"));
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().any(|l| l.contains("│ Theme: Dracula")));
        assert!(lines.iter().any(|l| l.contains("│ Tabs: 2")));
        let widths: Vec<usize> = lines
            .iter()
            .map(|l| unicode_width::UnicodeWidthStr::width(l.as_str()))
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
    }

    #[test]
    fn progress_lines() {
        let d = run("progress");
        let percents: Vec<f64> = d
            .lines
            .iter()
            .filter_map(|l| match l {
                LineContent::Progress { percent, .. } => Some(*percent),
                _ => None,
            })
            .collect();
        assert_eq!(percents, vec![40.0, 75.0, 100.0, 12.0]);
        assert!(matches!(d.lines.last(), Some(LineContent::Spinner { .. })));
    }

    #[test]
    fn tree_renders_subtree() {
        assert_eq!(
            texts(&run("tree Downloads")),
            vec!["~/Downloads", "├── setup.sh", "└── image.png", "", "0 directories, 2 files"]
        );
        assert_eq!(
            texts(&run("tree nowhere")),
            vec!["tree: cannot access '~/nowhere': No such file or directory"]
        );
    }

    #[test]
    fn interactive_tree_opens_the_explorer() {
        let d = run("tree -i Documents");
        assert_eq!(d.signals, vec![Signal::OpenExplorer("~/Documents".to_string())]);
        let lines = texts(&d);
        assert_eq!(lines[0], "── ▼ 📂 ~/Documents");
        assert_eq!(lines[1], "├──   📄 notes.txt");
        assert!(lines[3].starts_with("Explorer:"));

        let missing = run("tree --interactive nowhere");
        assert!(missing.signals.is_empty());
        assert_eq!(outputs(&missing)[0].1, OutputStyle::Error);
    }

    #[test]
    fn diff_of_two_files() {
        let d = run("diff .zshrc README.md");
        let lines = outputs(&d);
        assert_eq!(lines[0], ("--- .zshrc".to_string(), OutputStyle::Error));
        assert_eq!(lines[1], ("+++ README.md".to_string(), OutputStyle::Success));
        // Three positional pairs, all changed
        assert_eq!(lines.len(), 2 + 6);
        assert!(lines[2].0.starts_with("- export PATH"));
        assert!(lines[3].0.starts_with("+ # terminal-ui"));
    }

    #[test]
    fn split_diff_puts_both_sides_on_one_row() {
        let d = run("diff --split .zshrc README.md");
        let lines = outputs(&d);
        assert_eq!(lines[0], ("--- .zshrc".to_string(), OutputStyle::Error));
        // One row per positional pair
        assert_eq!(lines.len(), 2 + 3);
        assert!(lines[2].0.starts_with("- export PATH"));
        assert!(lines[2].0.contains(" │ + # terminal-ui"));
        assert_eq!(lines[2].1, OutputStyle::Warning);
        assert_eq!(outputs(&run("diff .zshrc -s README.md")), lines);
    }

    #[test]
    fn identical_files_diff_as_context() {
        let lines = outputs(&run("diff -s .zshrc ~/.zshrc"));
        assert!(lines[2..].iter().all(|(_, style)| *style == OutputStyle::Dim));
    }

    #[test]
    fn diff_usage_and_missing_file() {
        assert_eq!(
            texts(&run("diff .zshrc")),
            vec!["Usage: diff [-s|--split] <file1> <file2>"]
        );
        assert_eq!(
            texts(&run("diff --split .zshrc")),
            vec!["Usage: diff [-s|--split] <file1> <file2>"]
        );
        assert_eq!(
            texts(&run("diff .zshrc nope")),
            vec!["diff: nope: No such file or directory"]
        );
    }

    #[test]
    fn deps_table_right_aligns_size() {
        let lines = texts(&run("deps"));
        assert!(lines[0].starts_with('┌'));
        assert!(lines[1].contains("Name"));
        assert!(lines[3].contains("1.9 MB │"));
        assert!(lines[4].contains(" 412 KB │"));
    }

    #[test]
    fn deps_lines_keep_their_table_tags() {
        let kinds: Vec<TableLineKind> = run("deps")
            .lines
            .iter()
            .filter_map(|l| match l {
                LineContent::Table(line) => Some(line.kind),
                _ => None,
            })
            .collect();
        assert_eq!(kinds.len(), DEPS.len() + 4);
        assert_eq!(kinds[1], TableLineKind::Header);
        assert_eq!(kinds[4], TableLineKind::Row(1));
    }

    #[test]
    fn history_is_numbered() {
        assert_eq!(texts(&run("history")), vec!["    1  ls", "    2  history"]);
    }

    proptest! {
        #[test]
        fn dispatch_is_total(raw in "\\PC{0,40}") {
            let result = run_in(HOME, &raw);
            match result {
                None => prop_assert!(raw.trim().is_empty()),
                Some(d) if d.clear => prop_assert!(d.lines.is_empty()),
                Some(d) => prop_assert!(!d.lines.is_empty()),
            }
        }

        #[test]
        fn echo_repeats_words(words in proptest::collection::vec("[a-z0-9]{1,8}", 1..5)) {
            let d = run(&format!("echo {}", words.join("   ")));
            prop_assert_eq!(texts(&d), vec![words.join(" ")]);
        }
    }
}
