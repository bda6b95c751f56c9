// Tab completion for the input line
//
// Only the last whitespace-separated word is completed. The first word
// completes against the verb table; after `theme` the catalog ids are
// offered, a word starting with `-` completes the verb's flags, and anything
// else completes against entries of the virtual filesystem.
//
// Matching is a case-insensitive prefix test. An empty prefix matches every
// candidate, except that dotfiles stay hidden until the prefix starts with
// a dot.

use crate::theme::THEMES;

use super::dispatch::{verb_name, Verb, FLAGS, VERBS};
use super::vfs::{self, VirtualFs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Command,
    Flag,
    Theme,
    Directory,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub label: String,
    /// Text that replaces the word being completed
    pub replacement: String,
    pub description: Option<String>,
    pub kind: SuggestionKind,
}

/// Candidates for the word at the end of an input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Byte offset where the completed word starts
    pub start: usize,
    pub suggestions: Vec<Suggestion>,
}

impl Completion {
    /// `input` with its last word replaced by the `index`-th suggestion
    pub fn apply(&self, input: &str, index: usize) -> Option<String> {
        let suggestion = self.suggestions.get(index)?;
        let head = input.get(..self.start)?;
        Some(format!("{}{}", head, suggestion.replacement))
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

fn matches(prefix: &str, label: &str) -> bool {
    label.to_lowercase().starts_with(&prefix.to_lowercase())
}

/// Complete the last word of `input`, resolving paths against `cwd`
pub fn complete(input: &str, cwd: &str, fs: &VirtualFs) -> Completion {
    let start = input
        .char_indices()
        .filter(|(_, c)| c.is_whitespace())
        .last()
        .map_or(0, |(i, c)| i + c.len_utf8());
    let word = &input[start..];
    let first = input.split_whitespace().next().unwrap_or("");

    let suggestions = if input[..start].trim().is_empty() {
        commands(word)
    } else {
        match Verb::parse(first) {
            Some(Verb::Theme) => themes(word),
            Some(verb) if word.starts_with('-') => flags(verb, word),
            _ => paths(word, cwd, fs),
        }
    };
    Completion { start, suggestions }
}

fn commands(word: &str) -> Vec<Suggestion> {
    VERBS
        .iter()
        .map(|(_, usage, desc)| (verb_name(usage), *desc))
        .filter(|(name, _)| matches(word, name))
        .map(|(name, desc)| Suggestion {
            label: name.to_string(),
            replacement: format!("{} ", name),
            description: Some(desc.to_string()),
            kind: SuggestionKind::Command,
        })
        .collect()
}

fn themes(word: &str) -> Vec<Suggestion> {
    THEMES
        .iter()
        .filter(|t| matches(word, t.slug))
        .map(|t| Suggestion {
            label: t.slug.to_string(),
            replacement: t.slug.to_string(),
            description: Some(t.name.to_string()),
            kind: SuggestionKind::Theme,
        })
        .collect()
}

fn flags(verb: Verb, word: &str) -> Vec<Suggestion> {
    FLAGS
        .iter()
        .filter(|(v, short, long, _)| {
            *v == verb && (matches(word, long) || matches(word, short))
        })
        .map(|(_, short, long, desc)| Suggestion {
            label: format!("{}, {}", short, long),
            replacement: format!("{} ", long),
            description: Some(desc.to_string()),
            kind: SuggestionKind::Flag,
        })
        .collect()
}

fn paths(word: &str, cwd: &str, fs: &VirtualFs) -> Vec<Suggestion> {
    // `Projects/te` completes `te` inside `Projects`
    let (dir_part, prefix) = match word.rfind('/') {
        Some(i) => word.split_at(i + 1),
        None => ("", word),
    };
    let dir = if dir_part.is_empty() {
        cwd.to_string()
    } else {
        vfs::resolve(cwd, dir_part)
    };
    let Some(children) = fs.dir(&dir) else {
        return Vec::new();
    };

    children
        .iter()
        .filter(|name| !name.starts_with('.') || prefix.starts_with('.'))
        .filter(|name| matches(prefix, name))
        .map(|name| {
            let is_dir = fs.dir(&vfs::join(&dir, name)).is_some();
            let (kind, label, tail) = if is_dir {
                (SuggestionKind::Directory, format!("{}/", name), "/")
            } else {
                (SuggestionKind::File, name.clone(), " ")
            };
            Suggestion {
                label,
                replacement: format!("{}{}{}", dir_part, name, tail),
                description: None,
                kind,
            }
        })
        .collect()
}

/// Cycling state across repeated Tab presses.
///
/// The first press applies the first suggestion; each further press moves
/// on, wrapping at the end. `base` keeps the input as typed so every
/// suggestion replaces the same word and Esc can put it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionMenu {
    base: String,
    completion: Completion,
    selected: Option<usize>,
}

impl CompletionMenu {
    /// `None` when nothing matches
    pub fn open(input: &str, cwd: &str, fs: &VirtualFs) -> Option<Self> {
        let completion = complete(input, cwd, fs);
        if completion.is_empty() {
            return None;
        }
        Some(Self {
            base: input.to_string(),
            completion,
            selected: None,
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.completion.suggestions
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Only one candidate, so there is nothing to cycle through
    pub fn is_single(&self) -> bool {
        self.suggestions().len() == 1
    }

    /// Select the next suggestion and return the completed input
    pub fn select_next(&mut self) -> String {
        let len = self.suggestions().len();
        let index = self.selected.map_or(0, |i| (i + 1) % len);
        self.select(index)
    }

    /// Select the previous suggestion and return the completed input
    pub fn select_prev(&mut self) -> String {
        let len = self.suggestions().len();
        let index = self.selected.map_or(len - 1, |i| (i + len - 1) % len);
        self.select(index)
    }

    fn select(&mut self, index: usize) -> String {
        self.selected = Some(index);
        self.completion
            .apply(&self.base, index)
            .unwrap_or_else(|| self.base.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn labels(input: &str, cwd: &str) -> Vec<String> {
        complete(input, cwd, &VirtualFs::demo())
            .suggestions
            .into_iter()
            .map(|s| s.label)
            .collect()
    }

    #[test]
    fn empty_prefix_offers_every_verb() {
        let all = labels("", "~");
        assert_eq!(all.len(), VERBS.len());
        assert_eq!(all[0], "help");
    }

    #[test_case("ec", &["echo"] ; "single match")]
    #[test_case("c", &["cat", "cd", "clear"] ; "several matches keep table order")]
    #[test_case("HIS", &["history"] ; "ignores case")]
    #[test_case("zz", &[] ; "no match")]
    fn verb_prefixes(input: &str, expected: &[&str]) {
        assert_eq!(labels(input, "~"), expected);
    }

    #[test]
    fn paths_complete_in_cwd_and_below() {
        assert_eq!(labels("ls D", "~"), vec!["Documents/", "Downloads/"]);
        assert_eq!(labels("cat R", "~"), vec!["README.md"]);
        assert_eq!(labels("cat Documents/n", "~"), vec!["notes.txt"]);
        assert_eq!(labels("cd ~/Pro", "~/Documents"), vec!["Projects/"]);
        assert!(labels("cat nowhere/x", "~").is_empty());
    }

    #[test]
    fn dotfiles_need_a_dot() {
        let plain = labels("cat ", "~");
        assert!(!plain.iter().any(|l| l.starts_with('.')));
        assert_eq!(labels("cat .", "~"), vec![".config/", ".zshrc"]);
    }

    #[test]
    fn themes_and_flags() {
        assert_eq!(labels("theme so", "~"), vec!["solarized-dark"]);
        assert_eq!(labels("diff --s", "~"), vec!["-s, --split"]);
        assert_eq!(labels("diff -s", "~"), vec!["-s, --split"]);
        assert_eq!(labels("tree -", "~"), vec!["-i, --interactive"]);
        assert!(labels("echo -", "~").is_empty());
    }

    #[test]
    fn apply_replaces_only_the_last_word() {
        let fs = VirtualFs::demo();
        let c = complete("cat Documents/n", "~", &fs);
        assert_eq!(c.start, 4);
        assert_eq!(c.apply("cat Documents/n", 0).as_deref(), Some("cat Documents/notes.txt "));
        assert_eq!(c.apply("cat Documents/n", 1), None);

        let dir = complete("cd Pro", "~", &fs);
        assert_eq!(dir.apply("cd Pro", 0).as_deref(), Some("cd Projects/"));
    }

    #[test]
    fn menu_cycles_and_keeps_the_typed_base() {
        let fs = VirtualFs::demo();
        let mut menu = CompletionMenu::open("c", "~", &fs).unwrap();
        assert!(!menu.is_single());
        assert_eq!(menu.select_next(), "cat ");
        assert_eq!(menu.select_next(), "cd ");
        assert_eq!(menu.select_next(), "clear ");
        assert_eq!(menu.select_next(), "cat ");
        assert_eq!(menu.select_prev(), "clear ");
        assert_eq!(menu.selected(), Some(2));
        assert_eq!(menu.base(), "c");

        let mut single = CompletionMenu::open("wh", "~", &fs).unwrap();
        assert!(single.is_single());
        assert_eq!(single.select_next(), "whoami ");
        assert!(CompletionMenu::open("zz", "~", &fs).is_none());
    }
}
