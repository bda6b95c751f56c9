// Virtual filesystem - a fixed, read-only path map
//
// Paths are stored in their `~`-rooted form (`~/Documents`). Nothing is ever
// created or removed at runtime; an unknown path is simply an error for the
// verb that asked.

use std::collections::BTreeMap;

use crate::layout::{DirTree, NodeStyle, TreeNode, TreeRenderer, TreeView};

/// Root of the virtual tree, and the starting cwd of every session
pub const HOME: &str = "~";

/// What `pwd` shows in place of `~`
pub const HOME_DISPLAY: &str = "/home/guest";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VfsNode {
    /// Directory with child names in listing order
    Dir(Vec<String>),
    /// File with literal content
    File(String),
}

#[derive(Debug, Clone, Default)]
pub struct VirtualFs {
    nodes: BTreeMap<String, VfsNode>,
}

impl VirtualFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir<I, S>(mut self, path: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nodes.insert(
            path.into(),
            VfsNode::Dir(children.into_iter().map(Into::into).collect()),
        );
        self
    }

    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.nodes.insert(path.into(), VfsNode::File(content.into()));
        self
    }

    /// The guest home directory every session starts in
    pub fn demo() -> Self {
        Self::new()
            .with_dir(
                "~",
                ["Documents", "Projects", "Downloads", ".config", ".zshrc", "README.md"],
            )
            .with_dir("~/Documents", ["notes.txt", "resume.pdf"])
            .with_dir("~/Projects", ["terminal-ui", "website", "api"])
            .with_dir("~/Downloads", ["setup.sh", "image.png"])
            .with_dir("~/.config", ["nvim", "alacritty"])
            .with_file(
                "~/.zshrc",
                concat!(
                    "export PATH=\"$HOME/.local/bin:$PATH\"\n",
                    "alias ll=\"ls -la\"\n",
                    "alias gs=\"git status\"",
                ),
            )
            .with_file(
                "~/README.md",
                concat!(
                    "# terminal-ui\n",
                    "Beautiful terminal-like UI components for the terminal.\n",
                    "Build CLI experiences in Rust.",
                ),
            )
    }

    pub fn get(&self, path: &str) -> Option<&VfsNode> {
        self.nodes.get(path)
    }

    pub fn dir(&self, path: &str) -> Option<&[String]> {
        match self.nodes.get(path) {
            Some(VfsNode::Dir(children)) => Some(children),
            _ => None,
        }
    }

    pub fn file(&self, path: &str) -> Option<&str> {
        match self.nodes.get(path) {
            Some(VfsNode::File(content)) => Some(content),
            _ => None,
        }
    }

    /// Static tree of everything below `path`. Children the map doesn't know
    /// (entries listed in a directory without their own node) count as files.
    pub fn dir_tree(&self, path: &str) -> Option<DirTree> {
        let children = self.dir(path)?;
        let subtrees: Vec<(String, DirTree)> = children
            .iter()
            .map(|name| {
                let child = join(path, name);
                let subtree = self.dir_tree(&child).unwrap_or(DirTree::Leaf);
                (name.clone(), subtree)
            })
            .collect();

        if subtrees.iter().all(|(_, t)| *t == DirTree::Leaf) {
            Some(DirTree::Files(children.to_vec()))
        } else {
            Some(DirTree::Dir(subtrees))
        }
    }

    /// Node for the directory at `path`, labelled with its last segment.
    /// Subdirectories are collapsed; unknown children are plain files.
    pub fn tree_node(&self, path: &str) -> Option<TreeNode> {
        let children = self.dir(path)?;
        let label = path.rsplit('/').next().unwrap_or(path);
        let node = children
            .iter()
            .fold(TreeNode::new(label).style(NodeStyle::Info), |node, name| {
                let child = self
                    .tree_node(&join(path, name))
                    .unwrap_or_else(|| TreeNode::new(name.clone()));
                node.child(child)
            });
        Some(node)
    }

    /// Explorer view rooted at `path`, with only the root expanded
    pub fn tree_view(&self, path: &str) -> Option<TreeView> {
        let mut root = self.tree_node(path)?.expanded();
        root.label = path.to_string();
        Some(TreeView::new(vec![root]))
    }
}

/// Folder icons that follow the expand state, a page for files
pub fn explorer_renderer() -> TreeRenderer<'static> {
    TreeRenderer::new().with_icon(|ctx| {
        let icon = match (ctx.style(), ctx.is_expanded) {
            (NodeStyle::Info, true) => "📂",
            (NodeStyle::Info, false) => "📁",
            _ => "📄",
        };
        Some(icon.to_string())
    })
}

pub fn join(dir: &str, name: &str) -> String {
    format!("{}/{}", dir, name)
}

/// Resolve `arg` against `cwd`.
///
/// `~`-prefixed arguments are taken as-is; anything else is appended to the
/// cwd. A trailing `/` is dropped so `Documents/` names the same node as
/// `Documents`. There is no `..` or `.` handling here; `cd ..` is special-cased
/// by the verb.
pub fn resolve(cwd: &str, arg: &str) -> String {
    let trimmed = arg.trim_end_matches('/');
    let arg = if trimmed.is_empty() { arg } else { trimmed };

    if arg.starts_with(HOME) {
        arg.to_string()
    } else {
        join(cwd, arg)
    }
}

/// Drop the last segment; the root is its own parent
pub fn parent(cwd: &str) -> String {
    match cwd.rfind('/') {
        Some(0) | None => HOME.to_string(),
        Some(i) => cwd[..i].to_string(),
    }
}

/// Absolute-looking path for `pwd`
pub fn display_path(cwd: &str) -> String {
    cwd.replacen(HOME, HOME_DISPLAY, 1)
}

/// Last segment of the cwd, as shown in the prompt
pub fn prompt_segment(cwd: &str) -> &str {
    if cwd == HOME {
        return HOME;
    }
    cwd.rsplit('/').next().unwrap_or(HOME)
}
