// Tree layout - box-drawn hierarchies
//
// Two distinct components share this module:
// - TreeView: interactive node tree with an expand/collapse set and
//   injectable render strategies (icon, label, full row)
// - DirTree: a fixed nested directory map rendered straight to `tree`-style
//   text, with no expand state at all
//
// TreeInput tags which one a caller is rendering; the two are never merged.

use std::collections::HashSet;

/// Semantic color of a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeStyle {
    #[default]
    Normal,
    Success,
    Error,
    Info,
    Warning,
}

/// One node of an interactive tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeNode {
    pub label: String,
    pub children: Vec<TreeNode>,
    pub icon: Option<String>,
    pub style: NodeStyle,
    /// Expanded when the view is first built
    pub expanded: bool,
}

impl TreeNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn style(mut self, style: NodeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn expanded(mut self) -> Self {
        self.expanded = true;
        self
    }

    pub fn child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Connector glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeGlyphs {
    pub vertical: char,
    pub horizontal: char,
    pub corner: char,
    pub tee: char,
}

impl Default for TreeGlyphs {
    fn default() -> Self {
        Self {
            vertical: '│',
            horizontal: '─',
            corner: '└',
            tee: '├',
        }
    }
}

/// Stable id of the `index`-th root node
pub fn root_id(index: usize) -> String {
    format!("root-{}", index)
}

/// Stable id of the `index`-th child of `parent_id`
pub fn child_id(parent_id: &str, index: usize) -> String {
    format!("{}-child-{}", parent_id, index)
}

/// Read-only view of one node handed to render strategies
#[derive(Debug, Clone, Copy)]
pub struct TreeRenderContext<'a> {
    pub node: &'a TreeNode,
    pub node_id: &'a str,
    /// 0 for roots
    pub depth: usize,
    pub is_last: bool,
    pub has_children: bool,
    pub is_expanded: bool,
    /// Whether the tree allows expand/collapse at all
    pub expandable: bool,
}

impl TreeRenderContext<'_> {
    pub fn icon(&self) -> Option<&str> {
        self.node.icon.as_deref()
    }

    pub fn style(&self) -> NodeStyle {
        self.node.style
    }
}

type Strategy<'a> = Box<dyn Fn(&TreeRenderContext<'_>) -> Option<String> + 'a>;

/// Optional per-node customization.
///
/// Each strategy is called once per visible node per render. Returning `None`
/// from the icon or label strategy falls back to the node's own value; the
/// row strategy replaces toggle, icon and label together (the structural
/// connector is always drawn).
#[derive(Default)]
pub struct TreeRenderer<'a> {
    icon: Option<Strategy<'a>>,
    label: Option<Strategy<'a>>,
    row: Option<Strategy<'a>>,
}

impl<'a> TreeRenderer<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_icon<F>(mut self, f: F) -> Self
    where
        F: Fn(&TreeRenderContext<'_>) -> Option<String> + 'a,
    {
        self.icon = Some(Box::new(f));
        self
    }

    pub fn with_label<F>(mut self, f: F) -> Self
    where
        F: Fn(&TreeRenderContext<'_>) -> Option<String> + 'a,
    {
        self.label = Some(Box::new(f));
        self
    }

    pub fn with_row<F>(mut self, f: F) -> Self
    where
        F: Fn(&TreeRenderContext<'_>) -> Option<String> + 'a,
    {
        self.row = Some(Box::new(f));
        self
    }

    fn content(&self, ctx: &TreeRenderContext<'_>) -> String {
        if let Some(row) = self.row.as_ref().and_then(|f| f(ctx)) {
            return row;
        }

        let toggle = if ctx.has_children && ctx.expandable {
            if ctx.is_expanded {
                '▼'
            } else {
                '▶'
            }
        } else {
            ' '
        };
        let icon = self
            .icon
            .as_ref()
            .and_then(|f| f(ctx))
            .or_else(|| ctx.node.icon.clone());
        let label = self
            .label
            .as_ref()
            .and_then(|f| f(ctx))
            .unwrap_or_else(|| ctx.node.label.clone());

        match icon {
            Some(icon) => format!("{} {} {}", toggle, icon, label),
            None => format!("{} {}", toggle, label),
        }
    }
}

/// One rendered row of an interactive tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub node_id: String,
    pub depth: usize,
    /// Ancestor rails plus this node's connector
    pub prefix: String,
    pub content: String,
    pub style: NodeStyle,
}

impl TreeRow {
    pub fn text(&self) -> String {
        format!("{} {}", self.prefix, self.content)
    }
}

/// Interactive tree: nodes plus the set of expanded node ids
#[derive(Debug, Clone)]
pub struct TreeView {
    nodes: Vec<TreeNode>,
    expanded: HashSet<String>,
    expandable: bool,
    glyphs: TreeGlyphs,
}

impl TreeView {
    /// Build a view, seeding the expanded set from every node marked
    /// `expanded` (depth-first, at any depth).
    pub fn new(nodes: Vec<TreeNode>) -> Self {
        let mut expanded = HashSet::new();
        fn collect(node: &TreeNode, id: String, expanded: &mut HashSet<String>) {
            if node.expanded {
                expanded.insert(id.clone());
            }
            for (i, child) in node.children.iter().enumerate() {
                collect(child, child_id(&id, i), expanded);
            }
        }
        for (i, node) in nodes.iter().enumerate() {
            collect(node, root_id(i), &mut expanded);
        }

        Self {
            nodes,
            expanded,
            expandable: true,
            glyphs: TreeGlyphs::default(),
        }
    }

    pub fn expandable(mut self, expandable: bool) -> Self {
        self.expandable = expandable;
        self
    }

    pub fn glyphs(mut self, glyphs: TreeGlyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn is_expanded(&self, node_id: &str) -> bool {
        self.expanded.contains(node_id)
    }

    /// Look a node up by its path id (`root-0-child-2`)
    pub fn find(&self, node_id: &str) -> Option<&TreeNode> {
        let rest = node_id.strip_prefix("root-")?;
        let mut parts = rest.split("-child-");
        let root: usize = parts.next()?.parse().ok()?;
        let mut node = self.nodes.get(root)?;
        for part in parts {
            let index: usize = part.parse().ok()?;
            node = node.children.get(index)?;
        }
        Some(node)
    }

    /// Flip a node's expansion and return its new state.
    ///
    /// Returns `None` (and changes nothing) when the tree is not expandable or
    /// the id does not name a node with children.
    pub fn toggle(&mut self, node_id: &str) -> Option<bool> {
        if !self.expandable || !self.find(node_id)?.has_children() {
            return None;
        }
        if self.expanded.remove(node_id) {
            tracing::trace!(node_id, "tree node collapsed");
            Some(false)
        } else {
            self.expanded.insert(node_id.to_string());
            tracing::trace!(node_id, "tree node expanded");
            Some(true)
        }
    }

    /// Render visible rows depth-first. Children of collapsed nodes are
    /// skipped entirely.
    pub fn render(&self, renderer: &TreeRenderer<'_>) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        let count = self.nodes.len();
        for (i, node) in self.nodes.iter().enumerate() {
            self.render_node(node, &root_id(i), 0, i + 1 == count, "", renderer, &mut rows);
        }
        rows
    }

    #[allow(clippy::too_many_arguments)]
    fn render_node(
        &self,
        node: &TreeNode,
        node_id: &str,
        depth: usize,
        is_last: bool,
        rails: &str,
        renderer: &TreeRenderer<'_>,
        rows: &mut Vec<TreeRow>,
    ) {
        let has_children = node.has_children();
        let is_expanded = self.is_expanded(node_id);
        let ctx = TreeRenderContext {
            node,
            node_id,
            depth,
            is_last,
            has_children,
            is_expanded,
            expandable: self.expandable,
        };

        let horizontal: String = std::iter::repeat(self.glyphs.horizontal).take(2).collect();
        let connector = if depth == 0 {
            horizontal
        } else {
            let joint = if is_last {
                self.glyphs.corner
            } else {
                self.glyphs.tee
            };
            format!("{}{}", joint, horizontal)
        };

        rows.push(TreeRow {
            node_id: node_id.to_string(),
            depth,
            prefix: format!("{}{}", rails, connector),
            content: renderer.content(&ctx),
            style: node.style,
        });

        if !(has_children && is_expanded) {
            return;
        }

        // Roots contribute no rail; deeper nodes continue theirs only when
        // more siblings follow below.
        let child_rails = if depth == 0 {
            rails.to_string()
        } else if is_last {
            format!("{}  ", rails)
        } else {
            format!("{}{} ", rails, self.glyphs.vertical)
        };

        let count = node.children.len();
        for (i, child) in node.children.iter().enumerate() {
            self.render_node(
                child,
                &child_id(node_id, i),
                depth + 1,
                i + 1 == count,
                &child_rails,
                renderer,
                rows,
            );
        }
    }
}

/// Fixed nested directory map for the static tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirTree {
    /// Directory of named subtrees, in display order
    Dir(Vec<(String, DirTree)>),
    /// Directory whose entries are all plain files
    Files(Vec<String>),
    /// A file
    Leaf,
}

impl DirTree {
    /// `(directories, files)` below this node, not counting itself
    pub fn counts(&self) -> (usize, usize) {
        match self {
            DirTree::Leaf => (0, 0),
            DirTree::Files(names) => (0, names.len()),
            DirTree::Dir(entries) => entries.iter().fold((0, 0), |(d, f), (_, sub)| {
                let (sd, sf) = sub.counts();
                match sub {
                    DirTree::Leaf => (d + sd, f + sf + 1),
                    _ => (d + sd + 1, f + sf),
                }
            }),
        }
    }
}

/// Render a directory map as `tree` output, root label first
pub fn render_dir_tree(root: &str, tree: &DirTree) -> Vec<String> {
    let mut out = vec![root.to_string()];
    render_dir_entries(tree, "", &mut out);
    out
}

fn render_dir_entries(tree: &DirTree, rails: &str, out: &mut Vec<String>) {
    let entries: Vec<(&str, Option<&DirTree>)> = match tree {
        DirTree::Leaf => return,
        DirTree::Files(names) => names.iter().map(|n| (n.as_str(), None)).collect(),
        DirTree::Dir(entries) => entries.iter().map(|(n, t)| (n.as_str(), Some(t))).collect(),
    };

    let count = entries.len();
    for (i, (name, subtree)) in entries.into_iter().enumerate() {
        let last = i + 1 == count;
        out.push(format!("{}{}{}", rails, if last { "└── " } else { "├── " }, name));
        if let Some(subtree) = subtree {
            let next = format!("{}{}", rails, if last { "    " } else { "│   " });
            render_dir_entries(subtree, &next, out);
        }
    }
}

/// Which tree component to render
pub enum TreeInput<'a> {
    Nodes {
        view: &'a TreeView,
        renderer: &'a TreeRenderer<'a>,
    },
    Directory {
        root: &'a str,
        tree: &'a DirTree,
    },
}

/// Render either tree variant to plain text lines
pub fn render_tree(input: TreeInput<'_>) -> Vec<String> {
    match input {
        TreeInput::Nodes { view, renderer } => {
            view.render(renderer).iter().map(TreeRow::text).collect()
        }
        TreeInput::Directory { root, tree } => render_dir_tree(root, tree),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<TreeNode> {
        vec![TreeNode::new("terminal-ui/")
            .icon("📁")
            .expanded()
            .child(
                TreeNode::new("components/")
                    .child(TreeNode::new("terminal.rs").style(NodeStyle::Success))
                    .child(TreeNode::new("tree.rs")),
            )
            .child(TreeNode::new("Cargo.toml").style(NodeStyle::Warning))]
    }

    #[test]
    fn ids_are_path_derived() {
        assert_eq!(root_id(0), "root-0");
        assert_eq!(child_id(&child_id("root-1", 0), 2), "root-1-child-0-child-2");
    }

    #[test]
    fn expanded_set_is_seeded_at_every_depth() {
        let nodes =
            vec![TreeNode::new("a").child(TreeNode::new("b").expanded().child(TreeNode::new("c")))];
        let view = TreeView::new(nodes);
        assert!(!view.is_expanded("root-0"));
        assert!(view.is_expanded("root-0-child-0"));
    }

    #[test]
    fn collapsed_children_are_not_rendered() {
        let view = TreeView::new(sample());
        let rows = view.render(&TreeRenderer::new());
        let ids: Vec<&str> = rows.iter().map(|r| r.node_id.as_str()).collect();
        assert_eq!(ids, vec!["root-0", "root-0-child-0", "root-0-child-1"]);
    }

    #[test]
    fn renders_connectors_and_toggles() {
        let mut view = TreeView::new(sample());
        assert_eq!(view.toggle("root-0-child-0"), Some(true));

        let text: Vec<String> = view
            .render(&TreeRenderer::new())
            .iter()
            .map(TreeRow::text)
            .collect();
        assert_eq!(
            text,
            vec![
                "── ▼ 📁 terminal-ui/",
                "├── ▼ components/",
                "│ ├──   terminal.rs",
                "│ └──   tree.rs",
                "└──   Cargo.toml",
            ]
        );
    }

    #[test]
    fn toggle_round_trips_and_rejects_leaves() {
        let mut view = TreeView::new(sample());
        assert_eq!(view.toggle("root-0"), Some(false));
        assert_eq!(view.toggle("root-0"), Some(true));
        assert_eq!(view.toggle("root-0-child-1"), None);
        assert_eq!(view.toggle("root-9"), None);
        assert_eq!(view.toggle("bogus"), None);
    }

    #[test]
    fn non_expandable_tree_ignores_toggles_and_hides_toggle_glyphs() {
        let mut view = TreeView::new(sample()).expandable(false);
        assert_eq!(view.toggle("root-0-child-0"), None);
        let rows = view.render(&TreeRenderer::new());
        assert_eq!(rows[0].content, "  📁 terminal-ui/");
    }

    #[test]
    fn strategies_receive_context_and_can_fall_back() {
        let view = TreeView::new(sample());
        let renderer = TreeRenderer::new()
            .with_icon(|ctx| {
                if ctx.has_children {
                    Some(if ctx.is_expanded { "📂" } else { "📁" }.to_string())
                } else {
                    None
                }
            })
            .with_label(|ctx| (ctx.depth == 0).then(|| ctx.node.label.to_uppercase()));

        let rows = view.render(&renderer);
        assert_eq!(rows[0].content, "▼ 📂 TERMINAL-UI/");
        assert_eq!(rows[1].content, "▶ 📁 components/");
        // Leaf falls back to its own (absent) icon and label
        assert_eq!(rows[2].content, "  Cargo.toml");
        assert_eq!(rows[2].style, NodeStyle::Warning);
    }

    #[test]
    fn row_strategy_replaces_content_but_keeps_connector() {
        let view = TreeView::new(sample());
        let renderer = TreeRenderer::new().with_row(|ctx| {
            let tail = if ctx.is_last { "!" } else { "" };
            Some(format!("{}@{}{}", ctx.node_id, ctx.depth, tail))
        });
        let text: Vec<String> = view.render(&renderer).iter().map(TreeRow::text).collect();
        assert_eq!(
            text,
            vec!["── root-0@0!", "├── root-0-child-0@1", "└── root-0-child-1@1!"]
        );
    }

    #[test]
    fn custom_glyphs() {
        let view = TreeView::new(sample()).glyphs(TreeGlyphs {
            vertical: '|',
            horizontal: '-',
            corner: '`',
            tee: '+',
        });
        let rows = view.render(&TreeRenderer::new());
        assert_eq!(rows[1].prefix, "+--");
        assert_eq!(rows[2].prefix, "`--");
    }

    fn dir_sample() -> DirTree {
        DirTree::Dir(vec![
            (
                "src".to_string(),
                DirTree::Dir(vec![
                    ("main.rs".to_string(), DirTree::Leaf),
                    (
                        "layout".to_string(),
                        DirTree::Files(vec!["tree.rs".to_string(), "diff.rs".to_string()]),
                    ),
                ]),
            ),
            ("Cargo.toml".to_string(), DirTree::Leaf),
        ])
    }

    #[test]
    fn static_tree_renders_like_tree_command() {
        assert_eq!(
            render_dir_tree(".", &dir_sample()),
            vec![
                ".",
                "├── src",
                "│   ├── main.rs",
                "│   └── layout",
                "│       ├── tree.rs",
                "│       └── diff.rs",
                "└── Cargo.toml",
            ]
        );
    }

    #[test]
    fn static_tree_counts() {
        assert_eq!(dir_sample().counts(), (2, 4));
        assert_eq!(DirTree::Leaf.counts(), (0, 0));
    }

    #[test]
    fn tagged_input_dispatches_on_shape() {
        let view = TreeView::new(vec![TreeNode::new("solo")]);
        let renderer = TreeRenderer::new();
        assert_eq!(
            render_tree(TreeInput::Nodes { view: &view, renderer: &renderer }),
            vec!["──   solo"]
        );
        assert_eq!(
            render_tree(TreeInput::Directory { root: "~", tree: &DirTree::Leaf }),
            vec!["~"]
        );
    }
}
