// Text layout algorithms
//
// Pure functions that turn structured input into monospace text. Nothing here
// knows about sessions or the terminal; the TUI and the shell verbs both build
// on these.

pub mod diff;
pub mod progress;
pub mod spinner;
pub mod table;
pub mod tree;

pub use diff::{diff_rows, render_diff, DiffLine, DiffLineKind, DiffMode, DiffRow};
pub use progress::{ProgressBar, ProgressVariant};
pub use table::{column_widths, pad_cell, Align, Table, TableLine, TableLineKind};
pub use tree::{
    render_dir_tree, render_tree, DirTree, NodeStyle, TreeGlyphs, TreeInput, TreeNode,
    TreeRenderContext, TreeRenderer, TreeRow, TreeView,
};
