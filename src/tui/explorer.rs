// Explorer overlay state
//
// A TreeView of the virtual filesystem plus the selected row. Rows are
// rendered on demand, so a toggle shows up on the next frame.

use super::modal::ModalAction;
use crate::layout::{TreeRow, TreeView};
use crate::session::vfs;

#[derive(Debug, Clone)]
pub struct Explorer {
    root: String,
    view: TreeView,
    selected: usize,
}

impl Explorer {
    pub fn new(root: impl Into<String>, view: TreeView) -> Self {
        Self {
            root: root.into(),
            view,
            selected: 0,
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Visible rows, depth-first
    pub fn rows(&self) -> Vec<TreeRow> {
        self.view.render(&vfs::explorer_renderer())
    }

    /// Move the selection or toggle the selected node
    pub fn apply(&mut self, action: ModalAction, page: usize) {
        if action == ModalAction::Toggle {
            if let Some(row) = self.rows().get(self.selected) {
                self.view.toggle(&row.node_id);
            }
        }

        let last = self.rows().len().saturating_sub(1);
        self.selected = match action {
            ModalAction::ScrollUp => self.selected.saturating_sub(1),
            ModalAction::ScrollDown => self.selected + 1,
            ModalAction::PageUp => self.selected.saturating_sub(page.max(1)),
            ModalAction::PageDown => self.selected + page.max(1),
            ModalAction::ScrollTop => 0,
            ModalAction::ScrollBottom => last,
            ModalAction::Toggle | ModalAction::None | ModalAction::Close => self.selected,
        }
        .min(last);
    }
}
