// Modal overlays
//
// Modals handle their own key mapping and return an action; App holds
// Option<Modal> and carries the action out.

use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, nothing to do
    None,
    Close,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    /// Oldest entry
    ScrollTop,
    /// Newest entry, following new logs
    ScrollBottom,
    /// Expand or collapse the selected node
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Keyboard shortcuts
    Help,
    /// Captured tracing output
    Logs,
    /// Virtual filesystem browser
    Explorer,
}

impl Modal {
    pub fn handle_input(&self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Enter => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Logs => match key {
                KeyCode::Esc | KeyCode::F(12) => ModalAction::Close,
                KeyCode::Up => ModalAction::ScrollUp,
                KeyCode::Down => ModalAction::ScrollDown,
                KeyCode::PageUp => ModalAction::PageUp,
                KeyCode::PageDown => ModalAction::PageDown,
                KeyCode::Home => ModalAction::ScrollTop,
                KeyCode::End => ModalAction::ScrollBottom,
                _ => ModalAction::None,
            },
            Modal::Explorer => match key {
                KeyCode::Esc | KeyCode::F(2) | KeyCode::Char('q') => ModalAction::Close,
                KeyCode::Up | KeyCode::Char('k') => ModalAction::ScrollUp,
                KeyCode::Down | KeyCode::Char('j') => ModalAction::ScrollDown,
                KeyCode::PageUp => ModalAction::PageUp,
                KeyCode::PageDown => ModalAction::PageDown,
                KeyCode::Home => ModalAction::ScrollTop,
                KeyCode::End => ModalAction::ScrollBottom,
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => {
                    ModalAction::Toggle
                }
                _ => ModalAction::None,
            },
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Modal::Help => " Help ",
            Modal::Logs => " Logs ",
            Modal::Explorer => " Explorer ",
        }
    }
}

/// Scroll position in the logs overlay, counted in entries back from the
/// newest. Zero follows new entries as they arrive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogScroll {
    pub offset: usize,
}

impl LogScroll {
    pub fn apply(&mut self, action: ModalAction, total: usize, page: usize) {
        let max = total.saturating_sub(1);
        self.offset = match action {
            ModalAction::ScrollUp => self.offset + 1,
            ModalAction::ScrollDown => self.offset.saturating_sub(1),
            ModalAction::PageUp => self.offset + page.max(1),
            ModalAction::PageDown => self.offset.saturating_sub(page.max(1)),
            ModalAction::ScrollTop => max,
            ModalAction::ScrollBottom | ModalAction::Close => 0,
            ModalAction::None | ModalAction::Toggle => self.offset,
        }
        .min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(Modal::Help, KeyCode::Esc, ModalAction::Close ; "help closes on esc")]
    #[test_case(Modal::Help, KeyCode::Up, ModalAction::None ; "help ignores arrows")]
    #[test_case(Modal::Logs, KeyCode::F(12), ModalAction::Close ; "logs toggle off")]
    #[test_case(Modal::Logs, KeyCode::PageUp, ModalAction::PageUp ; "logs page")]
    #[test_case(Modal::Explorer, KeyCode::Enter, ModalAction::Toggle ; "explorer toggles")]
    #[test_case(Modal::Explorer, KeyCode::Char('j'), ModalAction::ScrollDown ; "explorer vim keys")]
    #[test_case(Modal::Explorer, KeyCode::F(2), ModalAction::Close ; "explorer toggle off")]
    fn maps_keys(modal: Modal, key: KeyCode, expected: ModalAction) {
        assert_eq!(modal.handle_input(key), expected);
    }

    #[test]
    fn log_scroll_stays_in_range() {
        let mut scroll = LogScroll::default();
        scroll.apply(ModalAction::ScrollDown, 5, 3);
        assert_eq!(scroll.offset, 0);
        scroll.apply(ModalAction::PageUp, 5, 3);
        assert_eq!(scroll.offset, 3);
        scroll.apply(ModalAction::PageUp, 5, 3);
        assert_eq!(scroll.offset, 4);
        scroll.apply(ModalAction::ScrollBottom, 5, 3);
        assert_eq!(scroll.offset, 0);
        scroll.apply(ModalAction::ScrollTop, 0, 3);
        assert_eq!(scroll.offset, 0);
    }
}
