// Theme store - the shared theme selection
//
// Built once at startup and cloned into whoever needs it. Writers call `set`;
// the TUI loop holds a receiver and repaints when the selection changes. Last
// write wins.

use std::sync::Arc;
use tokio::sync::watch;

use super::ThemeId;

#[derive(Debug, Clone)]
pub struct ThemeStore {
    tx: Arc<watch::Sender<ThemeId>>,
}

impl ThemeStore {
    pub fn new(initial: ThemeId) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn get(&self) -> ThemeId {
        *self.tx.borrow()
    }

    /// Select a theme. Returns whether the selection changed; subscribers are
    /// only notified on change.
    pub fn set(&self, id: ThemeId) -> bool {
        let changed = self.tx.send_if_modified(|current| {
            if *current == id {
                return false;
            }
            *current = id;
            true
        });
        if changed {
            tracing::info!(theme = %id, "theme changed");
        }
        changed
    }

    pub fn subscribe(&self) -> watch::Receiver<ThemeId> {
        self.tx.subscribe()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(ThemeId::default())
    }
}
