//! Clipboard access for pasting into the input line
//!
//! Uses `arboard` for cross-platform support. The clipboard is opened fresh
//! on each paste so nothing is held between uses.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Read text from the system clipboard
///
/// Fails without a display server (headless Linux) or when the clipboard
/// holds no text.
pub fn paste_from_clipboard() -> Result<String> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .get_text()
        .context("Failed to read clipboard text")
}
