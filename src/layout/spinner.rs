// Spinner layout - braille frames for work with no known end
//
//   ⠹ Waiting for deploy...
//
// Frames are picked from elapsed time, so the caller only has to keep a
// clock; nothing here owns a timer.

use std::time::Duration;

pub const FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// How long each frame stays on screen
pub const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// Index of the frame shown after `elapsed` of animation
pub fn frame_index(elapsed: Duration) -> usize {
    (elapsed.as_millis() / FRAME_INTERVAL.as_millis()) as usize % FRAMES.len()
}

pub fn frame(elapsed: Duration) -> char {
    FRAMES[frame_index(elapsed)]
}

/// Frame followed by the text, or the bare frame when there is no text
pub fn render(text: &str, elapsed: Duration) -> String {
    if text.is_empty() {
        frame(elapsed).to_string()
    } else {
        format!("{} {}", frame(elapsed), text)
    }
}
