// TUI components
//
// Each component renders one region of the screen from App state.

pub mod badge;
pub mod completion;
pub mod palette_panel;
pub mod pane;
pub mod status_bar;
pub mod tab_bar;
pub mod toast;

pub use toast::Toast;
