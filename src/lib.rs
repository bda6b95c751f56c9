// terminal-ui - terminal-styled widgets and a virtual terminal session
//
// - session: the engine (line buffer, dispatcher, history, input, vfs)
// - layout: pure text layout (table, tree, diff, progress)
// - workspace / palette: tabs of panes and the command palette
// - theme: catalog, palettes and the shared ThemeStore
// - tui / cli / config / logging: the demo application around them

pub mod cli;
pub mod config;
pub mod layout;
pub mod logging;
pub mod palette;
pub mod session;
pub mod theme;
pub mod tui;
pub mod workspace;
