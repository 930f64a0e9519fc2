//! Terminal setup and restoration

use std::io;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use jobdash_core::{Error, Result};
use ratatui::DefaultTerminal;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_mouse_capture();
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Enter raw mode and the alternate screen
pub fn init() -> Result<DefaultTerminal> {
    ratatui::try_init().map_err(init_error)
}

fn init_error(e: io::Error) -> Error {
    Error::terminal_init(e.to_string())
}

/// Report mouse clicks and wheel events as terminal events
pub fn enable_mouse_capture() -> io::Result<()> {
    execute!(io::stdout(), EnableMouseCapture)
}

pub fn disable_mouse_capture() -> io::Result<()> {
    execute!(io::stdout(), DisableMouseCapture)
}
