//! Main TUI runner - entry point and event loop

use jobdash_app::process::process_message;
use jobdash_app::{AppState, InteractionSink, Message};
use jobdash_core::prelude::*;
use jobdash_core::RowSource;
use tokio::sync::mpsc;

use crate::render::{self, FrameState};
use crate::{event, terminal};

/// Run the interactive table until the user quits
///
/// `msg_rx` carries messages from outside the terminal (signal handler).
pub fn run(
    mut state: AppState,
    sink: &mut dyn InteractionSink,
    source: &dyn RowSource,
    msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = terminal::init()?;
    if let Err(e) = terminal::enable_mouse_capture() {
        warn!("Mouse capture unavailable: {}", e);
    }
    info!("Dashboard started with {} rows", state.table.len());

    let result = run_loop(&mut term, &mut state, sink, source, msg_rx);

    if let Err(e) = terminal::disable_mouse_capture() {
        debug!("Failed to disable mouse capture: {}", e);
    }
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    term: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    sink: &mut dyn InteractionSink,
    source: &dyn RowSource,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    let mut frame_state = FrameState::new();

    while !state.should_quit() {
        // Process external messages (from signal handler, etc.)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, sink, source);
        }
        if state.should_quit() {
            break;
        }

        term.draw(|frame| render::view(frame, state, &mut frame_state))?;

        // Clicks resolve against the frame just drawn
        if let Some(message) = event::poll(&frame_state.hit_map)? {
            process_message(state, message, sink, source);
        }
    }

    info!("Dashboard exiting");
    Ok(())
}
