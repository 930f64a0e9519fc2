//! Headless mode runner - main event loop without TUI

use std::io::{self, BufRead, Write};

use jobdash_app::process::process_message;
use jobdash_app::{signals, AppState, BadgeClick, InteractionSink, Message};
use jobdash_core::prelude::*;
use jobdash_core::RowSource;
use tokio::sync::mpsc;

use super::{HeadlessCommand, HeadlessEvent};

/// Sink that turns forwarded interactions into events instead of side effects
#[derive(Debug, Default)]
pub struct HeadlessSink {
    pending: Vec<HeadlessEvent<'static>>,
}

impl HeadlessSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn take(&mut self) -> Vec<HeadlessEvent<'static>> {
        std::mem::take(&mut self.pending)
    }
}

impl InteractionSink for HeadlessSink {
    fn badge_clicked(&mut self, click: &BadgeClick) {
        info!("Forwarding {} badge for row {}", click.kind, click.id);
        self.pending.push(HeadlessEvent::badge_forwarded(click));
    }

    fn open_url(&mut self, url: &str) -> Result<()> {
        info!("Link activated: {}", url);
        self.pending.push(HeadlessEvent::link_opened(url));
        Ok(())
    }
}

fn write_view(state: &AppState, out: &mut impl Write) -> io::Result<()> {
    let view = state.table.view_state();
    let rows = state.table.row_views(&state.settings.table.currency_suffix);
    HeadlessEvent::view(view.sort, view.selected_row_id, rows).write_to(out)
}

/// Events announcing the loaded dataset and the first view
pub fn write_startup(
    state: &AppState,
    source: &dyn RowSource,
    out: &mut impl Write,
) -> io::Result<()> {
    HeadlessEvent::dataset_loaded(source.name(), state.table.len()).write_to(out)?;
    write_view(state, out)
}

/// Process one message and write what it produced
///
/// Forwarded interactions are written when there are any; otherwise the
/// resulting view is.
pub fn step(
    state: &mut AppState,
    message: Message,
    sink: &mut HeadlessSink,
    source: &dyn RowSource,
    out: &mut impl Write,
) -> io::Result<()> {
    process_message(state, message, sink, source);
    if state.should_quit() {
        return Ok(());
    }

    let forwarded = sink.take();
    if forwarded.is_empty() {
        write_view(state, out)
    } else {
        forwarded.iter().try_for_each(|event| event.write_to(out))
    }
}

/// Drive the table from NDJSON lines until input ends or a quit command
pub fn drive(
    state: &mut AppState,
    source: &dyn RowSource,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let mut sink = HeadlessSink::new();
    write_startup(state, source, out)?;

    for line in input.lines() {
        match HeadlessCommand::parse(&line?) {
            Ok(Some(command)) => {
                step(state, command.into_message(), &mut sink, source, out)?;
                if state.should_quit() {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Skipping malformed command: {}", e);
                HeadlessEvent::error(format!("Invalid command: {}", e), false).write_to(out)?;
            }
        }
    }

    Ok(())
}

/// Run in headless mode on stdin/stdout
pub async fn run_headless(mut state: AppState, source: &dyn RowSource) -> Result<()> {
    info!("Dashboard starting in headless mode");

    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    // Stdin blocks, so it gets its own thread
    std::thread::spawn(move || spawn_stdin_reader_blocking(msg_tx));

    let mut sink = HeadlessSink::new();
    let mut stdout = io::stdout();
    write_startup(&state, source, &mut stdout)?;

    while let Some(message) = msg_rx.recv().await {
        step(&mut state, message, &mut sink, source, &mut stdout)?;
        if state.should_quit() {
            info!("Quit requested");
            break;
        }
    }

    info!("Headless mode exiting");
    Ok(())
}

/// Read commands from stdin and send them to the message channel (blocking)
fn spawn_stdin_reader_blocking(msg_tx: mpsc::Sender<Message>) {
    forward_commands(io::stdin().lock(), &msg_tx);
    info!("Stdin reader exiting");
}

/// Send every command read from `input`, then `Quit` once input ends
fn forward_commands(input: impl BufRead, msg_tx: &mpsc::Sender<Message>) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };

        match HeadlessCommand::parse(&line) {
            Ok(Some(command)) => {
                if msg_tx.blocking_send(command.into_message()).is_err() {
                    return;
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Skipping malformed command: {}", e);
                HeadlessEvent::error(format!("Invalid command: {}", e), false).emit();
            }
        }
    }

    // The signal handler holds a sender too, so the channel never closes on its own
    debug!("Command input ended");
    let _ = msg_tx.blocking_send(Message::Quit);
}
