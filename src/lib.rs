//! Job Dashboard Library
//!
//! A terminal dashboard for a sortable, selectable table of job requests,
//! with a headless NDJSON driver for scripts and tests.

pub mod headless;
pub mod launch;

use jobdash_app::{signals, LoggingSink, Message};
use jobdash_core::prelude::*;
use tokio::sync::mpsc;

pub use launch::{DataSource, LaunchOptions};

/// Install error reporting and file logging
pub fn init() -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    jobdash_core::logging::init()
}

/// Run the interactive dashboard
pub async fn run(options: &LaunchOptions) -> Result<()> {
    let (state, source) = launch::prepare(options).await?;

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    signals::spawn_signal_handler(msg_tx);

    let mut sink = LoggingSink::new(state.settings.links.clone());
    let result = jobdash_tui::run(state, &mut sink, &source, msg_rx);

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    result
}

/// Run the NDJSON driver on stdin/stdout
pub async fn run_headless(options: &LaunchOptions) -> Result<()> {
    let (state, source) = match launch::prepare(options).await {
        Ok(prepared) => prepared,
        Err(e) => {
            headless::HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
            return Err(e);
        }
    };
    headless::runner::run_headless(state, &source).await
}
