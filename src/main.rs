//! jobdash - terminal dashboard for job requests
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use job_dashboard::LaunchOptions;
use jobdash_app::config;
use jobdash_core::prelude::*;
use jobdash_core::SortField;

/// Sortable, selectable table of job requests
#[derive(Parser, Debug)]
#[command(name = "jobdash")]
#[command(about = "A terminal dashboard for job requests", long_about = None)]
struct Args {
    /// JSON file with an array of rows (defaults to the built-in rows)
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Initial sort field: "submitted" or "dueDate"
    #[arg(long, value_name = "FIELD")]
    sort: Option<SortField>,

    /// Start with a descending sort
    #[arg(long)]
    descending: bool,

    /// Directory containing .jobdash/config.toml (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Run in headless mode (NDJSON on stdin/stdout, no TUI)
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    job_dashboard::init()?;

    let config_dir = args
        .config_dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init_config {
        let path = config::init_config_dir(&config_dir)?;
        eprintln!("Wrote {}", path.display());
        return Ok(());
    }

    let options = LaunchOptions {
        config_dir,
        data: args.data,
        sort: args.sort,
        descending: args.descending,
    };
    info!("Launch options: {:?}", options);

    if args.headless {
        job_dashboard::run_headless(&options).await
    } else {
        job_dashboard::run(&options).await
    }
}
