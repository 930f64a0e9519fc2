//! Startup: settings, data source, initial sort, and the first dataset

use std::path::PathBuf;

use jobdash_app::config::{self, Settings};
use jobdash_app::{AppState, SortDirection, SortSpec, TableController};
use jobdash_core::prelude::*;
use jobdash_core::{Dataset, JsonFileSource, RawRow, RowSource, SeedRows, SortField};

/// Options resolved from the command line
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Directory holding `.jobdash/config.toml`
    pub config_dir: PathBuf,
    /// JSON array of rows; the built-in seed rows when absent
    pub data: Option<PathBuf>,
    /// Overrides `[table] initial_sort`
    pub sort: Option<SortField>,
    /// Start in descending order
    pub descending: bool,
}

impl LaunchOptions {
    pub fn source(&self) -> DataSource {
        match &self.data {
            Some(path) => DataSource::File(JsonFileSource::new(path)),
            None => DataSource::Seed(SeedRows),
        }
    }
}

/// Where rows come from for this run
#[derive(Debug, Clone)]
pub enum DataSource {
    Seed(SeedRows),
    File(JsonFileSource),
}

impl RowSource for DataSource {
    fn name(&self) -> String {
        match self {
            DataSource::Seed(seed) => seed.name(),
            DataSource::File(file) => file.name(),
        }
    }

    fn load(&self) -> Result<Vec<RawRow>> {
        match self {
            DataSource::Seed(seed) => seed.load(),
            DataSource::File(file) => file.load(),
        }
    }
}

/// Sort to start with: the command line wins over the config file
pub fn initial_sort(options: &LaunchOptions, settings: &Settings) -> Result<Option<SortSpec>> {
    let configured = settings.initial_sort()?;
    let mut sort = match options.sort {
        Some(field) => Some(SortSpec::ascending(field)),
        None => configured,
    };

    if options.descending {
        if let Some(spec) = sort.as_mut() {
            spec.direction = SortDirection::Descending;
        } else {
            warn!("--descending ignored without a sort field");
        }
    }

    Ok(sort)
}

/// Load the dataset off the async runtime
pub async fn load_dataset(source: DataSource) -> Result<Dataset> {
    tokio::task::spawn_blocking(move || Dataset::load(&source))
        .await
        .map_err(|e| Error::data_source(format!("Dataset loader failed: {}", e)))?
}

/// Build the initial state; the dataset is loaded before the state exists
pub async fn prepare(options: &LaunchOptions) -> Result<(AppState, DataSource)> {
    let settings = config::load_settings(&options.config_dir);
    let sort = initial_sort(options, &settings)?;

    let source = options.source();
    info!("Loading rows from {}", source.name());
    let dataset = load_dataset(source.clone()).await?;

    let table = TableController::with_sort(dataset, sort);
    Ok((AppState::new(table, settings), source))
}
