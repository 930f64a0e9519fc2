//! Configuration file parsing for the job dashboard
//!
//! Supports:
//! - `.jobdash/config.toml` - Global settings

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings};
pub use types::*;
