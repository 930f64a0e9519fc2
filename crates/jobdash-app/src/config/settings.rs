//! Settings parser for .jobdash/config.toml

use super::types::Settings;
use jobdash_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = ".jobdash";

/// Path of the config file under `base_dir`
pub fn config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `<base_dir>/.jobdash/config.toml`
///
/// A missing, unreadable, or malformed file falls back to defaults.
pub fn load_settings(base_dir: &Path) -> Settings {
    let config_path = config_path(base_dir);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a commented default config file in `.jobdash/`
///
/// An existing file is left untouched. Returns the config file path.
pub fn init_config_dir(base_dir: &Path) -> Result<PathBuf> {
    let dir = base_dir.join(CONFIG_DIR);

    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::config(format!("Failed to create {} dir: {}", CONFIG_DIR, e)))?;
    }

    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Job Dashboard Configuration

[table]
# initial_sort = "dueDate"     # "submitted" or "dueDate"; unset = insertion order
initial_direction = "ascending"
currency_suffix = "₹"
filler_rows = 20

[links]
open_in_browser = true
browser = ""                   # Empty = system default

[ui]
show_chrome = true             # Header, toolbar and tab bars around the table
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Wrote default config to {:?}", config_path);
    }

    Ok(config_path)
}
