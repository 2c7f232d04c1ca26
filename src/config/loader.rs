use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::StatsError;

const CONFIG_DIR: &str = "statcalc";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load config from `path`, or from the default location when `None`.
///
/// Never fails: problems are logged and defaults are used.
pub fn load_config(path: Option<&Path>) -> Config {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => return Config::default(),
        },
    };

    match load_config_from_path(&path) {
        Ok(Some(config)) => config,
        Ok(None) => {
            log::debug!("No config at {}, using defaults", path.display());
            Config::default()
        }
        Err(e) => {
            log::warn!("Ignoring config {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// Returns `Ok(None)` when the file does not exist.
pub fn load_config_from_path(path: &Path) -> Result<Option<Config>, StatsError> {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    parse_config_toml(&contents).map(Some)
}

pub fn parse_config_toml(content: &str) -> Result<Config, StatsError> {
    toml::from_str::<Config>(content).map_err(|e| StatsError::Config(e.to_string()))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
