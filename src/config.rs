//! Configuration loading
//!
//! Reads `~/.config/statcalc/config.toml` (or an explicit path). Missing
//! files and missing fields fall back to defaults.

mod loader;
mod types;

pub use loader::{config_path, load_config, load_config_from_path, parse_config_toml};
pub use types::{Config, OutputConfig, OutputFormat};
