// Configuration type definitions

use serde::Deserialize;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub const DEFAULT_PRECISION: usize = 2;

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

/// Output configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Decimal places for mean and median
    #[serde(default = "default_precision")]
    pub precision: usize,
    #[serde(default)]
    pub show_frequency: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: OutputFormat::Text,
            precision: DEFAULT_PRECISION,
            show_frequency: false,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}
