//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::config::{OutputConfig, OutputFormat};

/// Print mean, median and mode of the sample dataset
#[derive(Debug, Parser)]
#[command(name = "statcalc", version, about)]
pub struct Args {
    /// Output format (overrides config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Decimal places for mean and median (overrides config file)
    #[arg(long)]
    pub precision: Option<usize>,

    /// Show how many times the mode values appeared
    #[arg(long)]
    pub show_frequency: bool,

    /// Config file path [default: ~/.config/statcalc/config.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Layer command-line overrides on top of the config file values
    pub fn apply(&self, mut output: OutputConfig) -> OutputConfig {
        if let Some(format) = self.format {
            output.format = format;
        }
        if let Some(precision) = self.precision {
            output.precision = precision;
        }
        if self.show_frequency {
            output.show_frequency = true;
        }
        output
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
