//! Report rendering for computed statistics
//!
//! Consumes a [`Summary`] and writes either the line-oriented text report or
//! a single JSON object.

use serde::Serialize;

use crate::config::{OutputConfig, OutputFormat};
use crate::error::StatsError;
use crate::stats::{ModeSet, Summary};

const NO_DATA: &str = "No data available";

#[derive(Serialize)]
struct JsonReport<'a> {
    dataset: &'a [i32],
    #[serde(flatten)]
    summary: &'a Summary,
}

/// Render the report in the configured format, without a trailing newline.
pub fn render(data: &[i32], summary: &Summary, output: &OutputConfig) -> Result<String, StatsError> {
    match output.format {
        OutputFormat::Text => Ok(render_text(data, summary, output)),
        OutputFormat::Json => render_json(data, summary),
    }
}

pub fn render_text(data: &[i32], summary: &Summary, output: &OutputConfig) -> String {
    let precision = output.precision;
    [
        format!("Dataset: {}", format_list(data)),
        format!("Mean: {:.*}", precision, summary.mean),
        format!("Median: {:.*}", precision, summary.median),
        format!("Mode: {}", format_mode(&summary.mode, output.show_frequency)),
    ]
    .join("\n")
}

pub fn render_json(data: &[i32], summary: &Summary) -> Result<String, StatsError> {
    let report = JsonReport {
        dataset: data,
        summary,
    };
    Ok(serde_json::to_string(&report)?)
}

fn format_mode(mode: &ModeSet, show_frequency: bool) -> String {
    if mode.is_empty() {
        return NO_DATA.to_string();
    }

    let list = format_list(&mode.values);
    if show_frequency {
        format!("{} (appeared {} times)", list, mode.frequency)
    } else {
        list
    }
}

fn format_list(values: &[i32]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
