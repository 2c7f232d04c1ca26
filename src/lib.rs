//! Descriptive statistics (mean, median, mode) over integer data.

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod stats;
