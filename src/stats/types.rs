//! Type definitions for computed statistics

use serde::Serialize;

use crate::stats::{mean, median, mode_with_frequency};

/// Mode values together with the count they reached
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModeSet {
    /// Values in order of first reaching the maximum count
    pub values: Vec<i32>,
    /// Occurrences of each mode value (0 for empty input)
    pub frequency: usize,
}

impl ModeSet {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Mean, median and mode of one dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: ModeSet,
}

impl Summary {
    pub fn compute(data: &[i32]) -> Self {
        Summary {
            count: data.len(),
            mean: mean(data),
            median: median(data),
            mode: mode_with_frequency(data),
        }
    }

    /// False when `mean` and `median` hold the empty-input sentinel
    pub fn has_data(&self) -> bool {
        self.count > 0
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
