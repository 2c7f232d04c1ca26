//! Stats module for computing descriptive statistics
//!
//! Mean, median and mode over an integer slice. Every operation takes `&[i32]`
//! and leaves the caller's data untouched; empty input yields a sentinel
//! (`0.0`) or an empty mode set rather than an error.

mod central;
mod mode;
mod types;

// Re-export public types
pub use central::{mean, median, try_median};
pub use mode::{mode, mode_with_frequency};
pub use types::{ModeSet, Summary};
