use thiserror::Error;

/// Custom error types for statcalc
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Memory allocation failed for {len} element scratch buffer")]
    AllocationFailed { len: usize },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
