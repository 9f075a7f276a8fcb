// File: crates/chart-spec/src/error.rs
// Summary: Error type for the output boundary (JSON encoding, file writes) and data constructors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid candle: {0}")]
    InvalidCandle(&'static str),
}

pub type Result<T> = std::result::Result<T, ChartError>;
