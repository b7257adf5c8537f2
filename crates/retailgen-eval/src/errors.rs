use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted by the analysis engine.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("missing files: {}", .0.join(", "))]
    MissingFiles(Vec<String>),
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
