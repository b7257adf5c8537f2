use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use retailgen_core::{ConfigError, TableName};

/// Pipeline stage, used to tell the caller where a run failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Customers,
    Products,
    Stores,
    Orders,
    OrderItems,
    Persist,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Customers => "customers",
            Stage::Products => "products",
            Stage::Stores => "stores",
            Stage::Orders => "orders",
            Stage::OrderItems => "order_items",
            Stage::Persist => "persist",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{stage}: upstream table '{table}' has no rows")]
    MissingInput { stage: Stage, table: TableName },
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{stage} stage failed: {source}")]
    Failed {
        stage: Stage,
        #[source]
        source: Box<GenerationError>,
    },
    #[error("generation panicked: {0}")]
    Panicked(String),
}

impl GenerationError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        GenerationError::Config(ConfigError::Invalid(message.into()))
    }

    /// Attach the failing stage unless the error already names one.
    pub fn in_stage(self, stage: Stage) -> Self {
        match self {
            GenerationError::MissingInput { .. } | GenerationError::Failed { .. } => self,
            other => GenerationError::Failed {
                stage,
                source: Box::new(other),
            },
        }
    }

    /// Stage the error was raised in, when known.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            GenerationError::MissingInput { stage, .. } | GenerationError::Failed { stage, .. } => {
                Some(*stage)
            }
            GenerationError::Write { .. } => Some(Stage::Persist),
            _ => None,
        }
    }
}
