use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a generation config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config parsed but violates a bound (zero counts, inverted ranges).
    #[error("invalid configuration: {0}")]
    Invalid(String),
    /// The config file could not be read.
    #[error("failed to read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML for `GenerationConfig`.
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}
