//! Error types for setting up the censor. Censoring itself never fails.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for setup operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A word that can never match a single word of input.
    #[error("invalid word {word:?}: {reason}")]
    InvalidWord { word: String, reason: &'static str },

    /// The configuration file could not be read.
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML, or has the wrong shape.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
