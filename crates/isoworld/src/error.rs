//! # Engine Error Types

use std::path::PathBuf;

use isoworld_rendering::RenderError;
use thiserror::Error;

/// Errors loading or validating [`crate::config::EngineConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The TOML is malformed or has wrongly typed fields.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The values parse but make no sense together.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors that stop the engine from starting or a level from loading.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Bad configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Frame or map buffers could not be built.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
