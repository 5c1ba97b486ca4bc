//! Configuration loading errors.

use thiserror::Error;

/// Error loading or saving a configuration file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigLoadError {
    /// File could not be read
    #[error("IO error: {0}")]
    Io(String),

    /// Contents are not valid configuration YAML
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration could not be written as YAML
    #[error("Serialize error: {0}")]
    Serialize(String),
}
