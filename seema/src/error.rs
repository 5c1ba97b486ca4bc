//! Error types for Seema

use thiserror::Error;

use crate::config::ConfigLoadError;
use crate::core::CellClass;
use crate::frontier::Algorithm;

/// Seema error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrontierError {
    /// The selected detection algorithm is not implemented
    #[error("Unsupported frontier algorithm: {0}")]
    UnsupportedAlgorithm(Algorithm),

    /// Query parameters are inconsistent
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// The robot position list is empty
    #[error("No robot position given")]
    NoRobotPosition,

    /// The detection seed is not a known free cell inside the area
    #[error("Invalid seed at ({x:.2},{y:.2}): cell is {class:?}")]
    InvalidSeed {
        /// Seed X (terrain frame)
        x: f32,
        /// Seed Y (terrain frame)
        y: f32,
        /// Class of the seed cell
        class: CellClass,
    },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FrontierError>;
