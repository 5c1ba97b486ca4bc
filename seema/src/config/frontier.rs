//! Frontier query configuration section.

use serde::{Deserialize, Serialize};

use crate::frontier::{Algorithm, FrontierParams};

use super::defaults;

/// Frontier detection settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrontierSection {
    /// Detection algorithm ("WFD" or "FFD")
    #[serde(default = "defaults::algorithm")]
    pub algorithm: Algorithm,

    /// Maximum frontiers kept after filtering
    #[serde(default = "defaults::max_frontiers")]
    pub max_frontiers: usize,

    /// Smallest frontier kept (meters)
    #[serde(default = "defaults::min_size")]
    pub min_size: f32,

    /// Largest frontier kept (meters)
    #[serde(default = "defaults::max_size")]
    pub max_size: f32,

    /// Closest frontier kept (meters)
    #[serde(default = "defaults::min_distance")]
    pub min_distance: f32,

    /// Farthest frontier kept (meters)
    #[serde(default = "defaults::max_distance")]
    pub max_distance: f32,
}

impl Default for FrontierSection {
    fn default() -> Self {
        Self {
            algorithm: defaults::algorithm(),
            max_frontiers: defaults::max_frontiers(),
            min_size: defaults::min_size(),
            max_size: defaults::max_size(),
            min_distance: defaults::min_distance(),
            max_distance: defaults::max_distance(),
        }
    }
}

impl FrontierSection {
    /// Query parameters for the detector.
    pub fn to_params(&self) -> FrontierParams {
        FrontierParams {
            algorithm: self.algorithm,
            max_frontiers: self.max_frontiers,
            min_size: self.min_size,
            max_size: self.max_size,
            min_distance: self.min_distance,
            max_distance: self.max_distance,
        }
    }
}
