//! Navigation graph configuration section.

use serde::{Deserialize, Serialize};

use crate::planning::NavGraphConfig;

use super::defaults;

/// Shortest-path search settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavGraphSection {
    /// Use 8-connected moves (vs 4-connected)
    #[serde(default = "defaults::enabled")]
    pub allow_diagonal: bool,

    /// Node expansions before a search gives up
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: usize,
}

impl Default for NavGraphSection {
    fn default() -> Self {
        Self {
            allow_diagonal: defaults::enabled(),
            max_iterations: defaults::max_iterations(),
        }
    }
}

impl NavGraphSection {
    /// Convert to NavGraphConfig
    pub fn to_config(&self) -> NavGraphConfig {
        NavGraphConfig {
            allow_diagonal: self.allow_diagonal,
            max_iterations: self.max_iterations,
        }
    }
}
