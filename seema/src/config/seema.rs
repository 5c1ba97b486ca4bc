//! Main SeemaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::frontier::FrontierParams;
use crate::grid::{AreaOfInterest, TerrainMap};
use crate::planning::NavGraphConfig;

use super::error::ConfigLoadError;
use super::frontier::FrontierSection;
use super::nav_graph::NavGraphSection;

/// Full Seema configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct SeemaConfig {
    /// Frontier query settings
    #[serde(default)]
    pub frontier: FrontierSection,

    /// Area of interest; the whole raster when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<AreaOfInterest>,

    /// Planner settings
    #[serde(default)]
    pub nav_graph: NavGraphSection,
}

impl SeemaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> std::result::Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load and check that the frontier parameters are usable.
    pub fn load_checked(path: &Path) -> Result<Self> {
        let config = Self::load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> std::result::Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Render as YAML
    pub fn to_yaml(&self) -> std::result::Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Serialize(e.to_string()))
    }

    /// Reject parameters a query would reject.
    pub fn validate(&self) -> Result<()> {
        self.to_frontier_params().validate()
    }

    /// Convert to FrontierParams
    pub fn to_frontier_params(&self) -> FrontierParams {
        self.frontier.to_params()
    }

    /// Convert to NavGraphConfig
    pub fn to_nav_graph_config(&self) -> NavGraphConfig {
        self.nav_graph.to_config()
    }

    /// Configured area, or the whole raster of `map`.
    pub fn area_of_interest<M: TerrainMap + ?Sized>(&self, map: &M) -> AreaOfInterest {
        self.area.unwrap_or_else(|| AreaOfInterest::covering(map))
    }
}
