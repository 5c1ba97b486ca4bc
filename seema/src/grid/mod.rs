//! Terrain raster: the capability the detector reads and a reference implementation.
//!
//! - [`TerrainMap`]: read-only classification, weight and coordinate transform
//! - [`WeightGrid`]: in-memory SoA raster implementing [`TerrainMap`]
//! - [`AreaOfInterest`]: world rectangle the detector is restricted to

mod area;
mod storage;
mod traits;

pub use area::{AreaOfInterest, GridBounds};
pub use storage::{ClassCounts, MIN_WEIGHT, WeightGrid};
pub use traits::TerrainMap;
