//! Area of interest: the rectangle of terrain the detector is allowed to search.

use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, WorldPoint};

use super::traits::TerrainMap;

/// Axis-aligned rectangle in the terrain frame (meters).
///
/// Covers `[x0, x0 + width] × [y0, y0 + height]`. Usually smaller than the
/// whole raster.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaOfInterest {
    /// X origin (terrain frame)
    pub x0: f32,
    /// Y origin (terrain frame)
    pub y0: f32,
    /// Extent along X (meters)
    pub width: f32,
    /// Extent along Y (meters)
    pub height: f32,
}

impl AreaOfInterest {
    /// Create an area from its origin and extent.
    pub fn new(x0: f32, y0: f32, width: f32, height: f32) -> Self {
        Self {
            x0,
            y0,
            width,
            height,
        }
    }

    /// The whole raster of `map`.
    pub fn covering<M: TerrainMap + ?Sized>(map: &M) -> Self {
        let (min, max) = map.bounds();
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Does the closed rectangle contain the point?
    pub fn contains(&self, point: WorldPoint) -> bool {
        point.x >= self.x0
            && point.x <= self.x0 + self.width
            && point.y >= self.y0
            && point.y <= self.y0 + self.height
    }

    /// Cells of `map` whose centre lies in this rectangle, clipped to the raster.
    ///
    /// A cell is searched exactly when its world point passes
    /// [`contains`](Self::contains). Returns `None` when no cell qualifies or
    /// the rectangle has a negative extent.
    pub fn to_grid_bounds<M: TerrainMap + ?Sized>(&self, map: &M) -> Option<GridBounds> {
        if self.width < 0.0 || self.height < 0.0 || map.width() == 0 || map.height() == 0 {
            return None;
        }

        let origin = map.origin();
        let resolution = map.resolution();
        // Cell i has its centre at origin + (i + 0.5) * resolution
        let first = |edge: f32, o: f32| ((edge - o) / resolution - 0.5).ceil() as i32;
        let last = |edge: f32, o: f32| ((edge - o) / resolution - 0.5).floor() as i32;

        let lo = GridCoord::new(first(self.x0, origin.x), first(self.y0, origin.y));
        let hi = GridCoord::new(
            last(self.x0 + self.width, origin.x),
            last(self.y0 + self.height, origin.y),
        );

        let min = GridCoord::new(lo.x.max(0), lo.y.max(0));
        let max = GridCoord::new(
            hi.x.min(map.width() as i32 - 1),
            hi.y.min(map.height() as i32 - 1),
        );

        if min.x > max.x || min.y > max.y {
            return None;
        }
        Some(GridBounds { min, max })
    }
}

/// Inclusive cell rectangle `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBounds {
    /// Lowest corner
    pub min: GridCoord,
    /// Highest corner (inclusive)
    pub max: GridCoord,
}

impl GridBounds {
    /// Is the cell inside the rectangle?
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= self.min.x
            && coord.x <= self.max.x
            && coord.y >= self.min.y
            && coord.y <= self.max.y
    }

    /// Number of cells covered.
    pub fn cell_count(&self) -> usize {
        ((self.max.x - self.min.x + 1) * (self.max.y - self.min.y + 1)) as usize
    }
}
